use shared::domain::{Mode, TransformationStep, ALPHABET_LEN};

/// Output of one shift transform: the transformed text plus one step
/// record per alphabetic symbol that was shifted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    pub output: String,
    pub steps: Vec<TransformationStep>,
}

/// Reduces any integer key to the normalized shift amount in [0, 26).
pub fn normalize_key(key: i32) -> u8 {
    key.rem_euclid(i32::from(ALPHABET_LEN)) as u8
}

/// The offset actually added to each letter position, in [0, 26).
/// Decrypt negates the key before reduction, so the transform is always
/// expressed as a forward shift with wrap-around.
fn effective_offset(key: i32, mode: Mode) -> u8 {
    let reduced = normalize_key(key);
    match mode {
        Mode::Encrypt => reduced,
        Mode::Decrypt => (ALPHABET_LEN - reduced) % ALPHABET_LEN,
    }
}

/// Applies the shift cipher to `text`.
///
/// The text is uppercased first; only `A`-`Z` are shifted. Every other
/// character is copied through at its original position and emits no
/// step record. Any `i32` key is accepted and silently reduced modulo
/// the alphabet size, never rejected.
pub fn transform(text: &str, key: i32, mode: Mode) -> Transformed {
    let offset = effective_offset(key, mode);
    let shift = normalize_key(key);
    let mut output = String::with_capacity(text.len());
    let mut steps = Vec::new();

    for ch in text.to_uppercase().chars() {
        if ch.is_ascii_uppercase() {
            let position = ch as u8 - b'A';
            let transformed = (b'A' + (position + offset) % ALPHABET_LEN) as char;
            steps.push(TransformationStep {
                original: ch,
                transformed,
                shift,
            });
            output.push(transformed);
        } else {
            output.push(ch);
        }
    }

    Transformed { output, steps }
}

pub fn encrypt(text: &str, key: i32) -> Transformed {
    transform(text, key, Mode::Encrypt)
}

pub fn decrypt(text: &str, key: i32) -> Transformed {
    transform(text, key, Mode::Decrypt)
}

/// The `(letter, position)` pairs of the reference alphabet table.
pub fn alphabet_table() -> impl Iterator<Item = (char, u8)> {
    (0..ALPHABET_LEN).map(|position| ((b'A' + position) as char, position))
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
