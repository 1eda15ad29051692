use super::*;

#[test]
fn hello_with_key_three_encrypts_to_khoor() {
    let result = encrypt("HELLO", 3);

    assert_eq!(result.output, "KHOOR");
    let expected = [
        ('H', 'K'),
        ('E', 'H'),
        ('L', 'O'),
        ('L', 'O'),
        ('O', 'R'),
    ];
    assert_eq!(result.steps.len(), expected.len());
    for (step, (original, transformed)) in result.steps.iter().zip(expected) {
        assert_eq!(step.original, original);
        assert_eq!(step.transformed, transformed);
        assert_eq!(step.shift, 3);
    }
}

#[test]
fn decrypt_reverses_encrypt() {
    assert_eq!(decrypt("KHOOR", 3).output, "HELLO");
}

#[test]
fn round_trip_restores_uppercased_plaintext() {
    let plaintext = "Attack at dawn, 07:00!";
    for key in 0..26 {
        let ciphertext = encrypt(plaintext, key).output;
        assert_eq!(
            decrypt(&ciphertext, key).output,
            plaintext.to_uppercase(),
            "round trip failed for key {key}"
        );
    }
}

#[test]
fn key_is_reduced_modulo_alphabet_size() {
    let text = "WRAPAROUND";
    assert_eq!(normalize_key(29), 3);
    assert_eq!(normalize_key(-1), 25);
    assert_eq!(encrypt(text, 29).output, encrypt(text, 3).output);
    assert_eq!(encrypt(text, 26).output, encrypt(text, 0).output);
    assert_eq!(decrypt(text, 55).output, decrypt(text, 3).output);
}

#[test]
fn negative_key_is_equivalent_to_its_positive_complement() {
    let text = "NEGATIVE";
    assert_eq!(encrypt(text, -1).output, encrypt(text, 25).output);
    assert_eq!(decrypt(text, -3).output, decrypt(text, 23).output);
}

#[test]
fn wrap_around_at_end_of_alphabet() {
    assert_eq!(encrypt("XYZ", 3).output, "ABC");
    assert_eq!(decrypt("ABC", 3).output, "XYZ");
}

#[test]
fn non_letters_pass_through_at_their_positions() {
    let result = encrypt("AB 12, cd!", 5);

    assert_eq!(result.output, "FG 12, HI!");
    // Only the four letters produce step records.
    assert_eq!(result.steps.len(), 4);
    let originals: Vec<char> = result.steps.iter().map(|s| s.original).collect();
    assert_eq!(originals, vec!['A', 'B', 'C', 'D']);
}

#[test]
fn input_is_uppercased_before_shifting() {
    assert_eq!(encrypt("hello", 3).output, encrypt("HELLO", 3).output);
}

#[test]
fn key_zero_is_the_identity_on_letters() {
    let result = encrypt("IDENTITY", 0);
    assert_eq!(result.output, "IDENTITY");
    assert!(result.steps.iter().all(|s| s.original == s.transformed));
}

#[test]
fn empty_input_yields_empty_output_and_no_steps() {
    let result = transform("", 7, Mode::Encrypt);
    assert_eq!(result.output, "");
    assert!(result.steps.is_empty());
}

#[test]
fn same_inputs_always_produce_the_same_result() {
    assert_eq!(encrypt("DETERMINISM", 11), encrypt("DETERMINISM", 11));
}

#[test]
fn alphabet_table_lists_all_letters_with_positions() {
    let table: Vec<(char, u8)> = alphabet_table().collect();
    assert_eq!(table.len(), 26);
    assert_eq!(table[0], ('A', 0));
    assert_eq!(table[25], ('Z', 25));
}
