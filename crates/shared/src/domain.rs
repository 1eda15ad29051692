use serde::{Deserialize, Serialize};

/// Number of symbols in the alphabet the cipher operates over (A-Z).
pub const ALPHABET_LEN: u8 = 26;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Encrypt,
    Decrypt,
}

/// One record per alphabetic symbol processed by the shift transform.
/// Non-alphabetic symbols pass through the output without a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformationStep {
    pub original: char,
    pub transformed: char,
    pub shift: u8,
}

/// One brute-force trial: the candidate key and the plaintext it yields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptResult {
    pub key: u8,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackPhase {
    Idle,
    Running,
    Paused,
    Complete,
}
