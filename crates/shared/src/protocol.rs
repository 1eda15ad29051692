use serde::{Deserialize, Serialize};

use crate::domain::{AttemptResult, TransformationStep};

/// Commands the presentation layer issues against the cipher session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum DemoCommand {
    Encrypt { plaintext: String, key: i32 },
    ToggleAttack,
    Reset,
}

/// Events delivered back for display, newest last.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum DemoEvent {
    CiphertextReady {
        ciphertext: String,
        steps: Vec<TransformationStep>,
    },
    AttemptProduced {
        attempt: AttemptResult,
    },
    AttackCompleted {
        total_attempts: usize,
    },
    SessionReset,
}
