use std::{sync::Arc, time::Duration};

use shared::domain::{AttackPhase, AttemptResult, Mode, ALPHABET_LEN};
use tokio::{
    sync::{broadcast, Mutex},
    task::JoinHandle,
};
use tracing::info;

/// Delay between two brute-force trials.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(500);

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Produces the candidate plaintext for one key trial.
pub trait CandidateDecoder: Send + Sync {
    fn decode(&self, ciphertext: &str, key: i32) -> String;
}

/// Production decoder: the shift transform run in decrypt mode.
pub struct ShiftDecoder;

impl CandidateDecoder for ShiftDecoder {
    fn decode(&self, ciphertext: &str, key: i32) -> String {
        cipher::transform(ciphertext, key, Mode::Decrypt).output
    }
}

#[derive(Debug, Clone)]
pub enum AttackEvent {
    Attempt { attempt: AttemptResult },
    Completed { total_attempts: usize },
    Reset,
}

/// Point-in-time view of the run, for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackSnapshot {
    pub phase: AttackPhase,
    pub next_key: u8,
    pub results: Vec<AttemptResult>,
}

struct AttackRunState {
    ciphertext: String,
    phase: AttackPhase,
    next_key: u8,
    results: Vec<AttemptResult>,
    // Bumped whenever the run leaves Running; a tick whose generation
    // no longer matches must not apply its result.
    generation: u64,
    tick_task: Option<JoinHandle<()>>,
}

/// One brute-force key search over a fixed ciphertext: tries every key
/// in ascending order, one per tick, and can be paused, resumed and
/// restarted at any point.
pub struct AttackSession {
    decoder: Arc<dyn CandidateDecoder>,
    tick_interval: Duration,
    inner: Mutex<AttackRunState>,
    events: broadcast::Sender<AttackEvent>,
}

impl AttackSession {
    pub fn new(ciphertext: impl Into<String>) -> Arc<Self> {
        Self::new_with_decoder(ciphertext, Arc::new(ShiftDecoder), DEFAULT_TICK_INTERVAL)
    }

    pub fn with_tick_interval(
        ciphertext: impl Into<String>,
        tick_interval: Duration,
    ) -> Arc<Self> {
        Self::new_with_decoder(ciphertext, Arc::new(ShiftDecoder), tick_interval)
    }

    pub fn new_with_decoder(
        ciphertext: impl Into<String>,
        decoder: Arc<dyn CandidateDecoder>,
        tick_interval: Duration,
    ) -> Arc<Self> {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Arc::new(Self {
            decoder,
            tick_interval,
            inner: Mutex::new(AttackRunState {
                ciphertext: ciphertext.into(),
                phase: AttackPhase::Idle,
                next_key: 0,
                results: Vec::new(),
                generation: 0,
                tick_task: None,
            }),
            events,
        })
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<AttackEvent> {
        self.events.subscribe()
    }

    /// Starts a fresh run, or resumes a paused one from its current key.
    /// Rejected while already running or after the key space is
    /// exhausted; returns whether the session is now ticking.
    pub async fn start(self: &Arc<Self>) -> bool {
        let mut state = self.inner.lock().await;
        match state.phase {
            AttackPhase::Running | AttackPhase::Complete => return false,
            AttackPhase::Idle | AttackPhase::Paused => {}
        }
        if state.next_key >= ALPHABET_LEN {
            return false;
        }

        state.phase = AttackPhase::Running;
        state.generation += 1;
        let generation = state.generation;
        let session = Arc::clone(self);
        let task = tokio::spawn(async move { session.run_ticks(generation).await });
        if let Some(stale) = state.tick_task.replace(task) {
            stale.abort();
        }
        info!(next_key = state.next_key, "brute-force attack running");
        true
    }

    /// Stops scheduling ticks while keeping progress; a later `start`
    /// resumes from the same key. Returns whether a run was paused.
    pub async fn pause(&self) -> bool {
        let mut state = self.inner.lock().await;
        if state.phase != AttackPhase::Running {
            return false;
        }
        state.phase = AttackPhase::Paused;
        state.generation += 1;
        if let Some(task) = state.tick_task.take() {
            task.abort();
        }
        info!(next_key = state.next_key, "brute-force attack paused");
        true
    }

    /// The single start/pause control a UI binds to one button.
    pub async fn toggle(self: &Arc<Self>) -> bool {
        if self.pause().await {
            return true;
        }
        self.start().await
    }

    /// Discards the run: back to Idle with key 0 and no results.
    pub async fn reset(&self) {
        let mut state = self.inner.lock().await;
        clear_run(&mut state);
        info!("attack state cleared");
        let _ = self.events.send(AttackEvent::Reset);
    }

    /// Replaces the target ciphertext. Any run against the previous
    /// ciphertext is discarded, as with `reset`.
    pub async fn set_ciphertext(&self, ciphertext: impl Into<String>) {
        let mut state = self.inner.lock().await;
        clear_run(&mut state);
        state.ciphertext = ciphertext.into();
        let _ = self.events.send(AttackEvent::Reset);
    }

    pub async fn snapshot(&self) -> AttackSnapshot {
        let state = self.inner.lock().await;
        AttackSnapshot {
            phase: state.phase,
            next_key: state.next_key,
            results: state.results.clone(),
        }
    }

    pub async fn is_running(&self) -> bool {
        self.inner.lock().await.phase == AttackPhase::Running
    }

    async fn run_ticks(self: Arc<Self>, generation: u64) {
        loop {
            tokio::time::sleep(self.tick_interval).await;

            let (attempt, completed) = {
                let mut state = self.inner.lock().await;
                if state.generation != generation || state.phase != AttackPhase::Running {
                    return;
                }

                let key = state.next_key;
                let text = self.decoder.decode(&state.ciphertext, i32::from(key));
                let attempt = AttemptResult { key, text };
                state.results.push(attempt.clone());
                state.next_key += 1;

                let completed = state.next_key == ALPHABET_LEN;
                if completed {
                    state.phase = AttackPhase::Complete;
                    state.tick_task = None;
                }
                (attempt, completed)
            };

            let _ = self.events.send(AttackEvent::Attempt { attempt });
            if completed {
                info!(
                    total_attempts = usize::from(ALPHABET_LEN),
                    "brute-force attack exhausted the key space"
                );
                let _ = self.events.send(AttackEvent::Completed {
                    total_attempts: usize::from(ALPHABET_LEN),
                });
                return;
            }
        }
    }
}

fn clear_run(state: &mut AttackRunState) {
    state.generation += 1;
    if let Some(task) = state.tick_task.take() {
        task.abort();
    }
    state.phase = AttackPhase::Idle;
    state.next_key = 0;
    state.results.clear();
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
