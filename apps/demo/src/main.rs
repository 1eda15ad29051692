use std::{sync::Arc, time::Duration};

use anyhow::Result;
use attack::{AttackEvent, AttackSession};
use clap::{Parser, Subcommand};
use shared::protocol::{DemoCommand, DemoEvent};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "caesar-demo",
    about = "Caesar shift cipher demo with an incremental brute-force attack"
)]
struct Cli {
    /// Emit machine-readable JSON events instead of formatted text.
    #[arg(long, global = true)]
    json: bool,
    /// Delay between brute-force trials, in milliseconds.
    #[arg(long, global = true)]
    tick_ms: Option<u64>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encrypt text and show the per-letter derivation.
    Encrypt {
        #[arg(default_value = "HELLO")]
        text: String,
        #[arg(default_value_t = 3)]
        key: i32,
    },
    /// Encrypt text, then recover it by trying every key, one per tick.
    Crack {
        #[arg(default_value = "HELLO")]
        text: String,
        #[arg(default_value_t = 3)]
        key: i32,
    },
    /// Print the letter/position reference table.
    Alphabet,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let cli = Cli::parse();
    let tick = tick_interval(cli.tick_ms);

    match cli.command {
        Command::Encrypt { text, key } => {
            let session = DemoSession::new(cli.json, tick);
            session
                .dispatch(DemoCommand::Encrypt {
                    plaintext: text,
                    key,
                })
                .await?;
        }
        Command::Crack { text, key } => {
            let session = DemoSession::new(cli.json, tick);
            session
                .dispatch(DemoCommand::Encrypt {
                    plaintext: text,
                    key,
                })
                .await?;
            session.dispatch(DemoCommand::ToggleAttack).await?;
        }
        Command::Alphabet => print_alphabet(cli.json)?,
    }

    Ok(())
}

/// Flag wins over the CAESAR_TICK_MS environment variable, which wins
/// over the built-in default.
fn tick_interval(flag_ms: Option<u64>) -> Duration {
    let mut ms = attack::DEFAULT_TICK_INTERVAL.as_millis() as u64;
    if let Ok(raw) = std::env::var("CAESAR_TICK_MS") {
        if let Ok(parsed) = raw.parse::<u64>() {
            ms = parsed;
        }
    }
    if let Some(flag) = flag_ms {
        ms = flag;
    }
    Duration::from_millis(ms)
}

struct DemoSession {
    attack: Arc<AttackSession>,
    json: bool,
}

impl DemoSession {
    fn new(json: bool, tick: Duration) -> Self {
        Self {
            attack: AttackSession::with_tick_interval("", tick),
            json,
        }
    }

    async fn dispatch(&self, command: DemoCommand) -> Result<()> {
        match command {
            DemoCommand::Encrypt { plaintext, key } => {
                let transformed = cipher::encrypt(&plaintext, key);
                self.attack
                    .set_ciphertext(transformed.output.clone())
                    .await;
                self.emit(&DemoEvent::CiphertextReady {
                    ciphertext: transformed.output,
                    steps: transformed.steps,
                })?;
            }
            DemoCommand::ToggleAttack => {
                let mut events = self.attack.subscribe_events();
                if !self.attack.toggle().await {
                    info!("attack toggle ignored; key space already exhausted");
                    return Ok(());
                }
                loop {
                    match events.recv().await {
                        Ok(AttackEvent::Attempt { attempt }) => {
                            self.emit(&DemoEvent::AttemptProduced { attempt })?;
                        }
                        Ok(AttackEvent::Completed { total_attempts }) => {
                            self.emit(&DemoEvent::AttackCompleted { total_attempts })?;
                            break;
                        }
                        Ok(AttackEvent::Reset) | Err(_) => break,
                    }
                }
            }
            DemoCommand::Reset => {
                self.attack.reset().await;
                self.emit(&DemoEvent::SessionReset)?;
            }
        }
        Ok(())
    }

    fn emit(&self, event: &DemoEvent) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string(event)?);
            return Ok(());
        }
        match event {
            DemoEvent::CiphertextReady { ciphertext, steps } => {
                for step in steps {
                    println!(
                        "original: {} ({:2})  shift by {:2}  result: {} ({:2})",
                        step.original,
                        letter_position(step.original),
                        step.shift,
                        step.transformed,
                        letter_position(step.transformed),
                    );
                }
                println!("ciphertext: {ciphertext}");
            }
            DemoEvent::AttemptProduced { attempt } => {
                println!("key {:2}: {}", attempt.key, attempt.text);
            }
            DemoEvent::AttackCompleted { total_attempts } => {
                println!("key space exhausted after {total_attempts} attempts");
            }
            DemoEvent::SessionReset => {
                println!("session reset");
            }
        }
        Ok(())
    }
}

fn letter_position(letter: char) -> u8 {
    letter as u8 - b'A'
}

fn print_alphabet(json: bool) -> Result<()> {
    if json {
        let table: Vec<_> = cipher::alphabet_table()
            .map(|(letter, number)| serde_json::json!({ "letter": letter, "number": number }))
            .collect();
        println!("{}", serde_json::to_string(&table)?);
    } else {
        for (letter, number) in cipher::alphabet_table() {
            println!("{letter} {number:2}");
        }
    }
    Ok(())
}
