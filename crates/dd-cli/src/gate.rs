//! Interactive roll gate and the cosmetic rolling effect.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use colored::Colorize;

use dd_creation::{PendingCheck, RollGate};
use dd_mechanics::format_non_zero;

const DOT_INTERVAL: Duration = Duration::from_millis(500);

/// Shows the drawn check, waits on `confirm`, then plays the rolling
/// effect for `delay` before the roll goes ahead.
pub struct TranscriptGate {
    confirm: Box<dyn RollGate>,
    delay: Duration,
}

impl TranscriptGate {
    /// Wrap `confirm`, playing the rolling effect for `delay` after it.
    pub fn new(confirm: Box<dyn RollGate>, delay: Duration) -> Self {
        Self { confirm, delay }
    }
}

impl RollGate for TranscriptGate {
    fn await_roll(&mut self, check: &PendingCheck) -> io::Result<()> {
        print_check(check);
        println!("Rolling for attribute test...");
        self.confirm.await_roll(check)?;
        rolling_dots(self.delay);
        Ok(())
    }
}

fn print_check(check: &PendingCheck) {
    println!("{} {}", format!("Year {}:", check.year).bold(), check.question);
    println!("Selected answer: {}", check.answer.description);
    println!(
        "- Attribute to test {}[{}] DC: {}",
        check.attribute.short_name(),
        check.score,
        check.dc
    );
    println!("- Attribute increases: {}", format_non_zero(&check.rewards));
    println!("- Attribute fail effects: {}", format_non_zero(&check.penalties));
    println!();
}

/// Waits for the player to press Enter before each roll.
pub struct PromptGate;

impl RollGate for PromptGate {
    fn await_roll(&mut self, _check: &PendingCheck) -> io::Result<()> {
        print!("Press Enter to roll the dice");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before the roll",
            ));
        }
        Ok(())
    }
}

/// Print a dot every half second for `duration` on a background thread,
/// returning only once it has finished.
fn rolling_dots(duration: Duration) {
    if duration.is_zero() {
        return;
    }

    let handle = thread::spawn(move || {
        let mut elapsed = Duration::ZERO;
        while elapsed + DOT_INTERVAL <= duration {
            thread::sleep(DOT_INTERVAL);
            elapsed += DOT_INTERVAL;
            print!(".");
            let _ = io::stdout().flush();
        }
        thread::sleep(duration - elapsed);
        println!();
    });

    if handle.join().is_err() {
        tracing::warn!("rolling effect thread panicked");
    }
}
