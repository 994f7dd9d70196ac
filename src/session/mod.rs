//! Interactive parity session.
//!
//! An explicit three-state machine: `Setup` acquires data and mode and
//! builds the encoded string, `Trial` corrupts it and reports the parity
//! check, `Terminated` ends the session. Reset jumps from `Trial` back to
//! `Setup`; quit (or end of input) reaches `Terminated` from anywhere.

mod console;

pub use console::{Console, ScriptedConsole, StdioConsole};

use crate::Result;
use crate::core::{BitString, Encoded, ParityMode, corrupt};

enum Phase {
    Setup,
    Trial(Encoded),
    Terminated,
}

/// Run a full session on `console` until the user quits.
pub fn run<C: Console>(console: &mut C) -> Result<()> {
    console.line("--- 🛠️ Parity Lab ---")?;

    let mut phase = Phase::Setup;
    loop {
        phase = match phase {
            Phase::Setup => setup(console)?,
            Phase::Trial(encoded) => trial_step(console, encoded)?,
            Phase::Terminated => return Ok(()),
        };
    }
}

/// Acquire data and mode, compute the encoded string.
fn setup<C: Console>(console: &mut C) -> Result<Phase> {
    let Some(data) = read_data(console)? else {
        return Ok(Phase::Terminated);
    };
    let Some(mode) = read_mode(console)? else {
        return Ok(Phase::Terminated);
    };

    let encoded = Encoded::new(data, mode);
    tracing::debug!(data = %encoded.data(), mode = %encoded.mode(), encoded = %encoded.bits(), "setup complete");
    Ok(Phase::Trial(encoded))
}

/// One pass through the trial loop: show settings, read a choice, act.
fn trial_step<C: Console>(console: &mut C, encoded: Encoded) -> Result<Phase> {
    console.line(&format!(
        "\n[CURRENT SETTINGS] Data: {} | Mode: {} | Encoded: {}",
        encoded.data(),
        encoded.mode(),
        encoded.bits()
    ))?;
    console.line(&"-".repeat(50))?;
    console.line("Options: [number] = bits to flip | 'r' = reset | 'q' = quit")?;

    let Some(raw) = console.prompt("Your choice: ")? else {
        return Ok(Phase::Terminated);
    };

    match parse_choice(&normalize(&raw)) {
        Choice::Quit => {
            console.line("Exiting... have a good day!")?;
            Ok(Phase::Terminated)
        }
        Choice::Reset => {
            console.line("\n🔄 Resetting... back to setup.")?;
            Ok(Phase::Setup)
        }
        Choice::Invalid => {
            console.line("❌ Invalid choice. Enter a number, 'r', or 'q'.")?;
            Ok(Phase::Trial(encoded))
        }
        // The session is the authoritative bound: reject before any
        // corruption is attempted. The flipper's own clamp never fires
        // on this path.
        Choice::Flip(n) if n > encoded.len() => {
            console.line(&format!("❌ Error: max flips possible is {}.", encoded.len()))?;
            Ok(Phase::Trial(encoded))
        }
        Choice::Flip(n) => {
            run_trial(console, &encoded, n)?;
            Ok(Phase::Trial(encoded))
        }
    }
}

/// Corrupt the encoded string and report the parity verdict.
fn run_trial<C: Console>(console: &mut C, encoded: &Encoded, flips: usize) -> Result<()> {
    let corruption = corrupt(encoded.bits(), flips);
    let passed = encoded.mode().holds(&corruption.bits);
    tracing::debug!(flips, flipped = ?corruption.flipped, passed, "trial");

    console.line("\n--- TRIAL RESULT ---")?;
    console.line(&format!("Received: {}", corruption.bits))?;
    console.line(&format!("Flipped : {:?}", corruption.flipped))?;
    if passed {
        if flips > 0 {
            // Flips slipped past the check: the single parity bit cannot
            // see an even number of errors.
            console.line("Status: ✅ PASSED (ERROR NOT DETECTED! ⚠️)")?;
        } else {
            console.line("Status: ✅ PASSED")?;
        }
    } else {
        console.line("Status: ❌ ERROR DETECTED")?;
    }
    Ok(())
}

/// Prompt for a binary string until valid. `None` means quit.
fn read_data<C: Console>(console: &mut C) -> Result<Option<BitString>> {
    loop {
        let Some(raw) = console.prompt("\nEnter binary data (or 'q' to quit): ")? else {
            return Ok(None);
        };
        let input = normalize(&raw);
        if input == "q" {
            return Ok(None);
        }
        match BitString::parse(input) {
            Ok(bits) => return Ok(Some(bits)),
            Err(_) => console.line("❌ Invalid! Use only 0s and 1s.")?,
        }
    }
}

/// Prompt for a parity mode until valid. `None` means quit.
fn read_mode<C: Console>(console: &mut C) -> Result<Option<ParityMode>> {
    loop {
        let Some(raw) = console.prompt("Select parity mode (even/odd) or 'q': ")? else {
            return Ok(None);
        };
        let input = normalize(&raw);
        if input == "q" {
            return Ok(None);
        }
        match input.parse::<ParityMode>() {
            Ok(mode) => return Ok(Some(mode)),
            Err(_) => console.line("❌ Invalid! Type 'even' or 'odd'.")?,
        }
    }
}

fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

enum Choice {
    Flip(usize),
    Reset,
    Quit,
    Invalid,
}

fn parse_choice(input: &str) -> Choice {
    match input {
        "q" => Choice::Quit,
        "r" => Choice::Reset,
        _ if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) => {
            // A count too large for usize still exceeds any encoded length,
            // so it funnels into the same max-flips rejection.
            Choice::Flip(input.parse().unwrap_or(usize::MAX))
        }
        _ => Choice::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_parsing() {
        assert!(matches!(parse_choice("q"), Choice::Quit));
        assert!(matches!(parse_choice("r"), Choice::Reset));
        assert!(matches!(parse_choice("0"), Choice::Flip(0)));
        assert!(matches!(parse_choice("12"), Choice::Flip(12)));
        assert!(matches!(parse_choice(""), Choice::Invalid));
        assert!(matches!(parse_choice("-1"), Choice::Invalid));
        assert!(matches!(parse_choice("abc"), Choice::Invalid));
        assert!(matches!(parse_choice("1.5"), Choice::Invalid));
        // overflowing digit strings are still flip requests
        assert!(matches!(
            parse_choice("99999999999999999999999999"),
            Choice::Flip(usize::MAX)
        ));
    }

    #[test]
    fn quit_at_data_prompt_terminates_without_trial() {
        let mut console = ScriptedConsole::new(["q"]);
        run(&mut console).unwrap();
        let t = console.transcript();
        assert!(t.contains("Enter binary data"));
        assert!(!t.contains("CURRENT SETTINGS"));
    }

    #[test]
    fn quit_at_mode_prompt_terminates() {
        let mut console = ScriptedConsole::new(["1011", "q"]);
        run(&mut console).unwrap();
        assert!(!console.transcript().contains("CURRENT SETTINGS"));
    }

    #[test]
    fn end_of_input_acts_as_quit() {
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        run(&mut console).unwrap();
        assert!(console.transcript().contains("Enter binary data"));
    }

    #[test]
    fn invalid_data_reprompts() {
        let mut console = ScriptedConsole::new(["10x1", "", "1011", "q"]);
        run(&mut console).unwrap();
        let t = console.transcript();
        assert_eq!(t.matches("❌ Invalid! Use only 0s and 1s.").count(), 2);
        assert!(t.contains("Select parity mode"));
    }

    #[test]
    fn input_is_trimmed_and_lowercased() {
        let mut console = ScriptedConsole::new(["  1011  ", "EVEN", "Q"]);
        run(&mut console).unwrap();
        let t = console.transcript();
        assert!(t.contains("Encoded: 10111"));
        assert!(t.contains("Exiting"));
    }
}
