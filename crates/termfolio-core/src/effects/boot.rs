//! Boot log script.

use rand::Rng;

use crate::config::WELCOME_LINE;
use crate::config::boot::{LINE_DELAY_JITTER_MS, LINE_DELAY_MIN_MS, LOG};
use crate::models::OutputLine;

/// One line of the boot log and the delay to wait before showing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootStep {
    pub delay_ms: u32,
    pub line: String,
}

/// Build the boot log with randomized delays.
pub fn boot_script<R: Rng + ?Sized>(rng: &mut R) -> Vec<BootStep> {
    LOG.iter()
        .map(|message| BootStep {
            delay_ms: LINE_DELAY_MIN_MS + rng.gen_range(0..LINE_DELAY_JITTER_MS),
            line: format!("[OK] {}", message),
        })
        .collect()
}

/// First terminal line once the boot log is done.
pub fn welcome_line() -> OutputLine {
    OutputLine::info(WELCOME_LINE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OutputLineData;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_script_lines() {
        let script = boot_script(&mut StdRng::seed_from_u64(1));
        let lines: Vec<_> = script.iter().map(|s| s.line.as_str()).collect();
        assert_eq!(
            lines,
            vec![
                "[OK] Loading kernel modules...",
                "[OK] Mounting file system...",
                "[OK] Initializing network interfaces...",
                "[OK] System Ready.",
            ]
        );
    }

    #[test]
    fn test_delays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            for step in boot_script(&mut rng) {
                assert!((100..400).contains(&step.delay_ms));
            }
        }
    }

    #[test]
    fn test_welcome_line_is_info() {
        let line = welcome_line();
        assert_eq!(
            line.data,
            OutputLineData::Info {
                text: "Type 'help' for available commands.".into()
            }
        );
    }
}
