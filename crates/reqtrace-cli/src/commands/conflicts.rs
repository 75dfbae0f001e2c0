//! Conflicts command implementation.

use super::load_brd;
use crate::cli::ConflictsArgs;
use crate::error::Result;
use crate::output::Formatter;
use reqtrace_conflicts::{detect_conflicts, ConflictConfig, ConflictScreen, HeuristicClassifier};

/// Execute the conflicts command.
pub fn execute_conflicts(args: ConflictsArgs, formatter: &Formatter) -> Result<()> {
    let mut config = ConflictConfig::default();
    if let Some(max) = args.max_candidates {
        config.max_candidates = max;
    }

    let brd = load_brd(&args.brd)?;
    let screen = ConflictScreen::new(config)?;

    let conflicts = match detect_conflicts(&screen, &HeuristicClassifier, &brd) {
        Ok(conflicts) => conflicts,
        Err(infallible) => match infallible {},
    };

    println!("{}", formatter.format_conflicts(&conflicts)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_conflicts_over_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"{
                "functionalRequirements": [
                    {"id": "FR-1", "description": "Support agents must access customer records remotely"},
                    {"id": "FR-2", "description": "Customer records must never be accessible remotely"}
                ]
            }"#,
        )
        .unwrap();

        let args = ConflictsArgs {
            brd: file.path().to_path_buf(),
            max_candidates: None,
        };
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        assert!(execute_conflicts(args, &formatter).is_ok());
    }
}
