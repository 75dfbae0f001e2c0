//! Verify command implementation.

use super::load_brd;
use crate::cli::VerifyArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use reqtrace_verifier::{CitationVerifier, VerifierConfig};

/// Execute the verify command.
pub fn execute_verify(args: VerifyArgs, formatter: &Formatter) -> Result<()> {
    let mut config = VerifierConfig::default();
    if let Some(threshold) = args.threshold {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(CliError::InvalidInput(
                "Threshold must be between 0.0 and 1.0".to_string(),
            ));
        }
        config.min_match_ratio = threshold;
    }

    let mut brd = load_brd(&args.brd)?;
    let verifier = CitationVerifier::new(config)?;
    let report = verifier.verify(&mut brd);

    println!("{}", formatter.format_citation_report(&report)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_verify_over_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"{
                "rawSources": [{"type": "email", "content": "we need nightly backups"}],
                "functionalRequirements": [
                    {"id": "FR-1", "description": "Backups", "sourceQuote": "need nightly backups"}
                ]
            }"#,
        )
        .unwrap();

        let args = VerifyArgs {
            brd: file.path().to_path_buf(),
            threshold: None,
        };
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        assert!(execute_verify(args, &formatter).is_ok());
    }

    #[test]
    fn test_invalid_threshold_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{}").unwrap();

        let args = VerifyArgs {
            brd: file.path().to_path_buf(),
            threshold: Some(1.5),
        };
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        assert!(matches!(
            execute_verify(args, &formatter),
            Err(CliError::InvalidInput(_))
        ));
    }
}
