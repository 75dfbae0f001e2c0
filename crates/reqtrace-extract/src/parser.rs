//! Parse extraction-service responses into BRD records

use crate::error::ExtractError;
use reqtrace_domain::BrdRecord;
use serde_json::Value;
use tracing::warn;

/// Parse a raw extraction response into a BRD record
///
/// Handles markdown code fences around the payload; sections missing from
/// the JSON default to empty. Fails only when the payload is not a JSON
/// object at all.
pub fn parse_extraction_response(response: &str) -> Result<BrdRecord, ExtractError> {
    let json_str = extract_json(response)?;

    let json: Value = serde_json::from_str(&json_str)
        .map_err(|e| ExtractError::InvalidFormat(format!("JSON parse error: {}", e)))?;

    if !json.is_object() {
        return Err(ExtractError::InvalidFormat(
            "Expected a JSON object".to_string(),
        ));
    }

    Ok(serde_json::from_value(json)?)
}

/// Parse a response, degrading to an empty BRD on failure
///
/// The traceability view should render something rather than fail the whole
/// page on a malformed response; callers that need to distinguish use
/// [`parse_extraction_response`] directly.
pub fn parse_or_empty(response: &str) -> BrdRecord {
    match parse_extraction_response(response) {
        Ok(brd) => brd,
        Err(e) => {
            warn!("extraction response unusable, falling back to empty BRD: {}", e);
            BrdRecord::default()
        }
    }
}

/// Extract JSON from a response, handling markdown code blocks
fn extract_json(response: &str) -> Result<String, ExtractError> {
    let trimmed = response.trim();

    // Check if wrapped in a markdown code block
    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return Err(ExtractError::InvalidFormat("Empty code block".to_string()));
        }

        // Skip the opening fence; drop the closing fence when present
        let end = if lines[lines.len() - 1].trim_start().starts_with("```") {
            lines.len() - 1
        } else {
            lines.len()
        };
        Ok(lines[1..end].join("\n"))
    } else {
        Ok(trimmed.to_string())
    }
}
