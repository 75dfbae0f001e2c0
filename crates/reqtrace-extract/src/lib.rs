//! Reqtrace Extraction Boundary
//!
//! Adapter for the output of the external extraction service. The service
//! itself (prompting, the model behind it) is opaque to this system, but its
//! responses are not: models wrap JSON in markdown code fences, omit
//! sections, and occasionally return text that is not JSON at all. This
//! crate turns a raw response into a [`BrdRecord`] without letting any of
//! that leak further in.
//!
//! # Example
//!
//! ```
//! use reqtrace_extract::parse_extraction_response;
//!
//! let response = r#"```json
//! {"functionalRequirements": [{"id": "FR-1", "description": "Export PDF"}]}
//! ```"#;
//!
//! let brd = parse_extraction_response(response).unwrap();
//! assert_eq!(brd.functional_requirements.len(), 1);
//! ```

#![warn(missing_docs)]

mod error;
mod parser;

pub use error::ExtractError;
pub use parser::{parse_extraction_response, parse_or_empty};
