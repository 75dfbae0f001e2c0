//! Trace command implementation.

use super::load_brd;
use crate::cli::TraceArgs;
use crate::error::Result;
use crate::output::Formatter;
use reqtrace_domain::TaskRecord;
use reqtrace_graph::{GraphConfig, TraceGraphBuilder};
use reqtrace_verifier::CitationVerifier;

/// Execute the trace command.
pub fn execute_trace(args: TraceArgs, formatter: &Formatter) -> Result<()> {
    let mut brd = load_brd(&args.brd)?;

    let tasks: Vec<TaskRecord> = match &args.tasks {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => Vec::new(),
    };

    if args.verify {
        let verifier = CitationVerifier::default_config()?;
        let report = verifier.verify(&mut brd);
        if report.has_unverified() {
            eprintln!(
                "{}",
                formatter.warning(&format!("{} unverified citation(s)", report.unverified))
            );
        }
    }

    let config = if args.strict {
        GraphConfig::strict()
    } else {
        GraphConfig::default()
    };
    let graph = TraceGraphBuilder::new(config).build(&brd, &tasks);

    println!("{}", formatter.format_graph(&graph)?);

    Ok(())
}
