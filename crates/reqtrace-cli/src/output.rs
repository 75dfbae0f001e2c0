//! Output formatting for the CLI.

use crate::error::Result;
use colored::*;
use reqtrace_conflicts::Conflict;
use reqtrace_domain::TraceGraph;
use reqtrace_verifier::CitationReport;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable tables
    Table,
    /// Pretty-printed JSON
    Json,
    /// Minimal line-oriented output
    Quiet,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a traceability graph.
    pub fn format_graph(&self, graph: &TraceGraph) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(graph)?),
            OutputFormat::Table => Ok(self.format_graph_table(graph)),
            OutputFormat::Quiet => Ok(Self::format_graph_quiet(graph)),
        }
    }

    fn format_graph_table(&self, graph: &TraceGraph) -> String {
        let summary = &graph.summary;

        let mut builder = Builder::default();
        builder.push_record(["Metric", "Value"]);
        builder.push_record(["Sources", &summary.counts.sources.to_string()]);
        builder.push_record(["Objectives", &summary.counts.objectives.to_string()]);
        builder.push_record(["Requirements", &summary.counts.requirements.to_string()]);
        builder.push_record(["Tasks", &summary.counts.tasks.to_string()]);
        builder.push_record(["Source coverage", &format_percent(summary.source_coverage)]);
        builder.push_record(["Task coverage", &format_percent(summary.task_coverage)]);
        builder.push_record([
            "Unverified citations",
            &summary.unverified_citations.to_string(),
        ]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        let mut output = table.to_string();

        if graph.links.is_empty() {
            output.push('\n');
            output.push_str(&self.colorize("No trace links.", "yellow"));
            return output;
        }

        let mut builder = Builder::default();
        builder.push_record(["From", "To", "Excerpt"]);
        for link in &graph.links {
            let excerpt = link.excerpt.as_deref().unwrap_or("");
            let excerpt: String = excerpt.chars().take(40).collect();
            builder.push_record([&link.from.id, &link.to.id, &excerpt]);
        }

        let mut links_table = builder.build();
        links_table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        output.push('\n');
        output.push_str(&links_table.to_string());
        output
    }

    fn format_graph_quiet(graph: &TraceGraph) -> String {
        graph
            .links
            .iter()
            .map(|l| format!("{} -> {}", l.from.id, l.to.id))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format a citation verification report.
    pub fn format_citation_report(&self, report: &CitationReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Quiet => Ok(report.flagged.join("\n")),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Result", "Count"]);
                builder.push_record(["Verified", &report.verified.to_string()]);
                builder.push_record(["Unverified", &report.unverified.to_string()]);
                builder.push_record(["Skipped", &report.skipped.to_string()]);

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                let mut output = table.to_string();

                if report.has_unverified() {
                    output.push('\n');
                    output.push_str(&self.warning(&format!(
                        "Review required: {}",
                        report.flagged.join(", ")
                    )));
                } else {
                    output.push('\n');
                    output.push_str(&self.success("All citations verified"));
                }
                Ok(output)
            }
        }
    }

    /// Format screened conflicts.
    pub fn format_conflicts(&self, conflicts: &[Conflict]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(conflicts)?),
            OutputFormat::Quiet => Ok(conflicts
                .iter()
                .map(|c| format!("{} {} {}", c.id, c.first_id, c.second_id))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if conflicts.is_empty() {
                    return Ok(self.success("No conflicts detected"));
                }

                let mut builder = Builder::default();
                builder.push_record(["ID", "Severity", "Between", "Description"]);
                for conflict in conflicts {
                    let between = format!("{} / {}", conflict.first_id, conflict.second_id);
                    builder.push_record([
                        &conflict.id,
                        conflict.severity.as_str(),
                        &between,
                        &conflict.description,
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Render a ratio as a percentage for display.
fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}
