//! Wire shapes handed across the boundary from the surrounding application
//!
//! The BRD record and task list are fetched from the persistent store by a
//! collaborator outside this system and arrive here as plain data. Every
//! field the extraction process may omit is optional or defaulted: malformed
//! or partial records degrade through explicit fallback rules downstream,
//! they do not fail deserialization.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One raw source entry as stored on the BRD
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSourceEntry {
    /// Origin-system type, free text ("email", "slack", ...)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Explicit display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Full source text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Open metadata bag (workspace, channel, sender, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, serde_json::Value>>,
}

/// An extracted objective or requirement
///
/// Produced by the external extraction process, which is imprecise: the
/// `source` field is unvalidated free text and may reference a source by
/// type, identifier, name, or not at all.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedItem {
    /// Domain identifier ("BO-1", "FR-1", "NFR-2")
    #[serde(default)]
    pub id: String,

    /// Short title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Descriptive text
    #[serde(default)]
    pub description: String,

    /// Priority label ("high", "must", ...), uninterpreted here
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    /// Free-text pointer at where the item came from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Verbatim quote from the source supporting the item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_quote: Option<String>,

    /// Whether the quote was found in the source corpus; set by citation
    /// verification, absent until it has run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation_verified: Option<bool>,
}

impl ExtractedItem {
    /// The item's text for matching purposes: description, falling back to
    /// the title when the description is empty
    pub fn text(&self) -> &str {
        if self.description.trim().is_empty() {
            self.title.as_deref().unwrap_or("")
        } else {
            &self.description
        }
    }

    /// Display label: title when present, description otherwise
    pub fn label(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.trim().is_empty() => title,
            _ => &self.description,
        }
    }
}

/// A downstream task, optionally tied to a requirement
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    /// Primary key in the task store
    pub id: String,

    /// Task title
    #[serde(default)]
    pub title: String,

    /// Foreign reference to the requirement this task was derived from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirement_id: Option<String>,

    /// Workflow status ("todo", "in_progress", "done", ...), uninterpreted
    #[serde(default)]
    pub status: String,
}

/// BRD section an extracted item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemSection {
    /// Business objectives
    Objective,

    /// Functional requirements
    Functional,

    /// Non-functional requirements
    NonFunctional,
}

impl ItemSection {
    /// Section name for logs and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemSection::Objective => "objective",
            ItemSection::Functional => "functional",
            ItemSection::NonFunctional => "non-functional",
        }
    }

    /// Whether items in this section count as requirements for coverage
    pub fn is_requirement(&self) -> bool {
        matches!(self, ItemSection::Functional | ItemSection::NonFunctional)
    }
}

/// The Business Requirements Document as stored
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrdRecord {
    /// Ordered raw inputs; the order is identity (see `SourceId`)
    #[serde(default)]
    pub raw_sources: Vec<RawSourceEntry>,

    /// Extracted business objectives
    #[serde(default)]
    pub business_objectives: Vec<ExtractedItem>,

    /// Extracted functional requirements
    #[serde(default)]
    pub functional_requirements: Vec<ExtractedItem>,

    /// Extracted non-functional requirements
    #[serde(default)]
    pub non_functional_requirements: Vec<ExtractedItem>,
}

impl BrdRecord {
    /// All requirements (functional then non-functional), in list order
    pub fn requirements(&self) -> impl Iterator<Item = &ExtractedItem> {
        self.functional_requirements
            .iter()
            .chain(self.non_functional_requirements.iter())
    }

    /// All extracted items with their section, in document order
    pub fn sections(&self) -> impl Iterator<Item = (ItemSection, &ExtractedItem)> {
        let objectives = self
            .business_objectives
            .iter()
            .map(|i| (ItemSection::Objective, i));
        let functional = self
            .functional_requirements
            .iter()
            .map(|i| (ItemSection::Functional, i));
        let non_functional = self
            .non_functional_requirements
            .iter()
            .map(|i| (ItemSection::NonFunctional, i));
        objectives.chain(functional).chain(non_functional)
    }

    /// Mutable variant of [`BrdRecord::sections`], for citation verification
    pub fn sections_mut(&mut self) -> impl Iterator<Item = (ItemSection, &mut ExtractedItem)> {
        let objectives = self
            .business_objectives
            .iter_mut()
            .map(|i| (ItemSection::Objective, i));
        let functional = self
            .functional_requirements
            .iter_mut()
            .map(|i| (ItemSection::Functional, i));
        let non_functional = self
            .non_functional_requirements
            .iter_mut()
            .map(|i| (ItemSection::NonFunctional, i));
        objectives.chain(functional).chain(non_functional)
    }

    /// True when no section holds any data
    pub fn is_empty(&self) -> bool {
        self.raw_sources.is_empty()
            && self.business_objectives.is_empty()
            && self.functional_requirements.is_empty()
            && self.non_functional_requirements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brd_deserializes_with_missing_sections() {
        let brd: BrdRecord = serde_json::from_str(r#"{"rawSources": [{"type": "email"}]}"#).unwrap();
        assert_eq!(brd.raw_sources.len(), 1);
        assert_eq!(brd.raw_sources[0].kind.as_deref(), Some("email"));
        assert!(brd.functional_requirements.is_empty());
    }

    #[test]
    fn test_extracted_item_wire_names() {
        let item: ExtractedItem = serde_json::from_str(
            r#"{
                "id": "FR-1",
                "description": "Export reports as PDF",
                "source": "email",
                "sourceQuote": "we need PDF export",
                "citationVerified": true
            }"#,
        )
        .unwrap();
        assert_eq!(item.source_quote.as_deref(), Some("we need PDF export"));
        assert_eq!(item.citation_verified, Some(true));
    }

    #[test]
    fn test_item_text_falls_back_to_title() {
        let item = ExtractedItem {
            id: "FR-1".to_string(),
            title: Some("PDF export".to_string()),
            ..Default::default()
        };
        assert_eq!(item.text(), "PDF export");
        assert_eq!(item.label(), "PDF export");
    }

    #[test]
    fn test_sections_order_and_requirement_flag() {
        let brd = BrdRecord {
            business_objectives: vec![ExtractedItem {
                id: "BO-1".to_string(),
                ..Default::default()
            }],
            functional_requirements: vec![ExtractedItem {
                id: "FR-1".to_string(),
                ..Default::default()
            }],
            non_functional_requirements: vec![ExtractedItem {
                id: "NFR-1".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };

        let sections: Vec<_> = brd.sections().map(|(s, i)| (s, i.id.clone())).collect();
        assert_eq!(sections[0], (ItemSection::Objective, "BO-1".to_string()));
        assert_eq!(sections[1], (ItemSection::Functional, "FR-1".to_string()));
        assert_eq!(sections[2], (ItemSection::NonFunctional, "NFR-1".to_string()));

        assert!(!ItemSection::Objective.is_requirement());
        assert!(ItemSection::Functional.is_requirement());
        assert!(ItemSection::NonFunctional.is_requirement());
    }

    #[test]
    fn test_task_record_optional_requirement() {
        let task: TaskRecord =
            serde_json::from_str(r#"{"id": "t1", "title": "Build exporter", "status": "todo"}"#)
                .unwrap();
        assert!(task.requirement_id.is_none());

        let task: TaskRecord = serde_json::from_str(
            r#"{"id": "t2", "title": "Wire it up", "requirementId": "FR-1", "status": "todo"}"#,
        )
        .unwrap();
        assert_eq!(task.requirement_id.as_deref(), Some("FR-1"));
    }
}
