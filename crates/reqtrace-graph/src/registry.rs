//! Source Registry: stable positional identity for raw inputs

use reqtrace_domain::{DataSource, OriginKind, RawSourceEntry, SourceId};

/// The registry of data sources for one BRD, in assignment order
///
/// Modeled as an arena over the stored raw-source list: the entry at index
/// *i* gets identifier `SRC-{i+1}`, assigned once and never reassigned.
/// Rebuilding from the same list reproduces identical identifiers, and
/// appending an entry leaves all existing identifiers unchanged. Reordering
/// the backing list is a breaking change to identifier stability.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRegistry {
    sources: Vec<DataSource>,
}

impl SourceRegistry {
    /// Build the registry from the BRD's stored raw-source list
    ///
    /// Total over its input: an empty list yields an empty registry, and
    /// entries with missing or unrecognized type fields degrade to the
    /// generic document category instead of failing.
    pub fn from_entries(entries: &[RawSourceEntry]) -> Self {
        let sources = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| Self::materialize(index, entry))
            .collect();
        Self { sources }
    }

    fn materialize(index: usize, entry: &RawSourceEntry) -> DataSource {
        let id = SourceId::from_index(index);

        let raw_kind = entry
            .kind
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();
        let origin = OriginKind::parse(&raw_kind).unwrap_or(OriginKind::Document);

        // Display name preference: explicit name, then origin label (only
        // when the entry actually declared a type), then "Source N"
        let display_name = match entry.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ if !raw_kind.is_empty() => origin.label().to_string(),
            _ => format!("Source {}", id.ordinal()),
        };

        DataSource {
            id,
            origin,
            raw_kind,
            display_name,
            content: entry.content.clone(),
            attributes: entry.metadata.clone().unwrap_or_default(),
        }
    }

    /// Look up a source by identifier
    pub fn get(&self, id: SourceId) -> Option<&DataSource> {
        self.sources.get(id.index())
    }

    /// The first source in registry order, if any
    pub fn first(&self) -> Option<&DataSource> {
        self.sources.first()
    }

    /// Iterate sources in assignment order
    pub fn iter(&self) -> impl Iterator<Item = &DataSource> {
        self.sources.iter()
    }

    /// Number of registered sources
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// True when no sources were recorded
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Consume the registry, yielding the sources in assignment order
    pub fn into_sources(self) -> Vec<DataSource> {
        self.sources
    }
}
