//! Data sources and their stable positional identity

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Stable identifier for a data source within one BRD
///
/// Raw sources carry no durable key from the upstream systems (an email has
/// no id once its text is copied in), so identity is assigned positionally:
/// the source at index *i* of the stored raw-source list is `SRC-{i+1}`, for
/// the lifetime of the BRD. Reordering the backing list is a breaking change
/// to identifier stability; appending is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SourceId(u32);

impl SourceId {
    /// Build the identifier for the source at a 0-based list index
    ///
    /// # Examples
    ///
    /// ```
    /// use reqtrace_domain::SourceId;
    ///
    /// let id = SourceId::from_index(0);
    /// assert_eq!(id.to_string(), "SRC-1");
    /// ```
    pub fn from_index(index: usize) -> Self {
        Self(index as u32 + 1)
    }

    /// The 1-based ordinal (the `N` in `SRC-N`)
    pub fn ordinal(&self) -> u32 {
        self.0
    }

    /// The 0-based index into the registry's backing list
    pub fn index(&self) -> usize {
        self.0 as usize - 1
    }

    /// Parse a `SRC-N` string back into an identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use reqtrace_domain::SourceId;
    ///
    /// let id = SourceId::from_index(4);
    /// let parsed = SourceId::from_string(&id.to_string()).unwrap();
    /// assert_eq!(id, parsed);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, String> {
        let ordinal = s
            .strip_prefix("SRC-")
            .ok_or_else(|| format!("Invalid source id '{}': missing SRC- prefix", s))?;
        let ordinal: u32 = ordinal
            .parse()
            .map_err(|e| format!("Invalid source id '{}': {}", s, e))?;
        if ordinal == 0 {
            return Err(format!("Invalid source id '{}': ordinal must be >= 1", s));
        }
        Ok(Self(ordinal))
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SRC-{}", self.0)
    }
}

impl From<SourceId> for String {
    fn from(id: SourceId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for SourceId {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_string(&s)
    }
}

/// Origin-system category of a data source
///
/// Upstream stores the origin as free text; this is the normalized view.
/// Anything absent or unrecognized degrades to [`OriginKind::Document`]
/// rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OriginKind {
    /// Email message
    Email,

    /// Chat message (Slack, Teams, and similar)
    Chat,

    /// Meeting transcript
    Transcript,

    /// Uploaded document or file
    Document,

    /// Pasted freeform text
    Freeform,
}

impl OriginKind {
    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            OriginKind::Email => "email",
            OriginKind::Chat => "chat",
            OriginKind::Transcript => "transcript",
            OriginKind::Document => "document",
            OriginKind::Freeform => "freeform",
        }
    }

    /// Human-readable label, used as a display-name fallback
    pub fn label(&self) -> &'static str {
        match self {
            OriginKind::Email => "Email",
            OriginKind::Chat => "Chat message",
            OriginKind::Transcript => "Meeting transcript",
            OriginKind::Document => "Document",
            OriginKind::Freeform => "Pasted text",
        }
    }

    /// Parse an upstream type field, recognizing common spellings
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "email" | "mail" | "gmail" | "outlook" => Some(OriginKind::Email),
            "chat" | "slack" | "teams" | "discord" | "message" => Some(OriginKind::Chat),
            "transcript" | "meeting" | "fireflies" | "recording" => Some(OriginKind::Transcript),
            "document" | "doc" | "file" | "upload" | "pdf" => Some(OriginKind::Document),
            "text" | "paste" | "pasted" | "freeform" | "note" => Some(OriginKind::Freeform),
            _ => None,
        }
    }
}

impl std::str::FromStr for OriginKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unrecognized origin kind: {}", s))
    }
}

/// One raw input contributed to a BRD
///
/// Created fresh on every pipeline run from the BRD's stored raw-source
/// list; a derived, recomputable view that is never persisted on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    /// Stable positional identifier (`SRC-N`)
    pub id: SourceId,

    /// Normalized origin category
    pub origin: OriginKind,

    /// The verbatim type field as recorded upstream (trimmed), kept because
    /// attribution text refers to sources by this spelling, not the
    /// normalized one
    pub raw_kind: String,

    /// Human-readable name (explicit name, origin label, or "Source N")
    pub display_name: String,

    /// Full text of the source, when stored; used for excerpt lookup and
    /// citation verification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Open key-value bag (workspace, channel, sender, ...); ordered map so
    /// serialization is deterministic
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, serde_json::Value>,
}
