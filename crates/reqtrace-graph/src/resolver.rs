//! Attribution Resolver: match extracted items back to data sources

use crate::config::AmbiguityPolicy;
use crate::registry::SourceRegistry;
use reqtrace_domain::{ExtractedItem, SourceId};
use tracing::debug;

/// Which strategy in the chain produced a match
///
/// Recorded on every resolution so attribution behavior stays auditable:
/// a reviewer can tell a genuine reference apart from a fallback guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// The item's source text equals the source's recorded type (verbatim
    /// or canonical form)
    OriginKind,

    /// The item's source text equals the source's `SRC-N` identifier
    Identifier,

    /// The item's source text equals the source's display name
    DisplayName,

    /// No strategy matched; attributed to the first source in registry
    /// order under [`AmbiguityPolicy::FirstSource`]
    FirstSourceFallback,
}

/// Outcome of resolving one extracted item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribution {
    /// The item was attributed to a source
    Resolved {
        /// The matched source
        source: SourceId,
        /// The strategy that matched
        strategy: MatchStrategy,
    },

    /// Attribution text matched nothing and the policy declines to guess
    Ambiguous,

    /// The registry is empty; there is nothing to attribute to
    Unattributed,
}

impl Attribution {
    /// The matched source, if any
    pub fn source(&self) -> Option<SourceId> {
        match self {
            Attribution::Resolved { source, .. } => Some(*source),
            _ => None,
        }
    }
}

/// Resolves extracted items against the source registry
///
/// Extraction output comes from an external, imprecise process and cannot be
/// trusted to reference sources by stable identifier, so resolution is an
/// ordered chain of exact strategies with a deterministic fallback: the
/// resolver degrades gracefully rather than failing on missing or mismatched
/// attribution text. Pure function of its inputs; no mutation.
#[derive(Debug, Clone)]
pub struct AttributionResolver {
    policy: AmbiguityPolicy,
}

impl AttributionResolver {
    /// Create a resolver with the given ambiguity policy
    pub fn new(policy: AmbiguityPolicy) -> Self {
        Self { policy }
    }

    /// Resolve a single item against the registry
    ///
    /// Strategy chain, first match wins:
    /// 1. exact match on the source's recorded type (or its canonical form)
    /// 2. exact match on the `SRC-N` identifier
    /// 3. exact match on the display name
    /// 4. first source in registry order, per policy
    ///
    /// Comparisons trim surrounding whitespace and are otherwise exact.
    pub fn resolve(&self, registry: &SourceRegistry, item: &ExtractedItem) -> Attribution {
        let reference = item.source.as_deref().map(str::trim).unwrap_or("");

        if !reference.is_empty() {
            for source in registry.iter() {
                if reference == source.raw_kind || reference == source.origin.as_str() {
                    return Attribution::Resolved {
                        source: source.id,
                        strategy: MatchStrategy::OriginKind,
                    };
                }
            }
            for source in registry.iter() {
                if reference == source.id.to_string() {
                    return Attribution::Resolved {
                        source: source.id,
                        strategy: MatchStrategy::Identifier,
                    };
                }
            }
            for source in registry.iter() {
                if reference == source.display_name {
                    return Attribution::Resolved {
                        source: source.id,
                        strategy: MatchStrategy::DisplayName,
                    };
                }
            }
        }

        let Some(first) = registry.first() else {
            return Attribution::Unattributed;
        };

        match self.policy {
            AmbiguityPolicy::FirstSource => {
                debug!(
                    item = %item.id,
                    reference,
                    "attribution text matched no source; falling back to {}",
                    first.id
                );
                Attribution::Resolved {
                    source: first.id,
                    strategy: MatchStrategy::FirstSourceFallback,
                }
            }
            AmbiguityPolicy::MarkAmbiguous => Attribution::Ambiguous,
        }
    }

    /// Resolve a list of items, preserving list order
    pub fn resolve_all<'a, I>(&self, registry: &SourceRegistry, items: I) -> Vec<Attribution>
    where
        I: IntoIterator<Item = &'a ExtractedItem>,
    {
        items
            .into_iter()
            .map(|item| self.resolve(registry, item))
            .collect()
    }
}
