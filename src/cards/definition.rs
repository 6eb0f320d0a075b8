//! Card definitions - the source description of one pair.
//!
//! A `CardDefinition` describes the content both cards of a pair share: an
//! image reference and an optional description shown when the pair is
//! matched. Definitions without a usable image are skipped silently during
//! deck construction; they never produce an error, they just shrink the
//! board.

use serde::{Deserialize, Serialize};

/// Matching identity of a card pair.
///
/// Holds the index of the source definition in the original input
/// sequence, so hosts can map cards back to their definitions even when
/// invalid entries were skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchKey(pub u32);

impl MatchKey {
    /// Create a new match key.
    #[must_use]
    pub const fn new(key: u32) -> Self {
        Self(key)
    }

    /// Get the raw key value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for MatchKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Match({})", self.0)
    }
}

/// Source description of one card pair.
///
/// ## Example
///
/// ```
/// use pair_match::cards::CardDefinition;
///
/// let def = CardDefinition::new("images/cat.png")
///     .with_description("A very good cat.");
///
/// assert!(def.is_valid());
/// assert_eq!(def.description.as_deref(), Some("A very good cat."));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Image reference (path or URL). Required for the definition to be
    /// usable.
    pub image: Option<String>,

    /// Optional rich-text description, shown when the pair is matched.
    pub description: Option<String>,
}

impl CardDefinition {
    /// Create a definition with an image reference.
    #[must_use]
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: Some(image.into()),
            description: None,
        }
    }

    /// Create a definition with no content. Never valid; useful for
    /// exercising the skip path.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// A definition is valid iff it carries a usable image reference.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.image.as_deref().is_some_and(|s| !s.trim().is_empty())
    }
}
