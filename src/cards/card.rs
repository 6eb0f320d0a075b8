//! Card instances - one face-down tile on the board.
//!
//! A `Card` owns its matching identity and face state. The mate link is a
//! `CardId` index into the board arena, never an owning pointer, so the
//! pair relation stays cycle-free.
//!
//! Cards are never destroyed mid-game: a matched card is marked `Removed`
//! and stays in the board so positions remain stable for layout.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::definition::{CardDefinition, MatchKey};

/// Identifier of a card instance: its position in the board arena.
///
/// Stable for the lifetime of the game (the board is shuffled once, at
/// construction, before ids are assigned).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The board index this ID denotes.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Face state of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceState {
    /// Face down, flippable.
    #[default]
    Hidden,
    /// Face up, awaiting judgment.
    Flipped,
    /// Matched and taken out of play (stays on the board for layout).
    Removed,
}

/// Rejected card transition.
///
/// Only flipping can be rejected; the protocol layer treats this as a
/// silent no-op rather than a user-visible failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("card {card} cannot flip while {from:?}")]
pub struct InvalidTransition {
    /// The card that rejected the transition.
    pub card: CardId,
    /// Its face state at the time.
    pub from: FaceState,
}

/// One tile on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// This card's position in the board arena.
    pub id: CardId,

    /// Matching identity shared with the mate.
    pub match_key: MatchKey,

    /// The partner card created from the same definition.
    pub mate: CardId,

    /// Current face state.
    pub face: FaceState,

    /// Opaque per-game token for rendering collaborators.
    pub instance_tag: u32,

    image: Option<String>,
    description: Option<String>,
}

impl Card {
    /// Create a card from its source definition.
    ///
    /// The mate link starts self-referential and is fixed by the board
    /// builder once final positions are known.
    #[must_use]
    pub fn from_definition(
        id: CardId,
        match_key: MatchKey,
        def: &CardDefinition,
        instance_tag: u32,
    ) -> Self {
        Self {
            id,
            match_key,
            mate: id,
            face: FaceState::Hidden,
            instance_tag,
            image: def.image.clone(),
            description: def.description.clone(),
        }
    }

    /// Turn the card face up.
    ///
    /// Only a `Hidden` card can flip; anything else is rejected and left
    /// untouched.
    pub fn flip(&mut self) -> Result<(), InvalidTransition> {
        match self.face {
            FaceState::Hidden => {
                self.face = FaceState::Flipped;
                Ok(())
            }
            from => Err(InvalidTransition { card: self.id, from }),
        }
    }

    /// Turn the card back face down. No-op unless currently flipped.
    pub fn flip_back(&mut self) {
        if self.face == FaceState::Flipped {
            self.face = FaceState::Hidden;
        }
    }

    /// Take the card out of play. Idempotent.
    pub fn remove(&mut self) {
        self.face = FaceState::Removed;
    }

    /// Is the card face down?
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.face == FaceState::Hidden
    }

    /// Has the card been matched and removed?
    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.face == FaceState::Removed
    }

    /// The image reference, if any.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// The description, if this pair carries one.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_card() -> Card {
        let def = CardDefinition::new("cat.png").with_description("meow");
        Card::from_definition(CardId::new(0), MatchKey::new(0), &def, 99)
    }

    #[test]
    fn test_flip_from_hidden() {
        let mut card = test_card();
        assert!(card.is_hidden());

        card.flip().unwrap();
        assert_eq!(card.face, FaceState::Flipped);
    }

    #[test]
    fn test_flip_rejected_when_flipped() {
        let mut card = test_card();
        card.flip().unwrap();

        let err = card.flip().unwrap_err();
        assert_eq!(err.card, card.id);
        assert_eq!(err.from, FaceState::Flipped);
        assert_eq!(card.face, FaceState::Flipped);
    }

    #[test]
    fn test_flip_rejected_when_removed() {
        let mut card = test_card();
        card.remove();

        assert!(card.flip().is_err());
        assert!(card.is_removed());
    }

    #[test]
    fn test_flip_back() {
        let mut card = test_card();
        card.flip().unwrap();
        card.flip_back();
        assert!(card.is_hidden());

        // No-op when not flipped
        card.flip_back();
        assert!(card.is_hidden());

        card.remove();
        card.flip_back();
        assert!(card.is_removed());
    }

    #[test]
    fn test_remove_idempotent() {
        let mut card = test_card();
        card.remove();
        card.remove();
        assert!(card.is_removed());
    }

    #[test]
    fn test_accessors() {
        let card = test_card();
        assert_eq!(card.image(), Some("cat.png"));
        assert_eq!(card.description(), Some("meow"));
        assert_eq!(card.instance_tag, 99);
    }

    #[test]
    fn test_serialization() {
        let card = test_card();
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
