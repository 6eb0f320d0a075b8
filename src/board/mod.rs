//! The board: an arena owning every card of one game.
//!
//! The board is built once at game construction: two linked cards per valid
//! definition, concatenated and shuffled with a single uniform permutation.
//! Order is fixed thereafter; there is no reshuffling mid-game. `CardId`s
//! are assigned after the shuffle, so an id is exactly a board position.
//!
//! All-invalid input produces an empty board. That is a supported boundary
//! condition, not an error; the consuming UI simply skips building the
//! visible game.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardDefinition, CardId, MatchKey};
use crate::core::GameRng;

/// Ordered arena of all cards in one game.
///
/// ```
/// use pair_match::board::Board;
/// use pair_match::cards::CardDefinition;
/// use pair_match::core::GameRng;
///
/// let defs = vec![
///     CardDefinition::new("a.png"),
///     CardDefinition::empty(), // skipped
///     CardDefinition::new("b.png"),
/// ];
/// let board = Board::build(&defs, 0, &mut GameRng::new(42));
///
/// assert_eq!(board.len(), 4); // two valid definitions, two cards each
/// for card in board.cards() {
///     assert_eq!(board.card(card.mate).unwrap().mate, card.id);
/// }
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    cards: Vec<Card>,
    pairs: FxHashMap<MatchKey, [CardId; 2]>,
}

impl Board {
    /// Build a board from an ordered sequence of definitions.
    ///
    /// Invalid definitions are skipped silently. The shuffle consumes the
    /// supplied RNG; it is the engine's only source of non-determinism.
    #[must_use]
    pub fn build(defs: &[CardDefinition], instance_tag: u32, rng: &mut GameRng) -> Self {
        let mut cards = Vec::new();

        for (index, def) in defs.iter().enumerate() {
            if !def.is_valid() {
                tracing::debug!(index, "skipping invalid card definition");
                continue;
            }
            let key = MatchKey::new(index as u32);
            // Ids and mate links are provisional until after the shuffle.
            cards.push(Card::from_definition(CardId::new(0), key, def, instance_tag));
            cards.push(Card::from_definition(CardId::new(0), key, def, instance_tag));
        }

        rng.shuffle(&mut cards);

        let mut pairs: FxHashMap<MatchKey, [CardId; 2]> = FxHashMap::default();
        let mut first_seen: FxHashMap<MatchKey, CardId> = FxHashMap::default();

        for (position, card) in cards.iter_mut().enumerate() {
            card.id = CardId::new(position as u32);
            if let Some(&partner) = first_seen.get(&card.match_key) {
                pairs.insert(card.match_key, [partner, card.id]);
            } else {
                first_seen.insert(card.match_key, card.id);
            }
        }

        for &[a, b] in pairs.values() {
            cards[a.index()].mate = b;
            cards[b.index()].mate = a;
        }

        Self { cards, pairs }
    }

    /// Number of cards on the board (always even).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the board empty (no valid definitions)?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    pub(crate) fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(id.index())
    }

    /// Iterate over all cards in board order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// The two card ids created from a definition, if it produced a pair.
    #[must_use]
    pub fn pair(&self, key: MatchKey) -> Option<[CardId; 2]> {
        self.pairs.get(&key).copied()
    }

    /// Are these two cards partners from the same definition?
    #[must_use]
    pub fn are_mates(&self, a: CardId, b: CardId) -> bool {
        a != b && self.card(a).is_some_and(|card| card.mate == b)
    }
}
