//! Card system: pair definitions and card instances.
//!
//! ## Key Types
//!
//! - `CardDefinition`: source description of one pair (image + optional
//!   description), with the validity rule for deck construction
//! - `MatchKey`: matching identity shared by both cards of a pair
//! - `Card`: one tile, with its face state and mate link
//! - `CardId`: a card's stable position in the board arena

pub mod card;
pub mod definition;

pub use card::{Card, CardId, FaceState, InvalidTransition};
pub use definition::{CardDefinition, MatchKey};
