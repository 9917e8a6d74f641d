//! Static reference data consulted at character creation.
//!
//! Every table is a `match` over a closed enumeration, so lookups are total
//! and there is nothing to load or fail.

pub mod ability;
pub mod birthsign;
pub mod race;
pub mod specialization;

pub use ability::{Ability, ActiveAbilities, VampiricStage};
pub use birthsign::Birthsign;
pub use race::{Gender, LocationOrigin, Race};
pub use specialization::Specialization;
