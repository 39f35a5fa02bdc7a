//! Entity definitions for the roster store
//!
//! - `ids`: typed primary keys
//! - `team`: the `Team` entity and the `Roster` view of a team with its players
//! - `player`: the `Player` entity

pub mod ids;
pub mod player;
pub mod team;

pub use ids::{PlayerId, TeamId};
pub use player::{Player, DATE_DISPLAY_FORMAT};
pub use team::{Roster, Team};

/// A persisted record type.
///
/// The table name is the entity name itself; no pluralization is applied.
pub trait Entity {
    /// Entity name, used in error messages and as the table name.
    const NAME: &'static str;

    /// Relational table backing this entity.
    const TABLE: &'static str = Self::NAME;

    /// Primary key column.
    const PRIMARY_KEY: &'static str;

    type Id: Copy;

    /// Identifier, `None` until the entity has been saved.
    fn id(&self) -> Option<Self::Id>;
}
