//! Domain value objects for SC2 query responses (pathing, ability
//! availability).

mod available_ability;
mod pathing;

pub use available_ability::AvailableAbility;
pub use pathing::Pathing;
