//! Domain value objects for SC2 game data (unit weapons, damage bonuses,
//! upgrade catalog entries).

mod attribute;
mod damage_bonus;
mod upgrade;
mod weapon;

pub use attribute::Attribute;
pub use damage_bonus::DamageBonus;
pub use upgrade::Upgrade;
pub use weapon::{TargetType, Weapon};
