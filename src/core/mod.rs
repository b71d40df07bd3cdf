//! Core domain types and allocation rules

pub mod assign;
pub mod display;
pub mod item;
pub mod staff;
pub mod stats;

pub use self::assign::{allocate, Assignment};
pub use self::item::{Item, ItemKind};
pub use self::staff::{Assignee, Pool, Roster};
pub use self::stats::LoadSummary;
