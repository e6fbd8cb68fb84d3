//! Ability rule evaluation and damage formula. Keep this crate free of IO;
//! tables are parsed by `flipcalc-data`.

pub mod ability;
pub mod character;
pub mod conditions;
pub mod config;
pub mod context;
pub mod effects;
pub mod element;
pub mod error;
pub mod eval;
pub mod formula;
pub mod party;
pub mod registry;
pub mod state;
pub mod sweep;
pub mod target;

pub use ability::*;
pub use character::*;
pub use conditions::*;
pub use config::*;
pub use context::*;
pub use effects::*;
pub use element::*;
pub use error::*;
pub use eval::*;
pub use formula::*;
pub use party::*;
pub use registry::*;
pub use state::*;
pub use sweep::*;
pub use target::*;
