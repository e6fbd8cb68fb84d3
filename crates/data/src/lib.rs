//! Game table loading and hand-written battle scenarios.

pub mod load;
pub mod schema;

pub use load::*;
pub use schema::*;
