//! Tallies the primary language of every repository matching a GitHub search.

mod infrastructure;
mod interface;
mod model;

pub use infrastructure::*;
pub use interface::*;
pub use model::*;
