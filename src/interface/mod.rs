mod crawler;
mod fetcher;
mod persister;
mod reporter;

pub use crawler::*;
pub use fetcher::*;
pub use persister::*;
pub use reporter::*;
