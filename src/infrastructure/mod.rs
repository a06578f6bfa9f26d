mod crawler_sequential;
mod fetcher_rest;
mod persister_csv;
mod reporter_console;

pub use crawler_sequential::*;
pub use fetcher_rest::*;
pub use persister_csv::*;
pub use reporter_console::*;
