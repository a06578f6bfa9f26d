mod distribution;
mod entities;
mod error;
mod request;
mod response;

pub use distribution::*;
pub use entities::*;
pub use error::*;
pub use request::*;
pub use response::*;
