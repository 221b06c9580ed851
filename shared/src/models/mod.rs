//! Domain models for the AgriPool marketplace

mod crop;
mod fertilizer;
mod parcel;
mod transport;
mod user;

pub use crop::*;
pub use fertilizer::*;
pub use parcel::*;
pub use transport::*;
pub use user::*;
