//! HTTP handlers

pub mod crop;
pub mod fertilizer;
pub mod health;
pub mod transport;

pub use crop::*;
pub use fertilizer::*;
pub use health::*;
pub use transport::*;
