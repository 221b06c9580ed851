//! Business logic services for the AgriPool server

pub mod crop;
pub mod fertilizer;
pub mod transport;

pub use crop::CropAdvisoryService;
pub use fertilizer::FertilizerService;
pub use transport::TransportService;
