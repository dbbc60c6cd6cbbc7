pub mod models;
pub mod registry;

pub use models::*;
pub use registry::AppointmentRegistry;
