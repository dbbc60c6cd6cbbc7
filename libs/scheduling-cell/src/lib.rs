pub mod handlers;
pub mod models;
pub mod router;
pub mod service;
pub mod state;

pub use service::SchedulingService;
pub use state::AppState;
