use std::sync::Arc;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers;
use crate::state::AppState;

pub fn scheduling_routes(state: Arc<AppState>) -> Router {
    let doctor_routes = Router::new()
        .route("/", get(handlers::list_doctors))
        .route("/", post(handlers::add_doctor))
        .route("/{doctor_id}", get(handlers::get_doctor))
        .route("/{doctor_id}", put(handlers::update_doctor))
        .route("/{doctor_id}", delete(handlers::delete_doctor))
        .route(
            "/{doctor_id}/available-slots",
            get(handlers::get_available_slots),
        );

    let appointment_routes = Router::new()
        .route("/", get(handlers::list_appointments))
        .route("/", post(handlers::book_appointment))
        .route("/{appointment_id}", delete(handlers::delete_appointment))
        .route(
            "/{appointment_id}/status",
            patch(handlers::set_appointment_status),
        );

    Router::new()
        .nest("/doctors", doctor_routes)
        .nest("/appointments", appointment_routes)
        .route("/stats", get(handlers::get_stats))
        .with_state(state)
}
