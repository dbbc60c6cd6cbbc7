use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};

use appointment_cell::models::{AppointmentStatus, BookAppointmentRequest, UpdateStatusRequest};
use doctor_cell::models::{CreateDoctorRequest, UpdateDoctorRequest};
use shared_models::error::AppError;

use crate::models::AppointmentView;
use crate::state::AppState;

// Query parameters for the list/search endpoints
#[derive(Debug, Deserialize)]
pub struct AppointmentListQuery {
    pub search: Option<String>,
    pub doctor_id: Option<i64>,
    pub status: Option<AppointmentStatus>,
}

#[derive(Debug, Deserialize)]
pub struct AvailableSlotsQuery {
    pub date: Option<NaiveDate>,
}

// ==============================================================================
// DOCTOR HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn list_doctors(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    let scheduler = state.scheduler()?;
    let doctors = scheduler.list_doctors();

    Ok(Json(json!({
        "doctors": doctors,
        "total": doctors.len()
    })))
}

#[axum::debug_handler]
pub async fn add_doctor(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateDoctorRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let mut scheduler = state.scheduler_mut()?;
    let doctor = scheduler.add_doctor(request)?;

    Ok((StatusCode::CREATED, Json(json!(doctor))))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(state): State<Arc<AppState>>,
    Path(doctor_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let scheduler = state.scheduler()?;
    let doctor = scheduler
        .get_doctor(doctor_id)
        .ok_or_else(|| AppError::NotFound(format!("Doctor not found: {}", doctor_id)))?;

    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn update_doctor(
    State(state): State<Arc<AppState>>,
    Path(doctor_id): Path<i64>,
    Json(request): Json<UpdateDoctorRequest>,
) -> Result<Json<Value>, AppError> {
    let mut scheduler = state.scheduler_mut()?;
    let doctor = scheduler.update_doctor(doctor_id, request)?;

    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn delete_doctor(
    State(state): State<Arc<AppState>>,
    Path(doctor_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let mut scheduler = state.scheduler_mut()?;
    scheduler.delete_doctor(doctor_id)?;

    Ok(Json(json!({ "success": true })))
}

#[axum::debug_handler]
pub async fn get_available_slots(
    State(state): State<Arc<AppState>>,
    Path(doctor_id): Path<i64>,
    Query(query): Query<AvailableSlotsQuery>,
) -> Result<Json<Value>, AppError> {
    let date = query
        .date
        .ok_or_else(|| AppError::BadRequest("date parameter is required".to_string()))?;

    let scheduler = state.scheduler()?;
    let slots = scheduler.available_slots(doctor_id, date)?;
    let total = slots.len();

    Ok(Json(json!({
        "doctor_id": doctor_id,
        "date": date,
        "available_slots": slots,
        "total_slots": total
    })))
}

// ==============================================================================
// APPOINTMENT HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let mut scheduler = state.scheduler_mut()?;
    let appointment = scheduler.book_appointment(request)?;

    Ok((StatusCode::CREATED, Json(json!(appointment))))
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AppointmentListQuery>,
) -> Result<Json<Value>, AppError> {
    let scheduler = state.scheduler()?;

    let matches = scheduler.search_appointments(query.search.as_deref().unwrap_or(""));
    let appointments: Vec<AppointmentView> = matches
        .into_iter()
        .filter(|appointment| query.doctor_id.map_or(true, |id| appointment.doctor_id == id))
        .filter(|appointment| query.status.map_or(true, |status| appointment.status == status))
        .map(|appointment| AppointmentView {
            appointment: appointment.clone(),
            doctor_name: scheduler.resolve_doctor_name(appointment.doctor_id),
        })
        .collect();
    let total = appointments.len();

    Ok(Json(json!({
        "appointments": appointments,
        "total": total
    })))
}

#[axum::debug_handler]
pub async fn set_appointment_status(
    State(state): State<Arc<AppState>>,
    Path(appointment_id): Path<i64>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<Value>, AppError> {
    let mut scheduler = state.scheduler_mut()?;
    let appointment = scheduler.set_appointment_status(appointment_id, request.status)?;

    Ok(Json(json!(appointment)))
}

#[axum::debug_handler]
pub async fn delete_appointment(
    State(state): State<Arc<AppState>>,
    Path(appointment_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let mut scheduler = state.scheduler_mut()?;
    scheduler.delete_appointment(appointment_id)?;

    Ok(Json(json!({ "success": true })))
}

// ==============================================================================
// DASHBOARD HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    let scheduler = state.scheduler()?;

    Ok(Json(json!(scheduler.compute_stats())))
}
