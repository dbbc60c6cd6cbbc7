use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::error::AppError;

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub patient_name: String,
    pub email: String,
    pub phone: String,
    pub doctor_id: i64,
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub reason: String,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl AppointmentStatus {
    /// Transition graph offered by the admin workflow: a pending appointment
    /// can be confirmed, a confirmed one cancelled. Nothing returns to
    /// pending.
    pub fn can_transition_to(self, next: AppointmentStatus) -> bool {
        matches!(
            (self, next),
            (AppointmentStatus::Pending, AppointmentStatus::Confirmed)
                | (AppointmentStatus::Confirmed, AppointmentStatus::Cancelled)
        )
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Pending => write!(f, "pending"),
            AppointmentStatus::Confirmed => write!(f, "confirmed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// The bookable start times. A booking outside this set is not representable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimeSlot {
    #[serde(rename = "09:00")]
    Slot0900,
    #[serde(rename = "10:00")]
    Slot1000,
    #[serde(rename = "11:00")]
    Slot1100,
    #[serde(rename = "14:00")]
    Slot1400,
    #[serde(rename = "15:00")]
    Slot1500,
    #[serde(rename = "16:00")]
    Slot1600,
    #[serde(rename = "17:00")]
    Slot1700,
}

impl TimeSlot {
    /// Every offered slot, in chronological order.
    pub const ALL: [TimeSlot; 7] = [
        TimeSlot::Slot0900,
        TimeSlot::Slot1000,
        TimeSlot::Slot1100,
        TimeSlot::Slot1400,
        TimeSlot::Slot1500,
        TimeSlot::Slot1600,
        TimeSlot::Slot1700,
    ];
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TimeSlot::Slot0900 => "09:00",
            TimeSlot::Slot1000 => "10:00",
            TimeSlot::Slot1100 => "11:00",
            TimeSlot::Slot1400 => "14:00",
            TimeSlot::Slot1500 => "15:00",
            TimeSlot::Slot1600 => "16:00",
            TimeSlot::Slot1700 => "17:00",
        };
        write!(f, "{}", label)
    }
}

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

/// Validated registry input; every field is present by construction.
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub patient_name: String,
    pub email: String,
    pub phone: String,
    pub doctor_id: i64,
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub reason: String,
}

/// Booking form as submitted by the patient. The doctor/date/time selects
/// arrive unset when they were skipped, so presence is checked at booking
/// time rather than by the deserializer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    #[serde(default)]
    pub patient_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub doctor_id: Option<i64>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub time: Option<TimeSlot>,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: AppointmentStatus,
}

// Error types specific to appointment operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppointmentError {
    #[error("Appointment not found: {0}")]
    NotFound(i64),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition {
        from: AppointmentStatus,
        to: AppointmentStatus,
    },
}

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::NotFound(id) => {
                AppError::NotFound(format!("Appointment not found: {}", id))
            }
            AppointmentError::ValidationError(msg) => AppError::ValidationError(msg),
            err @ AppointmentError::InvalidStatusTransition { .. } => {
                AppError::Conflict(err.to_string())
            }
        }
    }
}
