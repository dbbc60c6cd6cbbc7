use serde::{Deserialize, Serialize};

use appointment_cell::models::Appointment;

/// Appointment row as shown in listings, with the doctor reference resolved
/// to a display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentView {
    #[serde(flatten)]
    pub appointment: Appointment,
    pub doctor_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicStats {
    pub total_appointments: usize,
    pub confirmed: usize,
    pub pending: usize,
    pub total_doctors: usize,
}
