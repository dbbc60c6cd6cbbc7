use chrono::NaiveDate;
use tracing::debug;

use appointment_cell::models::{
    Appointment, AppointmentError, AppointmentStatus, BookAppointmentRequest, NewAppointment,
    TimeSlot,
};
use appointment_cell::registry::AppointmentRegistry;
use doctor_cell::models::{CreateDoctorRequest, Doctor, DoctorError, UpdateDoctorRequest};
use doctor_cell::registry::DoctorRegistry;
use shared_config::AppConfig;

use crate::models::ClinicStats;

/// Placeholder shown when an appointment references a deleted doctor.
const UNKNOWN_DOCTOR: &str = "Unknown";

/// Owns both registries and is the only entry point the presentation layer
/// talks to.
pub struct SchedulingService {
    doctors: DoctorRegistry,
    appointments: AppointmentRegistry,
    strict_transitions: bool,
}

impl SchedulingService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            doctors: DoctorRegistry::new(),
            appointments: AppointmentRegistry::new(),
            strict_transitions: config.strict_status_transitions,
        }
    }

    // ----- Doctor management -----

    pub fn add_doctor(&mut self, request: CreateDoctorRequest) -> Result<Doctor, DoctorError> {
        self.doctors.add(request)
    }

    pub fn update_doctor(
        &mut self,
        id: i64,
        request: UpdateDoctorRequest,
    ) -> Result<Doctor, DoctorError> {
        self.doctors.update(id, request)
    }

    /// Remove a doctor profile. Appointments that reference it survive and
    /// resolve to the "Unknown" sentinel from then on.
    pub fn delete_doctor(&mut self, id: i64) -> Result<(), DoctorError> {
        self.doctors.delete(id)
    }

    pub fn get_doctor(&self, id: i64) -> Option<&Doctor> {
        self.doctors.get(id)
    }

    pub fn list_doctors(&self) -> &[Doctor] {
        self.doctors.list()
    }

    // ----- Appointments -----

    /// Book an appointment from the patient form. Every field is mandatory;
    /// the error does not say which one was missing.
    pub fn book_appointment(
        &mut self,
        request: BookAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        let (Some(doctor_id), Some(date), Some(time)) =
            (request.doctor_id, request.date, request.time)
        else {
            return Err(AppointmentError::ValidationError(
                "all fields are required".to_string(),
            ));
        };

        debug!("Booking appointment for {}", request.patient_name);
        self.appointments.create(NewAppointment {
            patient_name: request.patient_name,
            email: request.email,
            phone: request.phone,
            doctor_id,
            date,
            time,
            reason: request.reason,
        })
    }

    pub fn set_appointment_status(
        &mut self,
        id: i64,
        status: AppointmentStatus,
    ) -> Result<Appointment, AppointmentError> {
        if self.strict_transitions {
            let current = self
                .appointments
                .get(id)
                .ok_or(AppointmentError::NotFound(id))?
                .status;
            if !current.can_transition_to(status) {
                return Err(AppointmentError::InvalidStatusTransition {
                    from: current,
                    to: status,
                });
            }
        }

        self.appointments.set_status(id, status)
    }

    pub fn delete_appointment(&mut self, id: i64) -> Result<(), AppointmentError> {
        self.appointments.delete(id)
    }

    pub fn list_appointments(&self) -> &[Appointment] {
        self.appointments.list()
    }

    // ----- Queries -----

    /// Doctor display name for an appointment row. A dangling reference
    /// resolves to the sentinel instead of failing.
    pub fn resolve_doctor_name(&self, doctor_id: i64) -> String {
        self.doctors
            .get(doctor_id)
            .map(|doctor| doctor.name.clone())
            .unwrap_or_else(|| UNKNOWN_DOCTOR.to_string())
    }

    /// Case-insensitive substring search over the patient name and the
    /// resolved doctor name. An empty term matches everything; registry
    /// order is preserved.
    pub fn search_appointments(&self, term: &str) -> Vec<&Appointment> {
        let term = term.to_lowercase();
        self.appointments
            .list()
            .iter()
            .filter(|appointment| {
                appointment.patient_name.to_lowercase().contains(&term)
                    || self
                        .doctors
                        .get(appointment.doctor_id)
                        .is_some_and(|doctor| doctor.name.to_lowercase().contains(&term))
            })
            .collect()
    }

    /// Slots still free for a doctor on a date. Cancelled bookings free
    /// their slot. Display query only: booking itself never consults it.
    pub fn available_slots(
        &self,
        doctor_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<TimeSlot>, DoctorError> {
        if self.doctors.get(doctor_id).is_none() {
            return Err(DoctorError::NotFound(doctor_id));
        }

        let slots = TimeSlot::ALL
            .into_iter()
            .filter(|slot| {
                !self.appointments.list().iter().any(|appointment| {
                    appointment.doctor_id == doctor_id
                        && appointment.date == date
                        && appointment.time == *slot
                        && appointment.status != AppointmentStatus::Cancelled
                })
            })
            .collect();
        Ok(slots)
    }

    /// Dashboard counters. Cancelled appointments count towards the total
    /// but towards neither status counter.
    pub fn compute_stats(&self) -> ClinicStats {
        let count_with_status = |status: AppointmentStatus| {
            self.appointments
                .list()
                .iter()
                .filter(|appointment| appointment.status == status)
                .count()
        };

        ClinicStats {
            total_appointments: self.appointments.len(),
            confirmed: count_with_status(AppointmentStatus::Confirmed),
            pending: count_with_status(AppointmentStatus::Pending),
            total_doctors: self.doctors.len(),
        }
    }
}
