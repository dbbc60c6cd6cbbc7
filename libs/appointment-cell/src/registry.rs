use tracing::debug;

use crate::models::{Appointment, AppointmentError, AppointmentStatus, NewAppointment};

/// In-memory appointment store. Records keep insertion order; ids come from
/// a monotonic counter and are never reused, even after deletions.
#[derive(Debug)]
pub struct AppointmentRegistry {
    appointments: Vec<Appointment>,
    next_id: i64,
}

impl AppointmentRegistry {
    pub fn new() -> Self {
        Self {
            appointments: Vec::new(),
            next_id: 1,
        }
    }

    /// Store a booking with status forced to pending. The doctor reference
    /// is advisory and is not resolved here; two bookings may share a
    /// doctor, date and time.
    pub fn create(&mut self, new: NewAppointment) -> Result<Appointment, AppointmentError> {
        validate_fields(&[&new.patient_name, &new.email, &new.phone, &new.reason])?;

        let appointment = Appointment {
            id: self.next_id,
            patient_name: new.patient_name,
            email: new.email,
            phone: new.phone,
            doctor_id: new.doctor_id,
            date: new.date,
            time: new.time,
            reason: new.reason,
            status: AppointmentStatus::Pending,
        };
        self.next_id += 1;

        debug!(
            "Created appointment {} for {}",
            appointment.id, appointment.patient_name
        );
        self.appointments.push(appointment.clone());
        Ok(appointment)
    }

    /// Unconditional status set. The offered transition graph is enforced a
    /// level up, and only when strict transitions are configured.
    pub fn set_status(
        &mut self,
        id: i64,
        status: AppointmentStatus,
    ) -> Result<Appointment, AppointmentError> {
        let appointment = self
            .appointments
            .iter_mut()
            .find(|appointment| appointment.id == id)
            .ok_or(AppointmentError::NotFound(id))?;

        appointment.status = status;
        debug!("Appointment {} is now {}", id, status);
        Ok(appointment.clone())
    }

    pub fn delete(&mut self, id: i64) -> Result<(), AppointmentError> {
        let index = self
            .appointments
            .iter()
            .position(|appointment| appointment.id == id)
            .ok_or(AppointmentError::NotFound(id))?;

        self.appointments.remove(index);
        debug!("Deleted appointment {}", id);
        Ok(())
    }

    pub fn get(&self, id: i64) -> Option<&Appointment> {
        self.appointments.iter().find(|appointment| appointment.id == id)
    }

    pub fn list(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }
}

impl Default for AppointmentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_fields(fields: &[&str]) -> Result<(), AppointmentError> {
    if fields.iter().any(|field| field.trim().is_empty()) {
        return Err(AppointmentError::ValidationError(
            "all fields are required".to_string(),
        ));
    }
    Ok(())
}
