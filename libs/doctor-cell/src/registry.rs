use tracing::debug;

use crate::models::{CreateDoctorRequest, Doctor, DoctorError, UpdateDoctorRequest};

/// In-memory doctor store. Records keep insertion order; ids come from a
/// monotonic counter and are never reused, even after deletions.
#[derive(Debug)]
pub struct DoctorRegistry {
    doctors: Vec<Doctor>,
    next_id: i64,
}

impl DoctorRegistry {
    pub fn new() -> Self {
        Self {
            doctors: Vec::new(),
            next_id: 1,
        }
    }

    /// Register a new doctor profile.
    pub fn add(&mut self, request: CreateDoctorRequest) -> Result<Doctor, DoctorError> {
        validate_fields(&[
            &request.name,
            &request.specialty,
            &request.email,
            &request.phone,
        ])?;

        let doctor = Doctor {
            id: self.next_id,
            name: request.name,
            specialty: request.specialty,
            email: request.email,
            phone: request.phone,
        };
        self.next_id += 1;

        debug!("Registered doctor {} ({})", doctor.id, doctor.name);
        self.doctors.push(doctor.clone());
        Ok(doctor)
    }

    /// Replace every field of an existing doctor except its id.
    pub fn update(&mut self, id: i64, request: UpdateDoctorRequest) -> Result<Doctor, DoctorError> {
        validate_fields(&[
            &request.name,
            &request.specialty,
            &request.email,
            &request.phone,
        ])?;

        let doctor = self
            .doctors
            .iter_mut()
            .find(|doctor| doctor.id == id)
            .ok_or(DoctorError::NotFound(id))?;

        doctor.name = request.name;
        doctor.specialty = request.specialty;
        doctor.email = request.email;
        doctor.phone = request.phone;

        debug!("Updated doctor {}", id);
        Ok(doctor.clone())
    }

    /// Remove a doctor profile. Appointments referencing it are not touched.
    pub fn delete(&mut self, id: i64) -> Result<(), DoctorError> {
        let index = self
            .doctors
            .iter()
            .position(|doctor| doctor.id == id)
            .ok_or(DoctorError::NotFound(id))?;

        self.doctors.remove(index);
        debug!("Deleted doctor {}", id);
        Ok(())
    }

    pub fn get(&self, id: i64) -> Option<&Doctor> {
        self.doctors.iter().find(|doctor| doctor.id == id)
    }

    pub fn list(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }
}

impl Default for DoctorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_fields(fields: &[&str]) -> Result<(), DoctorError> {
    if fields.iter().any(|field| field.trim().is_empty()) {
        return Err(DoctorError::ValidationError(
            "all fields are required".to_string(),
        ));
    }
    Ok(())
}
