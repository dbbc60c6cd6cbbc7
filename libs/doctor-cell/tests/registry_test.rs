use assert_matches::assert_matches;

use doctor_cell::models::{CreateDoctorRequest, DoctorError, UpdateDoctorRequest};
use doctor_cell::registry::DoctorRegistry;

fn sarah_johnson() -> CreateDoctorRequest {
    CreateDoctorRequest {
        name: "Dr. Sarah Johnson".to_string(),
        specialty: "Cardiology".to_string(),
        email: "sarah.j@hospital.com".to_string(),
        phone: "(555) 123-4567".to_string(),
    }
}

fn michael_chen() -> CreateDoctorRequest {
    CreateDoctorRequest {
        name: "Dr. Michael Chen".to_string(),
        specialty: "Neurology".to_string(),
        email: "michael.c@hospital.com".to_string(),
        phone: "(555) 234-5678".to_string(),
    }
}

#[test]
fn add_assigns_sequential_unique_ids() {
    let mut registry = DoctorRegistry::new();

    let first = registry.add(sarah_johnson()).unwrap();
    let second = registry.add(michael_chen()).unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(registry.len(), 2);
}

#[test]
fn add_rejects_blank_fields() {
    let mut registry = DoctorRegistry::new();

    let mut request = sarah_johnson();
    request.specialty = "   ".to_string();

    let err = registry.add(request).unwrap_err();
    assert_matches!(err, DoctorError::ValidationError(_));
    assert!(registry.is_empty());
}

#[test]
fn update_replaces_every_field_except_id() {
    let mut registry = DoctorRegistry::new();
    let doctor = registry.add(sarah_johnson()).unwrap();

    let updated = registry
        .update(
            doctor.id,
            UpdateDoctorRequest {
                name: "Dr. Sarah Johnson-Lee".to_string(),
                specialty: "Internal Medicine".to_string(),
                email: "sarah.jl@hospital.com".to_string(),
                phone: "(555) 999-0000".to_string(),
            },
        )
        .unwrap();

    assert_eq!(updated.id, doctor.id);
    assert_eq!(updated.name, "Dr. Sarah Johnson-Lee");
    assert_eq!(updated.specialty, "Internal Medicine");
    assert_eq!(registry.get(doctor.id).unwrap().email, "sarah.jl@hospital.com");
}

#[test]
fn update_checks_fields_before_existence() {
    let mut registry = DoctorRegistry::new();

    let mut request = UpdateDoctorRequest {
        name: String::new(),
        specialty: "Cardiology".to_string(),
        email: "sarah.j@hospital.com".to_string(),
        phone: "(555) 123-4567".to_string(),
    };
    assert_matches!(
        registry.update(42, request.clone()).unwrap_err(),
        DoctorError::ValidationError(_)
    );

    request.name = "Dr. Sarah Johnson".to_string();
    assert_matches!(
        registry.update(42, request).unwrap_err(),
        DoctorError::NotFound(42)
    );
}

#[test]
fn delete_removes_only_that_doctor() {
    let mut registry = DoctorRegistry::new();
    let first = registry.add(sarah_johnson()).unwrap();
    let second = registry.add(michael_chen()).unwrap();

    registry.delete(first.id).unwrap();

    assert!(registry.get(first.id).is_none());
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get(second.id).unwrap().name, "Dr. Michael Chen");
}

#[test]
fn delete_unknown_doctor_is_not_found() {
    let mut registry = DoctorRegistry::new();
    assert_matches!(registry.delete(7).unwrap_err(), DoctorError::NotFound(7));
}

#[test]
fn ids_are_never_reused_after_delete() {
    let mut registry = DoctorRegistry::new();
    registry.add(sarah_johnson()).unwrap();
    let second = registry.add(michael_chen()).unwrap();

    registry.delete(second.id).unwrap();
    let third = registry.add(michael_chen()).unwrap();

    assert_eq!(third.id, 3);
}

#[test]
fn list_keeps_insertion_order() {
    let mut registry = DoctorRegistry::new();
    registry.add(sarah_johnson()).unwrap();
    registry.add(michael_chen()).unwrap();
    registry.delete(1).unwrap();
    registry.add(sarah_johnson()).unwrap();

    let names: Vec<&str> = registry
        .list()
        .iter()
        .map(|doctor| doctor.name.as_str())
        .collect();
    assert_eq!(names, vec!["Dr. Michael Chen", "Dr. Sarah Johnson"]);
}
