//! Golden tests for stored appointment records.
//!
//! Each case fixes the raw fields and the exact outcome, including which error
//! wins when several fields are wrong.

use medibook_core::models::{AppointmentDateTime, Nric, ValueObject};
use medibook_core::storage::{IllegalValueError, JsonAdaptedAppointment};
use proptest::prelude::*;

/// Expected result of converting a record.
enum Expected {
    Ok,
    Missing(&'static str),
    NricConstraint,
    DateTimeConstraint,
}

struct GoldenCase {
    id: &'static str,
    doctor: Option<&'static str>,
    patient: Option<&'static str>,
    date_time: Option<&'static str>,
    expected: Expected,
}

fn get_golden_cases() -> Vec<GoldenCase> {
    vec![
        GoldenCase {
            id: "all-valid",
            doctor: Some("S1234567A"),
            patient: Some("T7654321B"),
            date_time: Some("2024-03-15 14:30"),
            expected: Expected::Ok,
        },
        GoldenCase {
            id: "both-nrics-invalid",
            doctor: Some("G1234A"),
            patient: Some("S123456A"),
            date_time: Some("2024-03-15 14:30"),
            expected: Expected::NricConstraint,
        },
        GoldenCase {
            id: "doctor-invalid",
            doctor: Some("S123456A"),
            patient: Some("T7654321B"),
            date_time: Some("2024-03-15 14:30"),
            expected: Expected::NricConstraint,
        },
        GoldenCase {
            id: "patient-invalid",
            doctor: Some("S1234567A"),
            patient: Some("S123456A"),
            date_time: Some("2024-03-15 14:30"),
            expected: Expected::NricConstraint,
        },
        GoldenCase {
            id: "doctor-missing",
            doctor: None,
            patient: Some("T7654321B"),
            date_time: Some("2024-03-15 14:30"),
            expected: Expected::Missing("Nric"),
        },
        GoldenCase {
            id: "doctor-missing-patient-invalid",
            doctor: None,
            patient: Some("G1234A"),
            date_time: Some("2024-03-15 14:30"),
            expected: Expected::Missing("Nric"),
        },
        GoldenCase {
            id: "doctor-invalid-patient-missing",
            doctor: Some("G1234A"),
            patient: None,
            date_time: Some("2024-03-15 14:30"),
            expected: Expected::NricConstraint,
        },
        GoldenCase {
            id: "patient-missing",
            doctor: Some("S1234567A"),
            patient: None,
            date_time: Some("2024-03-15 14:30"),
            expected: Expected::Missing("Nric"),
        },
        GoldenCase {
            id: "patient-invalid-date-missing",
            doctor: Some("S1234567A"),
            patient: Some("S123456A"),
            date_time: None,
            expected: Expected::NricConstraint,
        },
        GoldenCase {
            id: "date-missing",
            doctor: Some("S1234567A"),
            patient: Some("T7654321B"),
            date_time: None,
            expected: Expected::Missing("AppointmentDateTime"),
        },
        GoldenCase {
            id: "date-feb-31-short-minute",
            doctor: Some("S1234567A"),
            patient: Some("T7654321B"),
            date_time: Some("2023-02-31 11:0"),
            expected: Expected::DateTimeConstraint,
        },
        GoldenCase {
            id: "date-april-31",
            doctor: Some("S1234567A"),
            patient: Some("T7654321B"),
            date_time: Some("2023-04-31 11:00"),
            expected: Expected::DateTimeConstraint,
        },
        GoldenCase {
            id: "all-missing",
            doctor: None,
            patient: None,
            date_time: None,
            expected: Expected::Missing("Nric"),
        },
    ]
}

#[test]
fn test_golden_cases() {
    for case in get_golden_cases() {
        let record = JsonAdaptedAppointment::new(
            case.doctor.map(String::from),
            case.patient.map(String::from),
            case.date_time.map(String::from),
        );
        let result = record.to_model_type();

        match case.expected {
            Expected::Ok => {
                let appointment = result
                    .unwrap_or_else(|e| panic!("case {}: unexpected error {}", case.id, e));
                assert_eq!(Some(appointment.doctor_nric().as_str()), case.doctor, "case {}", case.id);
                assert_eq!(Some(appointment.patient_nric().as_str()), case.patient, "case {}", case.id);
                assert_eq!(
                    Some(appointment.date_time().to_string().as_str()),
                    case.date_time,
                    "case {}",
                    case.id
                );
            }
            Expected::Missing(field) => {
                let err = result.expect_err(case.id);
                assert_eq!(err, IllegalValueError::missing_field(field), "case {}", case.id);
                assert_eq!(err.to_string(), format!("{}'s field is missing!", field));
            }
            Expected::NricConstraint => {
                let err = result.expect_err(case.id);
                assert_eq!(err.to_string(), Nric::MESSAGE_CONSTRAINTS, "case {}", case.id);
            }
            Expected::DateTimeConstraint => {
                let err = result.expect_err(case.id);
                assert_eq!(
                    err.to_string(),
                    AppointmentDateTime::MESSAGE_CONSTRAINTS,
                    "case {}",
                    case.id
                );
            }
        }
    }
}

#[test]
fn test_same_data_via_different_paths_is_equal() {
    let raw = JsonAdaptedAppointment::new(
        Some("S1234567A".into()),
        Some("T7654321B".into()),
        Some("2024-03-15 14:30".into()),
    );
    let appointment = raw.to_model_type().unwrap();
    assert_eq!(JsonAdaptedAppointment::from(&appointment), raw);
}

proptest! {
    #[test]
    fn prop_valid_records_round_trip(
        doctor in "[STFGM][0-9]{7}[A-Z]",
        patient in "[STFGM][0-9]{7}[A-Z]",
        year in 1970i32..2100,
        month in 1u32..=12,
        day in 1u32..=28,
        hour in 0u32..24,
        minute in 0u32..60,
    ) {
        let date_time = format!("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}");
        let record = JsonAdaptedAppointment::new(
            Some(doctor.clone()),
            Some(patient.clone()),
            Some(date_time.clone()),
        );

        let appointment = record.to_model_type().unwrap();
        prop_assert_eq!(appointment.doctor_nric().as_str(), doctor.as_str());
        prop_assert_eq!(appointment.patient_nric().as_str(), patient.as_str());
        prop_assert_eq!(appointment.date_time().to_string(), date_time);
        prop_assert_eq!(JsonAdaptedAppointment::from(&appointment), record);
    }
}
