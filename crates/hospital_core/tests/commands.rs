mod common;

use common::Fixture;
use hospital_core::{
    dispatch, AdmissionRepository, CommandError, CommandKind, Console, OutputFormat,
    SqliteAdmissionRepository,
};
use rusqlite::Connection;
use std::io::Cursor;

struct Outcome {
    result: Result<(), CommandError>,
    output: String,
    prompts: String,
}

fn run_command(
    conn: &Connection,
    kind: CommandKind,
    input: &str,
    format: OutputFormat,
) -> Outcome {
    let mut console = Console::new(Cursor::new(input.to_string()), Vec::new(), Vec::new());
    let result = dispatch(kind, conn, &mut console, format);
    let (output, prompts) = console.into_parts();
    Outcome {
        result,
        output: String::from_utf8(output).unwrap(),
        prompts: String::from_utf8(prompts).unwrap(),
    }
}

#[test]
fn report_patient_prints_basic_information() {
    let fixture = Fixture::seeded();
    let conn = fixture.open();

    let outcome = run_command(
        &conn,
        CommandKind::ReportPatient,
        "111-22-3333\n",
        OutputFormat::Text,
    );

    outcome.result.unwrap();
    assert_eq!(outcome.prompts, "Enter Patient SSN:\n");
    assert_eq!(
        outcome.output,
        "Patient SSN: 111-22-3333\n\
         Patient First Name: Ada\n\
         Patient Last Name: Lovelace\n\
         Patient Address: 12 St James Sq\n\
         Patient Phone: 555-0100\n"
    );
}

#[test]
fn report_patient_for_unknown_ssn_prints_no_report() {
    let fixture = Fixture::seeded();
    let conn = fixture.open();

    let outcome = run_command(
        &conn,
        CommandKind::ReportPatient,
        "000-00-0000\n",
        OutputFormat::Text,
    );

    let err = outcome.result.unwrap_err();
    assert!(matches!(err, CommandError::NotFound { entity: "patient", .. }));
    assert_eq!(err.to_string(), "Unable to find patient");
    assert_eq!(outcome.prompts, "Enter Patient SSN:\n");
    assert!(outcome.output.is_empty());
}

#[test]
fn report_doctor_prints_gender_and_specialty() {
    let fixture = Fixture::seeded();
    let conn = fixture.open();

    let outcome = run_command(&conn, CommandKind::ReportDoctor, "4\n", OutputFormat::Text);

    outcome.result.unwrap();
    let output = &outcome.output;
    assert_eq!(outcome.prompts, "Enter Doctor ID:\n");
    assert!(output.starts_with("Doctor ID: 4\n"));
    assert!(output.contains("Doctor First Name: Edsger\n"));
    assert!(output.contains("Doctor Gender: Male\n"));
    assert!(output.contains("Doctor Specialty: N/A\n"));
}

#[test]
fn report_doctor_rejects_non_numeric_id() {
    let fixture = Fixture::seeded();
    let conn = fixture.open();

    let outcome = run_command(&conn, CommandKind::ReportDoctor, "four\n", OutputFormat::Text);

    assert!(matches!(
        outcome.result.unwrap_err(),
        CommandError::Parse { field: "doctor id", .. }
    ));
}

#[test]
fn report_admission_lists_rooms_and_doctors() {
    let fixture = Fixture::seeded();
    let conn = fixture.open();

    let outcome = run_command(&conn, CommandKind::ReportAdmission, "7\n", OutputFormat::Text);

    outcome.result.unwrap();
    let output = &outcome.output;
    assert!(output.starts_with("Admission ID: 7\nPatient SSN: 111-22-3333\n"));
    assert!(output.contains("Admission date (start date): 2024-01-05\n"));
    assert!(output.contains("Total Payment: 1200.00\n"));
    assert!(output.contains(
        "Rooms:\n\
         \tRoom Num: 101 FromDate: 2024-01-05 ToDate: 2024-01-07\n\
         \tRoom Num: 205 FromDate: 2024-01-07 ToDate: 2024-01-09\n"
    ));
    assert!(output.ends_with(
        "Doctors examined the patient in this admission:\n\
         \tDoctor ID: 3\n\
         \tDoctor ID: 4\n"
    ));
}

#[test]
fn report_admission_without_related_rows_prints_empty_sections() {
    let fixture = Fixture::seeded();
    let conn = fixture.open();

    let outcome = run_command(&conn, CommandKind::ReportAdmission, "8\n", OutputFormat::Text);

    outcome.result.unwrap();
    let output = &outcome.output;
    assert!(output.contains("Leave date: N/A\n"));
    assert!(output.ends_with("Rooms:\nDoctors examined the patient in this admission:\n"));
}

#[test]
fn report_admission_as_json_is_one_document_on_the_report_stream() {
    let fixture = Fixture::seeded();
    let conn = fixture.open();

    let outcome = run_command(&conn, CommandKind::ReportAdmission, "7\n", OutputFormat::Json);

    outcome.result.unwrap();
    assert_eq!(outcome.prompts, "Enter Admission ID:\n");
    let value: serde_json::Value = serde_json::from_str(&outcome.output).unwrap();
    assert_eq!(value["admission"]["patient_ssn"], "111-22-3333");
    assert_eq!(value["stays"][0]["room_number"], "101");
    assert_eq!(value["examinations"].as_array().unwrap().len(), 2);
}

#[test]
fn update_admission_payment_persists_new_total() {
    let fixture = Fixture::seeded();
    let conn = fixture.open();

    let outcome = run_command(
        &conn,
        CommandKind::UpdateAdmissionPayment,
        "7\n1500.75\n",
        OutputFormat::Text,
    );

    outcome.result.unwrap();
    assert_eq!(
        outcome.prompts,
        "Enter Admission Number:\nEnter the new total payment:\n"
    );
    assert_eq!(
        outcome.output,
        "Updated total payment for admission 7: 1200.00 -> 1500.75\n"
    );

    let repo = SqliteAdmissionRepository::try_new(&conn).unwrap();
    let admission = repo.get_admission(7).unwrap().unwrap();
    assert_eq!(admission.total_payment, 1500.75);
}

#[test]
fn update_admission_payment_for_unknown_admission_changes_nothing() {
    let fixture = Fixture::seeded();
    let conn = fixture.open();

    let outcome = run_command(
        &conn,
        CommandKind::UpdateAdmissionPayment,
        "404\n10\n",
        OutputFormat::Text,
    );

    assert!(matches!(
        outcome.result.unwrap_err(),
        CommandError::NotFound { entity: "admission", .. }
    ));
    assert_eq!(outcome.prompts, "Enter Admission Number:\n");
    assert!(outcome.output.is_empty());

    let total: f64 = conn
        .query_row("SELECT SUM(total_payment) FROM Admissions;", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(total, 1500.0);
}

#[test]
fn update_admission_payment_rejects_malformed_amount() {
    let fixture = Fixture::seeded();
    let conn = fixture.open();

    let outcome = run_command(
        &conn,
        CommandKind::UpdateAdmissionPayment,
        "7\ntwelve hundred\n",
        OutputFormat::Text,
    );

    assert!(matches!(
        outcome.result.unwrap_err(),
        CommandError::Parse { field: "total payment", .. }
    ));
    let repo = SqliteAdmissionRepository::try_new(&conn).unwrap();
    assert_eq!(repo.get_admission(7).unwrap().unwrap().total_payment, 1200.0);
}

#[test]
fn empty_input_is_reported() {
    let fixture = Fixture::seeded();
    let conn = fixture.open();

    let outcome = run_command(&conn, CommandKind::ReportPatient, "", OutputFormat::Text);

    assert!(matches!(outcome.result.unwrap_err(), CommandError::EmptyInput(_)));
}
