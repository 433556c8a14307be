use super::*;

#[test]
fn empty_flash_has_no_message() {
    assert_eq!(Flash::default().message(), None);
    let flash: Flash = serde_json::from_str("{}").unwrap();
    assert_eq!(flash.message(), None);
}

#[test]
fn success_message() {
    let flash: Flash = serde_json::from_str(r#"{"success":"List created"}"#).unwrap();
    assert_eq!(flash.message(), Some((Severity::Success, "List created")));
}

#[test]
fn error_message() {
    let flash: Flash = serde_json::from_str(r#"{"success":null,"error":"Nope"}"#).unwrap();
    assert_eq!(flash.message(), Some((Severity::Error, "Nope")));
}

#[test]
fn success_wins_over_error() {
    let flash = Flash {
        success: Some("Saved".to_string()),
        error: Some("Also failed".to_string()),
    };
    assert_eq!(flash.message(), Some((Severity::Success, "Saved")));
}

#[test]
fn blank_success_falls_back_to_error() {
    let flash = Flash {
        success: Some(String::new()),
        error: Some("Failed".to_string()),
    };
    assert_eq!(flash.message(), Some((Severity::Error, "Failed")));
}

#[test]
fn error_flash_is_a_failure() {
    let flash: Flash = serde_json::from_str(r#"{"error":"Could not save list."}"#).unwrap();
    assert!(flash.is_failure());
}

#[test]
fn success_flash_is_not_a_failure_even_with_error() {
    let flash: Flash = serde_json::from_str(r#"{"success":"Saved","error":"ignored"}"#).unwrap();
    assert!(!flash.is_failure());
    assert!(!Flash::default().is_failure());
}
