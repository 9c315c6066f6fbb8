use super::*;

#[test]
fn or_fallback_replaces_missing_and_blank_values() {
    assert_eq!(or_fallback(Some("O+"), "N/A"), "O+");
    assert_eq!(or_fallback(Some("   "), "N/A"), "N/A");
    assert_eq!(or_fallback(None, "Aucune allergie connue"), "Aucune allergie connue");
}

#[test]
fn status_label_translates_known_statuses() {
    assert_eq!(status_label("COMPLETED"), AppointmentStatus::Completed.label());
    assert_eq!(status_label("NO_SHOW"), "NO_SHOW");
}
