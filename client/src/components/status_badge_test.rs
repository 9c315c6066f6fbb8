use super::*;

#[test]
fn every_status_has_its_own_class() {
    let classes: Vec<_> = AppointmentStatus::ALL.iter().map(|s| badge_class(*s)).collect();
    for (i, class) in classes.iter().enumerate() {
        assert!(class.starts_with("badge badge--"));
        assert!(!classes[i + 1..].contains(class));
    }
}
