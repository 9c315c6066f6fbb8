use super::*;

#[test]
fn optional_drops_blank_input() {
    assert_eq!(optional("   ".to_owned()), None);
    assert_eq!(optional(String::new()), None);
}

#[test]
fn optional_trims_kept_values() {
    assert_eq!(optional("  Diabète type 2 ".to_owned()).as_deref(), Some("Diabète type 2"));
}
