use super::*;

#[test]
fn unknown_role_falls_back_to_patient_menu() {
    let links = ExternalLinks::default();
    let items = entries_for(None, &links);
    assert_eq!(items, navigation::sidebar(Area::Patient, false, &links));
}

#[test]
fn gestionnaire_gets_management_entries_in_admin_area() {
    let links = ExternalLinks::default();
    let gestionnaire = entries_for(Some(Role::Gestionnaire), &links);
    let admin = entries_for(Some(Role::Admin), &links);
    assert_ne!(gestionnaire, admin);
    assert!(gestionnaire.iter().any(|i| i.href.starts_with("/gestionnaire/")));
}

#[test]
fn security_menu_contains_external_consoles() {
    let items = entries_for(Some(Role::ResponsableSecurite), &ExternalLinks::default());
    assert!(items.iter().any(|i| i.external));
}

#[test]
fn active_item_class_adds_modifier() {
    assert_eq!(item_class(true), "sidebar__item sidebar__item--active");
    assert_eq!(item_class(false), "sidebar__item");
}
