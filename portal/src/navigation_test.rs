use super::*;

fn hrefs(items: &[NavItem]) -> Vec<&str> {
    items.iter().map(|i| i.href.as_str()).collect()
}

#[test]
fn patient_sidebar_lists_four_pages() {
    let items = sidebar(Area::Patient, false, &ExternalLinks::default());
    assert_eq!(
        hrefs(&items),
        ["/patient/dashboard", "/patient/appointments", "/patient/dossier", "/patient/prescriptions"]
    );
    assert!(items.iter().all(|i| !i.external));
}

#[test]
fn medecin_sidebar_includes_schedule_and_assistant() {
    let items = sidebar(Area::Medecin, false, &ExternalLinks::default());
    let hrefs = hrefs(&items);
    assert!(hrefs.contains(&"/medecin/schedule"));
    assert!(hrefs.contains(&"/medecin/assistant"));
}

#[test]
fn gestionnaire_flag_switches_admin_sidebar() {
    let links = ExternalLinks::default();
    let admin = sidebar(Area::Admin, false, &links);
    let manager = sidebar(Area::Admin, true, &links);
    assert_eq!(admin[1].href, "/admin/users");
    assert_eq!(manager[0].href, "/gestionnaire/dashboard");
    assert!(hrefs(&manager).contains(&"/gestionnaire/medecins"));
}

#[test]
fn security_sidebar_builds_external_links_from_config() {
    let links = ExternalLinks {
        grafana: "https://grafana.internal".to_owned(),
        loki: "https://grafana.internal/explore".to_owned(),
        prometheus: "https://prom.internal".to_owned(),
        idp: "https://kc.internal/".to_owned(),
    };
    let items = sidebar(Area::Security, false, &links);
    let external: Vec<&NavItem> = items.iter().filter(|i| i.external).collect();
    assert_eq!(external.len(), 4);
    assert_eq!(external[0].href, "https://grafana.internal");
    assert_eq!(external[3].href, "https://kc.internal/admin/master/console/");
    assert_eq!(items[1].href, "/security/audit-logs");
}

#[test]
fn short_label_takes_first_word() {
    let items = sidebar(Area::Patient, false, &ExternalLinks::default());
    assert_eq!(items[0].short_label(), "Tableau");
    assert_eq!(items[1].short_label(), "Mes");
}

#[test]
fn is_active_matches_exact_path() {
    assert!(is_active("/patient/dashboard", "/patient/dashboard"));
    assert!(is_active("/patient/dashboard", "/patient/dashboard/"));
    assert!(is_active("/admin/users", "/admin/users?page=2"));
    assert!(!is_active("/patient/dashboard", "/patient/dossier"));
    assert!(!is_active("/medecin/patients", "/medecin/patients/p1"));
    assert!(is_active("/", ""));
}
