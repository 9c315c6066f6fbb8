//! Sidebar entries for each layout area.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use crate::endpoints;
use crate::roles::Area;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: String,
    /// Opens in a new tab outside the portal.
    pub external: bool,
}

impl NavItem {
    fn internal(label: &'static str, href: &str) -> Self {
        Self { label, href: href.to_owned(), external: false }
    }

    fn external(label: &'static str, href: String) -> Self {
        Self { label, href, external: true }
    }

    /// First word of the label, used by the compact mobile bar.
    #[must_use]
    pub fn short_label(&self) -> &'static str {
        self.label.split_whitespace().next().unwrap_or(self.label)
    }
}

/// Monitoring and identity consoles linked from the security area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExternalLinks {
    pub grafana: String,
    pub loki: String,
    pub prometheus: String,
    pub idp: String,
}

impl Default for ExternalLinks {
    fn default() -> Self {
        Self {
            grafana: "http://localhost:3002".to_owned(),
            loki: "http://localhost:3002/explore".to_owned(),
            prometheus: "http://localhost:9090".to_owned(),
            idp: "http://localhost:8180".to_owned(),
        }
    }
}

/// Sidebar for `area`. Gestionnaires render in the admin area but get
/// their own management entries.
#[must_use]
pub fn sidebar(area: Area, gestionnaire: bool, links: &ExternalLinks) -> Vec<NavItem> {
    match area {
        Area::Patient => vec![
            NavItem::internal("Tableau de bord", "/patient/dashboard"),
            NavItem::internal("Mes Rendez-vous", "/patient/appointments"),
            NavItem::internal("Mon Dossier Médical", "/patient/dossier"),
            NavItem::internal("Mes Ordonnances", "/patient/prescriptions"),
        ],
        Area::Medecin => vec![
            NavItem::internal("Tableau de bord", "/medecin/dashboard"),
            NavItem::internal("Mes Patients", "/medecin/patients"),
            NavItem::internal("Historique RDV", "/medecin/appointments"),
            NavItem::internal("Mon Agenda", "/medecin/schedule"),
            NavItem::internal("Assistant IA", "/medecin/assistant"),
        ],
        Area::Admin if gestionnaire => vec![
            NavItem::internal("Tableau de bord", "/gestionnaire/dashboard"),
            NavItem::internal("Gestion Patients", "/gestionnaire/patients"),
            NavItem::internal("Gestion Médecins", "/gestionnaire/medecins"),
            NavItem::internal("Rapports d'Activité", "/admin/reports"),
        ],
        Area::Admin => vec![
            NavItem::internal("Tableau de bord", "/admin/dashboard"),
            NavItem::internal("Gestion des Utilisateurs", "/admin/users"),
            NavItem::internal("Rapports d'Activité", "/admin/reports"),
            NavItem::internal("Journaux d'Audit", "/admin/audit"),
        ],
        Area::Security => vec![
            NavItem::internal("Tableau de bord", "/security/dashboard"),
            NavItem::internal("Logs d'Audit", "/security/audit-logs"),
            NavItem::external("Monitoring (Grafana)", links.grafana.clone()),
            NavItem::external("Logs (Loki)", links.loki.clone()),
            NavItem::external("Métriques (Prometheus)", links.prometheus.clone()),
            NavItem::external("Keycloak Console", endpoints::idp_console_url(&links.idp)),
        ],
    }
}

/// Exact-match highlight; trailing slashes are ignored.
#[must_use]
pub fn is_active(href: &str, current_path: &str) -> bool {
    let trim = |p: &str| -> String {
        let p = p.split(['?', '#']).next().unwrap_or_default();
        let trimmed = p.trim_end_matches('/');
        if trimmed.is_empty() { "/".to_owned() } else { trimmed.to_owned() }
    };
    trim(href) == trim(current_path)
}
