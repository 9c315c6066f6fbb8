//! Page routes and the role guard in front of them.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::roles::Role;
use crate::session::SessionUser;

pub const LOGIN_PATH: &str = "/login";
pub const FORBIDDEN_PATH: &str = "/forbidden";

/// Every page the portal renders.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    Login,
    RegisterPatient,
    RegisterMedecin,
    Forbidden,
    NotFound,
    Profile,
    PatientDashboard,
    PatientAppointments,
    PatientDossier,
    PatientPrescriptions,
    MedecinDashboard,
    MedecinPatients,
    MedecinPatient(String),
    MedecinAppointments,
    MedecinSchedule,
    MedecinAssistant,
    MedecinConsultation(String),
    AdminDashboard,
    AdminUsers,
    AdminAudit,
    AdminReports,
    GestionnaireDashboard,
    GestionnairePatients,
    GestionnaireMedecins,
    SecurityDashboard,
    SecurityAuditLogs,
    MedecinProfile(String),
}

/// Who may see a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Roles(&'static [Role]),
}

const PATIENT_ONLY: &[Role] = &[Role::Patient];
const MEDECIN_ONLY: &[Role] = &[Role::Medecin];
const ADMIN_PAGES: &[Role] = &[Role::Admin, Role::Gestionnaire];
const GESTIONNAIRE_PAGES: &[Role] = &[Role::Gestionnaire, Role::Admin];
const SECURITY_PAGES: &[Role] = &[Role::ResponsableSecurite, Role::Admin];
const STAFF_PAGES: &[Role] = &[Role::Admin, Role::Gestionnaire, Role::Medecin];

impl AppRoute {
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::Login => LOGIN_PATH.to_owned(),
            Self::RegisterPatient => "/register/patient".to_owned(),
            Self::RegisterMedecin => "/register/medecin".to_owned(),
            Self::Forbidden => FORBIDDEN_PATH.to_owned(),
            Self::NotFound => "/not-found".to_owned(),
            Self::Profile => "/profile".to_owned(),
            Self::PatientDashboard => "/patient/dashboard".to_owned(),
            Self::PatientAppointments => "/patient/appointments".to_owned(),
            Self::PatientDossier => "/patient/dossier".to_owned(),
            Self::PatientPrescriptions => "/patient/prescriptions".to_owned(),
            Self::MedecinDashboard => "/medecin/dashboard".to_owned(),
            Self::MedecinPatients => "/medecin/patients".to_owned(),
            Self::MedecinPatient(id) => format!("/medecin/patients/{id}"),
            Self::MedecinAppointments => "/medecin/appointments".to_owned(),
            Self::MedecinSchedule => "/medecin/schedule".to_owned(),
            Self::MedecinAssistant => "/medecin/assistant".to_owned(),
            Self::MedecinConsultation(id) => format!("/medecin/consultation/{id}"),
            Self::AdminDashboard => "/admin/dashboard".to_owned(),
            Self::AdminUsers => "/admin/users".to_owned(),
            Self::AdminAudit => "/admin/audit".to_owned(),
            Self::AdminReports => "/admin/reports".to_owned(),
            Self::GestionnaireDashboard => "/gestionnaire/dashboard".to_owned(),
            Self::GestionnairePatients => "/gestionnaire/patients".to_owned(),
            Self::GestionnaireMedecins => "/gestionnaire/medecins".to_owned(),
            Self::SecurityDashboard => "/security/dashboard".to_owned(),
            Self::SecurityAuditLogs => "/security/audit-logs".to_owned(),
            Self::MedecinProfile(id) => format!("/common/medecins/{id}"),
        }
    }

    /// Match a browser path (query and trailing slash ignored). Unknown
    /// paths map to [`AppRoute::NotFound`].
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Home,
            ["login"] => Self::Login,
            ["register", "patient"] => Self::RegisterPatient,
            ["register", "medecin"] => Self::RegisterMedecin,
            ["forbidden"] => Self::Forbidden,
            ["profile"] => Self::Profile,
            ["patient", "dashboard"] => Self::PatientDashboard,
            ["patient", "appointments"] => Self::PatientAppointments,
            ["patient", "dossier"] => Self::PatientDossier,
            ["patient", "prescriptions"] => Self::PatientPrescriptions,
            ["medecin", "dashboard"] => Self::MedecinDashboard,
            ["medecin", "patients"] => Self::MedecinPatients,
            ["medecin", "patients", id] => Self::MedecinPatient((*id).to_owned()),
            ["medecin", "appointments"] => Self::MedecinAppointments,
            ["medecin", "schedule"] => Self::MedecinSchedule,
            ["medecin", "assistant"] => Self::MedecinAssistant,
            ["medecin", "consultation", id] => Self::MedecinConsultation((*id).to_owned()),
            ["admin", "dashboard"] => Self::AdminDashboard,
            ["admin", "users"] => Self::AdminUsers,
            ["admin", "audit"] => Self::AdminAudit,
            ["admin", "reports"] => Self::AdminReports,
            ["gestionnaire", "dashboard"] => Self::GestionnaireDashboard,
            ["gestionnaire", "patients"] => Self::GestionnairePatients,
            ["gestionnaire", "medecins"] => Self::GestionnaireMedecins,
            ["security", "dashboard"] => Self::SecurityDashboard,
            ["security", "audit-logs"] => Self::SecurityAuditLogs,
            ["common", "medecins", id] => Self::MedecinProfile((*id).to_owned()),
            _ => Self::NotFound,
        }
    }

    #[must_use]
    pub fn access(&self) -> Access {
        match self {
            Self::Home | Self::Login | Self::RegisterPatient | Self::RegisterMedecin | Self::Forbidden | Self::NotFound => {
                Access::Public
            }
            Self::Profile => Access::Authenticated,
            Self::PatientDashboard | Self::PatientAppointments | Self::PatientDossier | Self::PatientPrescriptions => {
                Access::Roles(PATIENT_ONLY)
            }
            Self::MedecinDashboard
            | Self::MedecinPatients
            | Self::MedecinPatient(_)
            | Self::MedecinAppointments
            | Self::MedecinSchedule
            | Self::MedecinAssistant
            | Self::MedecinConsultation(_) => Access::Roles(MEDECIN_ONLY),
            Self::AdminDashboard | Self::AdminUsers | Self::AdminAudit | Self::AdminReports => Access::Roles(ADMIN_PAGES),
            Self::GestionnaireDashboard | Self::GestionnairePatients | Self::GestionnaireMedecins => {
                Access::Roles(GESTIONNAIRE_PAGES)
            }
            Self::SecurityDashboard | Self::SecurityAuditLogs => Access::Roles(SECURITY_PAGES),
            Self::MedecinProfile(_) => Access::Roles(STAFF_PAGES),
        }
    }

    /// Roles permitted on this route; `None` for public or any-user routes.
    #[must_use]
    pub fn allowed_roles(&self) -> Option<&'static [Role]> {
        match self.access() {
            Access::Roles(roles) => Some(roles),
            Access::Public | Access::Authenticated => None,
        }
    }

    #[must_use]
    pub fn is_public(&self) -> bool {
        self.access() == Access::Public
    }
}

/// Guard decision for one navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session restore has not finished; render a spinner.
    Loading,
    Allow,
    RedirectLogin,
    Forbidden,
}

impl GuardOutcome {
    /// Where to navigate, if anywhere.
    #[must_use]
    pub fn redirect(&self) -> Option<&'static str> {
        match self {
            Self::RedirectLogin => Some(LOGIN_PATH),
            Self::Forbidden => Some(FORBIDDEN_PATH),
            Self::Loading | Self::Allow => None,
        }
    }
}

/// Decide whether `user` may view `route`.
#[must_use]
pub fn evaluate(route: &AppRoute, loading: bool, user: Option<&SessionUser>) -> GuardOutcome {
    if loading {
        return GuardOutcome::Loading;
    }
    let access = route.access();
    if access == Access::Public {
        return GuardOutcome::Allow;
    }
    let Some(user) = user else {
        return GuardOutcome::RedirectLogin;
    };
    match access {
        Access::Roles(roles) if !roles.contains(&user.role()) => GuardOutcome::Forbidden,
        _ => GuardOutcome::Allow,
    }
}
