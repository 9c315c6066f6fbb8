//! Portal roles and their landing routes.

#[cfg(test)]
#[path = "roles_test.rs"]
mod roles_test;

use std::fmt;

/// A portal role as carried in identity-token realm roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Patient,
    Medecin,
    Gestionnaire,
    Admin,
    ResponsableSecurite,
}

/// Layout family a role's pages render in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Area {
    Patient,
    Medecin,
    Admin,
    Security,
}

/// Fallback landing route for unknown roles.
pub const DEFAULT_LANDING: &str = "/patient/dashboard";

impl Role {
    pub const ALL: [Self; 5] = [Self::Patient, Self::Medecin, Self::Gestionnaire, Self::Admin, Self::ResponsableSecurite];

    /// Parse `ROLE_X` or `X`, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let key = normalize(raw);
        Self::ALL.into_iter().find(|role| role.backend_name() == key)
    }

    /// Backend enum name, e.g. `MEDECIN`.
    #[must_use]
    pub fn backend_name(self) -> &'static str {
        match self {
            Self::Patient => "PATIENT",
            Self::Medecin => "MEDECIN",
            Self::Gestionnaire => "GESTIONNAIRE",
            Self::Admin => "ADMIN",
            Self::ResponsableSecurite => "RESPONSABLE_SECURITE",
        }
    }

    /// Token claim form, e.g. `ROLE_MEDECIN`.
    #[must_use]
    pub fn claim(self) -> String {
        format!("ROLE_{}", self.backend_name())
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Patient => "Patient",
            Self::Medecin => "Médecin",
            Self::Gestionnaire => "Gestionnaire",
            Self::Admin => "Administrateur",
            Self::ResponsableSecurite => "Responsable sécurité",
        }
    }

    #[must_use]
    pub fn landing_route(self) -> &'static str {
        match self {
            Self::Patient => "/patient/dashboard",
            Self::Medecin => "/medecin/dashboard",
            Self::Gestionnaire | Self::Admin => "/admin/dashboard",
            Self::ResponsableSecurite => "/security/dashboard",
        }
    }

    #[must_use]
    pub fn area(self) -> Area {
        match self {
            Self::Patient => Area::Patient,
            Self::Medecin => Area::Medecin,
            Self::Gestionnaire | Self::Admin => Area::Admin,
            Self::ResponsableSecurite => Area::Security,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.backend_name())
    }
}

/// Landing route for a raw role claim; unknown claims go to the patient dashboard.
#[must_use]
pub fn landing_route_for(raw: &str) -> &'static str {
    Role::parse(raw).map_or(DEFAULT_LANDING, Role::landing_route)
}

/// Uppercase and strip any `ROLE_` prefix.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let upper = raw.trim().to_uppercase();
    match upper.strip_prefix("ROLE_") {
        Some(rest) => rest.to_owned(),
        None => upper,
    }
}
