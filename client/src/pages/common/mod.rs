//! Pages shared by several staff roles.

pub mod medecin_profile;
