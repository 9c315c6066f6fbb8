//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::pages::admin::{
    audit::AdminAuditPage, dashboard::AdminDashboardPage, reports::AdminReportsPage, users::AdminUsersPage,
};
use crate::pages::common::medecin_profile::MedecinProfilePage;
use crate::pages::gestionnaire::{
    dashboard::GestionnaireDashboardPage, medecins::GestionnaireMedecinsPage, patients::GestionnairePatientsPage,
};
use crate::pages::medecin::{
    appointments::MedecinAppointmentsPage, assistant::MedecinAssistantPage, consultation::MedecinConsultationPage,
    dashboard::MedecinDashboardPage, patient_detail::MedecinPatientPage, patients::MedecinPatientsPage,
    schedule::MedecinSchedulePage,
};
use crate::pages::patient::{
    appointments::PatientAppointmentsPage, dashboard::PatientDashboardPage, dossier::PatientDossierPage,
    prescriptions::PatientPrescriptionsPage,
};
use crate::pages::security::{audit_logs::SecurityAuditLogsPage, dashboard::SecurityDashboardPage};
use crate::pages::{
    forbidden::ForbiddenPage,
    home::HomePage,
    login::LoginPage,
    not_found::NotFoundPage,
    profile::ProfilePage,
    register::{RegisterMedecinPage, RegisterPatientPage},
};
use crate::state::{auth::AuthState, toast::ToastState};
use crate::util::auth::restore_session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// The session starts in the restoring state so gated pages wait for the
/// stored token to be read before the guard decides.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::restoring());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(auth);
    provide_context(toasts);

    Effect::new(move || restore_session(auth));

    view! {
        <Stylesheet id="leptos" href="/pkg/medinsight.css"/>
        <Title text="MedInsight"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=(StaticSegment("register"), StaticSegment("patient")) view=RegisterPatientPage/>
                <Route path=(StaticSegment("register"), StaticSegment("medecin")) view=RegisterMedecinPage/>
                <Route path=StaticSegment("forbidden") view=ForbiddenPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>

                <Route path=(StaticSegment("patient"), StaticSegment("dashboard")) view=PatientDashboardPage/>
                <Route path=(StaticSegment("patient"), StaticSegment("appointments")) view=PatientAppointmentsPage/>
                <Route path=(StaticSegment("patient"), StaticSegment("dossier")) view=PatientDossierPage/>
                <Route path=(StaticSegment("patient"), StaticSegment("prescriptions")) view=PatientPrescriptionsPage/>

                <Route path=(StaticSegment("medecin"), StaticSegment("dashboard")) view=MedecinDashboardPage/>
                <Route path=(StaticSegment("medecin"), StaticSegment("patients")) view=MedecinPatientsPage/>
                <Route
                    path=(StaticSegment("medecin"), StaticSegment("patients"), ParamSegment("id"))
                    view=MedecinPatientPage
                />
                <Route path=(StaticSegment("medecin"), StaticSegment("appointments")) view=MedecinAppointmentsPage/>
                <Route path=(StaticSegment("medecin"), StaticSegment("schedule")) view=MedecinSchedulePage/>
                <Route path=(StaticSegment("medecin"), StaticSegment("assistant")) view=MedecinAssistantPage/>
                <Route
                    path=(StaticSegment("medecin"), StaticSegment("consultation"), ParamSegment("id"))
                    view=MedecinConsultationPage
                />

                <Route path=(StaticSegment("admin"), StaticSegment("dashboard")) view=AdminDashboardPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("users")) view=AdminUsersPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("audit")) view=AdminAuditPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("reports")) view=AdminReportsPage/>

                <Route path=(StaticSegment("gestionnaire"), StaticSegment("dashboard")) view=GestionnaireDashboardPage/>
                <Route path=(StaticSegment("gestionnaire"), StaticSegment("patients")) view=GestionnairePatientsPage/>
                <Route path=(StaticSegment("gestionnaire"), StaticSegment("medecins")) view=GestionnaireMedecinsPage/>

                <Route path=(StaticSegment("security"), StaticSegment("dashboard")) view=SecurityDashboardPage/>
                <Route path=(StaticSegment("security"), StaticSegment("audit-logs")) view=SecurityAuditLogsPage/>

                <Route
                    path=(StaticSegment("common"), StaticSegment("medecins"), ParamSegment("id"))
                    view=MedecinProfilePage
                />
            </Routes>
        </Router>
        <ToastHost/>
    }
}
