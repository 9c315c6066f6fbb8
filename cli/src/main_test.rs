use super::*;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["medinsight", "--base-url", "http://portal.test/"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).expect("arguments should parse")
}

#[test]
fn appointments_list_maps_flags_to_filter() {
    let cli = parse(&[
        "appointments",
        "list",
        "--status",
        "confirmed",
        "--doctor-id",
        "kc-doc",
        "--start-date",
        "2026-10-01",
        "--page",
        "2",
        "--size",
        "25",
    ]);
    let Command::Appointments(AppointmentsCommand { command: AppointmentsSubcommand::List(args) }) = cli.command else {
        panic!("expected appointments list");
    };
    let filter = args.filter();
    assert_eq!(filter.status, Some(AppointmentStatus::Confirmed));
    assert_eq!(filter.doctor_id.as_deref(), Some("kc-doc"));
    assert_eq!(filter.patient_id, None);
    assert_eq!(filter.start_date.as_deref(), Some("2026-10-01"));
    assert_eq!(filter.end_date, None);
    assert_eq!((filter.page, filter.size), (2, 25));
}

#[test]
fn appointments_list_defaults_match_portal_filter() {
    let cli = parse(&["appointments", "list"]);
    let Command::Appointments(AppointmentsCommand { command: AppointmentsSubcommand::List(args) }) = cli.command else {
        panic!("expected appointments list");
    };
    assert_eq!(args.filter(), AppointmentFilter::default());
}

#[test]
fn unknown_status_is_rejected() {
    let result = Cli::try_parse_from(["medinsight", "appointments", "list", "--status", "LOST"]);
    assert!(result.is_err());
}

#[test]
fn appointment_update_requires_a_field() {
    let cli = parse(&["appointments", "update", "apt-1"]);
    let Command::Appointments(AppointmentsCommand { command: AppointmentsSubcommand::Update(args) }) = cli.command else {
        panic!("expected appointments update");
    };
    assert!(matches!(args.update(), Err(CliError::EmptyUpdate)));
}

#[test]
fn appointment_update_carries_status_and_notes() {
    let cli = parse(&["appointments", "update", "apt-1", "--status", "COMPLETED", "--notes", "RAS"]);
    let Command::Appointments(AppointmentsCommand { command: AppointmentsSubcommand::Update(args) }) = cli.command else {
        panic!("expected appointments update");
    };
    let update = args.update().expect("update");
    assert_eq!(update.status, Some(AppointmentStatus::Completed));
    assert_eq!(update.notes.as_deref(), Some("RAS"));
    assert_eq!(update.reason, None);
}

#[test]
fn date_time_accepts_minutes_or_seconds() {
    let expected = NaiveDate::from_ymd_opt(2026, 10, 20).and_then(|d| d.and_hms_opt(9, 30, 0)).expect("date");
    assert_eq!(parse_date_time("2026-10-20T09:30"), Ok(expected));
    assert_eq!(parse_date_time("2026-10-20T09:30:00"), Ok(expected));
    assert_eq!(parse_date_time("2026-10-20 09:30"), Ok(expected));
    assert!(parse_date_time("20/10/2026").is_err());
}

#[test]
fn book_parses_slot_start() {
    let cli = parse(&[
        "book",
        "--patient-id",
        "kc-pat",
        "--doctor-id",
        "kc-doc",
        "--slot",
        "2026-10-20T10:00",
        "--reason",
        "Contrôle",
    ]);
    let Command::Book(args) = cli.command else {
        panic!("expected book");
    };
    assert_eq!(args.slot.format("%H:%M").to_string(), "10:00");
    assert_eq!(args.reason, "Contrôle");
}

#[test]
fn dossier_update_only_overrides_given_flags() {
    let cli = parse(&["dossier", "update", "kc-pat", "--allergies", "Pénicilline", "--emergency-contact-phone", "+216"]);
    let Command::Dossier(DossierCommand { command: DossierSubcommand::Update(args) }) = cli.command else {
        panic!("expected dossier update");
    };
    let base = MedicalRecordUpdate {
        blood_type: "A+".to_owned(),
        allergies: String::new(),
        chronic_conditions: Some("Asthme".to_owned()),
        medical_history: "Appendicectomie".to_owned(),
        emergency_contact_name: None,
        emergency_contact_phone: None,
    };
    let merged = args.apply(base);
    assert_eq!(merged.blood_type, "A+");
    assert_eq!(merged.allergies, "Pénicilline");
    assert_eq!(merged.chronic_conditions.as_deref(), Some("Asthme"));
    assert_eq!(merged.medical_history, "Appendicectomie");
    assert_eq!(merged.emergency_contact_phone.as_deref(), Some("+216"));
}

#[test]
fn users_role_accepts_claim_or_backend_form() {
    for raw in ["MEDECIN", "ROLE_MEDECIN", "medecin"] {
        let cli = parse(&["users", "role", "kc-1", "--role", raw]);
        let Command::Users(UsersCommand { command: UsersSubcommand::Role { role, .. } }) = cli.command else {
            panic!("expected users role");
        };
        assert_eq!(role, Role::Medecin);
    }
    assert!(Cli::try_parse_from(["medinsight", "users", "role", "kc-1", "--role", "NURSE"]).is_err());
}

#[test]
fn users_create_builds_backend_request() {
    let cli = parse(&[
        "users",
        "create",
        "--email",
        " sami@example.com ",
        "--password",
        "secret123",
        "--first-name",
        "Sami",
        "--last-name",
        "Ben Ali",
        "--role",
        "ROLE_MEDECIN",
        "--specialization",
        "Cardiologie",
        "--license-number",
        "TN-123",
    ]);
    let Command::Users(UsersCommand { command: UsersSubcommand::Create(args) }) = cli.command else {
        panic!("expected users create");
    };
    let request = args.request();
    assert_eq!(request.email, "sami@example.com");
    assert_eq!(request.role, "MEDECIN");
    assert_eq!(request.country.as_deref(), Some("Tunisie"));
    assert_eq!(request.gender.as_deref(), Some("MALE"));
    assert_eq!(request.specialization.as_deref(), Some("Cardiologie"));
}

#[test]
fn audit_path_prefers_user_then_service() {
    let cli = parse(&["audit", "list", "--user", "kc-1"]);
    let Command::Audit(AuditCommand { command: AuditSubcommand::List(args) }) = cli.command else {
        panic!("expected audit list");
    };
    assert_eq!(args.path(), endpoints::audit_user_logs("kc-1"));

    let cli = parse(&["audit", "list", "--service", "appointment-service"]);
    let Command::Audit(AuditCommand { command: AuditSubcommand::List(args) }) = cli.command else {
        panic!("expected audit list");
    };
    assert_eq!(args.path(), endpoints::audit_service_logs("appointment-service"));

    let cli = parse(&["audit", "list"]);
    let Command::Audit(AuditCommand { command: AuditSubcommand::List(args) }) = cli.command else {
        panic!("expected audit list");
    };
    assert_eq!(args.path(), endpoints::AUDIT_LOGS);
}

#[test]
fn audit_user_and_service_conflict() {
    let result = Cli::try_parse_from(["medinsight", "audit", "list", "--user", "kc-1", "--service", "mail"]);
    assert!(result.is_err());
}

#[test]
fn mail_send_rejects_bad_recipient() {
    let cli = parse(&["mail", "send", "--to", "not-an-email", "--subject", "Bonjour", "--body", "Texte"]);
    let Command::Mail(MailCommand { command: MailSubcommand::Send(args) }) = cli.command else {
        panic!("expected mail send");
    };
    assert!(matches!(args.request(), Err(CliError::Invalid { field: "to", .. })));
}

#[test]
fn api_url_goes_through_proxy_prefix() {
    let ctx = CliContext { base_url: "http://portal.test/".to_owned(), token: None };
    assert_eq!(ctx.url("/healthz"), "http://portal.test/healthz");
    assert_eq!(ctx.api_url("/appointments"), "http://portal.test/api/appointments");
}

#[test]
fn whoami_without_token_fails() {
    let ctx = CliContext { base_url: "http://portal.test".to_owned(), token: None };
    assert!(matches!(run_whoami(&ctx), Err(CliError::MissingToken)));
}

#[test]
fn audit_record_attributes_entry_to_token_user() {
    let cli = parse(&["audit", "record", "--action", "EXPORT_REPORT", "--status", "failure", "--resource-id", "r-1"]);
    let Command::Audit(AuditCommand { command: AuditSubcommand::Record(args) }) = cli.command else {
        panic!("expected audit record");
    };
    let user = SessionUser {
        id: "kc-9".to_owned(),
        keycloak_id: "kc-9".to_owned(),
        email: "admin@medinsight.tn".to_owned(),
        name: "Admin".to_owned(),
        first_name: "Admin".to_owned(),
        last_name: String::new(),
        role: "ROLE_ADMIN".to_owned(),
    };
    let entry = args.entry(&user);
    assert_eq!(entry.service_name, "medinsight-cli");
    assert_eq!(entry.user_id, "kc-9");
    assert_eq!(entry.user_email.as_deref(), Some("admin@medinsight.tn"));
    assert_eq!(entry.status, "FAILURE");
    assert_eq!(entry.resource_id.as_deref(), Some("r-1"));
}
