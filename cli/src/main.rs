#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use chrono::{Local, NaiveDate, NaiveDateTime, Utc};
use clap::{Args, Parser, Subcommand};
use portal::booking::{BookingError, BookingWizard};
use portal::endpoints;
use portal::error::message_from_body;
use portal::filters;
use portal::types::{
    AdminUserCreationRequest, AppointmentFilter, AppointmentStatus, AppointmentUpdate, AuditLog, AuditLogRequest, Dossier,
    MailRequest, MedicalRecordUpdate, Page, PasswordLogin, Prescription, RoleAssignment, TimeSlot, TokenResponse,
    UserResponse,
};
use portal::validation::{FieldErrors, is_valid_email, prune_admin_user, validate_admin_user};
use portal::{Role, Session, SessionError, SessionUser};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::{Value, json};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing access token; run `medinsight login` and pass --token or set MEDINSIGHT_TOKEN")]
    MissingToken,
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("server returned HTTP {status}: {message}")]
    ServerError { status: u16, message: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("invalid token: {0}")]
    Session(#[from] SessionError),
    #[error("booking rejected: {0}")]
    Booking(#[from] BookingError),
    #[error("invalid {field}: {message}")]
    Invalid { field: &'static str, message: &'static str },
    #[error("no slot starting at {0} for this doctor")]
    SlotNotFound(NaiveDateTime),
    #[error("nothing to update")]
    EmptyUpdate,
}

impl From<FieldErrors> for CliError {
    fn from(errors: FieldErrors) -> Self {
        let first = errors.0.first();
        Self::Invalid {
            field: first.map_or("input", |e| e.field),
            message: first.map_or("invalide", |e| e.message),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "medinsight", about = "MedInsight portal and gateway CLI")]
struct Cli {
    #[arg(long, env = "MEDINSIGHT_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[arg(long, env = "MEDINSIGHT_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
    token: Option<String>,
}

impl CliContext {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn api_url(&self, path: &str) -> String {
        self.url(&format!("{}{path}", endpoints::API_BASE))
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the portal server is up.
    Ping,
    /// Exchange credentials for an access token and print it.
    Login(LoginArgs),
    /// Decode the current token without contacting the server.
    Whoami,
    Appointments(AppointmentsCommand),
    /// List a doctor's available slots for one day.
    Slots(SlotsArgs),
    /// Book an appointment through the booking wizard.
    Book(BookArgs),
    Dossier(DossierCommand),
    /// List a patient's prescriptions.
    Prescriptions(PrescriptionsArgs),
    Users(UsersCommand),
    Audit(AuditCommand),
    Mail(MailCommand),
}

#[derive(Args, Debug)]
struct LoginArgs {
    #[arg(long)]
    username: String,
    #[arg(long)]
    password: String,
}

#[derive(Args, Debug)]
struct AppointmentsCommand {
    #[command(subcommand)]
    command: AppointmentsSubcommand,
}

#[derive(Subcommand, Debug)]
enum AppointmentsSubcommand {
    List(AppointmentsListArgs),
    Update(AppointmentUpdateArgs),
}

#[derive(Args, Debug)]
struct AppointmentsListArgs {
    #[arg(long, value_parser = parse_status)]
    status: Option<AppointmentStatus>,
    #[arg(long)]
    patient_id: Option<String>,
    #[arg(long)]
    doctor_id: Option<String>,
    #[arg(long, help = "Start date, YYYY-MM-DD")]
    start_date: Option<NaiveDate>,
    #[arg(long, help = "End date, YYYY-MM-DD")]
    end_date: Option<NaiveDate>,
    #[arg(long, default_value_t = 0)]
    page: u32,
    #[arg(long, default_value_t = 10)]
    size: u32,
}

impl AppointmentsListArgs {
    fn filter(&self) -> AppointmentFilter {
        AppointmentFilter {
            status: self.status,
            patient_id: self.patient_id.clone(),
            doctor_id: self.doctor_id.clone(),
            start_date: self.start_date.map(|d| d.format("%Y-%m-%d").to_string()),
            end_date: self.end_date.map(|d| d.format("%Y-%m-%d").to_string()),
            page: self.page,
            size: self.size,
        }
    }
}

#[derive(Args, Debug)]
struct AppointmentUpdateArgs {
    id: String,
    #[arg(long, value_parser = parse_status)]
    status: Option<AppointmentStatus>,
    #[arg(long)]
    reason: Option<String>,
    #[arg(long)]
    notes: Option<String>,
    #[arg(long, value_parser = parse_date_time, help = "New start, YYYY-MM-DDTHH:MM")]
    date_time: Option<NaiveDateTime>,
}

impl AppointmentUpdateArgs {
    fn update(&self) -> Result<AppointmentUpdate, CliError> {
        let update = AppointmentUpdate {
            status: self.status,
            reason: self.reason.clone(),
            notes: self.notes.clone(),
            appointment_date_time: self.date_time,
        };
        if update == AppointmentUpdate::default() {
            return Err(CliError::EmptyUpdate);
        }
        Ok(update)
    }
}

#[derive(Args, Debug)]
struct SlotsArgs {
    #[arg(long)]
    doctor_id: String,
    #[arg(long, help = "Day to list, YYYY-MM-DD")]
    date: NaiveDate,
    #[arg(long, default_value_t = false, help = "Include booked and blocked slots")]
    all: bool,
}

#[derive(Args, Debug)]
struct BookArgs {
    #[arg(long)]
    patient_id: String,
    #[arg(long)]
    doctor_id: String,
    #[arg(long, value_parser = parse_date_time, help = "Slot start, YYYY-MM-DDTHH:MM")]
    slot: NaiveDateTime,
    #[arg(long)]
    reason: String,
}

#[derive(Args, Debug)]
struct DossierCommand {
    #[command(subcommand)]
    command: DossierSubcommand,
}

#[derive(Subcommand, Debug)]
enum DossierSubcommand {
    Get { patient_id: String },
    Update(DossierUpdateArgs),
}

#[derive(Args, Debug)]
struct DossierUpdateArgs {
    patient_id: String,
    #[arg(long)]
    blood_type: Option<String>,
    #[arg(long)]
    allergies: Option<String>,
    #[arg(long)]
    chronic_conditions: Option<String>,
    #[arg(long)]
    medical_history: Option<String>,
    #[arg(long)]
    emergency_contact_name: Option<String>,
    #[arg(long)]
    emergency_contact_phone: Option<String>,
}

impl DossierUpdateArgs {
    /// Overlay the supplied flags on the stored record.
    fn apply(&self, mut base: MedicalRecordUpdate) -> MedicalRecordUpdate {
        if let Some(value) = &self.blood_type {
            base.blood_type.clone_from(value);
        }
        if let Some(value) = &self.allergies {
            base.allergies.clone_from(value);
        }
        if let Some(value) = &self.medical_history {
            base.medical_history.clone_from(value);
        }
        if self.chronic_conditions.is_some() {
            base.chronic_conditions.clone_from(&self.chronic_conditions);
        }
        if self.emergency_contact_name.is_some() {
            base.emergency_contact_name.clone_from(&self.emergency_contact_name);
        }
        if self.emergency_contact_phone.is_some() {
            base.emergency_contact_phone.clone_from(&self.emergency_contact_phone);
        }
        base
    }
}

#[derive(Args, Debug)]
struct PrescriptionsArgs {
    #[arg(long)]
    patient_id: String,
    #[arg(long, help = "Filter by medication name")]
    search: Option<String>,
    #[arg(long, default_value_t = 0)]
    page: u32,
    #[arg(long, default_value_t = 100)]
    size: u32,
}

#[derive(Args, Debug)]
struct UsersCommand {
    #[command(subcommand)]
    command: UsersSubcommand,
}

#[derive(Subcommand, Debug)]
enum UsersSubcommand {
    List(UsersListArgs),
    Create(UserCreateArgs),
    Role {
        keycloak_id: String,
        #[arg(long, value_parser = parse_role)]
        role: Role,
    },
    Delete {
        keycloak_id: String,
    },
    /// Pull identity-provider accounts into the user directory.
    Sync,
}

#[derive(Args, Debug)]
struct UsersListArgs {
    #[arg(long, default_value_t = 0)]
    page: u32,
    #[arg(long, default_value_t = 10)]
    size: u32,
    #[arg(long)]
    search: Option<String>,
    #[arg(long, value_parser = parse_role)]
    role: Option<Role>,
}

#[derive(Args, Debug)]
struct UserCreateArgs {
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long, value_parser = parse_role, default_value = "PATIENT")]
    role: Role,
    #[arg(long)]
    phone_number: Option<String>,
    #[arg(long)]
    address_line: Option<String>,
    #[arg(long)]
    city: Option<String>,
    #[arg(long, default_value = "Tunisie")]
    country: String,
    #[arg(long, help = "Patient birth date, YYYY-MM-DD")]
    date_of_birth: Option<NaiveDate>,
    #[arg(long, default_value = "MALE")]
    gender: String,
    #[arg(long)]
    blood_type: Option<String>,
    #[arg(long)]
    emergency_contact_name: Option<String>,
    #[arg(long)]
    emergency_contact_phone: Option<String>,
    #[arg(long)]
    insurance_provider: Option<String>,
    #[arg(long)]
    insurance_number: Option<String>,
    #[arg(long)]
    specialization: Option<String>,
    #[arg(long)]
    license_number: Option<String>,
    #[arg(long)]
    years_of_experience: Option<u32>,
    #[arg(long)]
    consultation_fee: Option<f64>,
}

impl UserCreateArgs {
    fn request(&self) -> AdminUserCreationRequest {
        AdminUserCreationRequest {
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            phone_number: self.phone_number.clone(),
            address_line: self.address_line.clone(),
            city: self.city.clone(),
            country: Some(self.country.clone()),
            role: self.role.backend_name().to_owned(),
            date_of_birth: self.date_of_birth.map(|d| d.format("%Y-%m-%d").to_string()),
            gender: Some(self.gender.to_uppercase()),
            blood_type: self.blood_type.clone(),
            emergency_contact_name: self.emergency_contact_name.clone(),
            emergency_contact_phone: self.emergency_contact_phone.clone(),
            insurance_provider: self.insurance_provider.clone(),
            insurance_number: self.insurance_number.clone(),
            specialization: self.specialization.clone(),
            license_number: self.license_number.clone(),
            years_of_experience: self.years_of_experience,
            consultation_fee: self.consultation_fee,
        }
    }
}

#[derive(Args, Debug)]
struct AuditCommand {
    #[command(subcommand)]
    command: AuditSubcommand,
}

#[derive(Subcommand, Debug)]
enum AuditSubcommand {
    List(AuditListArgs),
    /// Record an entry attributed to the token's user.
    Record(AuditRecordArgs),
    /// Ask the audit service to generate sample entries.
    Seed,
}

#[derive(Args, Debug)]
struct AuditRecordArgs {
    #[arg(long)]
    action: String,
    #[arg(long, default_value = "medinsight-cli")]
    service: String,
    #[arg(long, default_value = "SUCCESS")]
    status: String,
    #[arg(long)]
    details: Option<String>,
    #[arg(long)]
    resource_id: Option<String>,
}

impl AuditRecordArgs {
    fn entry(&self, user: &SessionUser) -> AuditLogRequest {
        AuditLogRequest {
            service_name: self.service.clone(),
            action: self.action.clone(),
            user_id: user.keycloak_id.clone(),
            user_email: Some(user.email.clone()).filter(|e| !e.is_empty()),
            user_role: Some(user.role.clone()),
            status: self.status.to_uppercase(),
            details: self.details.clone(),
            resource_id: self.resource_id.clone(),
            ip_address: None,
        }
    }
}

#[derive(Args, Debug)]
struct AuditListArgs {
    #[arg(long, conflicts_with = "service", help = "Only entries for this user id")]
    user: Option<String>,
    #[arg(long, help = "Only entries emitted by this service")]
    service: Option<String>,
    #[arg(long)]
    search: Option<String>,
    #[arg(long, default_value_t = false, help = "Only failed actions")]
    failed: bool,
}

impl AuditListArgs {
    fn path(&self) -> String {
        match (&self.user, &self.service) {
            (Some(user), _) => endpoints::audit_user_logs(user),
            (None, Some(service)) => endpoints::audit_service_logs(service),
            (None, None) => endpoints::AUDIT_LOGS.to_owned(),
        }
    }

    fn select(&self, logs: Vec<AuditLog>) -> Vec<AuditLog> {
        let search = self.search.as_deref().unwrap_or_default();
        filters::filter_audit_logs(&logs, search, filters::ALL)
            .into_iter()
            .filter(|log| !self.failed || !log.status.eq_ignore_ascii_case("SUCCESS"))
            .cloned()
            .collect()
    }
}

#[derive(Args, Debug)]
struct MailCommand {
    #[command(subcommand)]
    command: MailSubcommand,
}

#[derive(Subcommand, Debug)]
enum MailSubcommand {
    Send(MailSendArgs),
}

#[derive(Args, Debug)]
struct MailSendArgs {
    #[arg(long)]
    to: String,
    #[arg(long)]
    subject: String,
    #[arg(long)]
    body: String,
    #[arg(long, default_value_t = false)]
    html: bool,
}

impl MailSendArgs {
    fn request(&self) -> Result<MailRequest, CliError> {
        if !is_valid_email(&self.to) {
            return Err(CliError::Invalid { field: "to", message: "Adresse email invalide" });
        }
        Ok(MailRequest {
            to: self.to.trim().to_owned(),
            subject: self.subject.clone(),
            body: self.body.clone(),
            is_html: self.html,
        })
    }
}

fn parse_status(raw: &str) -> Result<AppointmentStatus, String> {
    AppointmentStatus::parse(raw).ok_or_else(|| format!("unknown appointment status `{raw}`"))
}

fn parse_role(raw: &str) -> Result<Role, String> {
    Role::parse(raw).ok_or_else(|| format!("unknown role `{raw}`"))
}

fn parse_date_time(raw: &str) -> Result<NaiveDateTime, String> {
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw.trim(), fmt).ok())
        .ok_or_else(|| format!("expected YYYY-MM-DDTHH:MM, got `{raw}`"))
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = CliContext { base_url: cli.base_url, token: cli.token };

    match cli.command {
        Command::Ping => run_ping(&ctx).await,
        Command::Login(args) => run_login(&ctx, args).await,
        Command::Whoami => run_whoami(&ctx),
        Command::Appointments(cmd) => run_appointments(&ctx, cmd).await,
        Command::Slots(args) => run_slots(&ctx, args).await,
        Command::Book(args) => run_book(&ctx, args).await,
        Command::Dossier(cmd) => run_dossier(&ctx, cmd).await,
        Command::Prescriptions(args) => run_prescriptions(&ctx, args).await,
        Command::Users(cmd) => run_users(&ctx, cmd).await,
        Command::Audit(cmd) => run_audit(&ctx, cmd).await,
        Command::Mail(cmd) => run_mail(&ctx, cmd).await,
    }
}

async fn run_ping(cli: &CliContext) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let response = client.get(cli.url("/healthz")).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), message: "health check failed".to_owned() });
    }
    println!("ok");
    Ok(())
}

async fn run_login(cli: &CliContext, args: LoginArgs) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let body = PasswordLogin { username: args.username, password: args.password };
    let response = client.post(cli.url(endpoints::PORTAL_TOKEN)).json(&body).send().await?;
    let status = response.status();
    let text = response.text().await?;
    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), message: message_from_body(status.as_u16(), &text) });
    }
    let token = serde_json::from_str::<TokenResponse>(&text)?;
    println!("{}", token.access_token);
    Ok(())
}

fn run_whoami(cli: &CliContext) -> Result<(), CliError> {
    let token = cli.token.as_deref().ok_or(CliError::MissingToken)?;
    let session = Session::from_token(token)?;
    let user = &session.user;
    print_json(&json!({
        "id": user.keycloak_id,
        "email": user.email,
        "name": user.display_name(),
        "role": user.role,
        "landingRoute": session.landing_route(),
        "expiresAt": session.expires_at.map(|at| at.to_rfc3339()),
        "expired": session.is_expired(Utc::now()),
    }))
}

async fn run_appointments(cli: &CliContext, cmd: AppointmentsCommand) -> Result<(), CliError> {
    match cmd.command {
        AppointmentsSubcommand::List(args) => {
            let path = endpoints::appointments(&args.filter());
            let json = api_request(cli, reqwest::Method::GET, &path, None).await?;
            print_json(&json)
        }
        AppointmentsSubcommand::Update(args) => {
            let body = serde_json::to_value(args.update()?)?;
            let path = endpoints::appointment(&args.id);
            let json = api_request(cli, reqwest::Method::PUT, &path, Some(body)).await?;
            print_json(&json)
        }
    }
}

async fn fetch_slots(cli: &CliContext, doctor_id: &str, date: NaiveDate) -> Result<Vec<TimeSlot>, CliError> {
    let path = endpoints::available_slots(doctor_id, date);
    let json = api_request(cli, reqwest::Method::GET, &path, None).await?;
    Ok(serde_json::from_value(json)?)
}

async fn run_slots(cli: &CliContext, args: SlotsArgs) -> Result<(), CliError> {
    let slots = fetch_slots(cli, &args.doctor_id, args.date).await?;
    let shown: Vec<&TimeSlot> = slots.iter().filter(|s| args.all || s.is_bookable()).collect();
    print_json(&serde_json::to_value(shown)?)
}

async fn run_book(cli: &CliContext, args: BookArgs) -> Result<(), CliError> {
    let now = Local::now().naive_local();
    let mut wizard = BookingWizard::new(now.date());

    wizard.select_doctor(&args.doctor_id, &args.doctor_id)?;
    wizard.next()?;
    wizard.select_date(args.slot.date())?;

    let slots = fetch_slots(cli, &args.doctor_id, args.slot.date()).await?;
    let slot = slots.iter().find(|s| s.start_time == args.slot).ok_or(CliError::SlotNotFound(args.slot))?;
    wizard.select_slot(slot, now)?;
    wizard.next()?;

    wizard.set_reason(&args.reason)?;
    wizard.next()?;

    let request = wizard.request(&args.patient_id)?;
    let json = api_request(cli, reqwest::Method::POST, endpoints::APPOINTMENTS, Some(serde_json::to_value(&request)?))
        .await?;
    wizard.mark_submitted()?;
    print_json(&json)
}

async fn run_dossier(cli: &CliContext, cmd: DossierCommand) -> Result<(), CliError> {
    match cmd.command {
        DossierSubcommand::Get { patient_id } => {
            let json = api_request(cli, reqwest::Method::GET, &endpoints::dossier(&patient_id), None).await?;
            print_json(&json)
        }
        DossierSubcommand::Update(args) => {
            let current = api_request(cli, reqwest::Method::GET, &endpoints::dossier(&args.patient_id), None).await?;
            let dossier = serde_json::from_value::<Dossier>(current)?;
            let base = dossier.medical_record.as_ref().map(MedicalRecordUpdate::from_record).unwrap_or_default();
            let body = serde_json::to_value(args.apply(base))?;
            let path = endpoints::medical_record(&args.patient_id);
            let json = api_request(cli, reqwest::Method::PUT, &path, Some(body)).await?;
            print_json(&json)
        }
    }
}

async fn run_prescriptions(cli: &CliContext, args: PrescriptionsArgs) -> Result<(), CliError> {
    let path = endpoints::patient_prescriptions(&args.patient_id, args.page, args.size);
    let json = api_request(cli, reqwest::Method::GET, &path, None).await?;
    let Some(search) = args.search.as_deref() else {
        return print_json(&json);
    };
    let page = serde_json::from_value::<Page<Prescription>>(json)?;
    let matched = filters::filter_prescriptions(&page.content, search);
    print_json(&serde_json::to_value(matched)?)
}

async fn run_users(cli: &CliContext, cmd: UsersCommand) -> Result<(), CliError> {
    match cmd.command {
        UsersSubcommand::List(args) => {
            let path = endpoints::admin_users(args.page, args.size);
            let json = api_request(cli, reqwest::Method::GET, &path, None).await?;
            if args.search.is_none() && args.role.is_none() {
                return print_json(&json);
            }
            let page = serde_json::from_value::<Page<UserResponse>>(json)?;
            let role = args.role.map_or(filters::ALL, Role::backend_name);
            let matched = filters::filter_users(&page.content, args.search.as_deref().unwrap_or_default(), role);
            print_json(&serde_json::to_value(matched)?)
        }
        UsersSubcommand::Create(args) => {
            let request = args.request();
            validate_admin_user(&request)?;
            let body = serde_json::to_value(prune_admin_user(request))?;
            let json = api_request(cli, reqwest::Method::POST, endpoints::ADMIN_USERS, Some(body)).await?;
            print_json(&json)
        }
        UsersSubcommand::Role { keycloak_id, role } => {
            let body = serde_json::to_value(RoleAssignment { role: role.backend_name().to_owned() })?;
            let path = endpoints::admin_user_roles(&keycloak_id);
            let json = api_request(cli, reqwest::Method::PUT, &path, Some(body)).await?;
            print_json(&json)
        }
        UsersSubcommand::Delete { keycloak_id } => {
            let json = api_request(cli, reqwest::Method::DELETE, &endpoints::admin_user(&keycloak_id), None).await?;
            print_json(&json)
        }
        UsersSubcommand::Sync => {
            let json = api_request(cli, reqwest::Method::POST, endpoints::ADMIN_SYNC, None).await?;
            print_json(&json)
        }
    }
}

async fn run_audit(cli: &CliContext, cmd: AuditCommand) -> Result<(), CliError> {
    match cmd.command {
        AuditSubcommand::List(args) => {
            let json = api_request(cli, reqwest::Method::GET, &args.path(), None).await?;
            let logs = serde_json::from_value::<Vec<AuditLog>>(json)?;
            print_json(&serde_json::to_value(args.select(logs))?)
        }
        AuditSubcommand::Record(args) => {
            let token = cli.token.as_deref().ok_or(CliError::MissingToken)?;
            let session = Session::from_token(token)?;
            let body = serde_json::to_value(args.entry(&session.user))?;
            let json = api_request(cli, reqwest::Method::POST, endpoints::AUDIT_LOGS, Some(body)).await?;
            print_json(&json)
        }
        AuditSubcommand::Seed => {
            let json = api_request(cli, reqwest::Method::POST, endpoints::AUDIT_SEED, None).await?;
            print_json(&json)
        }
    }
}

async fn run_mail(cli: &CliContext, cmd: MailCommand) -> Result<(), CliError> {
    match cmd.command {
        MailSubcommand::Send(args) => {
            let body = serde_json::to_value(args.request()?)?;
            let json = api_request(cli, reqwest::Method::POST, endpoints::MAIL_SEND, Some(body)).await?;
            print_json(&json)
        }
    }
}

/// Call the gateway through the portal proxy with the bearer token.
async fn api_request(
    cli: &CliContext,
    method: reqwest::Method,
    path: &str,
    body: Option<Value>,
) -> Result<Value, CliError> {
    let token = cli.token.as_deref().ok_or(CliError::MissingToken)?;

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {}", token.trim()))?);

    let client = reqwest::Client::builder().default_headers(headers).build()?;
    let request = client.request(method, cli.api_url(path));
    let request = if let Some(json) = body { request.json(&json) } else { request };

    let response = request.send().await?;
    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), message: message_from_body(status.as_u16(), &text) });
    }

    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str::<Value>(&text).unwrap_or(Value::String(text)))
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
