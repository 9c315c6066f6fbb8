use super::*;

#[test]
fn api_url_prefixes_gateway_base() {
    assert_eq!(api_url("/appointments?page=0&size=10"), "/api/appointments?page=0&size=10");
    assert_eq!(api_url(endpoints::ADMIN_SYNC), "/api/admin/sync-keycloak");
}

#[test]
fn bearer_formats_authorization_header() {
    assert_eq!(bearer("abc.def.ghi"), "Bearer abc.def.ghi");
}

#[test]
fn to_body_uses_camel_case_wire_names() {
    let body = to_body(&RoleAssignment { role: "MEDECIN".to_owned() }).expect("body");
    assert_eq!(body, serde_json::json!({ "role": "MEDECIN" }));

    let update = AppointmentUpdate {
        status: Some(portal::types::AppointmentStatus::Cancelled),
        ..AppointmentUpdate::default()
    };
    assert_eq!(to_body(&update).expect("body"), serde_json::json!({ "status": "CANCELLED" }));
}

#[test]
fn calls_are_unavailable_without_a_browser() {
    let result = block_on_ready(list_appointments(&AppointmentFilter::default()));
    assert_eq!(result, Err(ApiError::NotAvailable));
}

/// Minimal executor for futures that complete on first poll.
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future was not immediately ready"),
    }
}
