use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "Rendez-vous réservé");
    let b = state.push(ToastKind::Error, "Erreur");
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].kind, ToastKind::Error);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "un");
    let b = state.push(ToastKind::Info, "deux");
    state.dismiss(a);
    assert_eq!(state.items.iter().map(|t| t.id).collect::<Vec<_>>(), [b]);
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn queue_drops_oldest_past_capacity() {
    let mut state = ToastState::default();
    for i in 0..6 {
        state.info(format!("m{i}"));
    }
    assert_eq!(state.items.len(), MAX_TOASTS);
    assert_eq!(state.items[0].message, "m2");
}

#[test]
fn kind_classes_are_distinct() {
    assert_eq!(ToastKind::Success.class(), "toast toast--success");
    assert_ne!(ToastKind::Error.class(), ToastKind::Info.class());
}

#[test]
fn api_error_shows_gateway_message_but_skips_not_found() {
    let mut state = ToastState::default();
    state.api_error(&ApiError::from_status(500, r#"{"message":"Service rendez-vous indisponible"}"#));
    state.api_error(&ApiError::from_status(404, r#"{"message":"Dossier introuvable"}"#));
    state.api_error(&ApiError::Network("connection refused".to_owned()));
    let messages: Vec<_> = state.items.iter().map(|t| (t.kind, t.message.as_str())).collect();
    assert_eq!(
        messages,
        [(ToastKind::Error, "Service rendez-vous indisponible"), (ToastKind::Error, "Impossible de joindre le serveur")]
    );
}
