use serde_json::json;

use super::*;

#[test]
fn diagnosis_and_treatment_fields_are_extracted() {
    let diag = json!({ "diagnosis": "Grippe", "confidence": 0.874 });
    assert_eq!(diagnosis_text(&diag).as_deref(), Some("Grippe"));
    assert_eq!(confidence_percent(&diag).as_deref(), Some("87%"));

    let treat = json!({ "treatment": "Repos et hydratation" });
    assert_eq!(treatment_text(&treat).as_deref(), Some("Repos et hydratation"));
}

#[test]
fn blank_or_missing_fields_are_none() {
    let value = json!({ "diagnosis": "  ", "confidence": "high" });
    assert_eq!(diagnosis_text(&value), None);
    assert_eq!(confidence_percent(&value), None);
    assert_eq!(treatment_text(&value), None);
}

#[test]
fn top_predictions_are_sorted_and_limited() {
    let value = json!({
        "predictions": {
            "common_cold": 0.2,
            "influenza": 0.6,
            "covid_19": 0.15,
            "allergy": 0.05
        }
    });
    let top = top_predictions(&value, 3);
    let names: Vec<&str> = top.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["influenza", "common cold", "covid 19"]);
}

#[test]
fn top_predictions_without_map_is_empty() {
    assert!(top_predictions(&json!({ "diagnosis": "x" }), 3).is_empty());
}
