//! Tests for the Profile model
//!
//! A profile validates name, role, skills and location (in that order) when it
//! is built, and renders a pipe-delimited summary.

use my_profile::ValidationError;
use my_profile::core::models::Profile;

use crate::common::ada;

// =============================================================================
// Construction
// =============================================================================

#[test]
fn builds_with_defaults() {
    let profile = Profile::builder("Dev", "Backend").build().unwrap();
    assert_eq!(profile.name(), "Dev");
    assert_eq!(profile.role(), "Backend");
    assert!(profile.skills().is_empty());
    assert_eq!(profile.location(), None);
}

#[test]
fn new_normalizes_skills() {
    let profile = Profile::new("Dev", "Backend", ["Rust", " rust", "Go"], None).unwrap();
    assert_eq!(profile.skills(), ["Go", "Rust"]);
}

#[test]
fn rejects_blank_name() {
    let err = Profile::builder("   ", "Desarrollador").build().unwrap_err();
    assert_eq!(err, ValidationError::EmptyName);
}

#[test]
fn rejects_blank_role() {
    let err = Profile::builder("Dev", " ").build().unwrap_err();
    assert_eq!(err, ValidationError::EmptyRole);
}

#[test]
fn rejects_blank_location() {
    let err = Profile::builder("Dev", "Backend").location("   ").build().unwrap_err();
    assert_eq!(err, ValidationError::EmptyLocation);
}

#[test]
fn rejects_empty_location() {
    let err = Profile::new("Dev", "Backend", Vec::<String>::new(), Some(String::new())).unwrap_err();
    assert_eq!(err, ValidationError::EmptyLocation);
}

#[test]
fn propagates_skill_error_unchanged() {
    let err = Profile::builder("Dev", "Backend").skills(["Rust", ""]).build().unwrap_err();
    assert_eq!(err, ValidationError::BlankSkill { index: 1 });
}

#[test]
fn role_checked_before_skills() {
    let err = Profile::builder("Dev", "").skill(" ").build().unwrap_err();
    assert_eq!(err, ValidationError::EmptyRole);
}

// =============================================================================
// Summary
// =============================================================================

#[test]
fn summary_includes_all_fields() {
    let summary = ada().summary();

    assert!(summary.contains("Ada Lovelace"));
    assert!(summary.contains("Pionera de la programación"));
    assert!(summary.contains("Location: Londres, Reino Unido"));
    assert!(summary.contains("Skills: Algoritmos, Documentación, Matemática"));
}

#[test]
fn summary_exact_layout() {
    assert_eq!(
        ada().summary(),
        "Ada Lovelace — Pionera de la programación | Location: Londres, Reino Unido \
         | Skills: Algoritmos, Documentación, Matemática"
    );
}

#[test]
fn summary_name_and_role_only() {
    let profile = Profile::builder("Dev", "Backend").build().unwrap();
    assert_eq!(profile.summary(), "Dev — Backend");
}

#[test]
fn summary_skills_without_location() {
    let profile = Profile::builder("Dev", "Backend").skills(["SQL", "Go"]).build().unwrap();
    assert_eq!(profile.summary(), "Dev — Backend | Skills: Go, SQL");
}

#[test]
fn summary_keeps_stored_location() {
    let profile = Profile::builder("Dev", "Backend").location(" Lima ").build().unwrap();
    assert_eq!(profile.summary(), "Dev — Backend | Location:  Lima ");
}

#[test]
fn summary_is_repeatable() {
    let profile = ada();
    assert_eq!(profile.summary(), profile.summary());
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn serializes_to_json() {
    let json = serde_json::to_value(ada()).unwrap();
    assert_eq!(json["name"], "Ada Lovelace");
    assert_eq!(json["skills"][0], "Algoritmos");
    assert_eq!(json["location"], "Londres, Reino Unido");
}

#[test]
fn json_omits_absent_location() {
    let profile = Profile::builder("Dev", "Backend").build().unwrap();
    let json = serde_json::to_string(&profile).unwrap();
    assert!(!json.contains("location"));
}

#[test]
fn profile_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Profile>();
}
