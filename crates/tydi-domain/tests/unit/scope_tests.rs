//! Tests for scope policies and binding identifiers

use tydi_domain::{BindingId, ScopePolicy};

#[test]
fn test_scope_policy_serde_is_lowercase() {
    let json = serde_json::to_string(&ScopePolicy::Contextual).unwrap();
    assert_eq!(json, "\"contextual\"");

    let parsed: ScopePolicy = serde_json::from_str("\"singleton\"").unwrap();
    assert_eq!(parsed, ScopePolicy::Singleton);
    assert!(serde_json::from_str::<ScopePolicy>("\"Singleton\"").is_err());
}

#[test]
fn test_only_transient_is_uncached() {
    assert!(!ScopePolicy::Transient.is_cached());
    assert!(ScopePolicy::Contextual.is_cached());
    assert!(ScopePolicy::Singleton.is_cached());
    assert_eq!(ScopePolicy::default(), ScopePolicy::Transient);
}

#[test]
fn test_binding_id_display() {
    let id = BindingId::new(42);
    assert_eq!(id.value(), 42);
    assert_eq!(id.to_string(), "#42");
}
