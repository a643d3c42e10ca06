//! Tests for type identities, tags and keys

use std::collections::HashSet;
use tydi_domain::{Tag, TypeIdentity, TypeKey, generic};

#[test]
fn test_generic_tokens_keep_parameters() {
    let strings = generic::<Vec<String>>().identity();
    let bytes = generic::<Vec<u8>>().identity();
    assert_ne!(strings, bytes);
    assert_eq!(strings, TypeIdentity::of::<Vec<String>>());
    assert!(strings.is::<Vec<String>>());
}

#[test]
fn test_keys_from_tokens_match_typed_keys() {
    let tag = Some(Tag::from("db"));
    let factory = TypeKey::from_tokens(generic::<u16>(), generic::<Vec<String>>(), tag.clone());
    assert_eq!(factory, TypeKey::of::<u16, Vec<String>>(tag.clone()));
    assert_ne!(factory, TypeKey::of::<u16, Vec<u8>>(tag.clone()));

    let provider = TypeKey::from_tokens(generic::<()>(), generic::<Vec<String>>(), tag.clone());
    assert_eq!(provider, TypeKey::provider::<Vec<String>>(tag));
    assert!(!provider.has_argument());
}

#[test]
fn test_tags_of_different_types_differ() {
    assert_ne!(Tag::from(1i32), Tag::from(1i64));
    assert_ne!(Tag::from("1"), Tag::from(1i32));
    assert_eq!(Tag::from("db").as_str(), Some("db"));
    assert_eq!(Tag::from(7u32).downcast_ref::<u32>(), Some(&7));
}

#[test]
fn test_custom_tag_type() {
    #[derive(Debug, PartialEq, Eq, Hash)]
    enum Region {
        Eu,
        Us,
    }

    assert_eq!(Tag::new(Region::Eu), Tag::new(Region::Eu));
    assert_ne!(Tag::new(Region::Eu), Tag::new(Region::Us));
}

#[test]
fn test_keys_work_as_set_members() {
    let mut keys = HashSet::new();
    keys.insert(TypeKey::provider::<String>(Some(Tag::from("a"))));
    keys.insert(TypeKey::of::<(), String>(Some(Tag::from(String::from("a")))));
    keys.insert(TypeKey::of::<u8, String>(Some(Tag::from("a"))));
    assert_eq!(keys.len(), 2);
}

#[test]
fn test_key_components() {
    let key = TypeKey::of::<u8, String>(Some(Tag::from("a")));
    assert_eq!(key.return_type(), TypeIdentity::of::<String>());
    assert_eq!(key.argument_type(), Some(TypeIdentity::of::<u8>()));
    assert_eq!(key.tag(), Some(&Tag::from("a")));
}
