//! Property-based tests for path handling.
//!
//! Note: native.rs and normalize.rs already carry small property suites.
//! This module runs heavier cross-module properties and is only built with
//! the `property-tests` feature.

use super::native::{clean, is_absolute, rel};
use super::normalize::{join_virtual, split_path, to_virtual_path};
use super::relationship::{contains_path, validate_path_safety, validate_path_safety_legacy};
use super::windows::{is_windows_reserved_name, map_container_path, normalize_registry_path};
use crate::platform::Platform;
use proptest::prelude::*;

fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(path_component_strategy(), 0..8)
        .prop_map(|parts| format!("/{}", parts.join("/")))
}

fn relative_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("..".to_string()),
            Just(".".to_string()),
            path_component_strategy(),
        ],
        1..8,
    )
    .prop_map(|parts| parts.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Cleaned absolute paths stay absolute
    #[test]
    fn clean_preserves_absolute(path in absolute_path_strategy()) {
        prop_assert!(is_absolute(&clean(&path, Platform::Posix), Platform::Posix));
    }

    // Every descendant built by appending components is contained
    #[test]
    fn appended_components_are_contained(base in absolute_path_strategy(), depth in 0..5usize) {
        let mut child = base.clone();
        for i in 0..depth {
            child.push_str(&format!("/level{i}"));
        }
        prop_assert!(contains_path(&base, &child, Platform::Posix));
    }

    // Containment agrees with the relative path never climbing upward
    #[test]
    fn contains_matches_rel(a in absolute_path_strategy(), b in absolute_path_strategy()) {
        let relative = rel(&a, &b, Platform::Posix).unwrap();
        prop_assert_eq!(
            contains_path(&a, &b, Platform::Posix),
            !relative.starts_with("..")
        );
    }

    // Containment is reflexive
    #[test]
    fn contains_reflexive(path in absolute_path_strategy()) {
        prop_assert!(contains_path(&path, &path, Platform::Posix));
    }

    // A path accepted by the segment rule never climbs out when joined
    #[test]
    fn safe_paths_stay_inside(base in absolute_path_strategy(), path in relative_path_strategy()) {
        if validate_path_safety(&path, Platform::Posix) {
            let joined = format!("{base}/{path}");
            prop_assert!(contains_path(&base, &joined, Platform::Posix));
        }
    }

    // The legacy rule is never more permissive than the segment rule
    #[test]
    fn legacy_rule_is_stricter(path in relative_path_strategy()) {
        if validate_path_safety_legacy(&path, Platform::Posix) {
            prop_assert!(validate_path_safety(&path, Platform::Posix));
        }
    }

    // Splitting and joining a virtual path gives the path back
    #[test]
    fn split_then_join(parts in prop::collection::vec(path_component_strategy(), 2..6)) {
        let path = parts.join("/");
        let (dir, file) = split_path(&path);
        prop_assert_eq!(join_virtual(&[dir, file]), path);
    }

    // Container paths never keep a drive colon or backslash
    #[test]
    fn container_paths_are_virtual(drive in "[A-Za-z]", rest in "([\\\\/][a-z0-9]{1,8}){0,4}") {
        let mapped = map_container_path(&format!("{drive}:{rest}"));
        prop_assert!(mapped.starts_with('/'));
        prop_assert!(!mapped.contains(':'));
        prop_assert!(!mapped.contains('\\'));
        prop_assert_eq!(mapped.clone(), to_virtual_path(&mapped));
    }

    // Registry normalization never leaves a forward slash
    #[test]
    fn registry_paths_use_backslashes(path in "(HKLM|HKCU|HKCR|HKU|HKCC|SOFTWARE)([\\\\/][A-Za-z]{1,8}){0,4}") {
        let normalized = normalize_registry_path(&path);
        prop_assert!(!normalized.contains('/'));
        prop_assert_eq!(normalize_registry_path(&normalized), normalized.clone());
    }

    // Reserved names stay reserved with any extension and any case
    #[test]
    fn reserved_names_ignore_extension(
        name in "(CON|PRN|AUX|NUL|COM[1-9]|LPT[1-9])",
        ext in "[a-z]{1,4}",
        lower in any::<bool>(),
    ) {
        let name = if lower { name.to_lowercase() } else { name };
        let with_ext = format!("{name}.{ext}");
        prop_assert!(is_windows_reserved_name(&name));
        prop_assert!(is_windows_reserved_name(&with_ext));
    }
}
