#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use super::*;
use resolv_ir::ErrorKind;

// cargo sets CARGO_MANIFEST_DIR for test processes; nothing here mutates the environment.

#[test]
fn reads_set_variable() {
    assert_eq!(
        EnvResolver.resolve("CARGO_MANIFEST_DIR").unwrap(),
        env!("CARGO_MANIFEST_DIR")
    );
}

#[test]
fn name_is_trimmed() {
    assert_eq!(
        EnvResolver.resolve("  CARGO_MANIFEST_DIR\t").unwrap(),
        env!("CARGO_MANIFEST_DIR")
    );
}

#[test]
fn empty_name_is_bad_path() {
    assert_eq!(EnvResolver.resolve("").unwrap_err().kind(), ErrorKind::BadPath);
    assert_eq!(EnvResolver.resolve("   ").unwrap_err().kind(), ErrorKind::BadPath);
}

#[test]
fn name_with_equals_is_bad_path() {
    assert_eq!(EnvResolver.resolve("A=B").unwrap_err().kind(), ErrorKind::BadPath);
}

#[test]
fn unset_is_not_found() {
    let err = EnvResolver
        .resolve("RESOLV_TEST_SURELY_UNSET_VARIABLE")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(
        err.to_string(),
        "not found: env \"RESOLV_TEST_SURELY_UNSET_VARIABLE\""
    );
}
