//! Process-wide environment record tests
//! Kept in a single test so initialization order is deterministic.

use coffee_shop_common::config::{global, Environment, EnvironmentConfig};
use coffee_shop_common::ConfigurationError;

#[test]
fn test_init_once_then_stable_reads() {
    assert!(!global::is_initialized());

    let production = EnvironmentConfig::for_environment(Environment::Production);
    let installed = global::init(production.clone()).unwrap();
    assert_eq!(installed, &production);
    assert!(global::is_initialized());

    let again = global::init(EnvironmentConfig::default());
    assert!(matches!(again, Err(ConfigurationError::AlreadyInitialized)));

    let first = global::get();
    let second = global::get();
    assert!(std::ptr::eq(first, second));
    assert_eq!(first, &production);
    assert!(first.production);
}
