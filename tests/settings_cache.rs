//! Process-wide settings cache behaviour.
//!
//! Lives in its own test binary: the cache is global to the process, so no
//! other test may touch `get_settings` here.

use std::env;
use std::ptr;

use svc_template::{get_settings, LogLevel};

/// Removes every case variant of the recognised keys from the environment.
fn clear_recognised_keys() {
    let names: Vec<String> = env::vars_os()
        .filter_map(|(key, _)| key.into_string().ok())
        .filter(|key| {
            matches!(
                key.to_ascii_uppercase().as_str(),
                "LOG_LEVEL" | "HOST" | "PORT"
            )
        })
        .collect();
    for name in names {
        env::remove_var(name);
    }
}

#[test]
fn settings_are_resolved_once_per_process() {
    clear_recognised_keys();
    env::set_var("PORT", "9999");
    env::set_var("log_level", "debug");

    let first = get_settings().unwrap();
    assert_eq!(first.port, 9999);
    assert_eq!(first.log_level, LogLevel::Debug);

    // Later environment changes, even invalid ones, are not observed.
    env::set_var("PORT", "not-a-number");
    env::set_var("log_level", "error");

    let second = get_settings().unwrap();
    assert!(ptr::eq(first, second));
    assert_eq!(second.port, 9999);
    assert_eq!(second.log_level, LogLevel::Debug);

    clear_recognised_keys();
}
