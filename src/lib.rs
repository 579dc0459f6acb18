//! # svc-template
//!
//! Starting point for a network service.
//!
//! ## Features
//!
//! - [`settings`]: typed settings resolved once from the environment and an
//!   optional `.env` override file
//! - [`testing`]: condition polling for deterministic async tests
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use svc_template::get_settings;
//!
//! let settings = get_settings().unwrap();
//! println!("listening on {}", settings.bind_address());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod settings;
pub mod testing;

pub use crate::cli::Cli;
pub use crate::settings::{get_settings, LogLevel, Settings, SettingsError};

/// The current version of svc-template.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
