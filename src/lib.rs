// SPDX-License-Identifier: GPL-3.0-only

pub mod config;
pub mod core;
pub mod entities;
pub mod utils;

/// Identifier used for the config and data directories of the application.
pub const APP_ID: &str = "dev.rustydex.RustyDex";
