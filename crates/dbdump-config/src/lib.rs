//! Configuration and file management for the dbdump console
//!
//! This crate provides:
//! - Application configuration (AppConfig) loaded from TOML
//! - Configuration file discovery (CWD, then home directory)
//! - Config and cache directory paths

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::AppConfig;
pub use config_file::load_config_file;
pub use paths::{cache_dir, config_dir};
