//! # farmctl
//!
//! Wires the JSON file store into the farm services and exposes them on the
//! command line.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  farmctl - Dependency Injection & Wiring                        │
//! │    │                                                            │
//! │    ├── Loads: AppConfig (config.rs)                             │
//! │    ├── Opens: JsonFileStore (adapter)                           │
//! │    ├── Creates: FarmerService, CropService (usecase)            │
//! │    └── Runs: one CLI command (commands/)                        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;

pub use app::App;
pub use cli::{Cli, Commands};
pub use config::{AppConfig, ConfigError};
