//! Library exports for the loan approval app and its tests.
/// Application directory resolution.
pub mod app_dirs;
/// Loan application record, feature encoding, and approval decision.
pub mod application;
/// TOML settings.
pub mod config;
/// egui front end.
pub mod egui_app;
/// Tracing setup.
pub mod logging;
/// Classifier artifacts and inference.
pub mod ml;
/// Startup sequence shared by the binary and integration tests.
pub mod startup;
