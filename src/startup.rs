//! Process startup: settings, then the classifier the UI will serve.

use std::path::Path;

use thiserror::Error;

use crate::config::{self, AppSettings, ConfigError};
use crate::egui_app::controller::LoanController;
use crate::ml::{Classifier, ModelError};

/// Errors that stop the app before the window opens.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Load settings from the app directory and build a ready controller.
pub fn prepare(cwd: &Path) -> Result<LoanController, StartupError> {
    let settings = config::load_or_default()?;
    prepare_with(&settings, cwd)
}

/// Build a controller from explicit settings.
///
/// A missing, unreadable, or incompatible artifact is returned as an error; no
/// prediction can be served without it.
pub fn prepare_with(settings: &AppSettings, cwd: &Path) -> Result<LoanController, StartupError> {
    let model_path = settings.resolved_model_path(cwd);
    tracing::info!("Loading classifier from {}", model_path.display());
    let classifier = Classifier::load(&model_path).inspect_err(|err| {
        tracing::error!("Cannot serve predictions: {err}");
    })?;
    tracing::info!("Loaded classifier {classifier}");
    Ok(LoanController::from_classifier(
        classifier,
        settings.ui.clone(),
    ))
}
