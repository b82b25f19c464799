//! Bridges the form state to the classifier.

use crate::application::{LoanApplication, decide, encode};
use crate::config::UiSettings;
use crate::egui_app::state::{AboutState, PredictionView, StatusBarState, UiState};
use crate::egui_app::ui::style::StatusTone;
use crate::ml::{Classifier, Predictor};

/// Owns the loaded model and the UI state the renderer draws.
pub struct LoanController {
    pub ui: UiState,
    model: Box<dyn Predictor>,
    settings: UiSettings,
}

impl LoanController {
    pub fn new(model: Box<dyn Predictor>, about: AboutState, settings: UiSettings) -> Self {
        Self {
            ui: UiState::new(about),
            model,
            settings,
        }
    }

    /// Build a controller around a loaded classifier artifact.
    pub fn from_classifier(classifier: Classifier, settings: UiSettings) -> Self {
        let about = AboutState {
            model_kind: classifier.artifact().estimator.kind().to_string(),
            model_version: classifier.artifact().model_version.to_string(),
            model_path: classifier.source().display().to_string(),
        };
        Self::new(Box::new(classifier), about, settings)
    }

    /// Drop the previous outcome; the banner only reflects the form it was computed from.
    pub fn form_edited(&mut self) {
        if self.ui.result.take().is_some() {
            self.ui.status = StatusBarState::ready();
        }
    }

    /// Snapshot the form, encode it, and run the model.
    pub fn predict(&mut self) {
        let application: LoanApplication = self.ui.form;
        if let Err(err) = application.validate() {
            tracing::warn!("Rejected application: {err}");
            self.fail(err.to_string());
            return;
        }
        let features = encode(&application);
        let outcome = match decide(self.model.as_ref(), &features) {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::error!("Prediction failed: {err}");
                self.fail(format!("Prediction failed: {err}"));
                return;
            }
        };
        let probability = if self.settings.show_probability {
            self.model
                .positive_probability(features.as_slice())
                .unwrap_or_else(|err| {
                    tracing::warn!("Probability unavailable: {err}");
                    None
                })
        } else {
            None
        };
        tracing::info!(?outcome, features = ?features.as_slice(), "Prediction complete");
        let tone = if outcome.is_approved() {
            StatusTone::Success
        } else {
            StatusTone::Warning
        };
        self.ui.status = StatusBarState::new(tone, "Done", "Prediction complete");
        self.ui.result = Some(PredictionView {
            outcome,
            probability,
        });
    }

    fn fail(&mut self, message: String) {
        self.ui.result = None;
        self.ui.status = StatusBarState::new(StatusTone::Error, "Error", message);
    }
}
