//! Shared state types for the egui UI.

use crate::application::{LoanApplication, Outcome};
use crate::egui_app::ui::style::{self, StatusTone};
use egui::Color32;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    /// Current widget values; snapshotted when Predict is pressed.
    pub form: LoanApplication,
    /// Result of the last prediction, cleared whenever the form changes.
    pub result: Option<PredictionView>,
    pub status: StatusBarState,
    pub about: AboutState,
}

impl UiState {
    pub fn new(about: AboutState) -> Self {
        Self {
            form: LoanApplication::default(),
            result: None,
            status: StatusBarState::ready(),
            about,
        }
    }
}

/// Outcome banner content.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionView {
    pub outcome: Outcome,
    /// Approval probability, shown only when enabled in settings.
    pub probability: Option<f64>,
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    pub text: String,
    pub badge_label: String,
    pub badge_color: Color32,
}

impl StatusBarState {
    /// Status shown after startup, before any prediction.
    pub fn ready() -> Self {
        Self::new(StatusTone::Idle, "Ready", "Fill in the applicant details and press Predict")
    }

    pub fn new(tone: StatusTone, badge: &str, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            badge_label: badge.to_string(),
            badge_color: style::status_badge_color(tone),
        }
    }
}

/// Description of the loaded model for the about panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AboutState {
    pub model_kind: String,
    pub model_version: String,
    pub model_path: String,
}
