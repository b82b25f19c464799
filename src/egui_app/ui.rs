//! egui renderer for the loan approval form.

mod form;
pub mod style;

use crate::egui_app::controller::LoanController;
use crate::egui_app::state::PredictionView;
use eframe::egui::{self, Color32, CornerRadius, Frame, Margin, RichText, Ui};

/// Window title, also used as the page heading.
pub const APP_TITLE: &str = "Loan Approval Prediction System";
/// Smallest usable window size.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(760.0, 560.0);

/// Renders the egui UI using the controller state.
pub struct EguiApp {
    controller: LoanController,
    visuals_set: bool,
}

impl EguiApp {
    pub fn new(controller: LoanController) -> Self {
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_about_panel(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        let about = &self.controller.ui.about;
        egui::SidePanel::left("about_panel")
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.heading("About");
                ui.add_space(6.0);
                ui.label(
                    RichText::new("Predicts loan approval from applicant details.")
                        .color(palette.text_muted),
                );
                ui.separator();
                ui.label(RichText::new("Model").strong());
                ui.label(format!("Kind: {}", about.model_kind));
                ui.label(format!("Version: {}", about.model_version));
                ui.label(
                    RichText::new(&about.model_path)
                        .small()
                        .color(palette.text_muted),
                )
                .on_hover_text("Classifier artifact loaded at startup");
            });
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .inner_margin(Margin::same(6)),
            )
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(18.0, 18.0), egui::Sense::hover());
                    ui.painter()
                        .circle_filled(rect.center(), 9.0, status.badge_color);
                    ui.add_space(4.0);
                    ui.label(RichText::new(&status.badge_label).color(Color32::WHITE));
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(Color32::WHITE));
                });
                ui.separator();
                ui.label(
                    RichText::new("Loan Approval Prediction | Machine Learning Project")
                        .italics()
                        .color(palette.text_muted),
                );
            });
    }

    fn render_center(&mut self, ui: &mut Ui) {
        ui.heading(RichText::new(APP_TITLE).size(28.0));
        ui.label(
            RichText::new("Predict whether a loan will be approved based on applicant details")
                .size(16.0),
        );
        ui.add_space(16.0);

        if form::render_form(ui, &mut self.controller.ui.form) {
            self.controller.form_edited();
        }

        ui.add_space(16.0);
        if predict_button(ui) {
            self.controller.predict();
        }
        ui.add_space(12.0);
        if let Some(result) = &self.controller.ui.result {
            render_banner(ui, result);
        }
    }
}

fn predict_button(ui: &mut Ui) -> bool {
    let button = egui::Button::new(
        RichText::new("Predict Loan Approval")
            .size(18.0)
            .color(Color32::WHITE),
    )
    .fill(style::palette().accent_blue)
    .corner_radius(CornerRadius::same(10))
    .min_size(egui::vec2(220.0, 40.0));
    ui.add(button).clicked()
}

fn render_banner(ui: &mut Ui, result: &PredictionView) {
    let palette = style::palette();
    let fill = if result.outcome.is_approved() {
        palette.success
    } else {
        palette.warning
    };
    Frame::new()
        .fill(fill)
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(result.outcome.message())
                        .size(18.0)
                        .strong()
                        .color(Color32::WHITE),
                );
                if let Some(probability) = result.probability {
                    let text = format!("(approval probability {:.0}%)", probability * 100.0);
                    ui.label(RichText::new(text).color(Color32::WHITE));
                }
            });
        });
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.render_about_panel(ctx);
        self.render_status(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("form_scroll")
                .show(ui, |ui| self.render_center(ui));
        });
    }
}
