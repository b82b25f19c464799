use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent_blue: Color32,
    pub warning: Color32,
    pub success: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(0, 0, 0),
        bg_secondary: Color32::from_rgb(26, 26, 26),
        bg_tertiary: Color32::from_rgb(38, 38, 38),
        panel_outline: Color32::from_rgb(48, 48, 52),
        text_primary: Color32::from_rgb(235, 235, 235),
        text_muted: Color32::from_rgb(150, 150, 155),
        accent_blue: Color32::from_rgb(0, 120, 255),
        warning: Color32::from_rgb(214, 76, 76),
        success: Color32::from_rgb(46, 160, 94),
    }
}

/// Tone of the status badge in the footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Success,
    Warning,
    Error,
}

pub fn status_badge_color(tone: StatusTone) -> Color32 {
    let palette = palette();
    match tone {
        StatusTone::Idle => palette.bg_tertiary,
        StatusTone::Success => palette.success,
        StatusTone::Warning => palette.accent_blue,
        StatusTone::Error => palette.warning,
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_secondary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.extreme_bg_color = palette.bg_tertiary;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.error_fg_color = palette.warning;
    visuals.warn_fg_color = palette.warning;
    visuals.selection.bg_fill = palette.accent_blue;
    visuals.selection.stroke = Stroke::new(1.0, palette.text_primary);
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    set_input_style(&mut visuals.widgets.inactive, palette);
    set_input_style(&mut visuals.widgets.hovered, palette);
    set_input_style(&mut visuals.widgets.active, palette);
    set_input_style(&mut visuals.widgets.open, palette);
    visuals.popup_shadow = Shadow::NONE;
    visuals.button_frame = true;
}

fn set_input_style(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::same(6);
    vis.bg_fill = palette.bg_tertiary;
    vis.weak_bg_fill = palette.bg_tertiary;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}
