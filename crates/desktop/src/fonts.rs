//! Font and text style setup

use eframe::egui;

/// Register the phosphor icon font and scale text styles to `font_size`
pub fn apply_font_settings(ctx: &egui::Context, font_size: f32) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);

    // 14.0 is the default body size
    let scale = font_size / 14.0;
    let mut style = (*ctx.style()).clone();
    style.text_styles.iter_mut().for_each(|(text_style, font_id)| match text_style {
        egui::TextStyle::Small => font_id.size = 10.0 * scale,
        egui::TextStyle::Body => font_id.size = 14.0 * scale,
        egui::TextStyle::Monospace => font_id.size = 14.0 * scale,
        egui::TextStyle::Button => font_id.size = 14.0 * scale,
        egui::TextStyle::Heading => font_id.size = 20.0 * scale,
        egui::TextStyle::Name(_) => {}
    });
    style.interaction.tooltip_delay = 0.0;
    ctx.set_style(style);
}
