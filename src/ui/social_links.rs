//! Row of external profile icons

use eframe::egui;

use crate::core::social::{open_link, SOCIAL_LINKS};

const ICON_SIZE: f32 = 18.0;

/// Social link icons
pub struct SocialLinks;

impl SocialLinks {
    /// Show the icons. Expects a right-to-left layout, so links are added in reverse.
    pub fn show(ui: &mut egui::Ui) {
        let tint = ui.visuals().text_color();

        for link in SOCIAL_LINKS.iter().rev() {
            let icon = egui::Image::from_bytes(link.icon_uri, link.icon_svg)
                .fit_to_exact_size(egui::vec2(ICON_SIZE, ICON_SIZE))
                .tint(tint);

            let response = ui
                .add(egui::Button::image(icon).frame(false))
                .on_hover_text(link.name)
                .on_hover_cursor(egui::CursorIcon::PointingHand);
            if response.clicked() {
                open_link(link);
            }
        }
    }
}
