//! Text editor panel

use eframe::egui;

use crate::app::{FolioApp, SAVE_SHORTCUT};

/// Editable view of the active tab
pub struct EditorPanel;

impl EditorPanel {
    /// Show the editor panel
    pub fn show(ui: &mut egui::Ui, app: &mut FolioApp) {
        let font = egui::FontId::monospace(app.config.editor.font_size);
        let workspace = &mut app.workspace;

        egui::ScrollArea::vertical()
            .id_salt("editor_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let output = egui::TextEdit::multiline(&mut workspace.surface.buffer)
                    .font(font)
                    .frame(false)
                    .desired_width(f32::INFINITY)
                    .desired_rows(30)
                    .lock_focus(true)
                    .show(ui);

                if output.response.changed() {
                    workspace.surface.mark_edited();
                }
                if output.response.lost_focus() {
                    workspace.blur();
                }
            });
    }

    /// One-line hint about what happens to edits on the current tab
    pub fn show_status(ui: &mut egui::Ui, app: &FolioApp) {
        let workspace = &app.workspace;
        let hint = if workspace.active().is_fixed() {
            "edits here are reset when you click away"
        } else {
            "scratch tab, kept until the app closes"
        };

        ui.horizontal(|ui| {
            ui.weak(hint);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let shortcut = ui.ctx().format_shortcut(&SAVE_SHORTCUT);
                ui.weak(format!("{} saves {}", shortcut, workspace.export_file().file_name));
            });
        });
    }
}
