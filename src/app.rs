//! Main application state and UI coordination

use eframe::egui::{self, Key, KeyboardShortcut, Modifiers};

use crate::core::config::AppConfig;
use crate::core::export::{export, DialogSink, DownloadDirSink, ExportSink};
use crate::core::workspace::Workspace;
use crate::ui::{editor::EditorPanel, social_links::SocialLinks, tab_strip::TabStrip};

/// Ctrl+S, or Cmd+S on macOS
pub const SAVE_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::S);

/// Main application state
pub struct FolioApp {
    /// Tabs, selection and the edit buffer
    pub workspace: Workspace,
    /// Application configuration
    pub config: AppConfig,
    /// Offset the tab strip scrolls to on the next frame
    pub tab_scroll: Option<f32>,
}

impl FolioApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        Self::configure_style(&cc.egui_ctx, &config);

        Self {
            workspace: Workspace::new(),
            config,
            tab_scroll: None,
        }
    }

    fn configure_style(ctx: &egui::Context, config: &AppConfig) {
        let visuals = if config.ui.is_dark() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);
    }

    /// Save the text on screen as `<title>.txt`
    pub fn save_active_tab(&self) {
        let file = self.workspace.export_file();
        let export_config = &self.config.export;

        let sink: Box<dyn ExportSink> = if export_config.ask_location {
            Box::new(DialogSink::new(export_config.directory.clone()))
        } else {
            Box::new(DownloadDirSink::new(export_config.directory.clone()))
        };
        export(sink.as_ref(), &file);
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle keyboard shortcuts
        if ctx.input_mut(|i| i.consume_shortcut(&SAVE_SHORTCUT)) {
            self.save_active_tab();
        }

        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                SocialLinks::show(ui);
                ui.separator();
                ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
                    TabStrip::show(ui, self);
                });
            });
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            EditorPanel::show_status(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            EditorPanel::show(ui, self);
        });
    }
}
