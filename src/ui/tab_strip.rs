//! Horizontal strip of section and scratch tabs

use eframe::egui::{self, scroll_area::ScrollSource, Key, Vec2};

use crate::app::FolioApp;
use crate::core::tabs::{TabId, TabRef};

/// Tab strip with the "+" input at its end
pub struct TabStrip;

enum TabAction {
    Activate(TabRef),
    Delete(TabId),
}

impl TabStrip {
    /// Show the tab strip
    pub fn show(ui: &mut egui::Ui, app: &mut FolioApp) {
        // The wheel is handled below so vertical motion scrolls sideways
        let mut area = egui::ScrollArea::horizontal()
            .id_salt("tab_strip_scroll")
            .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::AlwaysHidden)
            .scroll_source(ScrollSource {
                scroll_bar: true,
                drag: true,
                mouse_wheel: false,
            });
        if let Some(offset) = app.tab_scroll.take() {
            area = area.horizontal_scroll_offset(offset);
        }

        let output = area.show(ui, |ui| {
            ui.horizontal(|ui| {
                if let Some(action) = Self::show_tabs(ui, app) {
                    match action {
                        TabAction::Activate(target) => app.workspace.activate(target),
                        TabAction::Delete(id) => app.workspace.delete_tab(&id),
                    }
                }
                Self::show_new_tab(ui, app);
            });
        });

        if ui.rect_contains_pointer(output.inner_rect) {
            let delta = ui.input(|i| i.smooth_scroll_delta);
            if delta != Vec2::ZERO {
                let max = output.content_size.x - output.inner_rect.width();
                app.tab_scroll = Some(wheel_to_offset(output.state.offset.x, delta, max));
                ui.ctx().request_repaint();
            }
        }
    }

    fn show_tabs(ui: &mut egui::Ui, app: &FolioApp) -> Option<TabAction> {
        let workspace = &app.workspace;
        let mut action = None;

        for section in workspace.fixed_sections() {
            let target = TabRef::Fixed(section.key);
            if ui
                .selectable_label(workspace.is_active(&target), section.title)
                .clicked()
            {
                action = Some(TabAction::Activate(target));
            }
        }

        if !workspace.registry.is_empty() {
            ui.separator();
        }

        for tab in workspace.registry.iter() {
            let target = TabRef::Ephemeral(tab.id.clone());
            let is_active = workspace.is_active(&target);
            let title = if is_active && workspace.surface.is_dirty() {
                format!("{}*", tab.title)
            } else {
                tab.title.clone()
            };

            if ui.selectable_label(is_active, title).clicked() {
                action = Some(TabAction::Activate(target));
            }
            if ui
                .small_button("\u{00D7}")
                .on_hover_text("Delete tab")
                .clicked()
            {
                action = Some(TabAction::Delete(tab.id.clone()));
            }
        }

        action
    }

    fn show_new_tab(ui: &mut egui::Ui, app: &mut FolioApp) {
        let workspace = &mut app.workspace;

        if !workspace.draft.open {
            if ui.button("+").on_hover_text("Create new tab").clicked() {
                workspace.begin_new_tab();
            }
            return;
        }

        let response = ui.add(
            egui::TextEdit::singleline(&mut workspace.draft.name)
                .hint_text("tab name")
                .desired_width(120.0),
        );
        if workspace.draft.wants_focus {
            response.request_focus();
            workspace.draft.wants_focus = false;
        }

        if response.lost_focus() {
            let (enter, escape) = ui.input(|i| (i.key_pressed(Key::Enter), i.key_pressed(Key::Escape)));
            if escape {
                workspace.cancel_new_tab();
            } else if enter {
                if workspace.confirm_new_tab().is_none() {
                    workspace.draft.wants_focus = true;
                }
            } else {
                workspace.blur_new_tab();
            }
        }
    }
}

/// New horizontal offset after a wheel movement. Wheel down scrolls right.
pub fn wheel_to_offset(offset: f32, delta: Vec2, max_offset: f32) -> f32 {
    (offset - delta.x - delta.y).clamp(0.0, max_offset.max(0.0))
}
