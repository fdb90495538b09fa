//! Tab state: fixed sections, scratch tabs, selection and the edit buffer

use super::export::ExportFile;
use super::sections::{fixed_sections, FixedSection, SectionKey};
use super::surface::EditableSurface;
use super::tabs::{TabDraft, TabId, TabRef, TabRegistry};

/// Everything the tab strip and editor operate on
#[derive(Debug)]
pub struct Workspace {
    pub registry: TabRegistry,
    active: TabRef,
    pub surface: EditableSurface,
    pub draft: TabDraft,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    /// Start on "about" with no scratch tabs
    pub fn new() -> Self {
        let mut workspace = Self {
            registry: TabRegistry::new(),
            active: TabRef::default(),
            surface: EditableSurface::default(),
            draft: TabDraft::default(),
        };
        workspace.sync_surface();
        workspace
    }

    pub fn active(&self) -> &TabRef {
        &self.active
    }

    pub fn is_active(&self, target: &TabRef) -> bool {
        &self.active == target
    }

    pub fn fixed_sections(&self) -> impl Iterator<Item = FixedSection> {
        fixed_sections()
    }

    /// Stored content of the active tab, empty if the tab is gone
    pub fn stored_content(&self) -> &str {
        match &self.active {
            TabRef::Fixed(key) => key.section().content,
            TabRef::Ephemeral(id) => self
                .registry
                .get(id)
                .map(|tab| tab.content.as_str())
                .unwrap_or_default(),
        }
    }

    /// Title of the active tab, "untitled" if the tab is gone
    pub fn active_title(&self) -> &str {
        match &self.active {
            TabRef::Fixed(key) => key.section().title,
            TabRef::Ephemeral(id) => self
                .registry
                .get(id)
                .map(|tab| tab.title.as_str())
                .unwrap_or("untitled"),
        }
    }

    /// Show another tab. Unknown scratch tabs fall back to "about".
    pub fn activate(&mut self, target: TabRef) {
        self.blur();
        self.active = self.resolve(target);
        self.sync_surface();
    }

    /// The editor lost focus: keep scratch edits, revert built-in ones
    pub fn blur(&mut self) {
        match &self.active {
            TabRef::Fixed(key) => self.surface.reset(key.section().content),
            TabRef::Ephemeral(id) => {
                let text = self.surface.commit();
                if let Some(tab) = self.registry.get_mut(id) {
                    tab.content = text;
                }
            }
        }
    }

    /// Create a scratch tab and show it
    pub fn create_tab(&mut self, title: &str) -> Option<TabId> {
        let id = self.registry.create(title)?;
        tracing::info!("Created tab {:?}", title.trim());
        self.activate(TabRef::Ephemeral(id.clone()));
        Some(id)
    }

    /// Delete a scratch tab. If it was on screen, show the first remaining
    /// scratch tab or "about".
    pub fn delete_tab(&mut self, id: &TabId) {
        self.blur();
        if !self.registry.delete(id) {
            return;
        }
        tracing::info!("Deleted tab {} ({} left)", id, self.registry.len());

        if matches!(&self.active, TabRef::Ephemeral(active) if active == id) {
            self.active = self
                .registry
                .first()
                .map(|tab| TabRef::Ephemeral(tab.id.clone()))
                .unwrap_or_default();
        }
        self.sync_surface();
    }

    /// "+" clicked
    pub fn begin_new_tab(&mut self) {
        self.draft.begin();
    }

    /// Enter pressed in the new-tab input
    pub fn confirm_new_tab(&mut self) -> Option<TabId> {
        let title = self.draft.confirm()?;
        self.create_tab(&title)
    }

    /// Escape pressed in the new-tab input
    pub fn cancel_new_tab(&mut self) {
        self.draft.cancel();
    }

    /// The new-tab input lost focus
    pub fn blur_new_tab(&mut self) -> Option<TabId> {
        let title = self.draft.blur()?;
        self.create_tab(&title)
    }

    /// File for the current on-screen text
    pub fn export_file(&self) -> ExportFile {
        ExportFile::new(
            self.active_title(),
            self.surface.export_text(self.stored_content()),
        )
    }

    fn resolve(&self, target: TabRef) -> TabRef {
        match target {
            TabRef::Ephemeral(ref id) if self.registry.get(id).is_none() => {
                TabRef::Fixed(SectionKey::About)
            }
            target => target,
        }
    }

    fn sync_surface(&mut self) {
        let content = self.stored_content().to_string();
        self.surface.reset(&content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn about() -> &'static str {
        SectionKey::About.section().content
    }

    #[test]
    fn test_starts_on_about() {
        let ws = Workspace::new();
        assert_eq!(ws.active(), &TabRef::Fixed(SectionKey::About));
        assert_eq!(ws.surface.buffer, about());
    }

    #[test]
    fn test_create_notes_activates_empty_tab() {
        let mut ws = Workspace::new();
        let id = ws.create_tab("notes").unwrap();

        assert_eq!(ws.registry.len(), 1);
        assert_eq!(ws.active(), &TabRef::Ephemeral(id));
        assert_eq!(ws.active_title(), "notes");
        assert_eq!(ws.stored_content(), "");
        assert_eq!(ws.surface.buffer, "");
    }

    #[test]
    fn test_fixed_edit_reverts_on_blur() {
        let mut ws = Workspace::new();
        ws.activate(TabRef::Fixed(SectionKey::Tech));
        ws.surface.buffer.push_str("scribble");
        ws.surface.mark_edited();

        ws.blur();

        assert_eq!(ws.surface.buffer, SectionKey::Tech.section().content);
        assert_eq!(ws.stored_content(), SectionKey::Tech.section().content);
    }

    #[test]
    fn test_ephemeral_edit_persists_on_blur() {
        let mut ws = Workspace::new();
        let id = ws.create_tab("notes").unwrap();
        ws.surface.buffer.push_str("remember the milk");
        ws.blur();

        ws.activate(TabRef::Fixed(SectionKey::Contact));
        assert_eq!(ws.surface.buffer, SectionKey::Contact.section().content);

        ws.activate(TabRef::Ephemeral(id));
        assert_eq!(ws.surface.buffer, "remember the milk");
    }

    #[test]
    fn test_switching_tabs_commits_pending_scratch_edit() {
        let mut ws = Workspace::new();
        let id = ws.create_tab("notes").unwrap();
        ws.surface.buffer.push_str("draft");

        ws.activate(TabRef::Fixed(SectionKey::About));

        assert_eq!(ws.registry.get(&id).unwrap().content, "draft");
    }

    #[test]
    fn test_delete_active_picks_first_remaining() {
        let mut ws = Workspace::new();
        let first = ws.create_tab("one").unwrap();
        let second = ws.create_tab("two").unwrap();

        ws.delete_tab(&second);

        assert_eq!(ws.active(), &TabRef::Ephemeral(first));
        assert_eq!(ws.registry.len(), 1);
    }

    #[test]
    fn test_delete_last_falls_back_to_about() {
        let mut ws = Workspace::new();
        let id = ws.create_tab("notes").unwrap();

        ws.delete_tab(&id);

        assert!(ws.registry.is_empty());
        assert_eq!(ws.active(), &TabRef::Fixed(SectionKey::About));
        assert_eq!(ws.surface.buffer, about());
    }

    #[test]
    fn test_delete_inactive_keeps_selection() {
        let mut ws = Workspace::new();
        let first = ws.create_tab("one").unwrap();
        let second = ws.create_tab("two").unwrap();
        ws.surface.buffer.push_str("kept");

        ws.delete_tab(&first);

        assert_eq!(ws.active(), &TabRef::Ephemeral(second));
        assert_eq!(ws.surface.buffer, "kept");
    }

    #[test]
    fn test_activate_missing_tab_falls_back() {
        let mut ws = Workspace::new();
        let id = ws.create_tab("notes").unwrap();
        ws.registry.delete(&id);

        ws.activate(TabRef::Ephemeral(id));
        assert_eq!(ws.active(), &TabRef::Fixed(SectionKey::About));
    }

    #[test]
    fn test_export_about() {
        let ws = Workspace::new();
        let file = ws.export_file();
        assert_eq!(file.file_name, "about.txt");
        assert_eq!(file.contents, about());
    }

    #[test]
    fn test_export_uses_on_screen_text() {
        let mut ws = Workspace::new();
        ws.create_tab("notes").unwrap();
        ws.surface.buffer.push_str("unsaved");

        let file = ws.export_file();
        assert_eq!(file.file_name, "notes.txt");
        assert_eq!(file.contents, "unsaved");
    }

    #[test]
    fn test_export_empty_buffer_uses_stored() {
        let mut ws = Workspace::new();
        ws.activate(TabRef::Fixed(SectionKey::Contact));
        ws.surface.buffer.clear();

        let file = ws.export_file();
        assert_eq!(file.contents, SectionKey::Contact.section().content);
    }

    #[test]
    fn test_escape_cancels_creation() {
        let mut ws = Workspace::new();
        ws.begin_new_tab();
        ws.draft.name.push_str("notes");

        ws.cancel_new_tab();

        assert!(ws.registry.is_empty());
        assert!(!ws.draft.open);
        assert_eq!(ws.active(), &TabRef::Fixed(SectionKey::About));
    }

    #[test]
    fn test_enter_confirms_creation() {
        let mut ws = Workspace::new();
        ws.begin_new_tab();
        ws.draft.name.push_str("notes");

        let id = ws.confirm_new_tab().unwrap();

        assert_eq!(ws.active(), &TabRef::Ephemeral(id));
        assert!(!ws.draft.open);
    }

    #[test]
    fn test_blur_with_text_confirms_creation() {
        let mut ws = Workspace::new();
        ws.begin_new_tab();
        ws.draft.name.push_str("later");

        assert!(ws.blur_new_tab().is_some());
        assert_eq!(ws.registry.len(), 1);
    }
}
