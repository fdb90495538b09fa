//! The single editable text region

/// Editable buffer bound to the active tab.
///
/// Edits live here until the buffer loses focus. The owner decides whether
/// they are committed or thrown away.
#[derive(Debug, Default)]
pub struct EditableSurface {
    /// Text as shown on screen
    pub buffer: String,
    /// Set when the buffer differs from what was last loaded
    dirty: bool,
}

impl EditableSurface {
    /// Replace the on-screen text with stored content, dropping edits
    pub fn reset(&mut self, content: &str) {
        self.buffer.clear();
        self.buffer.push_str(content);
        self.dirty = false;
    }

    /// Record that the user edited the buffer
    pub fn mark_edited(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Take the current text for a commit
    pub fn commit(&mut self) -> String {
        self.dirty = false;
        self.buffer.clone()
    }

    /// Text to export: the on-screen buffer, or `stored` when it is empty
    pub fn export_text<'a>(&'a self, stored: &'a str) -> &'a str {
        if self.buffer.is_empty() {
            stored
        } else {
            &self.buffer
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_discards_edits() {
        let mut surface = EditableSurface::default();
        surface.reset("hello");
        surface.buffer.push_str(" world");
        surface.mark_edited();
        assert!(surface.is_dirty());

        surface.reset("hello");
        assert_eq!(surface.buffer, "hello");
        assert!(!surface.is_dirty());
    }

    #[test]
    fn test_export_falls_back_to_stored() {
        let mut surface = EditableSurface::default();
        assert_eq!(surface.export_text("stored"), "stored");

        surface.reset("on screen");
        assert_eq!(surface.export_text("stored"), "on screen");
    }
}
