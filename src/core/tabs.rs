//! Ephemeral scratch tabs and the active-tab reference

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use super::sections::SectionKey;

/// Identifier of an ephemeral tab, `ephemeral-<unix millis>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TabId(String);

impl TabId {
    fn from_stamp(stamp: u64) -> Self {
        Self(format!("ephemeral-{stamp}"))
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A user-created scratch tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EphemeralTab {
    pub id: TabId,
    pub title: String,
    pub content: String,
}

/// Reference to the tab currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabRef {
    Fixed(SectionKey),
    Ephemeral(TabId),
}

impl Default for TabRef {
    fn default() -> Self {
        Self::Fixed(SectionKey::About)
    }
}

impl TabRef {
    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }
}

/// Ordered collection of ephemeral tabs
#[derive(Debug, Default)]
pub struct TabRegistry {
    tabs: Vec<EphemeralTab>,
    /// Last timestamp handed out, ids stay unique within a millisecond
    last_stamp: u64,
}

impl TabRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tab with empty content. Returns `None` for a blank title.
    pub fn create(&mut self, title: &str) -> Option<TabId> {
        self.create_at(title, now_millis())
    }

    fn create_at(&mut self, title: &str, now: u64) -> Option<TabId> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }

        let stamp = now.max(self.last_stamp.saturating_add(1));
        self.last_stamp = stamp;

        let id = TabId::from_stamp(stamp);
        self.tabs.push(EphemeralTab {
            id: id.clone(),
            title: title.to_string(),
            content: String::new(),
        });
        tracing::debug!(%id, title, "created ephemeral tab");
        Some(id)
    }

    /// Remove a tab. Returns whether anything was removed.
    pub fn delete(&mut self, id: &TabId) -> bool {
        let before = self.tabs.len();
        self.tabs.retain(|tab| &tab.id != id);
        let removed = self.tabs.len() != before;
        if removed {
            tracing::debug!(%id, "deleted ephemeral tab");
        }
        removed
    }

    pub fn get(&self, id: &TabId) -> Option<&EphemeralTab> {
        self.tabs.iter().find(|tab| &tab.id == id)
    }

    pub fn get_mut(&mut self, id: &TabId) -> Option<&mut EphemeralTab> {
        self.tabs.iter_mut().find(|tab| &tab.id == id)
    }

    pub fn first(&self) -> Option<&EphemeralTab> {
        self.tabs.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EphemeralTab> {
        self.tabs.iter()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// Inline "+" input state in the tab strip
#[derive(Debug, Default)]
pub struct TabDraft {
    pub open: bool,
    pub name: String,
    /// Set when the input should grab keyboard focus on the next frame
    pub wants_focus: bool,
}

impl TabDraft {
    /// Open the input
    pub fn begin(&mut self) {
        self.open = true;
        self.name.clear();
        self.wants_focus = true;
    }

    /// Close the input and drop whatever was typed
    pub fn cancel(&mut self) {
        self.open = false;
        self.name.clear();
        self.wants_focus = false;
    }

    /// Enter: yields the title and closes when non-blank, otherwise stays open
    pub fn confirm(&mut self) -> Option<String> {
        let title = self.name.trim().to_string();
        if title.is_empty() {
            return None;
        }
        self.cancel();
        Some(title)
    }

    /// Focus lost: confirm a non-blank name, cancel otherwise
    pub fn blur(&mut self) -> Option<String> {
        let title = self.confirm();
        if title.is_none() {
            self.cancel();
        }
        title
    }
}
