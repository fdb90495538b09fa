//! Built-in read-only sections bundled at compile time

const ABOUT: &str = include_str!("../../content/about.txt");
const TECH: &str = include_str!("../../content/tech.txt");
const CONTACT: &str = include_str!("../../content/contact.txt");

/// Key of a built-in section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKey {
    About,
    Tech,
    Contact,
}

impl SectionKey {
    /// All keys in tab strip order
    pub const ALL: [Self; 3] = [Self::About, Self::Tech, Self::Contact];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Tech => "tech",
            Self::Contact => "contact",
        }
    }

    /// The immutable section behind this key
    pub fn section(self) -> FixedSection {
        let content = match self {
            Self::About => ABOUT,
            Self::Tech => TECH,
            Self::Contact => CONTACT,
        };
        FixedSection {
            key: self,
            title: self.as_str(),
            content,
        }
    }
}

/// A built-in, non-deletable section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSection {
    pub key: SectionKey,
    pub title: &'static str,
    pub content: &'static str,
}

/// Iterate over the built-in sections in display order
pub fn fixed_sections() -> impl Iterator<Item = FixedSection> {
    SectionKey::ALL.into_iter().map(SectionKey::section)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_in_order() {
        let titles: Vec<_> = fixed_sections().map(|s| s.title).collect();
        assert_eq!(titles, ["about", "tech", "contact"]);
    }

    #[test]
    fn test_section_content_is_bundled() {
        for section in fixed_sections() {
            assert!(!section.content.trim().is_empty(), "{} is empty", section.title);
        }
    }
}
