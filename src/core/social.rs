//! External profile links shown in the top-right corner

/// A link with its bundled SVG icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    /// Image URI used as the egui texture key
    pub icon_uri: &'static str,
    pub icon_svg: &'static [u8],
}

macro_rules! social_link {
    ($name:literal, $url:literal, $file:literal) => {
        SocialLink {
            name: $name,
            url: $url,
            icon_uri: concat!("bytes://icons/", $file),
            icon_svg: include_bytes!(concat!("../../assets/icons/", $file)),
        }
    };
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    social_link!("Discord", "https://discord.com/users/171356978310938624", "discord.svg"),
    social_link!("Twitter", "https://twitter.com/kisakaylpb", "twitter.svg"),
    social_link!("Instagram", "https://instagram.com/mauve.framboise", "instagram.svg"),
    social_link!("GitHub", "https://github.com/Kisakay", "github.svg"),
    social_link!("YouTube", "https://youtube.com/@Kisakay", "youtube.svg"),
    social_link!("Twitch", "https://twitch.tv/anaissaraiva", "twitch.svg"),
    social_link!("Reddit", "https://reddit.com/user/TouchHot8779", "reddit.svg"),
    social_link!("GitLab", "https://gitlab.com/Kisakay", "gitlab.svg"),
    social_link!("Email", "mailto:anais.saraiva@ihorizon.org", "email.svg"),
    social_link!("iHorizon", "https://ihorizon.org", "ihorizon.svg"),
    social_link!("KXS", "https://kxs.rip", "kxs.svg"),
    social_link!("Last.fm", "https://last.fm/user/kisakay", "lastfm.svg"),
];

/// Open a link with the system handler
pub fn open_link(link: &SocialLink) {
    if let Err(e) = open::that(link.url) {
        tracing::error!("Failed to open {}: {}", link.url, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_have_svg_icons() {
        for link in SOCIAL_LINKS {
            let svg = std::str::from_utf8(link.icon_svg).unwrap();
            assert!(svg.starts_with("<svg"), "{} icon is not an svg", link.name);
            assert!(link.icon_uri.ends_with(".svg"));
        }
    }

    #[test]
    fn test_link_urls() {
        assert_eq!(SOCIAL_LINKS.len(), 12);
        assert!(SOCIAL_LINKS
            .iter()
            .all(|l| l.url.starts_with("https://") || l.url.starts_with("mailto:")));
    }
}
