// Generated at compile time from catalog.json
include!(concat!(env!("OUT_DIR"), "/catalog.rs"));

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which catalog a name is looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    Browser,
    Os,
}

impl IconKind {
    pub const ALL: [IconKind; 2] = [IconKind::Browser, IconKind::Os];

    /// Asset directory the icons of this kind are served from
    pub fn folder(self) -> &'static str {
        match self {
            IconKind::Browser => "browsers",
            IconKind::Os => "operating-systems",
        }
    }

    /// Known icon identifiers, in scan order
    pub fn icons(self) -> &'static [&'static str] {
        match self {
            IconKind::Browser => BROWSER_ICONS,
            IconKind::Os => OS_ICONS,
        }
    }
}

impl fmt::Display for IconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconKind::Browser => f.write_str("browser"),
            IconKind::Os => f.write_str("os"),
        }
    }
}

/// Remap well-known alternate OS spellings ("linux", "darwin", ...) to their
/// catalog identifier. Anything else is returned unchanged.
pub fn map_os_name(normalized: &str) -> &str {
    OS_ALIASES
        .get(normalized.to_ascii_lowercase().as_str())
        .copied()
        .unwrap_or(normalized)
}

/// Find the catalog entry for a normalized name.
///
/// Exact case-insensitive equality wins first; failing that, the first entry
/// that contains the name or is contained in it. Every entry contains the
/// empty string, so an empty name matches the first entry.
pub fn find_icon_match(name: &str, icons: &'static [&'static str]) -> Option<&'static str> {
    if let Some(icon) = icons.iter().find(|icon| icon.eq_ignore_ascii_case(name)) {
        return Some(*icon);
    }

    let name = name.to_ascii_lowercase();
    icons
        .iter()
        .find(|icon| {
            let icon = icon.to_ascii_lowercase();
            icon.contains(&name) || name.contains(&icon)
        })
        .copied()
}

/// Match a normalized name against the catalog for `kind`, applying the OS
/// aliases first where relevant.
pub fn match_icon(kind: IconKind, normalized: &str) -> Option<&'static str> {
    let search = match kind {
        IconKind::Browser => normalized,
        IconKind::Os => map_os_name(normalized),
    };
    find_icon_match(search, kind.icons())
}

/// File extension for an icon; svg unless the catalog lists a bitmap.
pub fn icon_extension(icon: &str, kind: IconKind) -> &'static str {
    ASSET_EXTENSIONS
        .get(format!("{}/{}", kind.folder(), icon).as_str())
        .copied()
        .unwrap_or("svg")
}

/// Asset path for a catalog identifier, e.g. `/browsers/Chrome.svg`
pub fn icon_src(icon: &str, kind: IconKind) -> String {
    format!("/{}/{}.{}", kind.folder(), icon, icon_extension(icon, kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_exact_match() {
        assert_eq!(match_icon(IconKind::Browser, "chrome"), Some("Chrome"));
        assert_eq!(match_icon(IconKind::Browser, "KakaoTalk"), Some("KAKAOTALK"));
        assert_eq!(match_icon(IconKind::Os, "WINDOWS"), Some("Windows"));
    }

    #[test]
    fn test_exact_beats_partial() {
        // "Opera" precedes "OperaGX" and is contained in "OperaGX"
        assert_eq!(match_icon(IconKind::Browser, "OperaGX"), Some("OperaGX"));
        assert_eq!(match_icon(IconKind::Browser, "Chromium"), Some("Chromium"));
    }

    #[test]
    fn test_partial_match() {
        assert_eq!(match_icon(IconKind::Browser, "ChromeMobile"), Some("Chrome"));
        assert_eq!(match_icon(IconKind::Browser, "MicrosoftEdge"), Some("Edge"));
        assert_eq!(match_icon(IconKind::Browser, "MobileSafari"), Some("Safari"));
        assert_eq!(match_icon(IconKind::Browser, "OperaMini"), Some("Opera"));
        assert_eq!(match_icon(IconKind::Browser, "360SecureBrowser"), Some("360"));
        assert_eq!(match_icon(IconKind::Os, "ChromeOS"), Some("Chrome"));
        assert_eq!(match_icon(IconKind::Os, "Windows11"), Some("Windows"));
    }

    #[test]
    fn test_partial_entry_contains_name() {
        // "Samsung" is contained in "SamsungInternet"
        assert_eq!(match_icon(IconKind::Browser, "samsung"), Some("SamsungInternet"));
    }

    #[test]
    fn test_os_aliases() {
        assert_eq!(map_os_name("Linux"), "Ubuntu");
        assert_eq!(map_os_name("darwin"), "macOS");
        assert_eq!(map_os_name("MAC"), "macOS");
        assert_eq!(map_os_name("iOS"), "Apple");
        assert_eq!(map_os_name("Fedora"), "Fedora");
        assert_eq!(match_icon(IconKind::Os, "linux"), Some("Ubuntu"));
        assert_eq!(match_icon(IconKind::Os, "mac"), Some("macOS"));
        assert_eq!(match_icon(IconKind::Os, "iOS"), Some("Apple"));
    }

    #[test]
    fn test_aliases_only_apply_to_os() {
        assert_eq!(match_icon(IconKind::Browser, "linux"), None);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(match_icon(IconKind::Browser, "zzzznotreal"), None);
        assert_eq!(match_icon(IconKind::Os, "zzzznotreal"), None);
    }

    #[test]
    fn test_empty_name_matches_first_entry() {
        assert_eq!(match_icon(IconKind::Browser, ""), Some("Chrome"));
        assert_eq!(match_icon(IconKind::Os, ""), Some("Windows"));
    }

    #[test]
    fn test_icon_src() {
        assert_eq!(icon_src("Chrome", IconKind::Browser), "/browsers/Chrome.svg");
        assert_eq!(icon_src("Brave", IconKind::Browser), "/browsers/Brave.webp");
        assert_eq!(icon_src("Ubuntu", IconKind::Os), "/operating-systems/Ubuntu.svg");
        // The bitmap exception is keyed by folder, not just name
        assert_eq!(icon_extension("Brave", IconKind::Os), "svg");
    }

    #[test]
    fn test_catalog_identifiers_unique() {
        for kind in IconKind::ALL {
            let mut seen = HashSet::new();
            for icon in kind.icons() {
                assert!(
                    seen.insert(icon.to_ascii_lowercase()),
                    "duplicate {} icon '{}'",
                    kind,
                    icon
                );
            }
        }
    }

    #[test]
    fn test_catalog_contents() {
        assert_eq!(BROWSER_ICONS.len(), 41);
        assert_eq!(OS_ICONS.len(), 11);
        assert_eq!(BROWSER_ICONS.first(), Some(&"Chrome"));
        assert_eq!(BROWSER_ICONS.last(), Some(&"Brave"));
    }

    #[test]
    fn test_all_aliases_resolve_to_os_icons() {
        for (alias, target) in OS_ALIASES.entries() {
            assert_eq!(**alias, alias.to_ascii_lowercase());
            assert!(OS_ICONS.contains(target), "alias '{}' -> '{}'", alias, target);
        }
    }
}
