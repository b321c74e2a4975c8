use publicon::{browser_icon, normalize_icon_name, os_icon, resolve_icon, IconKind, IconSize, IconView};

#[test]
fn normalizes_labels() {
    assert_eq!(normalize_icon_name("Google Chrome!"), "GoogleChrome");
    for s in ["Google Chrome!", "Mac OS X", "  ", "Ünïcödé 2"] {
        let once = normalize_icon_name(s);
        assert_eq!(normalize_icon_name(&once), once);
    }
}

#[test]
fn browser_exact_match() {
    let view = browser_icon("chrome", IconSize::Md, None);
    assert_eq!(view.src(), Some("/browsers/Chrome.svg"));
}

#[test]
fn brave_is_a_bitmap() {
    let view = browser_icon("brave", IconSize::Md, None);
    assert_eq!(view.src(), Some("/browsers/Brave.webp"));
}

#[test]
fn os_aliases() {
    assert_eq!(
        os_icon("linux", IconSize::Md, None).src(),
        Some("/operating-systems/Ubuntu.svg")
    );
    assert_eq!(
        os_icon("Mac", IconSize::Md, None).src(),
        Some("/operating-systems/macOS.svg")
    );
    assert_eq!(
        os_icon("darwin", IconSize::Md, None).src(),
        Some("/operating-systems/macOS.svg")
    );
}

#[test]
fn unknown_name_falls_back_to_letter() {
    for kind in IconKind::ALL {
        let view = resolve_icon(kind, "zzzznotreal", IconSize::Md, None);
        assert!(matches!(view, IconView::Placeholder { glyph: 'Z', .. }), "{:?}", view);
    }
}

#[test]
fn empty_name() {
    let view = browser_icon("", IconSize::Md, None);
    assert!(matches!(view, IconView::Placeholder { glyph: '?', .. }));

    let view = os_icon("", IconSize::Md, Some("<i>n/a</i>"));
    assert_eq!(view.to_html(), "<i>n/a</i>");
}

#[test]
fn sizes_do_not_depend_on_kind() {
    let cases = [
        (IconSize::Sm, 16),
        (IconSize::Md, 20),
        (IconSize::Lg, 24),
        (IconSize::Px(32), 32),
    ];
    for kind in IconKind::ALL {
        for (size, px) in cases {
            match resolve_icon(kind, "Android", size, None) {
                IconView::Image { size, .. } => assert_eq!(size, px),
                other => panic!("expected image, got {:?}", other),
            }
            match resolve_icon(kind, "zzzz", size, None) {
                IconView::Placeholder { size, .. } => assert_eq!(size, px),
                other => panic!("expected placeholder, got {:?}", other),
            }
        }
    }
}

#[test]
fn names_normalizing_to_empty_match_first_entry() {
    assert_eq!(browser_icon("!!!", IconSize::Md, None).src(), Some("/browsers/Chrome.svg"));
    assert_eq!(browser_icon("   ", IconSize::Md, None).src(), Some("/browsers/Chrome.svg"));
    assert_eq!(
        os_icon("微信", IconSize::Md, None).src(),
        Some("/operating-systems/Windows.svg")
    );
}

#[test]
fn empty_fallback_shows_letter() {
    let view = browser_icon("zzzz", IconSize::Md, Some(""));
    assert!(matches!(view, IconView::Placeholder { glyph: 'Z', .. }), "{:?}", view);
}
