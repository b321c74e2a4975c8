//! Browser and operating-system icons from free-form names.
//!
//! Names are normalized, matched against a fixed catalog (exact first, then
//! partial) and turned into an asset path. Names that match nothing fall back
//! to a letter placeholder, so resolution never fails.

pub mod catalog;
pub mod config;
pub mod normalize;
pub mod render;
pub mod size;

pub use catalog::IconKind;
pub use normalize::normalize_icon_name;
pub use render::{IconRequest, IconView};
pub use size::IconSize;

/// Resolve a name against the catalog for `kind`.
///
/// `fallback` replaces the generated placeholder when the name is empty or
/// matches nothing.
pub fn resolve_icon(
    kind: IconKind,
    name: &str,
    size: impl Into<IconSize>,
    fallback: Option<&str>,
) -> IconView {
    let mut request = IconRequest::new(kind, name).size(size);
    request.fallback = fallback.map(str::to_string);
    request.resolve()
}

/// [`resolve_icon`] for the browser catalog
pub fn browser_icon(name: &str, size: impl Into<IconSize>, fallback: Option<&str>) -> IconView {
    resolve_icon(IconKind::Browser, name, size, fallback)
}

/// [`resolve_icon`] for the operating-system catalog
pub fn os_icon(name: &str, size: impl Into<IconSize>, fallback: Option<&str>) -> IconView {
    resolve_icon(IconKind::Os, name, size, fallback)
}
