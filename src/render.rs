//! Turning a resolved icon into markup.

use serde::Serialize;

use crate::catalog::{icon_src, match_icon, IconKind};
use crate::normalize::{fallback_glyph, normalize_icon_name};
use crate::size::IconSize;

const WRAPPER_CLASS: &str = "relative flex-shrink-0";
const IMAGE_CLASS: &str = "object-contain";
const PLACEHOLDER_CLASS: &str =
    "flex items-center justify-center rounded bg-muted font-medium text-muted-foreground text-xs";
const HIDE_ON_ERROR: &str = "this.style.display='none'";

/// A single icon to resolve. Built per render and thrown away afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRequest {
    pub kind: IconKind,
    pub name: String,
    pub size: IconSize,
    pub class: Option<String>,
    /// Markup emitted verbatim instead of the generated placeholder
    pub fallback: Option<String>,
    /// Prefix for asset paths, e.g. a CDN origin
    pub asset_root: String,
}

impl IconRequest {
    pub fn new(kind: IconKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            size: IconSize::default(),
            class: None,
            fallback: None,
            asset_root: String::new(),
        }
    }

    pub fn size(mut self, size: impl Into<IconSize>) -> Self {
        self.size = size.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn fallback(mut self, markup: impl Into<String>) -> Self {
        self.fallback = Some(markup.into());
        self
    }

    pub fn asset_root(mut self, root: impl Into<String>) -> Self {
        self.asset_root = root.into();
        self
    }

    /// Resolve the request to an image, a placeholder glyph, or the caller's
    /// fallback. Never fails: unknown names degrade to a placeholder.
    pub fn resolve(&self) -> IconView {
        let size = self.size.pixels();

        if self.name.is_empty() {
            return self.fallback_view('?', size);
        }

        let normalized = normalize_icon_name(&self.name);
        match match_icon(self.kind, &normalized) {
            Some(icon) => IconView::Image {
                icon,
                src: format!(
                    "{}{}",
                    self.asset_root.trim_end_matches('/'),
                    icon_src(icon, self.kind)
                ),
                alt: self.name.clone(),
                size,
                class: self.class.clone(),
            },
            None => self.fallback_view(fallback_glyph(&normalized), size),
        }
    }

    /// An empty fallback counts as no fallback
    fn fallback_view(&self, glyph: char, size: u32) -> IconView {
        match self.fallback.as_deref().filter(|markup| !markup.is_empty()) {
            Some(markup) => IconView::Custom {
                markup: markup.to_string(),
            },
            None => IconView::Placeholder {
                glyph,
                size,
                class: self.class.clone(),
            },
        }
    }
}

/// Outcome of resolving an [`IconRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IconView {
    /// A catalog asset. The `<img>` hides itself if the asset fails to load.
    Image {
        icon: &'static str,
        src: String,
        alt: String,
        size: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        class: Option<String>,
    },
    /// Letter-in-a-box placeholder
    Placeholder {
        glyph: char,
        size: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        class: Option<String>,
    },
    /// Caller-supplied fallback markup
    Custom { markup: String },
}

impl IconView {
    /// Asset path of a matched icon
    pub fn src(&self) -> Option<&str> {
        match self {
            IconView::Image { src, .. } => Some(src),
            _ => None,
        }
    }

    pub fn to_html(&self) -> String {
        match self {
            IconView::Image {
                src,
                alt,
                size,
                class,
                ..
            } => {
                let mut img = Element::new("img");
                img.attr("alt", alt)
                    .attr("class", IMAGE_CLASS)
                    .attr("src", src)
                    .attr("width", &size.to_string())
                    .attr("height", &size.to_string())
                    .attr("onerror", HIDE_ON_ERROR);

                let mut wrapper = Element::new("div");
                wrapper
                    .attr("class", &join_class(WRAPPER_CLASS, class.as_deref()))
                    .attr("style", &square_style(*size))
                    .child(img.void());
                wrapper.close()
            }
            IconView::Placeholder { glyph, size, class } => {
                let mut div = Element::new("div");
                div.attr("class", &join_class(PLACEHOLDER_CLASS, class.as_deref()))
                    .attr("style", &square_style(*size))
                    .text(&glyph.to_string());
                div.close()
            }
            IconView::Custom { markup } => markup.clone(),
        }
    }
}

fn join_class(base: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim) {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

fn square_style(size: u32) -> String {
    format!("width:{}px;height:{}px", size, size)
}

/// A builder for a single HTML element
#[derive(Debug)]
struct Element {
    tag: &'static str,
    attrs: String,
    body: String,
}

impl Element {
    fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: String::new(),
            body: String::new(),
        }
    }

    /// Add an attribute; the value is escaped
    fn attr(&mut self, name: &str, value: &str) -> &mut Self {
        self.attrs.push_str(&format!(" {}=\"{}\"", name, escape(value)));
        self
    }

    /// Append escaped text content
    fn text(&mut self, text: &str) -> &mut Self {
        self.body.push_str(&escape(text));
        self
    }

    /// Append already-rendered markup
    fn child(&mut self, markup: String) -> &mut Self {
        self.body.push_str(&markup);
        self
    }

    /// Render as a void element (`<img ...>`), ignoring any body
    fn void(&self) -> String {
        format!("<{}{}>", self.tag, self.attrs)
    }

    fn close(&self) -> String {
        format!("<{}{}>{}</{}>", self.tag, self.attrs, self.body, self.tag)
    }
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
