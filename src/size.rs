use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Requested icon size: a named step or an explicit pixel size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconSize {
    Sm,
    #[default]
    Md,
    Lg,
    #[serde(untagged)]
    Px(u32),
}

impl IconSize {
    /// Size in pixels (sm=16, md=20, lg=24)
    pub fn pixels(self) -> u32 {
        match self {
            IconSize::Sm => 16,
            IconSize::Md => 20,
            IconSize::Lg => 24,
            IconSize::Px(px) => px,
        }
    }
}

impl From<u32> for IconSize {
    fn from(px: u32) -> Self {
        IconSize::Px(px)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIconSizeError(String);

impl fmt::Display for ParseIconSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid icon size '{}' (expected sm, md, lg or a pixel count)",
            self.0
        )
    }
}

impl std::error::Error for ParseIconSizeError {}

impl FromStr for IconSize {
    type Err = ParseIconSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "sm" => Ok(IconSize::Sm),
            "md" => Ok(IconSize::Md),
            "lg" => Ok(IconSize::Lg),
            other => other
                .strip_suffix("px")
                .unwrap_or(other)
                .parse()
                .map(IconSize::Px)
                .map_err(|_| ParseIconSizeError(s.to_string())),
        }
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconSize::Sm => f.write_str("sm"),
            IconSize::Md => f.write_str("md"),
            IconSize::Lg => f.write_str("lg"),
            IconSize::Px(px) => write!(f, "{}", px),
        }
    }
}
