//! Portrait size selection.

use std::fmt;

/// Portrait size offered by the upstream API.
///
/// Parsing never fails: unrecognised or absent names select [`Self::Medium`].
///
/// # Example
///
/// ```
/// use randomuser::PictureVariant;
///
/// assert_eq!(PictureVariant::from_name("large"), PictureVariant::Large);
/// assert_eq!(PictureVariant::from_name("poster"), PictureVariant::Medium);
/// assert_eq!(PictureVariant::from(None), PictureVariant::Medium);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PictureVariant {
    /// Full-size portrait.
    Large,
    /// Mid-size portrait, used when no other size is requested.
    #[default]
    Medium,
    /// Small thumbnail.
    Thumbnail,
}

impl PictureVariant {
    /// Resolve a variant name, falling back to [`Self::Medium`].
    ///
    /// Matching is exact: `Large` is not `large`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "large" => Self::Large,
            "thumbnail" => Self::Thumbnail,
            _ => Self::Medium,
        }
    }

    /// Return the upstream field name for this variant.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Large => "large",
            Self::Medium => "medium",
            Self::Thumbnail => "thumbnail",
        }
    }
}

impl From<&str> for PictureVariant {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<Option<&str>> for PictureVariant {
    fn from(name: Option<&str>) -> Self {
        name.map(Self::from_name).unwrap_or_default()
    }
}

impl fmt::Display for PictureVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
