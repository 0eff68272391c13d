use std::fmt;

/// Whether a pattern ignores a path or explicitly re-admits it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PatternSign {
    /// Un-ignore the path. Rendered with a leading `!`.
    Include,
    /// Ignore the path. Rendered verbatim.
    Exclude,
}

impl PatternSign {
    /// Returns the prefix written in front of the path when rendering.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Include => "!",
            Self::Exclude => "",
        }
    }

    /// Returns `true` for [`PatternSign::Include`].
    #[must_use]
    pub const fn is_include(self) -> bool {
        matches!(self, Self::Include)
    }
}

impl fmt::Display for PatternSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Include => f.write_str("include"),
            Self::Exclude => f.write_str("exclude"),
        }
    }
}
