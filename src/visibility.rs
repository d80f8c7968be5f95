//! Visibility State
//!
//! Explicit two-valued presentation state. The CSS `display` value and the
//! indicator glyph are projections of it.

/// Whether a section body is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

impl Visibility {
    /// Read a `display` value back. Only `none` means hidden; unset counts as visible.
    pub fn from_display(display: &str) -> Self {
        if display.trim().eq_ignore_ascii_case("none") {
            Visibility::Hidden
        } else {
            Visibility::Visible
        }
    }

    pub fn from_collapsed(collapsed: bool) -> Self {
        if collapsed {
            Visibility::Hidden
        } else {
            Visibility::Visible
        }
    }

    /// CSS `display` value written to the section body
    pub fn display_value(self) -> &'static str {
        match self {
            Visibility::Visible => "block",
            Visibility::Hidden => "none",
        }
    }

    /// Indicator text: `-` offers to collapse, `+` offers to expand
    pub fn glyph(self) -> &'static str {
        match self {
            Visibility::Visible => "-",
            Visibility::Hidden => "+",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Visibility::Visible => Visibility::Hidden,
            Visibility::Hidden => Visibility::Visible,
        }
    }

    pub fn is_hidden(self) -> bool {
        self == Visibility::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_display() {
        assert_eq!(Visibility::from_display("none"), Visibility::Hidden);
        assert_eq!(Visibility::from_display(" NONE "), Visibility::Hidden);
        assert_eq!(Visibility::from_display(""), Visibility::Visible);
        assert_eq!(Visibility::from_display("block"), Visibility::Visible);
        assert_eq!(Visibility::from_display("inline-flex"), Visibility::Visible);
    }

    #[test]
    fn test_projections() {
        assert_eq!(Visibility::Visible.display_value(), "block");
        assert_eq!(Visibility::Hidden.display_value(), "none");
        assert_eq!(Visibility::Visible.glyph(), "-");
        assert_eq!(Visibility::Hidden.glyph(), "+");
    }

    #[test]
    fn test_display_value_reads_back() {
        for state in [Visibility::Visible, Visibility::Hidden] {
            assert_eq!(Visibility::from_display(state.display_value()), state);
        }
    }

    #[test]
    fn test_toggled_and_default() {
        assert_eq!(Visibility::default(), Visibility::Visible);
        assert_eq!(Visibility::Visible.toggled(), Visibility::Hidden);
        assert_eq!(Visibility::Hidden.toggled().toggled(), Visibility::Hidden);
        assert!(Visibility::from_collapsed(true).is_hidden());
        assert!(!Visibility::from_collapsed(false).is_hidden());
    }
}
