//! Accessibility
//!
//! ARIA roles and tab index values exposed by elements to the accessibility
//! tree.

/// ARIA role
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AriaRole {
    // Widget roles
    Button,
    Checkbox,
    Link,
    Status,
    Switch,
    Tooltip,

    // Document structure roles
    Generic,
    Group,
    Math,
    None,
    Presentation,

    /// Any token not listed above
    Custom(String),
}

impl AriaRole {
    /// Parse a `role` attribute value (first token wins)
    pub fn parse(s: &str) -> Option<Self> {
        let token = s.split_ascii_whitespace().next()?;
        Some(match token.to_ascii_lowercase().as_str() {
            "button" => Self::Button,
            "checkbox" => Self::Checkbox,
            "link" => Self::Link,
            "status" => Self::Status,
            "switch" => Self::Switch,
            "tooltip" => Self::Tooltip,
            "generic" => Self::Generic,
            "group" => Self::Group,
            "math" => Self::Math,
            "none" => Self::None,
            "presentation" => Self::Presentation,
            _ => Self::Custom(token.to_string()),
        })
    }

    pub fn is_widget(&self) -> bool {
        matches!(self,
            Self::Button | Self::Checkbox | Self::Link | Self::Switch
        )
    }
}

/// Value of a `tabindex` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabIndex {
    NotFocusable(i32),  // negative
    Sequential(i32),    // zero or positive
}

impl TabIndex {
    /// Parse a `tabindex` value; `None` when it is not an integer
    pub fn parse(value: &str) -> Option<Self> {
        let n = value.trim_matches(|c: char| c.is_ascii_whitespace()).parse::<i32>().ok()?;
        Some(Self::from_value(n))
    }

    pub fn from_value(n: i32) -> Self {
        if n < 0 {
            Self::NotFocusable(n)
        } else {
            Self::Sequential(n)
        }
    }

    /// Numeric value as reported by `element.tabIndex`
    pub fn value(&self) -> i32 {
        match self {
            Self::NotFocusable(n) | Self::Sequential(n) => *n,
        }
    }

    pub fn is_focusable(&self) -> bool {
        matches!(self, Self::Sequential(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing() {
        assert_eq!(AriaRole::parse("BUTTON"), Some(AriaRole::Button));
        assert_eq!(AriaRole::parse(" switch button"), Some(AriaRole::Switch));
        assert_eq!(AriaRole::parse("widget"), Some(AriaRole::Custom("widget".into())));
        assert_eq!(AriaRole::parse("   "), None);
        assert!(AriaRole::Button.is_widget());
        assert!(!AriaRole::Math.is_widget());
    }

    #[test]
    fn test_tab_index() {
        assert_eq!(TabIndex::parse("-1"), Some(TabIndex::NotFocusable(-1)));
        assert_eq!(TabIndex::parse("-5").map(|t| t.value()), Some(-5));
        assert_eq!(TabIndex::parse(" 0 "), Some(TabIndex::Sequential(0)));
        assert_eq!(TabIndex::parse("abc"), None);
        assert!(TabIndex::Sequential(5).is_focusable());
        assert!(!TabIndex::NotFocusable(-5).is_focusable());
    }
}
