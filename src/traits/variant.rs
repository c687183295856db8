//! Semantic color variants and their per-family class names

/// Semantic color category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
    Light,
    Dark,
    /// Only meaningful for buttons (`btn-link`)
    Link,
}

impl Variant {
    /// Parse a variant name case-insensitively; unknown names yield `None`
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "primary" => Some(Self::Primary),
            "secondary" => Some(Self::Secondary),
            "success" => Some(Self::Success),
            "danger" => Some(Self::Danger),
            "warning" => Some(Self::Warning),
            "info" => Some(Self::Info),
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "link" => Some(Self::Link),
            "" => None,
            other => {
                tracing::debug!("Ignoring unknown variant '{}'", other);
                None
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Link => "link",
        }
    }
}

/// Component family deciding how a variant maps to a class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantFamily {
    Button,
    Alert,
    Badge,
    Link,
    ListGroupItem,
    Text,
    Background,
    Border,
    TextBackground,
}

impl VariantFamily {
    /// Variant substituted when none is given (only some families have one)
    pub fn fallback(&self) -> Option<Variant> {
        match self {
            Self::Button | Self::Alert | Self::Badge => Some(Variant::Primary),
            _ => None,
        }
    }

    /// Class for a variant in this family. `outline` only affects buttons.
    pub fn class(&self, variant: Option<Variant>, outline: bool) -> Option<String> {
        let variant = variant.or_else(|| self.fallback())?;
        let v = variant.as_str();
        let class = match self {
            Self::Button if variant == Variant::Link => "btn-link".to_string(),
            Self::Button if outline => format!("btn-outline-{}", v),
            Self::Button => format!("btn-{}", v),
            Self::Alert => format!("alert-{}", v),
            Self::Badge | Self::TextBackground => format!("text-bg-{}", v),
            Self::Link => format!("link-{}", v),
            Self::ListGroupItem => format!("list-group-item-{}", v),
            Self::Text => format!("text-{}", v),
            Self::Background => format!("bg-{}", v),
            Self::Border => format!("border-{}", v),
        };
        Some(class)
    }

    /// Convenience for string-typed props
    pub fn class_for(&self, variant: Option<&str>, outline: bool) -> Option<String> {
        self.class(variant.and_then(Variant::parse), outline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_variants() {
        let f = VariantFamily::Button;
        assert_eq!(f.class(Some(Variant::Primary), false).as_deref(), Some("btn-primary"));
        assert_eq!(
            f.class(Some(Variant::Primary), true).as_deref(),
            Some("btn-outline-primary")
        );
        assert_eq!(f.class(Some(Variant::Link), true).as_deref(), Some("btn-link"));
        assert_eq!(f.class(None, false).as_deref(), Some("btn-primary"));
    }

    #[test]
    fn test_badge_ignores_outline() {
        let f = VariantFamily::Badge;
        assert_eq!(
            f.class(Some(Variant::Danger), true).as_deref(),
            Some("text-bg-danger")
        );
        assert_eq!(f.class(None, false).as_deref(), Some("text-bg-primary"));
    }

    #[test]
    fn test_link_without_variant_has_no_class() {
        assert_eq!(VariantFamily::Link.class(None, false), None);
        assert_eq!(
            VariantFamily::Link.class(Some(Variant::Success), true).as_deref(),
            Some("link-success")
        );
    }

    #[test]
    fn test_other_families() {
        assert_eq!(
            VariantFamily::Alert.class_for(Some("Warning"), false).as_deref(),
            Some("alert-warning")
        );
        assert_eq!(VariantFamily::ListGroupItem.class_for(None, false), None);
        assert_eq!(
            VariantFamily::Border.class_for(Some("info"), false).as_deref(),
            Some("border-info")
        );
    }

    #[test]
    fn test_unknown_variant_falls_back() {
        assert_eq!(Variant::parse("chartreuse"), None);
        assert_eq!(
            VariantFamily::Button.class_for(Some("chartreuse"), false).as_deref(),
            Some("btn-primary")
        );
        assert_eq!(VariantFamily::Text.class_for(Some("chartreuse"), false), None);
    }
}
