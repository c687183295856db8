//! Icon slots and label spacing

use serde::Deserialize;

use crate::traits::size::Size;

const MAX_GAP: i64 = 5;
const DEFAULT_GAP: i64 = 2;
const SMALL_GAP: i64 = 1;

/// Leading/trailing icon configuration shared by buttons and links
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IconSlots {
    pub icon_start: Option<String>,
    pub icon_end: Option<String>,
    pub icon_gap: Option<i64>,
    pub icon_only: Option<bool>,
}

impl IconSlots {
    pub fn has_icons(&self) -> bool {
        self.icon_start.as_deref().is_some_and(|s| !s.is_empty())
            || self.icon_end.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Effective gap: explicit value clamped to 0..=5, otherwise size-dependent
    pub fn gap(&self, size: Option<Size>) -> i64 {
        match self.icon_gap {
            Some(gap) => gap.clamp(0, MAX_GAP),
            None if size == Some(Size::Sm) => SMALL_GAP,
            None => DEFAULT_GAP,
        }
    }

    /// Spacing class for the icon before the label
    pub fn start_class(&self, size: Option<Size>) -> Option<String> {
        self.spacing("me", self.icon_start.as_deref(), size)
    }

    /// Spacing class for the icon after the label
    pub fn end_class(&self, size: Option<Size>) -> Option<String> {
        self.spacing("ms", self.icon_end.as_deref(), size)
    }

    fn spacing(&self, side: &str, icon: Option<&str>, size: Option<Size>) -> Option<String> {
        icon.filter(|i| !i.is_empty())?;
        if self.icon_only.unwrap_or(false) {
            return None;
        }
        match self.gap(size) {
            0 => None,
            n => Some(format!("{}-{}", side, n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(start: Option<&str>, end: Option<&str>, gap: Option<i64>) -> IconSlots {
        IconSlots {
            icon_start: start.map(String::from),
            icon_end: end.map(String::from),
            icon_gap: gap,
            icon_only: None,
        }
    }

    #[test]
    fn test_default_gap() {
        let s = slots(Some("bi:check"), Some("bi:arrow"), None);
        assert_eq!(s.start_class(None).as_deref(), Some("me-2"));
        assert_eq!(s.end_class(None).as_deref(), Some("ms-2"));
    }

    #[test]
    fn test_small_size_gap() {
        let s = slots(Some("bi:check"), None, None);
        assert_eq!(s.start_class(Some(Size::Sm)).as_deref(), Some("me-1"));
        assert_eq!(s.end_class(Some(Size::Sm)), None);
    }

    #[test]
    fn test_gap_is_clamped() {
        assert_eq!(slots(Some("x"), None, Some(9)).start_class(None).as_deref(), Some("me-5"));
        assert_eq!(slots(Some("x"), None, Some(-3)).start_class(None), None);
        assert_eq!(slots(Some("x"), None, Some(0)).start_class(None), None);
    }

    #[test]
    fn test_icon_only_has_no_spacing() {
        let mut s = slots(Some("x"), None, Some(3));
        s.icon_only = Some(true);
        assert_eq!(s.start_class(None), None);
        assert!(s.has_icons());
    }
}
