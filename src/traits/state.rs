//! Active / disabled / block state rendering
//!
//! Anchors cannot carry a real `disabled` attribute, so a disabled link is
//! expressed with a class plus ARIA and tabindex. A disabled `<button>` gets
//! the boolean attribute and no class.

use crate::html::{Attributes, ClassList};

/// Which kind of element the state is rendered onto
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Button,
    Anchor,
    Other,
}

impl ElementKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "button" => Self::Button,
            "a" => Self::Anchor,
            _ => Self::Other,
        }
    }
}

/// How `block` is expressed for the family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStyle {
    /// `w-100` (buttons)
    Width,
    /// `d-block` (links)
    Display,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateFlags {
    pub active: bool,
    pub disabled: bool,
    pub block: bool,
}

impl StateFlags {
    pub fn new(active: bool, disabled: bool, block: bool) -> Self {
        Self {
            active,
            disabled,
            block,
        }
    }

    pub fn classes(&self, kind: ElementKind, block_style: BlockStyle) -> ClassList {
        let mut classes = ClassList::new();
        if self.block {
            classes.push(match block_style {
                BlockStyle::Width => "w-100",
                BlockStyle::Display => "d-block",
            });
        }
        classes.push_if(self.active, "active");
        if self.disabled && kind != ElementKind::Button {
            classes.push("disabled");
        }
        classes
    }

    /// State attributes; `pressable` adds `aria-pressed` for toggle-like roles
    pub fn attributes(&self, kind: ElementKind, pressable: bool) -> Attributes {
        let mut attrs = Attributes::new();
        if self.active && pressable {
            attrs.set("aria-pressed", "true");
        }
        if self.disabled {
            match kind {
                ElementKind::Button => {
                    attrs.flag("disabled");
                }
                ElementKind::Anchor => {
                    attrs.set("aria-disabled", "true").set("tabindex", "-1");
                }
                ElementKind::Other => {
                    attrs.set("aria-disabled", "true");
                }
            }
        }
        attrs
    }
}
