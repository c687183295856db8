use serde::Deserialize;

use super::base::Base;
use super::defaults::{Fallback, Rule};
use super::{Component, MountContext, RenderOptions};
use crate::html::{Attributes, ClassList};
use crate::traits::{BlockStyle, ElementKind, StateFlags};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Nav {
    #[serde(flatten)]
    pub base: Base,
    /// `tabs`, `pills` or `underline`
    pub variant: Option<String>,
    pub fill: Option<bool>,
    pub justified: Option<bool>,
    pub vertical: Option<bool>,
    /// `center` or `end`
    pub align: Option<String>,
    pub tag: Option<String>,
}

impl Component for Nav {
    const NAME: &'static str = "nav";

    const RULES: &'static [Rule] = &[
        Rule::coalesce("variant"),
        Rule::or("fill"),
        Rule::or("justified"),
        Rule::or("vertical"),
        Rule::coalesce("align"),
        Rule::falsy("tag", Fallback::Str("ul")),
    ];

    fn mount(&mut self, ctx: &MountContext<'_>) {
        let d = Self::defaults(ctx);
        self.base.mount(&d);
        d.apply("variant", &mut self.variant);
        d.apply("fill", &mut self.fill);
        d.apply("justified", &mut self.justified);
        d.apply("vertical", &mut self.vertical);
        d.apply("align", &mut self.align);
        d.apply("tag", &mut self.tag);
    }

    fn options(&self) -> RenderOptions {
        let variant = match self.variant.as_deref() {
            Some(v @ ("tabs" | "pills" | "underline")) => Some(format!("nav-{}", v)),
            Some(other) if !other.is_empty() => {
                tracing::debug!("Ignoring unknown nav variant '{}'", other);
                None
            }
            _ => None,
        };

        let mut classes = ClassList::new();
        classes
            .push("nav")
            .push_opt(variant)
            .push_if(self.fill.unwrap_or(false), "nav-fill")
            .push_if(self.justified.unwrap_or(false), "nav-justified")
            .push_if(self.vertical.unwrap_or(false), "flex-column")
            .push_opt(
                self.align
                    .as_deref()
                    .filter(|a| !a.is_empty())
                    .map(|a| format!("justify-content-{}", a)),
            );
        self.base.extend_classes(&mut classes);

        let mut attrs = Attributes::new();
        attrs.set_opt("id", self.base.id());
        if self.variant.as_deref() == Some("tabs") {
            attrs.set("role", "tablist");
        }
        self.base.finish_attributes(&mut attrs);

        RenderOptions::new()
            .with_opt("tag", self.tag.clone())
            .with("classes", classes.build())
            .with("attrs", attrs)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavItem {
    #[serde(flatten)]
    pub base: Base,
    pub href: Option<String>,
    pub label: Option<String>,
    pub active: Option<bool>,
    pub disabled: Option<bool>,
    pub target: Option<String>,
    /// `tab` or `pill` to switch panes client-side
    pub toggle: Option<String>,
}

impl Component for NavItem {
    const NAME: &'static str = "nav-item";

    const RULES: &'static [Rule] = &[
        Rule::falsy("href", Fallback::Str("#")),
        Rule::coalesce("label"),
        Rule::or("active"),
        Rule::or("disabled"),
        Rule::coalesce("target"),
        Rule::coalesce("toggle"),
    ];

    fn mount(&mut self, ctx: &MountContext<'_>) {
        let d = Self::defaults(ctx);
        self.base.mount(&d);
        d.apply("href", &mut self.href);
        d.apply("label", &mut self.label);
        d.apply("active", &mut self.active);
        d.apply("disabled", &mut self.disabled);
        d.apply("target", &mut self.target);
        d.apply("toggle", &mut self.toggle);
    }

    fn options(&self) -> RenderOptions {
        let active = self.active.unwrap_or(false);
        let state = StateFlags::new(active, self.disabled.unwrap_or(false), false);
        let toggle = self.toggle.as_deref().filter(|t| !t.is_empty());

        let mut classes = ClassList::new();
        classes.push("nav-item");
        self.base.extend_classes(&mut classes);

        let mut attrs = Attributes::new();
        attrs.set_opt("id", self.base.id());
        self.base.finish_attributes(&mut attrs);

        let mut link_classes = ClassList::new();
        link_classes
            .push("nav-link")
            .append(&state.classes(ElementKind::Anchor, BlockStyle::Display));

        let mut link_attrs = Attributes::new();
        link_attrs.set("href", self.href.as_deref().unwrap_or("#"));
        if let Some(target) = self.target.as_deref().filter(|t| !t.is_empty()) {
            link_attrs.set("target", target);
            if target == "_blank" {
                link_attrs.set("rel", "noopener noreferrer");
            }
        }
        match toggle {
            Some(toggle) => {
                link_attrs
                    .set("data-bs-toggle", toggle)
                    .set("role", "tab")
                    .set("aria-selected", active.to_string());
            }
            None if active => {
                link_attrs.set("aria-current", "page");
            }
            None => {}
        }
        link_attrs.merge(&state.attributes(ElementKind::Anchor, false));

        RenderOptions::new()
            .with_opt("label", self.label.clone())
            .with("linkClasses", link_classes.build())
            .with("linkAttrs", link_attrs)
            .with("classes", classes.build())
            .with("attrs", attrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::Harness;
    use serde_json::json;

    #[test]
    fn test_nav_classes() {
        let h = Harness::new();
        let options = h.render::<Nav>(json!({}));
        assert_eq!(options.str("classes"), Some("nav"));
        assert_eq!(options.str("tag"), Some("ul"));

        let options = h.render::<Nav>(json!({
            "variant": "pills",
            "fill": true,
            "vertical": true,
            "align": "center",
        }));
        assert_eq!(
            options.str("classes"),
            Some("nav nav-pills nav-fill flex-column justify-content-center")
        );
    }

    #[test]
    fn test_tabs_get_tablist_role() {
        let h = Harness::new();
        let options = h.render::<Nav>(json!({ "variant": "tabs" }));
        assert_eq!(options.str("classes"), Some("nav nav-tabs"));
        assert_eq!(options.attributes("attrs").get_str("role"), Some("tablist"));

        let options = h.render::<Nav>(json!({ "variant": "sideways" }));
        assert_eq!(options.str("classes"), Some("nav"));
    }

    #[test]
    fn test_active_nav_item() {
        let h = Harness::new();
        let options = h.render::<NavItem>(json!({
            "href": "/home",
            "label": "Home",
            "active": true,
        }));
        assert_eq!(options.str("classes"), Some("nav-item"));
        assert_eq!(options.str("linkClasses"), Some("nav-link active"));
        assert_eq!(
            options.attributes("linkAttrs").render(),
            "href=\"/home\" aria-current=\"page\""
        );
    }

    #[test]
    fn test_disabled_nav_item() {
        let h = Harness::new();
        let options = h.render::<NavItem>(json!({ "disabled": true }));
        assert_eq!(options.str("linkClasses"), Some("nav-link disabled"));
        assert_eq!(
            options.attributes("linkAttrs").render(),
            "href=\"#\" aria-disabled=\"true\" tabindex=\"-1\""
        );
    }

    #[test]
    fn test_tab_toggle() {
        let h = Harness::new();
        let options = h.render::<NavItem>(json!({
            "href": "#profile",
            "toggle": "tab",
            "active": true,
        }));
        let attrs = options.attributes("linkAttrs");
        assert_eq!(attrs.get_str("data-bs-toggle"), Some("tab"));
        assert_eq!(attrs.get_str("role"), Some("tab"));
        assert_eq!(attrs.get_str("aria-selected"), Some("true"));
        assert!(!attrs.contains("aria-current"));
    }
}
