use serde::Deserialize;

use super::base::{Base, Interactive};
use super::defaults::{Fallback, Rule};
use super::{Component, MountContext, RenderOptions};
use crate::html::{Attributes, ClassList};
use crate::traits::{BlockStyle, ElementKind, SizeFamily, VariantFamily};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Button {
    #[serde(flatten)]
    pub base: Base,
    #[serde(flatten)]
    pub interactive: Interactive,
    pub label: Option<String>,
    /// `type` attribute of a `<button>` (`button`, `submit`, `reset`)
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl Button {
    fn tag(&self) -> &'static str {
        if self.interactive.href().is_some() {
            "a"
        } else {
            "button"
        }
    }
}

impl Component for Button {
    const NAME: &'static str = "button";

    const RULES: &'static [Rule] = &[
        Rule::falsy("variant", Fallback::Str("primary")),
        Rule::or("outline"),
        Rule::coalesce("size"),
        Rule::or("block"),
        Rule::or("active"),
        Rule::or("disabled"),
        Rule::coalesce("href"),
        Rule::coalesce("target"),
        Rule::coalesce("icon_start"),
        Rule::coalesce("icon_end"),
        Rule::coalesce("icon_gap"),
        Rule::or("icon_only"),
        Rule::coalesce("tooltip"),
        Rule::coalesce("popover"),
        Rule::coalesce("label"),
        Rule::falsy("type", Fallback::Str("button")),
    ];

    fn mount(&mut self, ctx: &MountContext<'_>) {
        let d = Self::defaults(ctx);
        self.base.mount(&d);
        self.interactive.mount(&d);
        d.apply("label", &mut self.label);
        d.apply("type", &mut self.kind);
    }

    fn options(&self) -> RenderOptions {
        let i = &self.interactive;
        let tag = self.tag();
        let kind = ElementKind::from_tag(tag);

        let mut classes = ClassList::new();
        classes
            .push("btn")
            .push_opt(VariantFamily::Button.class(i.variant(), i.outline()))
            .push_opt(SizeFamily::Button.class(i.size()))
            .append(&i.state_classes(kind, BlockStyle::Width))
            .push_if(i.icons.icon_only.unwrap_or(false), "btn-icon");
        self.base.extend_classes(&mut classes);

        let mut attrs = Attributes::new();
        attrs.set_opt("id", self.base.id());
        if kind == ElementKind::Anchor {
            attrs.set_opt("href", i.href()).set("role", "button");
            attrs.merge(&i.target_attributes());
        } else {
            attrs.set_opt("type", self.kind.as_deref());
        }
        if i.icons.icon_only.unwrap_or(false) {
            attrs.set_opt("aria-label", self.label.as_deref());
        }
        attrs.merge(&i.state().attributes(kind, true));
        attrs.merge(&i.overlay().attributes());
        attrs.merge(&i.controllers(&[]).attributes());
        self.base.finish_attributes(&mut attrs);

        RenderOptions::new()
            .with("tag", tag)
            .with_opt("label", self.label.clone())
            .with("icons", i.icon_options())
            .with("classes", classes.build())
            .with("attrs", attrs)
    }
}

/// Wrapper for a row (or column) of buttons, or a toolbar of groups
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonGroup {
    #[serde(flatten)]
    pub base: Base,
    pub vertical: Option<bool>,
    pub size: Option<String>,
    pub role: Option<String>,
    pub aria_label: Option<String>,
    pub toolbar: Option<bool>,
}

impl Component for ButtonGroup {
    const NAME: &'static str = "button-group";

    const RULES: &'static [Rule] = &[
        Rule::or("vertical"),
        Rule::coalesce("size"),
        Rule::falsy("role", Fallback::Str("group")),
        Rule::coalesce("aria_label"),
        Rule::or("toolbar"),
    ];

    fn mount(&mut self, ctx: &MountContext<'_>) {
        let d = Self::defaults(ctx);
        self.base.mount(&d);
        d.apply("vertical", &mut self.vertical);
        d.apply("size", &mut self.size);
        d.apply("role", &mut self.role);
        d.apply("aria_label", &mut self.aria_label);
        d.apply("toolbar", &mut self.toolbar);
    }

    fn options(&self) -> RenderOptions {
        let toolbar = self.toolbar.unwrap_or(false);
        let mut classes = ClassList::new();
        if toolbar {
            classes.push("btn-toolbar");
        } else {
            classes
                .push(if self.vertical.unwrap_or(false) {
                    "btn-group-vertical"
                } else {
                    "btn-group"
                })
                .push_opt(SizeFamily::ButtonGroup.class_for(self.size.as_deref()));
        }
        self.base.extend_classes(&mut classes);

        // A toolbar keeps an explicit role but never reports itself as a group
        let role = match self.role.as_deref() {
            Some("group") | None if toolbar => "toolbar",
            Some(role) => role,
            None => "group",
        };

        let mut attrs = Attributes::new();
        attrs
            .set_opt("id", self.base.id())
            .set("role", role)
            .set_opt("aria-label", self.aria_label.as_deref());
        self.base.finish_attributes(&mut attrs);

        RenderOptions::new()
            .with("classes", classes.build())
            .with("attrs", attrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::{classes, Harness};
    use serde_json::json;

    #[test]
    fn test_default_button() {
        let h = Harness::new();
        let options = h.render::<Button>(json!({ "label": "Save" }));
        assert_eq!(options.str("tag"), Some("button"));
        assert_eq!(options.str("classes"), Some("btn btn-primary"));
        assert_eq!(options.attributes("attrs").render(), "type=\"button\"");
        assert_eq!(options.str("label"), Some("Save"));
    }

    #[test]
    fn test_outline_and_size() {
        let h = Harness::new();
        let options = h.render::<Button>(json!({
            "variant": "danger",
            "outline": true,
            "size": "lg",
            "block": true,
        }));
        assert_eq!(
            classes(&options, "classes"),
            ["btn", "btn-outline-danger", "btn-lg", "w-100"]
        );
    }

    #[test]
    fn test_href_turns_into_anchor() {
        let h = Harness::new();
        let options = h.render::<Button>(json!({ "href": "/docs", "target": "_blank" }));
        assert_eq!(options.str("tag"), Some("a"));
        let attrs = options.attributes("attrs");
        assert_eq!(attrs.get_str("href"), Some("/docs"));
        assert_eq!(attrs.get_str("role"), Some("button"));
        assert_eq!(attrs.get_str("rel"), Some("noopener noreferrer"));
        assert!(!attrs.contains("type"));
    }

    #[test]
    fn test_disabled_button_vs_anchor() {
        let h = Harness::new();
        let button = h.render::<Button>(json!({ "disabled": true }));
        assert!(!classes(&button, "classes").contains(&"disabled".to_string()));
        assert_eq!(button.attributes("attrs").get("disabled"), Some(&json!(true)));

        let anchor = h.render::<Button>(json!({ "disabled": true, "href": "/x" }));
        assert!(classes(&anchor, "classes").contains(&"disabled".to_string()));
        let attrs = anchor.attributes("attrs");
        assert_eq!(attrs.get_str("aria-disabled"), Some("true"));
        assert_eq!(attrs.get_str("tabindex"), Some("-1"));
        assert!(!attrs.contains("disabled"));
    }

    #[test]
    fn test_active_sets_aria_pressed() {
        let h = Harness::new();
        let options = h.render::<Button>(json!({ "active": true }));
        assert!(classes(&options, "classes").contains(&"active".to_string()));
        assert_eq!(options.attributes("attrs").get_str("aria-pressed"), Some("true"));
    }

    #[test]
    fn test_config_variant_and_or_merge() {
        let h = Harness::with_config("[button]\nvariant = \"secondary\"\noutline = true\n");
        let options = h.render::<Button>(json!({ "outline": false }));
        assert!(classes(&options, "classes").contains(&"btn-outline-secondary".to_string()));

        // empty explicit variant falls through to config
        let options = h.render::<Button>(json!({ "variant": "" }));
        assert!(classes(&options, "classes").contains(&"btn-outline-secondary".to_string()));
    }

    #[test]
    fn test_tooltip_attaches_controller() {
        let h = Harness::new();
        let options = h.render::<Button>(json!({ "tooltip": "Save <b>now</b>" }));
        let attrs = options.attributes("attrs");
        assert_eq!(attrs.get_str("data-bs-toggle"), Some("tooltip"));
        assert_eq!(attrs.get_str("data-controller"), Some("bs-tooltip"));
        assert_eq!(attrs.get_str("data-bs-html"), Some("true"));
    }

    #[test]
    fn test_icon_spacing() {
        let h = Harness::new();
        let options = h.render::<Button>(json!({ "iconStart": "bi:plus", "size": "sm" }));
        assert_eq!(options.get("icons").unwrap()["startClasses"], json!("me-1"));

        let options = h.render::<Button>(json!({ "iconEnd": "bi:arrow", "iconGap": 9 }));
        assert_eq!(options.get("icons").unwrap()["endClasses"], json!("ms-5"));
    }

    #[test]
    fn test_icon_only_labels_the_button() {
        let h = Harness::new();
        let options = h.render::<Button>(json!({
            "iconStart": "bi:x",
            "iconOnly": true,
            "label": "Close",
        }));
        assert!(classes(&options, "classes").contains(&"btn-icon".to_string()));
        assert_eq!(options.attributes("attrs").get_str("aria-label"), Some("Close"));
        assert_eq!(options.get("icons").unwrap()["startClasses"], json!(null));
    }

    #[test]
    fn test_extra_attr_merged_last() {
        let h = Harness::new();
        let options = h.render::<Button>(json!({
            "type": "submit",
            "attr": { "type": "reset", "data-x": "1" },
        }));
        let attrs = options.attributes("attrs");
        assert_eq!(attrs.get_str("type"), Some("reset"));
        assert_eq!(attrs.get_str("data-x"), Some("1"));
    }

    #[test]
    fn test_button_group() {
        let h = Harness::new();
        let options = h.render::<ButtonGroup>(json!({ "size": "sm", "ariaLabel": "Actions" }));
        assert_eq!(options.str("classes"), Some("btn-group btn-group-sm"));
        assert_eq!(
            options.attributes("attrs").render(),
            "role=\"group\" aria-label=\"Actions\""
        );

        let options = h.render::<ButtonGroup>(json!({ "vertical": true }));
        assert_eq!(options.str("classes"), Some("btn-group-vertical"));

        let options = h.render::<ButtonGroup>(json!({ "toolbar": true, "size": "lg" }));
        assert_eq!(options.str("classes"), Some("btn-toolbar"));
        assert_eq!(options.attributes("attrs").get_str("role"), Some("toolbar"));
    }
}
