//! Prop groups shared across components

use serde::Deserialize;
use serde_json::Value;

use super::defaults::Defaults;
use crate::html::{Attributes, ClassList};
use crate::traits::{
    BlockStyle, Controllers, ElementKind, IconSlots, Overlay, Size, StateFlags, Variant,
};

/// `id`, extra `class` and extra `attr` accepted by every component
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Base {
    pub id: Option<String>,
    pub class: Option<String>,
    pub attr: Attributes,
}

impl Base {
    /// Union configured classes with explicit ones; explicit attributes win
    pub fn mount(&mut self, defaults: &Defaults<'_>) {
        let options = defaults.options();

        let mut classes = ClassList::new();
        classes.push_opt(options.get("class").and_then(Value::as_str));
        classes.push_opt(self.class.as_deref());
        self.class = (!classes.is_empty()).then(|| classes.build());

        if let Some(configured) = options.map("attr") {
            let mut attrs = Attributes::from(configured.clone());
            attrs.merge(&self.attr);
            self.attr = attrs;
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|s| !s.is_empty())
    }

    /// Append the extra classes to a component's own class list
    pub fn extend_classes(&self, classes: &mut ClassList) {
        classes.push_opt(self.class.as_deref());
    }

    /// Merge the extra attributes last (right-biased)
    pub fn finish_attributes(&self, attrs: &mut Attributes) {
        attrs.merge(&self.attr);
    }
}

/// Props shared by actionable elements (buttons and links)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Interactive {
    pub variant: Option<String>,
    pub outline: Option<bool>,
    pub size: Option<String>,
    pub block: Option<bool>,
    pub active: Option<bool>,
    pub disabled: Option<bool>,
    pub href: Option<String>,
    pub target: Option<String>,
    #[serde(flatten)]
    pub icons: IconSlots,
    pub tooltip: Option<Value>,
    pub popover: Option<Value>,
}

impl Interactive {
    /// Config keys handled here; each must appear in the owning component's rules
    pub const KEYS: &'static [&'static str] = &[
        "variant", "outline", "size", "block", "active", "disabled", "href", "target",
        "icon_start", "icon_end", "icon_gap", "icon_only", "tooltip", "popover",
    ];

    pub fn mount(&mut self, d: &Defaults<'_>) {
        d.apply("variant", &mut self.variant);
        d.apply("outline", &mut self.outline);
        d.apply("size", &mut self.size);
        d.apply("block", &mut self.block);
        d.apply("active", &mut self.active);
        d.apply("disabled", &mut self.disabled);
        d.apply("href", &mut self.href);
        d.apply("target", &mut self.target);
        d.apply("icon_start", &mut self.icons.icon_start);
        d.apply("icon_end", &mut self.icons.icon_end);
        d.apply("icon_gap", &mut self.icons.icon_gap);
        d.apply("icon_only", &mut self.icons.icon_only);
        d.apply("tooltip", &mut self.tooltip);
        d.apply("popover", &mut self.popover);
    }

    pub fn variant(&self) -> Option<Variant> {
        self.variant.as_deref().and_then(Variant::parse)
    }

    pub fn size(&self) -> Option<Size> {
        self.size.as_deref().and_then(Size::parse)
    }

    pub fn outline(&self) -> bool {
        self.outline.unwrap_or(false)
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled.unwrap_or(false)
    }

    pub fn state(&self) -> StateFlags {
        StateFlags::new(
            self.active.unwrap_or(false),
            self.is_disabled(),
            self.block.unwrap_or(false),
        )
    }

    pub fn href(&self) -> Option<&str> {
        self.href.as_deref().filter(|s| !s.is_empty())
    }

    pub fn overlay(&self) -> Overlay {
        Overlay::resolve(self.tooltip.as_ref(), self.popover.as_ref())
    }

    pub fn state_classes(&self, kind: ElementKind, block_style: BlockStyle) -> ClassList {
        self.state().classes(kind, block_style)
    }

    /// `target` plus a safe `rel` for new windows (anchors only)
    pub fn target_attributes(&self) -> Attributes {
        let mut attrs = Attributes::new();
        if let Some(target) = self.target.as_deref().filter(|t| !t.is_empty()) {
            attrs.set("target", target);
            if target == "_blank" {
                attrs.set("rel", "noopener noreferrer");
            }
        }
        attrs
    }

    /// Overlay hooks; `extra` lists controllers the component always wants
    pub fn controllers(&self, extra: &[&str]) -> Controllers {
        let mut controllers = Controllers::new();
        for name in extra {
            controllers.add(name);
        }
        controllers.add_opt(self.overlay().controller());
        controllers
    }

    /// Icon record for templates: identifiers plus spacing classes
    pub fn icon_options(&self) -> Value {
        let size = self.size();
        serde_json::json!({
            "start": self.icons.icon_start,
            "end": self.icons.icon_end,
            "startClasses": self.icons.start_class(size),
            "endClasses": self.icons.end_class(size),
            "only": self.icons.icon_only.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::defaults::{Fallback, Rule};
    use crate::config::ComponentConfig;
    use serde_json::json;

    const RULES: &[Rule] = &[Rule::falsy("variant", Fallback::Str("primary"))];

    #[test]
    fn test_base_classes_are_unioned() {
        let config = ComponentConfig::from_toml_str("[card]\nclass = \"shadow-sm\"\n").unwrap();
        let d = Defaults::new(config.component("card"), RULES);
        let mut base: Base = serde_json::from_value(json!({ "class": "mb-3 shadow-sm" })).unwrap();
        base.mount(&d);
        assert_eq!(base.class.as_deref(), Some("shadow-sm mb-3"));
    }

    #[test]
    fn test_base_attributes_explicit_wins() {
        let config = ComponentConfig::from_toml_str(
            "[card]\nattr = { \"data-role\" = \"config\", \"data-x\" = \"1\" }\n",
        )
        .unwrap();
        let d = Defaults::new(config.component("card"), RULES);
        let mut base: Base =
            serde_json::from_value(json!({ "attr": { "data-role": "explicit" } })).unwrap();
        base.mount(&d);
        assert_eq!(base.attr.get_str("data-role"), Some("explicit"));
        assert_eq!(base.attr.get_str("data-x"), Some("1"));
    }

    #[test]
    fn test_interactive_deserializes_flattened_icons() {
        let i: Interactive = serde_json::from_value(json!({
            "variant": "danger",
            "iconStart": "bi:trash",
            "iconGap": 3,
            "tooltip": "Delete",
        }))
        .unwrap();
        assert_eq!(i.variant(), Some(Variant::Danger));
        assert_eq!(i.icons.icon_start.as_deref(), Some("bi:trash"));
        assert_eq!(i.icons.icon_gap, Some(3));
        assert_eq!(i.controllers(&[]).names(), ["bs-tooltip"]);
    }

    #[test]
    fn test_target_blank_adds_rel() {
        let i: Interactive = serde_json::from_value(json!({ "target": "_blank" })).unwrap();
        assert_eq!(
            i.target_attributes().render(),
            "target=\"_blank\" rel=\"noopener noreferrer\""
        );
    }
}
