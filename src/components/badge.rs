use serde::Deserialize;
use serde_json::Value;

use super::base::Base;
use super::defaults::{Fallback, Rule};
use super::{Component, MountContext, RenderOptions};
use crate::html::{Attributes, ClassList};
use crate::traits::{Controllers, Tooltip, VariantFamily};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Badge {
    #[serde(flatten)]
    pub base: Base,
    pub variant: Option<String>,
    pub text: Option<String>,
    pub pill: Option<bool>,
    pub href: Option<String>,
    /// Pin to the top-right corner of a relatively positioned parent
    pub positioned: Option<bool>,
    pub tooltip: Option<Value>,
}

impl Badge {
    fn href(&self) -> Option<&str> {
        self.href.as_deref().filter(|h| !h.is_empty())
    }
}

impl Component for Badge {
    const NAME: &'static str = "badge";

    const RULES: &'static [Rule] = &[
        Rule::falsy("variant", Fallback::Str("primary")),
        Rule::coalesce("text"),
        Rule::or("pill"),
        Rule::coalesce("href"),
        Rule::or("positioned"),
        Rule::coalesce("tooltip"),
    ];

    fn mount(&mut self, ctx: &MountContext<'_>) {
        let d = Self::defaults(ctx);
        self.base.mount(&d);
        d.apply("variant", &mut self.variant);
        d.apply("text", &mut self.text);
        d.apply("pill", &mut self.pill);
        d.apply("href", &mut self.href);
        d.apply("positioned", &mut self.positioned);
        d.apply("tooltip", &mut self.tooltip);
    }

    fn options(&self) -> RenderOptions {
        let tag = if self.href().is_some() { "a" } else { "span" };

        let mut classes = ClassList::new();
        classes
            .push("badge")
            .push_opt(VariantFamily::Badge.class_for(self.variant.as_deref(), false))
            .push_if(self.pill.unwrap_or(false), "rounded-pill")
            .push_if(
                self.positioned.unwrap_or(false),
                "position-absolute top-0 start-100 translate-middle",
            );
        self.base.extend_classes(&mut classes);

        let tooltip = Tooltip::from_value(self.tooltip.as_ref());
        let mut controllers = Controllers::new();
        if tooltip.is_enabled() {
            controllers.add("bs-tooltip");
        }

        let mut attrs = Attributes::new();
        attrs
            .set_opt("id", self.base.id())
            .set_opt("href", self.href());
        attrs.merge(&tooltip.attributes());
        attrs.merge(&controllers.attributes());
        self.base.finish_attributes(&mut attrs);

        RenderOptions::new()
            .with("tag", tag)
            .with_opt("text", self.text.clone())
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
    fn test_danger_pill_link() {
        let h = Harness::new();
        let options = h.render::<Badge>(json!({
            "variant": "danger",
            "pill": true,
            "href": "/n",
            "text": "3",
        }));
        let list = classes(&options, "classes");
        assert!(list.contains(&"badge".to_string()));
        assert!(list.contains(&"text-bg-danger".to_string()));
        assert!(list.contains(&"rounded-pill".to_string()));
        assert_eq!(options.str("tag"), Some("a"));
        assert_eq!(options.attributes("attrs").get_str("href"), Some("/n"));
    }

    #[test]
    fn test_default_span() {
        let h = Harness::new();
        let options = h.render::<Badge>(json!({ "text": "New" }));
        assert_eq!(options.str("tag"), Some("span"));
        assert_eq!(options.str("classes"), Some("badge text-bg-primary"));
        assert!(options.attributes("attrs").is_empty());
    }

    #[test]
    fn test_config_variant() {
        let h = Harness::with_config("[badge]\nvariant = \"info\"\n");
        let options = h.render::<Badge>(json!({}));
        assert_eq!(options.str("classes"), Some("badge text-bg-info"));
    }

    #[test]
    fn test_positioned_with_tooltip() {
        let h = Harness::new();
        let options = h.render::<Badge>(json!({
            "positioned": true,
            "tooltip": { "text": "Unread", "placement": "bottom" },
        }));
        assert!(options
            .str("classes")
            .unwrap()
            .ends_with("position-absolute top-0 start-100 translate-middle"));
        let attrs = options.attributes("attrs");
        assert_eq!(attrs.get_str("data-bs-title"), Some("Unread"));
        assert_eq!(attrs.get_str("data-bs-placement"), Some("bottom"));
        assert_eq!(attrs.get_str("data-controller"), Some("bs-tooltip"));
    }
}
