use serde::Deserialize;

use super::base::Base;
use super::defaults::Rule;
use super::{Component, MountContext, RenderOptions};
use crate::html::{Attributes, ClassList};
use crate::traits::{SizeFamily, VariantFamily};

/// Loading skeleton block
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Placeholder {
    #[serde(flatten)]
    pub base: Base,
    /// Grid columns (1-12)
    pub width: Option<i64>,
    pub size: Option<String>,
    pub variant: Option<String>,
    /// `glow` or `wave`, applied to the wrapper
    pub animation: Option<String>,
}

impl Component for Placeholder {
    const NAME: &'static str = "placeholder";

    const RULES: &'static [Rule] = &[
        Rule::coalesce("width"),
        Rule::coalesce("size"),
        Rule::coalesce("variant"),
        Rule::coalesce("animation"),
    ];

    fn mount(&mut self, ctx: &MountContext<'_>) {
        let d = Self::defaults(ctx);
        self.base.mount(&d);
        d.apply("width", &mut self.width);
        d.apply("size", &mut self.size);
        d.apply("variant", &mut self.variant);
        d.apply("animation", &mut self.animation);
    }

    fn options(&self) -> RenderOptions {
        let mut classes = ClassList::new();
        classes
            .push("placeholder")
            .push_opt(self.width.map(|w| format!("col-{}", w.clamp(1, 12))))
            .push_opt(SizeFamily::Placeholder.class_for(self.size.as_deref()))
            .push_opt(VariantFamily::Background.class_for(self.variant.as_deref(), false));
        self.base.extend_classes(&mut classes);

        let wrapper_classes = match self.animation.as_deref() {
            Some(a @ ("glow" | "wave")) => format!("placeholder-{}", a),
            _ => String::new(),
        };

        let mut attrs = Attributes::new();
        attrs
            .set_opt("id", self.base.id())
            .set("aria-hidden", "true");
        self.base.finish_attributes(&mut attrs);

        RenderOptions::new()
            .with("wrapperClasses", wrapper_classes)
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
    fn test_placeholder_classes() {
        let h = Harness::new();
        let options = h.render::<Placeholder>(json!({
            "width": 6,
            "size": "lg",
            "variant": "secondary",
            "animation": "glow",
        }));
        assert_eq!(
            options.str("classes"),
            Some("placeholder col-6 placeholder-lg bg-secondary")
        );
        assert_eq!(options.str("wrapperClasses"), Some("placeholder-glow"));
        assert_eq!(options.attributes("attrs").render(), "aria-hidden=\"true\"");
    }

    #[test]
    fn test_unsupported_values_are_dropped() {
        let h = Harness::new();
        let options = h.render::<Placeholder>(json!({
            "width": 20,
            "size": "xl",
            "animation": "spin",
        }));
        assert_eq!(options.str("classes"), Some("placeholder col-12"));
        assert_eq!(options.str("wrapperClasses"), Some(""));
    }
}
