use serde::Deserialize;

use super::base::Base;
use super::defaults::{Fallback, Rule};
use super::{Component, MountContext, RenderOptions};
use crate::html::{Attributes, ClassList};
use crate::traits::{SizeFamily, VariantFamily};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Spinner {
    #[serde(flatten)]
    pub base: Base,
    /// `border` or `grow`
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub variant: Option<String>,
    pub size: Option<String>,
    /// Visually hidden status text
    pub label: Option<String>,
    pub tag: Option<String>,
}

impl Spinner {
    fn family(&self) -> SizeFamily {
        match self.kind.as_deref() {
            Some("grow") => SizeFamily::SpinnerGrow,
            _ => SizeFamily::SpinnerBorder,
        }
    }
}

impl Component for Spinner {
    const NAME: &'static str = "spinner";

    const RULES: &'static [Rule] = &[
        Rule::falsy("type", Fallback::Str("border")),
        Rule::coalesce("variant"),
        Rule::coalesce("size"),
        Rule::falsy("label", Fallback::Str("Loading...")),
        Rule::falsy("tag", Fallback::Str("div")),
    ];

    fn mount(&mut self, ctx: &MountContext<'_>) {
        let d = Self::defaults(ctx);
        self.base.mount(&d);
        d.apply("type", &mut self.kind);
        d.apply("variant", &mut self.variant);
        d.apply("size", &mut self.size);
        d.apply("label", &mut self.label);
        d.apply("tag", &mut self.tag);
    }

    fn options(&self) -> RenderOptions {
        let family = self.family();
        let base_class = match family {
            SizeFamily::SpinnerGrow => "spinner-grow",
            _ => "spinner-border",
        };

        let mut classes = ClassList::new();
        classes
            .push(base_class)
            .push_opt(family.class_for(self.size.as_deref()))
            .push_opt(VariantFamily::Text.class_for(self.variant.as_deref(), false));
        self.base.extend_classes(&mut classes);

        let mut attrs = Attributes::new();
        attrs.set_opt("id", self.base.id()).set("role", "status");
        self.base.finish_attributes(&mut attrs);

        RenderOptions::new()
            .with_opt("tag", self.tag.clone())
            .with_opt("label", self.label.clone())
            .with("labelClasses", "visually-hidden")
            .with("classes", classes.build())
            .with("attrs", attrs)
    }
}
