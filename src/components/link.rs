use serde::Deserialize;

use super::base::{Base, Interactive};
use super::defaults::{Fallback, Rule};
use super::{Component, MountContext, RenderOptions};
use crate::html::{Attributes, ClassList};
use crate::traits::{BlockStyle, ElementKind, VariantFamily};

/// Placeholder `href` for disabled links
pub const DISABLED_HREF: &str = "javascript:void(0)";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Link {
    #[serde(flatten)]
    pub base: Base,
    #[serde(flatten)]
    pub interactive: Interactive,
    /// Underline color variant (`link-underline-{v}`)
    pub underline: Option<String>,
    pub underline_opacity: Option<i64>,
    pub offset: Option<i64>,
    pub opacity: Option<i64>,
    pub label: Option<String>,
}

impl Link {
    fn href(&self) -> &str {
        if self.interactive.is_disabled() {
            DISABLED_HREF
        } else {
            self.interactive.href().unwrap_or("#")
        }
    }
}

impl Component for Link {
    const NAME: &'static str = "link";

    const RULES: &'static [Rule] = &[
        Rule::coalesce("variant"),
        Rule::or("outline"),
        Rule::coalesce("size"),
        Rule::or("block"),
        Rule::or("active"),
        Rule::or("disabled"),
        Rule::falsy("href", Fallback::Str("#")),
        Rule::coalesce("target"),
        Rule::coalesce("icon_start"),
        Rule::coalesce("icon_end"),
        Rule::coalesce("icon_gap"),
        Rule::or("icon_only"),
        Rule::coalesce("tooltip"),
        Rule::coalesce("popover"),
        Rule::coalesce("underline"),
        Rule::coalesce("underline_opacity"),
        Rule::coalesce("offset"),
        Rule::coalesce("opacity"),
        Rule::coalesce("label"),
    ];

    fn mount(&mut self, ctx: &MountContext<'_>) {
        let d = Self::defaults(ctx);
        self.base.mount(&d);
        self.interactive.mount(&d);
        d.apply("underline", &mut self.underline);
        d.apply("underline_opacity", &mut self.underline_opacity);
        d.apply("offset", &mut self.offset);
        d.apply("opacity", &mut self.opacity);
        d.apply("label", &mut self.label);
    }

    fn options(&self) -> RenderOptions {
        let i = &self.interactive;
        let href = self.href();

        let mut classes = ClassList::new();
        classes
            .push_opt(VariantFamily::Link.class(i.variant(), false))
            .push_opt(
                self.underline
                    .as_deref()
                    .filter(|u| !u.is_empty())
                    .map(|u| format!("link-underline-{}", u)),
            )
            .push_opt(
                self.underline_opacity
                    .map(|o| format!("link-underline-opacity-{}", o.clamp(0, 100))),
            )
            .push_opt(self.offset.map(|o| format!("link-offset-{}", o.clamp(1, 3))))
            .push_opt(self.opacity.map(|o| format!("link-opacity-{}", o.clamp(0, 100))))
            .push_if(i.icons.has_icons(), "icon-link")
            .append(&i.state_classes(ElementKind::Anchor, BlockStyle::Display));
        self.base.extend_classes(&mut classes);

        let mut attrs = Attributes::new();
        attrs.set_opt("id", self.base.id()).set("href", href);
        attrs.merge(&i.target_attributes());
        if i.active.unwrap_or(false) {
            attrs.set("aria-current", "page");
        }
        attrs.merge(&i.state().attributes(ElementKind::Anchor, false));
        attrs.merge(&i.overlay().attributes());
        attrs.merge(&i.controllers(&[]).attributes());
        self.base.finish_attributes(&mut attrs);

        RenderOptions::new()
            .with("href", href)
            .with_opt("label", self.label.clone())
            .with("icons", i.icon_options())
            .with("classes", classes.build())
            .with("attrs", attrs)
    }
}
