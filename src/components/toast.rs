use serde::Deserialize;

use super::base::Base;
use super::defaults::{Fallback, Rule};
use super::ids::ensure_id;
use super::{Component, MountContext, RenderOptions};
use crate::html::{Attributes, ClassList};
use crate::traits::{Controllers, VariantFamily};

const CONTROLLER: &str = "bs-toast";
const DEFAULT_DELAY: i64 = 5000;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Toast {
    #[serde(flatten)]
    pub base: Base,
    pub title: Option<String>,
    /// Small text next to the title (`11 mins ago`)
    pub subtitle: Option<String>,
    pub body: Option<String>,
    pub variant: Option<String>,
    pub autohide: Option<bool>,
    pub delay: Option<i64>,
    pub animation: Option<bool>,
    pub show_close: Option<bool>,
    /// Show as soon as the element connects
    pub auto_show: Option<bool>,
}

impl Component for Toast {
    const NAME: &'static str = "toast";

    const RULES: &'static [Rule] = &[
        Rule::coalesce("title"),
        Rule::coalesce("subtitle"),
        Rule::coalesce("body"),
        Rule::coalesce("variant"),
        Rule::coalesce("autohide"),
        Rule::falsy("delay", Fallback::Int(DEFAULT_DELAY)),
        Rule::coalesce("animation"),
        Rule::coalesce("show_close"),
        Rule::or("auto_show"),
    ];

    fn mount(&mut self, ctx: &MountContext<'_>) {
        let d = Self::defaults(ctx);
        self.base.mount(&d);
        d.apply("title", &mut self.title);
        d.apply("subtitle", &mut self.subtitle);
        d.apply("body", &mut self.body);
        d.apply("variant", &mut self.variant);
        d.apply("autohide", &mut self.autohide);
        d.apply("delay", &mut self.delay);
        d.apply("animation", &mut self.animation);
        d.apply("show_close", &mut self.show_close);
        d.apply("auto_show", &mut self.auto_show);
        ensure_id(&mut self.base.id, ctx.ids, "toast");
    }

    fn options(&self) -> RenderOptions {
        let variant = VariantFamily::TextBackground.class_for(self.variant.as_deref(), false);
        let has_header = self.title.is_some() || self.subtitle.is_some();
        let autohide = self.autohide.unwrap_or(true);
        let delay = self.delay.unwrap_or(DEFAULT_DELAY);

        let mut classes = ClassList::new();
        classes
            .push("toast")
            .push_if(!has_header, "align-items-center")
            .push_if(variant.is_some(), "border-0")
            .push_opt(variant);
        self.base.extend_classes(&mut classes);

        let mut controllers = Controllers::new();
        if self.auto_show.unwrap_or(false) {
            controllers.add(CONTROLLER).value(CONTROLLER, "autoShow", true);
        }

        let mut attrs = Attributes::new();
        attrs
            .set_opt("id", self.base.id())
            .set("role", "alert")
            .set("aria-live", "assertive")
            .set("aria-atomic", "true");
        if !autohide {
            attrs.set("data-bs-autohide", "false");
        } else if delay != DEFAULT_DELAY {
            attrs.set("data-bs-delay", delay.to_string());
        }
        if self.animation == Some(false) {
            attrs.set("data-bs-animation", "false");
        }
        attrs.merge(&controllers.attributes());
        self.base.finish_attributes(&mut attrs);

        let mut close = Attributes::new();
        close
            .set("type", "button")
            .set("class", "btn-close")
            .set("data-bs-dismiss", "toast")
            .set("aria-label", "Close");

        RenderOptions::new()
            .with_opt("title", self.title.clone())
            .with_opt("subtitle", self.subtitle.clone())
            .with_opt("body", self.body.clone())
            .with("hasHeader", has_header)
            .with("showClose", self.show_close.unwrap_or(true))
            .with("closeAttrs", close)
            .with("classes", classes.build())
            .with("attrs", attrs)
    }
}
