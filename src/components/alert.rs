use serde::Deserialize;

use super::base::Base;
use super::defaults::{Fallback, Rule};
use super::{Component, MountContext, RenderOptions};
use crate::html::{Attributes, ClassList};
use crate::traits::{Controllers, VariantFamily};

const CONTROLLER: &str = "bs-alert";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Alert {
    #[serde(flatten)]
    pub base: Base,
    pub variant: Option<String>,
    pub dismissible: Option<bool>,
    pub fade: Option<bool>,
    pub auto_hide: Option<bool>,
    /// Milliseconds before an auto-hiding alert closes
    pub auto_hide_delay: Option<i64>,
    pub role: Option<String>,
    pub icon: Option<String>,
    pub message: Option<String>,
}

impl Alert {
    fn controllers(&self) -> Controllers {
        let mut controllers = Controllers::new();
        if self.auto_hide.unwrap_or(false) {
            controllers
                .add(CONTROLLER)
                .value(CONTROLLER, "autoHide", true)
                .value(CONTROLLER, "delay", self.auto_hide_delay.unwrap_or(5000));
        }
        controllers
    }
}

impl Component for Alert {
    const NAME: &'static str = "alert";

    const RULES: &'static [Rule] = &[
        Rule::falsy("variant", Fallback::Str("primary")),
        Rule::or("dismissible"),
        Rule::coalesce("fade"),
        Rule::or("auto_hide"),
        Rule::falsy("auto_hide_delay", Fallback::Int(5000)),
        Rule::falsy("role", Fallback::Str("alert")),
        Rule::coalesce("icon"),
        Rule::coalesce("message"),
    ];

    fn mount(&mut self, ctx: &MountContext<'_>) {
        let d = Self::defaults(ctx);
        self.base.mount(&d);
        d.apply("variant", &mut self.variant);
        d.apply("dismissible", &mut self.dismissible);
        d.apply("fade", &mut self.fade);
        d.apply("auto_hide", &mut self.auto_hide);
        d.apply("auto_hide_delay", &mut self.auto_hide_delay);
        d.apply("role", &mut self.role);
        d.apply("icon", &mut self.icon);
        d.apply("message", &mut self.message);
    }

    fn options(&self) -> RenderOptions {
        let dismissible = self.dismissible.unwrap_or(false);

        let mut classes = ClassList::new();
        classes
            .push("alert")
            .push_opt(VariantFamily::Alert.class_for(self.variant.as_deref(), false))
            .push_if(dismissible, "alert-dismissible")
            .push_if(self.fade.unwrap_or(true), "fade show");
        self.base.extend_classes(&mut classes);

        let mut attrs = Attributes::new();
        attrs
            .set_opt("id", self.base.id())
            .set_opt("role", self.role.as_deref());
        attrs.merge(&self.controllers().attributes());
        self.base.finish_attributes(&mut attrs);

        let mut close = Attributes::new();
        close
            .set("type", "button")
            .set("class", "btn-close")
            .set("data-bs-dismiss", "alert")
            .set("aria-label", "Close");

        RenderOptions::new()
            .with_opt("message", self.message.clone())
            .with_opt("icon", self.icon.clone())
            .with("dismissible", dismissible)
            .with("closeAttrs", close)
            .with("classes", classes.build())
            .with("attrs", attrs)
    }
}
