use serde::Deserialize;

use super::base::Base;
use super::defaults::Rule;
use super::ids::ensure_id;
use super::{Component, MountContext, RenderOptions};
use crate::html::{Attributes, ClassList};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Collapse {
    #[serde(flatten)]
    pub base: Base,
    pub show: Option<bool>,
    pub horizontal: Option<bool>,
    pub parent_id: Option<String>,
}

impl Component for Collapse {
    const NAME: &'static str = "collapse";

    const RULES: &'static [Rule] = &[
        Rule::or("show"),
        Rule::or("horizontal"),
        Rule::coalesce("parent_id"),
    ];

    fn mount(&mut self, ctx: &MountContext<'_>) {
        let d = Self::defaults(ctx);
        self.base.mount(&d);
        d.apply("show", &mut self.show);
        d.apply("horizontal", &mut self.horizontal);
        d.apply("parent_id", &mut self.parent_id);
        ensure_id(&mut self.base.id, ctx.ids, "collapse");
    }

    fn options(&self) -> RenderOptions {
        let show = self.show.unwrap_or(false);
        let id = self.base.id().unwrap_or("collapse");

        let mut classes = ClassList::new();
        classes
            .push("collapse")
            .push_if(self.horizontal.unwrap_or(false), "collapse-horizontal")
            .push_if(show, "show");
        self.base.extend_classes(&mut classes);

        let mut attrs = Attributes::new();
        attrs.set("id", id).set_opt(
            "data-bs-parent",
            self.parent_id
                .as_deref()
                .filter(|p| !p.is_empty())
                .map(|p| format!("#{}", p)),
        );
        self.base.finish_attributes(&mut attrs);

        // Attributes for whatever element toggles this panel
        let mut trigger = Attributes::new();
        trigger
            .set("data-bs-toggle", "collapse")
            .set("data-bs-target", format!("#{}", id))
            .set("aria-expanded", show.to_string())
            .set("aria-controls", id);

        RenderOptions::new()
            .with("id", id)
            .with("show", show)
            .with("triggerAttrs", trigger)
            .with("classes", classes.build())
            .with("attrs", attrs)
    }
}
