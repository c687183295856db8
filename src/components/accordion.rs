use serde::Deserialize;

use super::base::Base;
use super::defaults::{Fallback, Rule};
use super::ids::ensure_id;
use super::{Component, MountContext, RenderOptions};
use crate::html::{Attributes, ClassList};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Accordion {
    #[serde(flatten)]
    pub base: Base,
    pub flush: Option<bool>,
    /// Keep other items open when one expands
    pub always_open: Option<bool>,
}

impl Component for Accordion {
    const NAME: &'static str = "accordion";

    const RULES: &'static [Rule] = &[Rule::or("flush"), Rule::or("always_open")];

    fn mount(&mut self, ctx: &MountContext<'_>) {
        let d = Self::defaults(ctx);
        self.base.mount(&d);
        d.apply("flush", &mut self.flush);
        d.apply("always_open", &mut self.always_open);
        ensure_id(&mut self.base.id, ctx.ids, "accordion");
    }

    fn options(&self) -> RenderOptions {
        let mut classes = ClassList::new();
        classes
            .push("accordion")
            .push_if(self.flush.unwrap_or(false), "accordion-flush");
        self.base.extend_classes(&mut classes);

        let mut attrs = Attributes::new();
        attrs.set_opt("id", self.base.id());
        self.base.finish_attributes(&mut attrs);

        RenderOptions::new()
            .with_opt("id", self.base.id())
            .with("alwaysOpen", self.always_open.unwrap_or(false))
            .with("classes", classes.build())
            .with("attrs", attrs)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccordionItem {
    #[serde(flatten)]
    pub base: Base,
    pub title: Option<String>,
    /// ID of the owning accordion; items close each other when set
    pub parent_id: Option<String>,
    pub show: Option<bool>,
    pub heading_tag: Option<String>,
}

impl AccordionItem {
    fn id(&self) -> &str {
        self.base.id().unwrap_or("accordion-item")
    }

    fn heading_id(&self) -> String {
        format!("{}-heading", self.id())
    }

    fn collapse_id(&self) -> String {
        format!("{}-collapse", self.id())
    }
}

impl Component for AccordionItem {
    const NAME: &'static str = "accordion-item";

    const RULES: &'static [Rule] = &[
        Rule::falsy("title", Fallback::Str("")),
        Rule::coalesce("parent_id"),
        Rule::or("show"),
        Rule::falsy("heading_tag", Fallback::Str("h2")),
    ];

    fn mount(&mut self, ctx: &MountContext<'_>) {
        let d = Self::defaults(ctx);
        self.base.mount(&d);
        d.apply("title", &mut self.title);
        d.apply("parent_id", &mut self.parent_id);
        d.apply("show", &mut self.show);
        d.apply("heading_tag", &mut self.heading_tag);
        ensure_id(&mut self.base.id, ctx.ids, "accordion-item");
    }

    fn options(&self) -> RenderOptions {
        let show = self.show.unwrap_or(false);
        let heading_id = self.heading_id();
        let collapse_id = self.collapse_id();

        let mut classes = ClassList::new();
        classes.push("accordion-item");
        self.base.extend_classes(&mut classes);

        let mut button_classes = ClassList::new();
        button_classes
            .push("accordion-button")
            .push_if(!show, "collapsed");

        let mut collapse_classes = ClassList::new();
        collapse_classes
            .push("accordion-collapse collapse")
            .push_if(show, "show");

        let mut attrs = Attributes::new();
        attrs.set_opt("id", self.base.id());
        self.base.finish_attributes(&mut attrs);

        let mut button_attrs = Attributes::new();
        button_attrs
            .set("type", "button")
            .set("data-bs-toggle", "collapse")
            .set("data-bs-target", format!("#{}", collapse_id))
            .set("aria-expanded", show.to_string())
            .set("aria-controls", collapse_id.as_str());

        let mut collapse_attrs = Attributes::new();
        collapse_attrs
            .set("id", collapse_id.as_str())
            .set("aria-labelledby", heading_id.as_str())
            .set_opt(
                "data-bs-parent",
                self.parent_id
                    .as_deref()
                    .filter(|p| !p.is_empty())
                    .map(|p| format!("#{}", p)),
            );

        RenderOptions::new()
            .with_opt("title", self.title.clone())
            .with_opt("headingTag", self.heading_tag.clone())
            .with("headingId", heading_id)
            .with("collapseId", collapse_id)
            .with("show", show)
            .with("classes", classes.build())
            .with("attrs", attrs)
            .with("buttonClasses", button_classes.build())
            .with("buttonAttrs", button_attrs)
            .with("collapseClasses", collapse_classes.build())
            .with("collapseAttrs", collapse_attrs)
    }
}
