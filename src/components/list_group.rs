use serde::Deserialize;
use serde_json::Value;

use super::base::Base;
use super::defaults::{Fallback, Rule};
use super::{Component, MountContext, RenderOptions};
use crate::html::{Attributes, ClassList};
use crate::traits::{BlockStyle, ElementKind, StateFlags, VariantFamily};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListGroup {
    #[serde(flatten)]
    pub base: Base,
    pub flush: Option<bool>,
    pub numbered: Option<bool>,
    /// `true` or a breakpoint (`md`) from which the list goes horizontal
    pub horizontal: Option<Value>,
    pub tag: Option<String>,
}

impl ListGroup {
    fn horizontal_class(&self) -> Option<String> {
        match self.horizontal.as_ref()? {
            Value::Bool(true) => Some("list-group-horizontal".to_string()),
            Value::String(bp) if !bp.is_empty() => Some(format!("list-group-horizontal-{}", bp)),
            _ => None,
        }
    }
}

impl Component for ListGroup {
    const NAME: &'static str = "list-group";

    const RULES: &'static [Rule] = &[
        Rule::or("flush"),
        Rule::or("numbered"),
        Rule::coalesce("horizontal"),
        Rule::falsy("tag", Fallback::Str("ul")),
    ];

    fn mount(&mut self, ctx: &MountContext<'_>) {
        let d = Self::defaults(ctx);
        self.base.mount(&d);
        d.apply("flush", &mut self.flush);
        d.apply("numbered", &mut self.numbered);
        d.apply("horizontal", &mut self.horizontal);
        d.apply("tag", &mut self.tag);
    }

    fn options(&self) -> RenderOptions {
        let numbered = self.numbered.unwrap_or(false);
        let tag = if numbered {
            "ol"
        } else {
            self.tag.as_deref().unwrap_or("ul")
        };

        let mut classes = ClassList::new();
        classes
            .push("list-group")
            .push_if(self.flush.unwrap_or(false), "list-group-flush")
            .push_if(numbered, "list-group-numbered")
            .push_opt(self.horizontal_class());
        self.base.extend_classes(&mut classes);

        let mut attrs = Attributes::new();
        attrs.set_opt("id", self.base.id());
        self.base.finish_attributes(&mut attrs);

        RenderOptions::new()
            .with("tag", tag)
            .with("classes", classes.build())
            .with("attrs", attrs)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListGroupItem {
    #[serde(flatten)]
    pub base: Base,
    pub variant: Option<String>,
    pub active: Option<bool>,
    pub disabled: Option<bool>,
    pub href: Option<String>,
    /// Render as an actionable `<button>` when there is no `href`
    pub action: Option<bool>,
    pub label: Option<String>,
}

impl ListGroupItem {
    fn href(&self) -> Option<&str> {
        self.href.as_deref().filter(|h| !h.is_empty())
    }

    fn tag(&self) -> &'static str {
        if self.href().is_some() {
            "a"
        } else if self.action.unwrap_or(false) {
            "button"
        } else {
            "li"
        }
    }
}

impl Component for ListGroupItem {
    const NAME: &'static str = "list-group-item";

    const RULES: &'static [Rule] = &[
        Rule::coalesce("variant"),
        Rule::or("active"),
        Rule::or("disabled"),
        Rule::coalesce("href"),
        Rule::or("action"),
        Rule::coalesce("label"),
    ];

    fn mount(&mut self, ctx: &MountContext<'_>) {
        let d = Self::defaults(ctx);
        self.base.mount(&d);
        d.apply("variant", &mut self.variant);
        d.apply("active", &mut self.active);
        d.apply("disabled", &mut self.disabled);
        d.apply("href", &mut self.href);
        d.apply("action", &mut self.action);
        d.apply("label", &mut self.label);
    }

    fn options(&self) -> RenderOptions {
        let tag = self.tag();
        let kind = ElementKind::from_tag(tag);
        let active = self.active.unwrap_or(false);
        let state = StateFlags::new(active, self.disabled.unwrap_or(false), false);

        let mut classes = ClassList::new();
        classes
            .push("list-group-item")
            .push_if(kind != ElementKind::Other, "list-group-item-action")
            .push_opt(VariantFamily::ListGroupItem.class_for(self.variant.as_deref(), false))
            .append(&state.classes(kind, BlockStyle::Display));
        self.base.extend_classes(&mut classes);

        let mut attrs = Attributes::new();
        attrs.set_opt("id", self.base.id());
        match kind {
            ElementKind::Anchor => {
                attrs.set_opt("href", self.href());
            }
            ElementKind::Button => {
                attrs.set("type", "button");
            }
            ElementKind::Other => {}
        }
        if active {
            attrs.set("aria-current", "true");
        }
        attrs.merge(&state.attributes(kind, false));
        self.base.finish_attributes(&mut attrs);

        RenderOptions::new()
            .with("tag", tag)
            .with_opt("label", self.label.clone())
            .with("classes", classes.build())
            .with("attrs", attrs)
    }
}
