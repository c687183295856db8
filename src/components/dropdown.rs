use serde::Deserialize;
use serde_json::Value;

use super::base::Base;
use super::defaults::{Fallback, Rule};
use super::ids::ensure_id;
use super::{Component, MountContext, RenderOptions};
use crate::html::{Attributes, ClassList};
use crate::traits::{SizeFamily, VariantFamily};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Dropdown {
    #[serde(flatten)]
    pub base: Base,
    pub label: Option<String>,
    pub variant: Option<String>,
    pub size: Option<String>,
    /// Separate action button and caret toggle
    pub split: Option<bool>,
    /// `down`, `up`, `start`, `end`, `down-center`, `up-center`
    pub direction: Option<String>,
    /// `end`, `start` or responsive forms like `lg-end`
    pub menu_align: Option<String>,
    pub dark: Option<bool>,
    /// `true`, `false`, `inside` or `outside`
    pub auto_close: Option<Value>,
}

impl Dropdown {
    fn wrapper_class(&self) -> &'static str {
        match self.direction.as_deref() {
            Some("up") => "dropup",
            Some("start") => "dropstart",
            Some("end") => "dropend",
            Some("down-center") => "dropdown-center",
            Some("up-center") => "dropup dropup-center",
            _ => "dropdown",
        }
    }

    fn auto_close(&self) -> Option<String> {
        match self.auto_close.as_ref()? {
            Value::Bool(b) => Some(b.to_string()),
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}

impl Component for Dropdown {
    const NAME: &'static str = "dropdown";

    const RULES: &'static [Rule] = &[
        Rule::falsy("label", Fallback::Str("Dropdown")),
        Rule::falsy("variant", Fallback::Str("primary")),
        Rule::coalesce("size"),
        Rule::or("split"),
        Rule::falsy("direction", Fallback::Str("down")),
        Rule::coalesce("menu_align"),
        Rule::or("dark"),
        Rule::coalesce("auto_close"),
    ];

    fn mount(&mut self, ctx: &MountContext<'_>) {
        let d = Self::defaults(ctx);
        self.base.mount(&d);
        d.apply("label", &mut self.label);
        d.apply("variant", &mut self.variant);
        d.apply("size", &mut self.size);
        d.apply("split", &mut self.split);
        d.apply("direction", &mut self.direction);
        d.apply("menu_align", &mut self.menu_align);
        d.apply("dark", &mut self.dark);
        d.apply("auto_close", &mut self.auto_close);
        ensure_id(&mut self.base.id, ctx.ids, "dropdown");
    }

    fn options(&self) -> RenderOptions {
        let split = self.split.unwrap_or(false);
        let id = self.base.id().unwrap_or("dropdown");
        let toggle_id = format!("{}-toggle", id);

        let mut classes = ClassList::new();
        classes.push_if(split, "btn-group").push(self.wrapper_class());
        self.base.extend_classes(&mut classes);

        let mut button_classes = ClassList::new();
        button_classes
            .push("btn")
            .push_opt(VariantFamily::Button.class_for(self.variant.as_deref(), false))
            .push_opt(SizeFamily::Button.class_for(self.size.as_deref()));

        let mut toggle_classes = button_classes.clone();
        toggle_classes
            .push("dropdown-toggle")
            .push_if(split, "dropdown-toggle-split");

        let mut menu_classes = ClassList::new();
        menu_classes
            .push("dropdown-menu")
            .push_opt(
                self.menu_align
                    .as_deref()
                    .filter(|a| !a.is_empty())
                    .map(|a| format!("dropdown-menu-{}", a)),
            )
            .push_if(self.dark.unwrap_or(false), "dropdown-menu-dark");

        let mut attrs = Attributes::new();
        attrs.set("id", id);
        self.base.finish_attributes(&mut attrs);

        let mut toggle_attrs = Attributes::new();
        toggle_attrs
            .set("id", toggle_id.as_str())
            .set("type", "button")
            .set("data-bs-toggle", "dropdown")
            .set("aria-expanded", "false")
            .set_opt("data-bs-auto-close", self.auto_close());

        let mut menu_attrs = Attributes::new();
        menu_attrs.set("aria-labelledby", toggle_id.as_str());

        RenderOptions::new()
            .with_opt("label", self.label.clone())
            .with("split", split)
            .with("toggleLabel", if split { "Toggle Dropdown" } else { "" })
            .with("buttonClasses", button_classes.build())
            .with("toggleClasses", toggle_classes.build())
            .with("toggleAttrs", toggle_attrs)
            .with("menuClasses", menu_classes.build())
            .with("menuAttrs", menu_attrs)
            .with("classes", classes.build())
            .with("attrs", attrs)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DropdownItem {
    #[serde(flatten)]
    pub base: Base,
    pub href: Option<String>,
    pub label: Option<String>,
    pub active: Option<bool>,
    pub disabled: Option<bool>,
}

impl Component for DropdownItem {
    const NAME: &'static str = "dropdown-item";

    const RULES: &'static [Rule] = &[
        Rule::coalesce("href"),
        Rule::coalesce("label"),
        Rule::or("active"),
        Rule::or("disabled"),
    ];

    fn mount(&mut self, ctx: &MountContext<'_>) {
        let d = Self::defaults(ctx);
        self.base.mount(&d);
        d.apply("href", &mut self.href);
        d.apply("label", &mut self.label);
        d.apply("active", &mut self.active);
        d.apply("disabled", &mut self.disabled);
    }

    fn options(&self) -> RenderOptions {
        let href = self.href.as_deref().filter(|h| !h.is_empty());
        let tag = if href.is_some() { "a" } else { "button" };
        let active = self.active.unwrap_or(false);
        let disabled = self.disabled.unwrap_or(false);

        let mut classes = ClassList::new();
        classes
            .push("dropdown-item")
            .push_if(active, "active")
            .push_if(disabled, "disabled");
        self.base.extend_classes(&mut classes);

        let mut attrs = Attributes::new();
        attrs.set_opt("id", self.base.id());
        match href {
            Some(href) => {
                attrs.set("href", href);
                if disabled {
                    attrs.set("aria-disabled", "true");
                }
            }
            None => {
                attrs.set("type", "button");
                if disabled {
                    attrs.flag("disabled");
                }
            }
        }
        if active {
            attrs.set("aria-current", "true");
        }
        self.base.finish_attributes(&mut attrs);

        RenderOptions::new()
            .with("tag", tag)
            .with_opt("label", self.label.clone())
            .with("classes", classes.build())
            .with("attrs", attrs)
    }
}

/// Horizontal rule between groups of items
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DropdownDivider {
    #[serde(flatten)]
    pub base: Base,
}

impl Component for DropdownDivider {
    const NAME: &'static str = "dropdown-divider";

    const RULES: &'static [Rule] = &[];

    fn mount(&mut self, ctx: &MountContext<'_>) {
        self.base.mount(&Self::defaults(ctx));
    }

    fn options(&self) -> RenderOptions {
        let mut classes = ClassList::new();
        classes.push("dropdown-divider");
        self.base.extend_classes(&mut classes);

        let mut attrs = Attributes::new();
        attrs.set_opt("id", self.base.id());
        self.base.finish_attributes(&mut attrs);

        RenderOptions::new()
            .with("tag", "hr")
            .with("classes", classes.build())
            .with("attrs", attrs)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DropdownHeader {
    #[serde(flatten)]
    pub base: Base,
    pub text: Option<String>,
    pub tag: Option<String>,
}

impl Component for DropdownHeader {
    const NAME: &'static str = "dropdown-header";

    const RULES: &'static [Rule] = &[
        Rule::coalesce("text"),
        Rule::falsy("tag", Fallback::Str("h6")),
    ];

    fn mount(&mut self, ctx: &MountContext<'_>) {
        let d = Self::defaults(ctx);
        self.base.mount(&d);
        d.apply("text", &mut self.text);
        d.apply("tag", &mut self.tag);
    }

    fn options(&self) -> RenderOptions {
        let mut classes = ClassList::new();
        classes.push("dropdown-header");
        self.base.extend_classes(&mut classes);

        let mut attrs = Attributes::new();
        attrs.set_opt("id", self.base.id());
        self.base.finish_attributes(&mut attrs);

        RenderOptions::new()
            .with_opt("tag", self.tag.clone())
            .with_opt("text", self.text.clone())
            .with("classes", classes.build())
            .with("attrs", attrs)
    }
}
