use serde::Deserialize;

use super::base::Base;
use super::defaults::{Fallback, Rule};
use super::ids::ensure_id;
use super::{Component, MountContext, RenderOptions};
use crate::html::{Attributes, ClassList};
use crate::traits::{Controllers, VariantFamily};

const CONTROLLER: &str = "bs-navbar";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Navbar {
    #[serde(flatten)]
    pub base: Base,
    pub brand: Option<String>,
    pub brand_href: Option<String>,
    /// Breakpoint from which the navbar is expanded, or `always` / `never`
    pub expand: Option<String>,
    /// Color scheme for the bar contents (`light` / `dark`)
    pub theme: Option<String>,
    /// Background variant (`bg-{v}`)
    pub bg: Option<String>,
    pub container: Option<String>,
    /// `fixed-top`, `fixed-bottom`, `sticky-top`, `sticky-bottom`
    pub placement: Option<String>,
    /// Collapse the menu again after a link is followed
    pub auto_collapse: Option<bool>,
}

impl Navbar {
    fn expand_class(&self) -> Option<String> {
        match self.expand.as_deref() {
            Some("never") => None,
            Some("always") | Some("") | None => Some("navbar-expand".to_string()),
            Some(bp) => Some(format!("navbar-expand-{}", bp)),
        }
    }
}

impl Component for Navbar {
    const NAME: &'static str = "navbar";

    const RULES: &'static [Rule] = &[
        Rule::coalesce("brand"),
        Rule::falsy("brand_href", Fallback::Str("/")),
        Rule::falsy("expand", Fallback::Str("lg")),
        Rule::coalesce("theme"),
        Rule::coalesce("bg"),
        Rule::falsy("container", Fallback::Str("container-fluid")),
        Rule::coalesce("placement"),
        Rule::or("auto_collapse"),
    ];

    fn mount(&mut self, ctx: &MountContext<'_>) {
        let d = Self::defaults(ctx);
        self.base.mount(&d);
        d.apply("brand", &mut self.brand);
        d.apply("brand_href", &mut self.brand_href);
        d.apply("expand", &mut self.expand);
        d.apply("theme", &mut self.theme);
        d.apply("bg", &mut self.bg);
        d.apply("container", &mut self.container);
        d.apply("placement", &mut self.placement);
        d.apply("auto_collapse", &mut self.auto_collapse);
        ensure_id(&mut self.base.id, ctx.ids, "navbar");
    }

    fn options(&self) -> RenderOptions {
        let id = self.base.id().unwrap_or("navbar");
        let collapse_id = format!("{}-collapse", id);

        let mut classes = ClassList::new();
        classes
            .push("navbar")
            .push_opt(self.expand_class())
            .push_opt(VariantFamily::Background.class_for(self.bg.as_deref(), false))
            .push_opt(self.placement.as_deref().filter(|p| !p.is_empty()));
        self.base.extend_classes(&mut classes);

        let mut controllers = Controllers::new();
        if self.auto_collapse.unwrap_or(false) {
            controllers
                .add(CONTROLLER)
                .value(CONTROLLER, "autoCollapse", true);
        }

        let mut attrs = Attributes::new();
        attrs
            .set("id", id)
            .set_opt("data-bs-theme", self.theme.as_deref().filter(|t| !t.is_empty()));
        attrs.merge(&controllers.attributes());
        self.base.finish_attributes(&mut attrs);

        let mut toggler = Attributes::new();
        toggler
            .set("class", "navbar-toggler")
            .set("type", "button")
            .set("data-bs-toggle", "collapse")
            .set("data-bs-target", format!("#{}", collapse_id))
            .set("aria-controls", collapse_id.as_str())
            .set("aria-expanded", "false")
            .set("aria-label", "Toggle navigation");

        RenderOptions::new()
            .with_opt("brand", self.brand.clone())
            .with_opt("brandHref", self.brand_href.clone())
            .with_opt("containerClasses", self.container.clone())
            .with("collapseId", collapse_id)
            .with("collapseClasses", "collapse navbar-collapse")
            .with("togglerAttrs", toggler)
            .with("classes", classes.build())
            .with("attrs", attrs)
    }
}
