use serde::Deserialize;
use serde_json::Value;

use super::base::Base;
use super::defaults::{Fallback, Rule};
use super::ids::ensure_id;
use super::{Component, MountContext, RenderOptions};
use crate::html::{Attributes, ClassList};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Offcanvas {
    #[serde(flatten)]
    pub base: Base,
    pub title: Option<String>,
    /// `start`, `end`, `top` or `bottom`
    pub placement: Option<String>,
    /// `true`, `false` or `static`
    pub backdrop: Option<Value>,
    /// Allow body scrolling while open
    pub scroll: Option<bool>,
    /// Breakpoint above which the panel renders inline
    pub responsive: Option<String>,
}

impl Offcanvas {
    fn placement(&self) -> &str {
        match self.placement.as_deref() {
            Some(p @ ("start" | "end" | "top" | "bottom")) => p,
            _ => "start",
        }
    }
}

impl Component for Offcanvas {
    const NAME: &'static str = "offcanvas";

    const RULES: &'static [Rule] = &[
        Rule::coalesce("title"),
        Rule::falsy("placement", Fallback::Str("start")),
        Rule::coalesce("backdrop"),
        Rule::or("scroll"),
        Rule::coalesce("responsive"),
    ];

    fn mount(&mut self, ctx: &MountContext<'_>) {
        let d = Self::defaults(ctx);
        self.base.mount(&d);
        d.apply("title", &mut self.title);
        d.apply("placement", &mut self.placement);
        d.apply("backdrop", &mut self.backdrop);
        d.apply("scroll", &mut self.scroll);
        d.apply("responsive", &mut self.responsive);
        ensure_id(&mut self.base.id, ctx.ids, "offcanvas");
    }

    fn options(&self) -> RenderOptions {
        let id = self.base.id().unwrap_or("offcanvas");
        let title_id = format!("{}-title", id);

        let mut classes = ClassList::new();
        match self.responsive.as_deref().filter(|r| !r.is_empty()) {
            Some(bp) => classes.push(format!("offcanvas-{}", bp)),
            None => classes.push("offcanvas"),
        };
        classes.push(format!("offcanvas-{}", self.placement()));
        self.base.extend_classes(&mut classes);

        let mut attrs = Attributes::new();
        attrs
            .set("id", id)
            .set("tabindex", "-1")
            .set("aria-labelledby", title_id.as_str());
        if self.scroll.unwrap_or(false) {
            attrs.set("data-bs-scroll", "true");
        }
        match &self.backdrop {
            Some(Value::Bool(false)) => {
                attrs.set("data-bs-backdrop", "false");
            }
            Some(Value::String(s)) if s == "static" => {
                attrs.set("data-bs-backdrop", "static");
            }
            _ => {}
        }
        self.base.finish_attributes(&mut attrs);

        let mut close = Attributes::new();
        close
            .set("type", "button")
            .set("class", "btn-close")
            .set("data-bs-dismiss", "offcanvas")
            .set("data-bs-target", format!("#{}", id))
            .set("aria-label", "Close");

        RenderOptions::new()
            .with("id", id)
            .with_opt("title", self.title.clone())
            .with("titleId", title_id)
            .with("closeAttrs", close)
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
    fn test_default_offcanvas() {
        let h = Harness::new();
        let options = h.render::<Offcanvas>(json!({ "title": "Menu" }));
        assert_eq!(options.str("classes"), Some("offcanvas offcanvas-start"));
        assert_eq!(
            options.attributes("attrs").render(),
            "id=\"offcanvas-1\" tabindex=\"-1\" aria-labelledby=\"offcanvas-1-title\""
        );
    }

    #[test]
    fn test_responsive_end_with_scroll() {
        let h = Harness::new();
        let options = h.render::<Offcanvas>(json!({
            "id": "cart",
            "placement": "end",
            "responsive": "lg",
            "scroll": true,
            "backdrop": "static",
        }));
        assert_eq!(options.str("classes"), Some("offcanvas-lg offcanvas-end"));
        let attrs = options.attributes("attrs");
        assert_eq!(attrs.get_str("data-bs-scroll"), Some("true"));
        assert_eq!(attrs.get_str("data-bs-backdrop"), Some("static"));
        assert_eq!(
            options.attributes("closeAttrs").get_str("data-bs-target"),
            Some("#cart")
        );
    }

    #[test]
    fn test_unknown_placement_falls_back() {
        let h = Harness::new();
        let options = h.render::<Offcanvas>(json!({ "placement": "middle", "backdrop": false }));
        assert_eq!(options.str("classes"), Some("offcanvas offcanvas-start"));
        assert_eq!(
            options.attributes("attrs").get_str("data-bs-backdrop"),
            Some("false")
        );
    }
}
