use serde::Deserialize;
use serde_json::{json, Value};

use super::base::Base;
use super::defaults::{Fallback, Rule};
use super::ids::ensure_id;
use super::{Component, MountContext, RenderOptions};
use crate::html::{Attributes, ClassList};

/// Bootstrap's own interval; only other values are written out
const DEFAULT_INTERVAL: i64 = 5000;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Carousel {
    #[serde(flatten)]
    pub base: Base,
    pub controls: Option<bool>,
    pub indicators: Option<bool>,
    pub fade: Option<bool>,
    pub dark: Option<bool>,
    /// `carousel` (autoplay on load), `true` (after first interaction) or `false`
    pub ride: Option<String>,
    pub interval: Option<i64>,
    pub keyboard: Option<bool>,
    /// `hover` or `false`
    pub pause: Option<Value>,
    pub wrap: Option<bool>,
    pub touch: Option<bool>,
    /// Slides as `{img, alt, caption, captionTitle, active, interval}` records
    pub items: Option<Vec<Value>>,
}

impl Carousel {
    fn target(&self) -> String {
        format!("#{}", self.base.id().unwrap_or("carousel"))
    }

    fn slides(&self) -> Vec<Value> {
        let items = self.items.as_deref().unwrap_or_default();
        let explicit_active = items.iter().position(|item| item["active"] == json!(true));
        let active_index = explicit_active.unwrap_or(0);
        let target = self.target();

        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let active = index == active_index;
                let mut classes = ClassList::new();
                classes.push("carousel-item").push_if(active, "active");

                let mut attrs = Attributes::new();
                attrs.set_opt(
                    "data-bs-interval",
                    item["interval"].as_i64().map(|i| i.to_string()),
                );

                let mut indicator = Attributes::new();
                indicator
                    .set("type", "button")
                    .set("data-bs-target", target.as_str())
                    .set("data-bs-slide-to", index.to_string())
                    .set("aria-label", format!("Slide {}", index + 1));
                if active {
                    indicator.set("class", "active").set("aria-current", "true");
                }

                json!({
                    "img": item["img"],
                    "alt": item["alt"].as_str().unwrap_or_default(),
                    "caption": item["caption"],
                    "captionTitle": item["captionTitle"],
                    "active": active,
                    "classes": classes.build(),
                    "attrs": attrs,
                    "indicatorAttrs": indicator,
                })
            })
            .collect()
    }

    fn control(&self, direction: &str) -> Attributes {
        let mut attrs = Attributes::new();
        attrs
            .set("class", format!("carousel-control-{}", direction))
            .set("type", "button")
            .set("data-bs-target", self.target())
            .set("data-bs-slide", direction);
        attrs
    }
}

impl Component for Carousel {
    const NAME: &'static str = "carousel";

    const RULES: &'static [Rule] = &[
        Rule::coalesce("controls"),
        Rule::coalesce("indicators"),
        Rule::or("fade"),
        Rule::or("dark"),
        Rule::falsy("ride", Fallback::Str("carousel")),
        Rule::coalesce("interval"),
        Rule::coalesce("keyboard"),
        Rule::coalesce("pause"),
        Rule::coalesce("wrap"),
        Rule::coalesce("touch"),
        Rule::coalesce("items"),
    ];

    fn mount(&mut self, ctx: &MountContext<'_>) {
        let d = Self::defaults(ctx);
        self.base.mount(&d);
        d.apply("controls", &mut self.controls);
        d.apply("indicators", &mut self.indicators);
        d.apply("fade", &mut self.fade);
        d.apply("dark", &mut self.dark);
        d.apply("ride", &mut self.ride);
        d.apply("interval", &mut self.interval);
        d.apply("keyboard", &mut self.keyboard);
        d.apply("pause", &mut self.pause);
        d.apply("wrap", &mut self.wrap);
        d.apply("touch", &mut self.touch);
        d.apply("items", &mut self.items);
        ensure_id(&mut self.base.id, ctx.ids, "carousel");
    }

    fn options(&self) -> RenderOptions {
        let mut classes = ClassList::new();
        classes
            .push("carousel slide")
            .push_if(self.fade.unwrap_or(false), "carousel-fade")
            .push_if(self.dark.unwrap_or(false), "carousel-dark");
        self.base.extend_classes(&mut classes);

        let mut attrs = Attributes::new();
        attrs.set_opt("id", self.base.id());
        match self.ride.as_deref() {
            Some("false") | None => {}
            Some(ride) => {
                attrs.set("data-bs-ride", ride);
            }
        }
        if let Some(interval) = self.interval.filter(|i| *i != DEFAULT_INTERVAL) {
            attrs.set("data-bs-interval", interval.to_string());
        }
        if self.keyboard == Some(false) {
            attrs.set("data-bs-keyboard", "false");
        }
        match &self.pause {
            Some(Value::Bool(false)) => {
                attrs.set("data-bs-pause", "false");
            }
            Some(Value::String(p)) if p != "hover" && !p.is_empty() => {
                attrs.set("data-bs-pause", p.as_str());
            }
            _ => {}
        }
        if self.wrap == Some(false) {
            attrs.set("data-bs-wrap", "false");
        }
        if self.touch == Some(false) {
            attrs.set("data-bs-touch", "false");
        }
        self.base.finish_attributes(&mut attrs);

        RenderOptions::new()
            .with_opt("id", self.base.id())
            .with("controls", self.controls.unwrap_or(true))
            .with("indicators", self.indicators.unwrap_or(true))
            .with("items", self.slides())
            .with("prevAttrs", self.control("prev"))
            .with("nextAttrs", self.control("next"))
            .with("classes", classes.build())
            .with("attrs", attrs)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselItem {
    #[serde(flatten)]
    pub base: Base,
    pub active: Option<bool>,
    pub interval: Option<i64>,
    pub img: Option<String>,
    pub alt: Option<String>,
    pub caption: Option<String>,
    pub caption_title: Option<String>,
}

impl Component for CarouselItem {
    const NAME: &'static str = "carousel-item";

    const RULES: &'static [Rule] = &[
        Rule::or("active"),
        Rule::coalesce("interval"),
        Rule::coalesce("img"),
        Rule::falsy("alt", Fallback::Str("")),
        Rule::coalesce("caption"),
        Rule::coalesce("caption_title"),
    ];

    fn mount(&mut self, ctx: &MountContext<'_>) {
        let d = Self::defaults(ctx);
        self.base.mount(&d);
        d.apply("active", &mut self.active);
        d.apply("interval", &mut self.interval);
        d.apply("img", &mut self.img);
        d.apply("alt", &mut self.alt);
        d.apply("caption", &mut self.caption);
        d.apply("caption_title", &mut self.caption_title);
    }

    fn options(&self) -> RenderOptions {
        let mut classes = ClassList::new();
        classes
            .push("carousel-item")
            .push_if(self.active.unwrap_or(false), "active");
        self.base.extend_classes(&mut classes);

        let mut attrs = Attributes::new();
        attrs
            .set_opt("id", self.base.id())
            .set_opt("data-bs-interval", self.interval.map(|i| i.to_string()));
        self.base.finish_attributes(&mut attrs);

        let mut img_attrs = Attributes::new();
        if let Some(src) = self.img.as_deref().filter(|s| !s.is_empty()) {
            img_attrs
                .set("src", src)
                .set("class", "d-block w-100")
                .set("alt", self.alt.clone().unwrap_or_default());
        }

        let has_caption = self.caption.is_some() || self.caption_title.is_some();

        RenderOptions::new()
            .with("imgAttrs", img_attrs)
            .with_opt("caption", self.caption.clone())
            .with_opt("captionTitle", self.caption_title.clone())
            .with("hasCaption", has_caption)
            .with("captionClasses", "carousel-caption d-none d-md-block")
            .with("classes", classes.build())
            .with("attrs", attrs)
    }
}
