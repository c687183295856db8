use serde::Deserialize;

use super::base::Base;
use super::defaults::{Fallback, Rule};
use super::{Component, MountContext, RenderOptions};
use crate::html::{Attributes, ClassList};
use crate::traits::VariantFamily;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Card {
    #[serde(flatten)]
    pub base: Base,
    pub variant: Option<String>,
    /// Border color variant
    pub border: Option<String>,
    pub text_align: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub text: Option<String>,
    pub header: Option<String>,
    pub footer: Option<String>,
    pub img: Option<String>,
    pub img_alt: Option<String>,
    /// `top`, `bottom` or `overlay`
    pub img_position: Option<String>,
    /// CSS width (`18rem`, `50%`)
    pub width: Option<String>,
}

impl Card {
    fn img_position(&self) -> &str {
        match self.img_position.as_deref() {
            Some("bottom") => "bottom",
            Some("overlay") => "overlay",
            _ => "top",
        }
    }
}

impl Component for Card {
    const NAME: &'static str = "card";

    const RULES: &'static [Rule] = &[
        Rule::coalesce("variant"),
        Rule::coalesce("border"),
        Rule::coalesce("text_align"),
        Rule::coalesce("title"),
        Rule::coalesce("subtitle"),
        Rule::coalesce("text"),
        Rule::coalesce("header"),
        Rule::coalesce("footer"),
        Rule::coalesce("img"),
        Rule::falsy("img_alt", Fallback::Str("")),
        Rule::falsy("img_position", Fallback::Str("top")),
        Rule::coalesce("width"),
    ];

    fn mount(&mut self, ctx: &MountContext<'_>) {
        let d = Self::defaults(ctx);
        self.base.mount(&d);
        d.apply("variant", &mut self.variant);
        d.apply("border", &mut self.border);
        d.apply("text_align", &mut self.text_align);
        d.apply("title", &mut self.title);
        d.apply("subtitle", &mut self.subtitle);
        d.apply("text", &mut self.text);
        d.apply("header", &mut self.header);
        d.apply("footer", &mut self.footer);
        d.apply("img", &mut self.img);
        d.apply("img_alt", &mut self.img_alt);
        d.apply("img_position", &mut self.img_position);
        d.apply("width", &mut self.width);
    }

    fn options(&self) -> RenderOptions {
        let position = self.img_position();

        let mut classes = ClassList::new();
        classes
            .push("card")
            .push_opt(VariantFamily::TextBackground.class_for(self.variant.as_deref(), false))
            .push_opt(VariantFamily::Border.class_for(self.border.as_deref(), false))
            .push_opt(
                self.text_align
                    .as_deref()
                    .filter(|a| !a.is_empty())
                    .map(|a| format!("text-{}", a)),
            );
        self.base.extend_classes(&mut classes);

        let mut attrs = Attributes::new();
        attrs.set_opt("id", self.base.id()).set_opt(
            "style",
            self.width
                .as_deref()
                .filter(|w| !w.is_empty())
                .map(|w| format!("width: {};", w)),
        );
        self.base.finish_attributes(&mut attrs);

        let img_class = match position {
            "bottom" => "card-img-bottom",
            "overlay" => "card-img",
            _ => "card-img-top",
        };
        let body_class = if position == "overlay" && self.img.is_some() {
            "card-img-overlay"
        } else {
            "card-body"
        };

        let mut img_attrs = Attributes::new();
        if let Some(src) = self.img.as_deref().filter(|s| !s.is_empty()) {
            img_attrs
                .set("src", src)
                .set("class", img_class)
                .set("alt", self.img_alt.clone().unwrap_or_default());
        }

        RenderOptions::new()
            .with_opt("title", self.title.clone())
            .with_opt("subtitle", self.subtitle.clone())
            .with_opt("text", self.text.clone())
            .with_opt("header", self.header.clone())
            .with_opt("footer", self.footer.clone())
            .with("imgPosition", position)
            .with("imgAttrs", img_attrs)
            .with("bodyClasses", body_class)
            .with("headerClasses", "card-header")
            .with("footerClasses", "card-footer")
            .with("titleClasses", "card-title")
            .with("subtitleClasses", "card-subtitle mb-2 text-body-secondary")
            .with("textClasses", "card-text")
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
    fn test_plain_card() {
        let h = Harness::new();
        let options = h.render::<Card>(json!({ "title": "Hello" }));
        assert_eq!(options.str("classes"), Some("card"));
        assert_eq!(options.str("bodyClasses"), Some("card-body"));
        assert_eq!(options.str("imgPosition"), Some("top"));
        assert!(options.attributes("imgAttrs").is_empty());
    }

    #[test]
    fn test_variant_border_align_width() {
        let h = Harness::new();
        let options = h.render::<Card>(json!({
            "variant": "dark",
            "border": "info",
            "textAlign": "center",
            "width": "18rem",
        }));
        assert_eq!(
            options.str("classes"),
            Some("card text-bg-dark border-info text-center")
        );
        assert_eq!(
            options.attributes("attrs").get_str("style"),
            Some("width: 18rem;")
        );
    }

    #[test]
    fn test_image_positions() {
        let h = Harness::new();
        let options = h.render::<Card>(json!({ "img": "/a.png", "imgAlt": "A" }));
        assert_eq!(
            options.attributes("imgAttrs").render(),
            "src=\"/a.png\" class=\"card-img-top\" alt=\"A\""
        );

        let options = h.render::<Card>(json!({ "img": "/a.png", "imgPosition": "overlay" }));
        assert_eq!(options.str("bodyClasses"), Some("card-img-overlay"));
        assert_eq!(options.attributes("imgAttrs").get_str("class"), Some("card-img"));

        let options = h.render::<Card>(json!({ "img": "/a.png", "imgPosition": "sideways" }));
        assert_eq!(options.str("imgPosition"), Some("top"));
    }
}
