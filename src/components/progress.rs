use serde::Deserialize;

use super::base::Base;
use super::defaults::{Fallback, Rule};
use super::{Component, MountContext, RenderOptions};
use crate::html::{Attributes, ClassList};
use crate::traits::VariantFamily;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Progress {
    #[serde(flatten)]
    pub base: Base,
    pub value: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub variant: Option<String>,
    pub striped: Option<bool>,
    pub animated: Option<bool>,
    pub label: Option<String>,
    /// Print the percentage inside the bar when no label is given
    pub show_value: Option<bool>,
    /// CSS height of the track (`4px`, `1rem`)
    pub height: Option<String>,
}

/// `25.0` -> `25`, `33.3333` -> `33.33`
fn format_number(n: f64) -> String {
    let rounded = (n * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}

impl Progress {
    /// Position of `value` within `min..max` as a percentage, clamped to 0..=100
    pub fn percentage(&self) -> f64 {
        let min = self.min.unwrap_or(0.0);
        let max = self.max.unwrap_or(100.0);
        let value = self.value.unwrap_or(0.0);
        if max <= min {
            return 0.0;
        }
        ((value - min) / (max - min) * 100.0).clamp(0.0, 100.0)
    }

    fn label(&self, percentage: f64) -> Option<String> {
        match self.label.as_deref().filter(|l| !l.is_empty()) {
            Some(label) => Some(label.to_string()),
            None if self.show_value.unwrap_or(false) => {
                Some(format!("{}%", format_number(percentage)))
            }
            None => None,
        }
    }
}

impl Component for Progress {
    const NAME: &'static str = "progress";

    const RULES: &'static [Rule] = &[
        Rule::coalesce("value"),
        Rule::coalesce("min"),
        Rule::falsy("max", Fallback::Int(100)),
        Rule::coalesce("variant"),
        Rule::or("striped"),
        Rule::or("animated"),
        Rule::coalesce("label"),
        Rule::or("show_value"),
        Rule::coalesce("height"),
    ];

    fn mount(&mut self, ctx: &MountContext<'_>) {
        let d = Self::defaults(ctx);
        self.base.mount(&d);
        d.apply("value", &mut self.value);
        d.apply("min", &mut self.min);
        d.apply("max", &mut self.max);
        d.apply("variant", &mut self.variant);
        d.apply("striped", &mut self.striped);
        d.apply("animated", &mut self.animated);
        d.apply("label", &mut self.label);
        d.apply("show_value", &mut self.show_value);
        d.apply("height", &mut self.height);
    }

    fn options(&self) -> RenderOptions {
        let percentage = self.percentage();
        let animated = self.animated.unwrap_or(false);
        let label = self.label(percentage);

        let mut classes = ClassList::new();
        classes.push("progress");
        self.base.extend_classes(&mut classes);

        let mut bar_classes = ClassList::new();
        bar_classes
            .push("progress-bar")
            .push_opt(VariantFamily::Background.class_for(self.variant.as_deref(), false))
            .push_if(self.striped.unwrap_or(false) || animated, "progress-bar-striped")
            .push_if(animated, "progress-bar-animated");

        let mut attrs = Attributes::new();
        attrs
            .set_opt("id", self.base.id())
            .set("role", "progressbar")
            .set_opt("aria-label", label.as_deref())
            .set("aria-valuenow", format_number(self.value.unwrap_or(0.0)))
            .set("aria-valuemin", format_number(self.min.unwrap_or(0.0)))
            .set("aria-valuemax", format_number(self.max.unwrap_or(100.0)))
            .set_opt(
                "style",
                self.height
                    .as_deref()
                    .filter(|h| !h.is_empty())
                    .map(|h| format!("height: {};", h)),
            );
        self.base.finish_attributes(&mut attrs);

        let mut bar_attrs = Attributes::new();
        bar_attrs.set("style", format!("width: {}%;", format_number(percentage)));

        RenderOptions::new()
            .with("percentage", percentage)
            .with_opt("label", label)
            .with("barClasses", bar_classes.build())
            .with("barAttrs", bar_attrs)
            .with("classes", classes.build())
            .with("attrs", attrs)
    }
}
