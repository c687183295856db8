use serde::Deserialize;
use serde_json::Value;

use super::base::Base;
use super::defaults::Rule;
use super::ids::ensure_id;
use super::{Component, MountContext, RenderOptions};
use crate::html::{Attributes, ClassList};
use crate::traits::SizeFamily;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Modal {
    #[serde(flatten)]
    pub base: Base,
    pub title: Option<String>,
    pub size: Option<String>,
    /// `true` or a breakpoint (`md`) below which the dialog is fullscreen
    pub fullscreen: Option<Value>,
    pub centered: Option<bool>,
    pub scrollable: Option<bool>,
    /// `true`, `false` or `static`
    pub backdrop: Option<Value>,
    pub keyboard: Option<bool>,
    pub fade: Option<bool>,
    pub show_close: Option<bool>,
}

impl Modal {
    fn fullscreen_class(&self) -> Option<String> {
        match self.fullscreen.as_ref()? {
            Value::Bool(true) => Some("modal-fullscreen".to_string()),
            Value::String(bp) if !bp.is_empty() => Some(format!("modal-fullscreen-{}-down", bp)),
            _ => None,
        }
    }

    /// Only non-default backdrops are written out
    fn backdrop(&self) -> Option<String> {
        match self.backdrop.as_ref()? {
            Value::Bool(false) => Some("false".to_string()),
            Value::String(s) if s == "static" => Some(s.clone()),
            _ => None,
        }
    }
}

impl Component for Modal {
    const NAME: &'static str = "modal";

    const RULES: &'static [Rule] = &[
        Rule::coalesce("title"),
        Rule::coalesce("size"),
        Rule::coalesce("fullscreen"),
        Rule::or("centered"),
        Rule::or("scrollable"),
        Rule::coalesce("backdrop"),
        Rule::coalesce("keyboard"),
        Rule::coalesce("fade"),
        Rule::coalesce("show_close"),
    ];

    fn mount(&mut self, ctx: &MountContext<'_>) {
        let d = Self::defaults(ctx);
        self.base.mount(&d);
        d.apply("title", &mut self.title);
        d.apply("size", &mut self.size);
        d.apply("fullscreen", &mut self.fullscreen);
        d.apply("centered", &mut self.centered);
        d.apply("scrollable", &mut self.scrollable);
        d.apply("backdrop", &mut self.backdrop);
        d.apply("keyboard", &mut self.keyboard);
        d.apply("fade", &mut self.fade);
        d.apply("show_close", &mut self.show_close);
        ensure_id(&mut self.base.id, ctx.ids, "modal");
    }

    fn options(&self) -> RenderOptions {
        let id = self.base.id().unwrap_or("modal");
        let title_id = format!("{}-title", id);

        let mut classes = ClassList::new();
        classes
            .push("modal")
            .push_if(self.fade.unwrap_or(true), "fade");
        self.base.extend_classes(&mut classes);

        let mut dialog_classes = ClassList::new();
        dialog_classes
            .push("modal-dialog")
            .push_opt(SizeFamily::Modal.class_for(self.size.as_deref()))
            .push_opt(self.fullscreen_class())
            .push_if(self.centered.unwrap_or(false), "modal-dialog-centered")
            .push_if(self.scrollable.unwrap_or(false), "modal-dialog-scrollable");

        let mut attrs = Attributes::new();
        attrs
            .set("id", id)
            .set("tabindex", "-1")
            .set("aria-labelledby", title_id.as_str())
            .set("aria-hidden", "true")
            .set_opt("data-bs-backdrop", self.backdrop());
        if self.keyboard == Some(false) {
            attrs.set("data-bs-keyboard", "false");
        }
        self.base.finish_attributes(&mut attrs);

        let mut close = Attributes::new();
        close
            .set("type", "button")
            .set("class", "btn-close")
            .set("data-bs-dismiss", "modal")
            .set("aria-label", "Close");

        RenderOptions::new()
            .with("id", id)
            .with_opt("title", self.title.clone())
            .with("titleId", title_id)
            .with("showClose", self.show_close.unwrap_or(true))
            .with("closeAttrs", close)
            .with("dialogClasses", dialog_classes.build())
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
    fn test_default_modal() {
        let h = Harness::new();
        let options = h.render::<Modal>(json!({ "title": "Confirm" }));
        assert_eq!(options.str("classes"), Some("modal fade"));
        assert_eq!(options.str("dialogClasses"), Some("modal-dialog"));
        assert_eq!(
            options.attributes("attrs").render(),
            "id=\"modal-1\" tabindex=\"-1\" aria-labelledby=\"modal-1-title\" aria-hidden=\"true\""
        );
        assert_eq!(options.bool("showClose"), Some(true));
    }

    #[test]
    fn test_modal_size_support() {
        let h = Harness::new();
        let options = h.render::<Modal>(json!({ "size": "xl" }));
        assert_eq!(options.str("dialogClasses"), Some("modal-dialog modal-xl"));

        let options = h.render::<Modal>(json!({ "size": "md" }));
        assert_eq!(options.str("dialogClasses"), Some("modal-dialog"));
    }

    #[test]
    fn test_fullscreen_centered_scrollable() {
        let h = Harness::new();
        let options = h.render::<Modal>(json!({
            "fullscreen": "md",
            "centered": true,
            "scrollable": true,
        }));
        assert_eq!(
            options.str("dialogClasses"),
            Some("modal-dialog modal-fullscreen-md-down modal-dialog-centered modal-dialog-scrollable")
        );

        let options = h.render::<Modal>(json!({ "fullscreen": true }));
        assert_eq!(options.str("dialogClasses"), Some("modal-dialog modal-fullscreen"));
    }

    #[test]
    fn test_static_backdrop_and_keyboard() {
        let h = Harness::new();
        let options = h.render::<Modal>(json!({
            "id": "confirm",
            "backdrop": "static",
            "keyboard": false,
            "fade": false,
            "showClose": false,
        }));
        let attrs = options.attributes("attrs");
        assert_eq!(attrs.get_str("data-bs-backdrop"), Some("static"));
        assert_eq!(attrs.get_str("data-bs-keyboard"), Some("false"));
        assert_eq!(options.str("classes"), Some("modal"));
        assert_eq!(options.bool("showClose"), Some(false));
    }

    #[test]
    fn test_keyboard_from_config() {
        let h = Harness::with_config("[modal]\nkeyboard = false\n");
        let options = h.render::<Modal>(json!({}));
        assert_eq!(
            options.attributes("attrs").get_str("data-bs-keyboard"),
            Some("false")
        );
        let options = h.render::<Modal>(json!({ "keyboard": true }));
        assert!(!options.attributes("attrs").contains("data-bs-keyboard"));
    }
}
