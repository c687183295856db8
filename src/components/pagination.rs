use serde::Deserialize;
use serde_json::Value;

use super::base::Base;
use super::defaults::{Fallback, Rule};
use super::{Component, MountContext, RenderOptions};
use crate::html::{Attributes, ClassList};
use crate::traits::SizeFamily;

/// Page navigation. `classes` belong to the `<ul>`, `attrs` to the wrapping `<nav>`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pagination {
    #[serde(flatten)]
    pub base: Base,
    pub current_page: Option<i64>,
    pub total_pages: Option<i64>,
    pub size: Option<String>,
    /// `center` or `end`
    pub align: Option<String>,
    /// Most numbered links shown at once
    pub max_visible: Option<i64>,
    pub show_first_last: Option<bool>,
    pub show_prev_next: Option<bool>,
    /// Prefix the page number is appended to
    pub base_url: Option<String>,
    pub aria_label: Option<String>,
}

/// Upper bound on numbered links in one window
pub const MAX_WINDOW: i64 = 100;

/// Inclusive range of page numbers to show around `current`
///
/// `current` is clamped into `1..=total`; the window never exceeds
/// `max_visible` pages (itself capped at [`MAX_WINDOW`]) and is shifted left
/// when it would run past the end.
pub fn page_window(current: i64, total: i64, max_visible: i64) -> (i64, i64, i64) {
    let total = total.max(1);
    let current = current.clamp(1, total);
    let max_visible = max_visible.clamp(1, MAX_WINDOW);

    let mut start = current.saturating_sub(max_visible / 2).max(1);
    let end = start.saturating_add(max_visible - 1).min(total);
    start = end.saturating_sub(max_visible - 1).max(1);
    (current, start, end)
}

impl Pagination {
    fn href(&self, page: i64) -> String {
        format!("{}{}", self.base_url.as_deref().unwrap_or("?page="), page)
    }

    fn item(&self, label: &str, page: i64, active: bool, disabled: bool, aria: Option<&str>) -> Value {
        let item = PaginationItem {
            base: Base::default(),
            href: (!disabled && !active).then(|| self.href(page)),
            label: Some(label.to_string()),
            active: Some(active),
            disabled: Some(disabled),
        };
        let mut options = item.options();
        if let Some(aria) = aria {
            let mut link_attrs = options.attributes("linkAttrs");
            link_attrs.set("aria-label", aria);
            options = options.with("linkAttrs", link_attrs);
        }
        options.with("page", page).into_value()
    }

    fn items(&self) -> (i64, Vec<Value>) {
        let (current, start, end) = page_window(
            self.current_page.unwrap_or(1),
            self.total_pages.unwrap_or(1),
            self.max_visible.unwrap_or(5),
        );
        let total = self.total_pages.unwrap_or(1).max(1);
        let first_last = self.show_first_last.unwrap_or(false);
        let prev_next = self.show_prev_next.unwrap_or(true);

        let mut items = Vec::new();
        if first_last {
            items.push(self.item("«", 1, false, current == 1, Some("First")));
        }
        if prev_next {
            let prev = current.saturating_sub(1).max(1);
            items.push(self.item("‹", prev, false, current == 1, Some("Previous")));
        }
        for page in start..=end {
            items.push(self.item(&page.to_string(), page, page == current, false, None));
        }
        if prev_next {
            let next = current.saturating_add(1).min(total);
            items.push(self.item("›", next, false, current == total, Some("Next")));
        }
        if first_last {
            items.push(self.item("»", total, false, current == total, Some("Last")));
        }
        (current, items)
    }
}

impl Component for Pagination {
    const NAME: &'static str = "pagination";

    const RULES: &'static [Rule] = &[
        Rule::falsy("current_page", Fallback::Int(1)),
        Rule::falsy("total_pages", Fallback::Int(1)),
        Rule::coalesce("size"),
        Rule::coalesce("align"),
        Rule::falsy("max_visible", Fallback::Int(5)),
        Rule::or("show_first_last"),
        Rule::coalesce("show_prev_next"),
        Rule::falsy("base_url", Fallback::Str("?page=")),
        Rule::falsy("aria_label", Fallback::Str("Pagination")),
    ];

    fn mount(&mut self, ctx: &MountContext<'_>) {
        let d = Self::defaults(ctx);
        self.base.mount(&d);
        d.apply("current_page", &mut self.current_page);
        d.apply("total_pages", &mut self.total_pages);
        d.apply("size", &mut self.size);
        d.apply("align", &mut self.align);
        d.apply("max_visible", &mut self.max_visible);
        d.apply("show_first_last", &mut self.show_first_last);
        d.apply("show_prev_next", &mut self.show_prev_next);
        d.apply("base_url", &mut self.base_url);
        d.apply("aria_label", &mut self.aria_label);
    }

    fn options(&self) -> RenderOptions {
        let (current, items) = self.items();

        let mut classes = ClassList::new();
        classes
            .push("pagination")
            .push_opt(SizeFamily::Pagination.class_for(self.size.as_deref()))
            .push_opt(
                self.align
                    .as_deref()
                    .filter(|a| !a.is_empty())
                    .map(|a| format!("justify-content-{}", a)),
            );
        self.base.extend_classes(&mut classes);

        let mut attrs = Attributes::new();
        attrs
            .set_opt("id", self.base.id())
            .set_opt("aria-label", self.aria_label.as_deref());
        self.base.finish_attributes(&mut attrs);

        RenderOptions::new()
            .with("currentPage", current)
            .with("totalPages", self.total_pages.unwrap_or(1).max(1))
            .with("items", items)
            .with("classes", classes.build())
            .with("attrs", attrs)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaginationItem {
    #[serde(flatten)]
    pub base: Base,
    pub href: Option<String>,
    pub label: Option<String>,
    pub active: Option<bool>,
    pub disabled: Option<bool>,
}

impl Component for PaginationItem {
    const NAME: &'static str = "pagination-item";

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
        let active = self.active.unwrap_or(false);
        let disabled = self.disabled.unwrap_or(false);
        let href = self
            .href
            .as_deref()
            .filter(|h| !h.is_empty() && !disabled);

        let mut classes = ClassList::new();
        classes
            .push("page-item")
            .push_if(active, "active")
            .push_if(disabled, "disabled");
        self.base.extend_classes(&mut classes);

        let mut attrs = Attributes::new();
        attrs.set_opt("id", self.base.id());
        if active {
            attrs.set("aria-current", "page");
        }
        self.base.finish_attributes(&mut attrs);

        let mut link_attrs = Attributes::new();
        link_attrs.set_opt("href", href);

        RenderOptions::new()
            .with_opt("label", self.label.clone())
            .with("active", active)
            .with("disabled", disabled)
            .with("linkTag", if href.is_some() { "a" } else { "span" })
            .with("linkClasses", "page-link")
            .with("linkAttrs", link_attrs)
            .with("classes", classes.build())
            .with("attrs", attrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::Harness;
    use serde_json::json;

    fn numbered(options: &RenderOptions) -> Vec<i64> {
        options
            .get("items")
            .and_then(Value::as_array)
            .unwrap()
            .iter()
            .filter(|item| item["label"].as_str().unwrap().parse::<i64>().is_ok())
            .map(|item| item["page"].as_i64().unwrap())
            .collect()
    }

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(1, 10, 5), (1, 1, 5));
        assert_eq!(page_window(5, 10, 5), (5, 3, 7));
        assert_eq!(page_window(10, 10, 5), (10, 6, 10));
        assert_eq!(page_window(2, 3, 5), (2, 1, 3));
        assert_eq!(page_window(4, 10, 4), (4, 2, 5));
    }

    #[test]
    fn test_page_window_clamps_current() {
        assert_eq!(page_window(99, 10, 5), (10, 6, 10));
        assert_eq!(page_window(-3, 10, 5), (1, 1, 5));
        assert_eq!(page_window(1, 0, 0), (1, 1, 1));
    }

    #[test]
    fn test_window_invariants() {
        for total in 1..=12 {
            for max_visible in 1..=7 {
                for current in -1..=total + 2 {
                    let (clamped, start, end) = page_window(current, total, max_visible);
                    assert!((1..=total).contains(&clamped));
                    assert!(start <= clamped && clamped <= end);
                    assert!(end - start + 1 <= max_visible);
                }
            }
        }
    }

    #[test]
    fn test_page_window_at_i64_limits() {
        assert_eq!(page_window(i64::MAX, i64::MAX, 5), (i64::MAX, i64::MAX - 4, i64::MAX));
        assert_eq!(page_window(i64::MAX, i64::MAX, i64::MAX).1, i64::MAX - MAX_WINDOW + 1);
        assert_eq!(page_window(i64::MIN, i64::MAX, i64::MIN), (1, 1, 1));
    }

    #[test]
    fn test_huge_page_counts_render() {
        let h = Harness::new();
        let options = h.render::<Pagination>(json!({
            "currentPage": i64::MAX,
            "totalPages": i64::MAX,
        }));
        assert_eq!(numbered(&options).last(), Some(&i64::MAX));
        let items = options.get("items").and_then(Value::as_array).unwrap();
        assert_eq!(items.last().unwrap()["page"], json!(i64::MAX));
    }

    #[test]
    fn test_max_visible_is_capped() {
        let h = Harness::new();
        let options = h.render::<Pagination>(json!({
            "totalPages": 200_000,
            "maxVisible": 200_000,
        }));
        assert_eq!(numbered(&options).len() as i64, MAX_WINDOW);
        // prev + next around the window
        let items = options.get("items").and_then(Value::as_array).unwrap();
        assert_eq!(items.len() as i64, MAX_WINDOW + 2);
    }

    #[test]
    fn test_default_items_have_prev_next() {
        let h = Harness::new();
        let options = h.render::<Pagination>(json!({ "currentPage": 3, "totalPages": 10 }));
        assert_eq!(numbered(&options), vec![1, 2, 3, 4, 5]);

        let items = options.get("items").unwrap().as_array().unwrap();
        assert_eq!(items.len(), 7);
        assert_eq!(items[0]["linkAttrs"]["aria-label"], json!("Previous"));
        assert_eq!(items[0]["linkAttrs"]["href"], json!("?page=2"));
        assert_eq!(items[3]["classes"], json!("page-item active"));
        assert_eq!(items[3]["attrs"]["aria-current"], json!("page"));
        assert_eq!(items[3]["linkTag"], json!("span"));
        assert_eq!(items[6]["linkAttrs"]["href"], json!("?page=4"));
    }

    #[test]
    fn test_edges_are_disabled() {
        let h = Harness::new();
        let options = h.render::<Pagination>(json!({
            "currentPage": 1,
            "totalPages": 2,
            "showFirstLast": true,
            "baseUrl": "/blog/page/",
        }));
        let items = options.get("items").unwrap().as_array().unwrap();
        assert_eq!(items[0]["linkAttrs"]["aria-label"], json!("First"));
        assert_eq!(items[0]["disabled"], json!(true));
        assert_eq!(items[1]["disabled"], json!(true));
        assert_eq!(items[3]["linkAttrs"]["href"], json!("/blog/page/2"));
        assert_eq!(items.last().unwrap()["linkAttrs"]["href"], json!("/blog/page/2"));
    }

    #[test]
    fn test_zero_current_page_falls_back_to_config() {
        let h = Harness::with_config("[pagination]\ncurrent_page = 2\ntotal_pages = 4\n");
        let options = h.render::<Pagination>(json!({ "currentPage": 0, "showPrevNext": false }));
        assert_eq!(options.get("currentPage"), Some(&json!(2)));
        assert_eq!(numbered(&options), vec![1, 2, 3, 4]);
        assert_eq!(options.get("items").unwrap().as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_pagination_classes_and_label() {
        let h = Harness::new();
        let options = h.render::<Pagination>(json!({ "size": "sm", "align": "center" }));
        assert_eq!(
            options.str("classes"),
            Some("pagination pagination-sm justify-content-center")
        );
        assert_eq!(options.attributes("attrs").render(), "aria-label=\"Pagination\"");
    }

    #[test]
    fn test_pagination_item() {
        let h = Harness::new();
        let options = h.render::<PaginationItem>(json!({ "href": "?page=2", "label": "2" }));
        assert_eq!(options.str("classes"), Some("page-item"));
        assert_eq!(options.str("linkTag"), Some("a"));

        let options = h.render::<PaginationItem>(json!({ "href": "?page=2", "disabled": true }));
        assert_eq!(options.str("classes"), Some("page-item disabled"));
        assert_eq!(options.str("linkTag"), Some("span"));
        assert!(options.attributes("linkAttrs").is_empty());
    }
}
