//! Breadcrumb trail, optionally derived from the current route
//!
//! With `autoGenerate` and no explicit `items`, the trail is built from the
//! matched route's path template: every static segment becomes a crumb,
//! `{param}` segments are skipped, and the final crumb is the active page.
//! Earlier crumbs link to whichever registered route owns the cumulative
//! path. Nothing here fails: an unresolvable URL just leaves the crumb
//! unlinked.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use super::base::Base;
use super::defaults::{Fallback, Rule};
use super::{Component, MountContext, RenderOptions};
use crate::html::{Attributes, ClassList};
use crate::routing::{is_parameter, parameter_name, RequestContext, RouteTable};
use crate::util::humanize;

/// One resolved crumb
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreadcrumbItem {
    pub label: String,
    #[serde(alias = "href")]
    pub url: Option<String>,
    pub active: bool,
}

impl BreadcrumbItem {
    pub fn new(label: impl Into<String>, url: Option<String>, active: bool) -> Self {
        Self {
            label: label.into(),
            url,
            active,
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(label) => Some(Self::new(label.as_str(), None, false)),
            Value::Object(_) => serde_json::from_value(value.clone())
                .map_err(|e| tracing::debug!("Skipping malformed breadcrumb item: {}", e))
                .ok(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Breadcrumbs {
    #[serde(flatten)]
    pub base: Base,
    /// Explicit crumbs (`{label, url, active}` or bare labels)
    pub items: Option<Vec<Value>>,
    pub auto_generate: Option<bool>,
    pub show_home: Option<bool>,
    pub home_label: Option<String>,
    pub home_route: Option<String>,
    /// Divider character, passed through `--bs-breadcrumb-divider`
    pub divider: Option<String>,
    pub aria_label: Option<String>,
    #[serde(skip)]
    resolved: Vec<BreadcrumbItem>,
}

impl Breadcrumbs {
    fn explicit_items(&self) -> Vec<BreadcrumbItem> {
        self.items
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter_map(BreadcrumbItem::from_value)
            .collect()
    }

    fn generate(&self, router: &dyn RouteTable, request: Option<&RequestContext>) -> Vec<BreadcrumbItem> {
        let mut items = Vec::new();
        let current_path = request.map(|r| r.path.as_str());

        if self.show_home.unwrap_or(true) {
            let home_route = self.home_route.as_deref().unwrap_or("app_home");
            match router.generate(home_route, &HashMap::new()) {
                Ok(url) => {
                    let active = current_path == Some(url.as_str());
                    let label = self.home_label.as_deref().unwrap_or("Home");
                    items.push(BreadcrumbItem::new(label, Some(url), active));
                }
                Err(e) => tracing::debug!("Skipping home breadcrumb: {}", e),
            }
        }

        let Some(request) = request else {
            return items;
        };
        let Some(route) = request.route.as_deref().and_then(|name| router.find(name)) else {
            tracing::debug!("No matched route for breadcrumbs at '{}'", request.path);
            return items;
        };

        let params = extract_parameters(&route.path, &request.path);
        let segments: Vec<&str> = route.path.split('/').filter(|s| !s.is_empty()).collect();
        let last_static = segments.iter().rposition(|s| !is_parameter(s));

        for (index, segment) in segments.iter().enumerate() {
            if is_parameter(segment) {
                continue;
            }
            let label = humanize(segment);
            if Some(index) == last_static {
                items.push(BreadcrumbItem::new(label, None, true));
                break;
            }
            let cumulative = format!("/{}", segments[..=index].join("/"));
            let url = resolve_url(router, &cumulative, &params);
            items.push(BreadcrumbItem::new(label, url, false));
        }
        items
    }
}

/// Values for `{param}` placeholders, read positionally from a concrete path
fn extract_parameters(template: &str, path: &str) -> HashMap<String, String> {
    let template: Vec<&str> = template.split('/').filter(|s| !s.is_empty()).collect();
    let path: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    template
        .iter()
        .zip(path.iter())
        .filter_map(|(t, p)| parameter_name(t).map(|name| (name.to_string(), p.to_string())))
        .collect()
}

/// URL of the route whose template is exactly `cumulative`, if it can be generated
fn resolve_url(
    router: &dyn RouteTable,
    cumulative: &str,
    params: &HashMap<String, String>,
) -> Option<String> {
    let route = router.routes().iter().find(|r| r.path == cumulative)?;
    match router.generate(&route.name, params) {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::debug!("Breadcrumb for '{}' left unlinked: {}", cumulative, e);
            None
        }
    }
}

impl Component for Breadcrumbs {
    const NAME: &'static str = "breadcrumbs";

    const RULES: &'static [Rule] = &[
        Rule::coalesce("items"),
        Rule::or("auto_generate"),
        Rule::coalesce("show_home"),
        Rule::falsy("home_label", Fallback::Str("Home")),
        Rule::falsy("home_route", Fallback::Str("app_home")),
        Rule::coalesce("divider"),
        Rule::falsy("aria_label", Fallback::Str("breadcrumb")),
    ];

    fn mount(&mut self, ctx: &MountContext<'_>) {
        let d = Self::defaults(ctx);
        self.base.mount(&d);
        d.apply("items", &mut self.items);
        d.apply("auto_generate", &mut self.auto_generate);
        d.apply("show_home", &mut self.show_home);
        d.apply("home_label", &mut self.home_label);
        d.apply("home_route", &mut self.home_route);
        d.apply("divider", &mut self.divider);
        d.apply("aria_label", &mut self.aria_label);

        let explicit = self.explicit_items();
        self.resolved = if !explicit.is_empty() || !self.auto_generate.unwrap_or(false) {
            explicit
        } else if let Some(router) = ctx.router {
            self.generate(router, ctx.request)
        } else {
            tracing::debug!("Breadcrumb auto-generation needs a route table");
            Vec::new()
        };

        if !self.resolved.is_empty() && !self.resolved.iter().any(|i| i.active) {
            if let Some(last) = self.resolved.last_mut() {
                last.active = true;
            }
        }
    }

    fn options(&self) -> RenderOptions {
        let mut classes = ClassList::new();
        classes.push("breadcrumb");
        self.base.extend_classes(&mut classes);

        // Attributes for the wrapping <nav>
        let mut attrs = Attributes::new();
        attrs
            .set_opt("id", self.base.id())
            .set_opt("aria-label", self.aria_label.as_deref());
        if let Some(divider) = self.divider.as_deref().filter(|d| !d.is_empty()) {
            let escaped = divider.replace('\\', "\\\\").replace('\'', "\\'");
            attrs.set("style", format!("--bs-breadcrumb-divider: '{}';", escaped));
        }
        self.base.finish_attributes(&mut attrs);

        let items: Vec<Value> = self
            .resolved
            .iter()
            .map(|item| {
                let mut item_classes = ClassList::new();
                item_classes
                    .push("breadcrumb-item")
                    .push_if(item.active, "active");
                let mut item_attrs = Attributes::new();
                if item.active {
                    item_attrs.set("aria-current", "page");
                }
                // The current page is never linked
                serde_json::json!({
                    "label": item.label,
                    "url": if item.active { None } else { item.url.clone() },
                    "active": item.active,
                    "classes": item_classes.build(),
                    "attrs": item_attrs,
                })
            })
            .collect();

        RenderOptions::new()
            .with("items", items)
            .with("classes", classes.build())
            .with("attrs", attrs)
    }
}
