//! Tooltip and popover attribute builders
//!
//! Both accept either a bare string (the body text) or a structured object.
//! Attributes are only produced when there is something to show.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::html::Attributes;

const HTML_TAG_PATTERN: &str = r"</?[a-zA-Z][^>]*>";

fn html_tag_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| match Regex::new(HTML_TAG_PATTERN) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::error!("Invalid HTML tag pattern: {}", e);
            None
        }
    })
    .as_ref()
}

/// True when the text contains anything that looks like an HTML tag
pub fn looks_like_html(text: &str) -> bool {
    html_tag_regex().is_some_and(|re| re.is_match(text))
}

/// Options shared by tooltips and popovers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlayOptions {
    pub placement: Option<String>,
    pub trigger: Option<String>,
    pub container: Option<String>,
    pub boundary: Option<String>,
    pub custom_class: Option<String>,
    pub delay: Option<i64>,
    /// Explicit override of HTML auto-detection
    pub html: Option<bool>,
}

impl OverlayOptions {
    fn from_object(obj: &serde_json::Map<String, Value>) -> Self {
        let text = |key: &str| {
            obj.get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(String::from)
        };
        Self {
            placement: text("placement"),
            trigger: text("trigger"),
            container: text("container"),
            boundary: text("boundary"),
            custom_class: text("customClass").or_else(|| text("custom_class")),
            delay: obj.get("delay").and_then(Value::as_i64),
            html: obj.get("html").and_then(Value::as_bool),
        }
    }

    fn apply(&self, attrs: &mut Attributes, contents: &[&str]) {
        attrs
            .set_opt("data-bs-placement", self.placement.clone())
            .set_opt("data-bs-trigger", self.trigger.clone())
            .set_opt("data-bs-container", self.container.clone())
            .set_opt("data-bs-boundary", self.boundary.clone())
            .set_opt("data-bs-custom-class", self.custom_class.clone())
            .set_opt("data-bs-delay", self.delay.map(|d| d.to_string()));

        let html = self
            .html
            .unwrap_or_else(|| contents.iter().any(|c| looks_like_html(c)));
        if html {
            attrs.set("data-bs-html", "true");
        }
    }
}

fn non_empty(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tooltip {
    pub text: Option<String>,
    pub options: OverlayOptions,
}

impl Tooltip {
    /// Parse from a prop value (string or object); anything else is empty
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::String(s)) => Self {
                text: non_empty(Some(&Value::String(s.clone()))),
                options: OverlayOptions::default(),
            },
            Some(Value::Object(obj)) => Self {
                text: non_empty(obj.get("text")).or_else(|| non_empty(obj.get("title"))),
                options: OverlayOptions::from_object(obj),
            },
            _ => Self::default(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.text.is_some()
    }

    pub fn attributes(&self) -> Attributes {
        let mut attrs = Attributes::new();
        let Some(text) = &self.text else {
            return attrs;
        };
        attrs
            .set("data-bs-toggle", "tooltip")
            .set("data-bs-title", text.as_str());
        self.options.apply(&mut attrs, &[text]);
        attrs
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Popover {
    pub title: Option<String>,
    pub content: Option<String>,
    pub options: OverlayOptions,
}

impl Popover {
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::String(s)) => Self {
                title: None,
                content: non_empty(Some(&Value::String(s.clone()))),
                options: OverlayOptions::default(),
            },
            Some(Value::Object(obj)) => Self {
                title: non_empty(obj.get("title")),
                content: non_empty(obj.get("content")).or_else(|| non_empty(obj.get("text"))),
                options: OverlayOptions::from_object(obj),
            },
            _ => Self::default(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.content.is_some()
    }

    pub fn attributes(&self) -> Attributes {
        let mut attrs = Attributes::new();
        let Some(content) = &self.content else {
            return attrs;
        };
        attrs.set("data-bs-toggle", "popover");
        attrs.set_opt("data-bs-title", self.title.clone());
        attrs.set("data-bs-content", content.as_str());
        let title = self.title.as_deref().unwrap_or_default();
        self.options.apply(&mut attrs, &[title, content]);
        attrs
    }
}

/// Resolved overlay for one element: a popover wins over a tooltip
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    None,
    Tooltip(Tooltip),
    Popover(Popover),
}

impl Overlay {
    pub fn resolve(tooltip: Option<&Value>, popover: Option<&Value>) -> Self {
        let popover = Popover::from_value(popover);
        let tooltip = Tooltip::from_value(tooltip);
        if popover.is_enabled() {
            if tooltip.is_enabled() {
                tracing::debug!("Both tooltip and popover configured; using popover");
            }
            Self::Popover(popover)
        } else if tooltip.is_enabled() {
            Self::Tooltip(tooltip)
        } else {
            Self::None
        }
    }

    /// Behavior hook that initializes this overlay client-side
    pub fn controller(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Tooltip(_) => Some("bs-tooltip"),
            Self::Popover(_) => Some("bs-popover"),
        }
    }

    pub fn attributes(&self) -> Attributes {
        match self {
            Self::None => Attributes::new(),
            Self::Tooltip(t) => t.attributes(),
            Self::Popover(p) => p.attributes(),
        }
    }
}
