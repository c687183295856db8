//! UI components
//!
//! Every component follows the same two-phase contract:
//!
//! 1. `mount` - resolve explicit props against configured defaults using the
//!    component's rule table, generate IDs, derive structural props
//! 2. `options` - derive classes and attributes into a [`RenderOptions`]
//!    record for the template layer
//!
//! `options` is pure: calling it twice on an unmutated instance yields the
//! same record.
//!
//! Components deserialize from a camelCase JSON props object, so the set of
//! explicit inputs is exactly the struct's fields.

pub mod base;
pub mod defaults;
pub mod ids;

mod accordion;
mod alert;
mod badge;
mod breadcrumbs;
mod button;
mod card;
mod carousel;
mod collapse;
mod dropdown;
mod link;
mod list_group;
mod modal;
mod nav;
mod navbar;
mod offcanvas;
mod pagination;
mod placeholder;
mod progress;
mod spinner;
mod toast;

#[cfg(test)]
pub(crate) mod test_support;

pub use accordion::{Accordion, AccordionItem};
pub use alert::Alert;
pub use badge::Badge;
pub use base::{Base, Interactive};
pub use breadcrumbs::{BreadcrumbItem, Breadcrumbs};
pub use button::{Button, ButtonGroup};
pub use card::Card;
pub use carousel::{Carousel, CarouselItem};
pub use collapse::Collapse;
pub use defaults::{Defaults, Fallback, Merge, PropValue, Rule};
pub use dropdown::{Dropdown, DropdownDivider, DropdownHeader, DropdownItem};
pub use ids::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
pub use link::Link;
pub use list_group::{ListGroup, ListGroupItem};
pub use modal::Modal;
pub use nav::{Nav, NavItem};
pub use navbar::Navbar;
pub use offcanvas::Offcanvas;
pub use pagination::{Pagination, PaginationItem};
pub use placeholder::Placeholder;
pub use progress::Progress;
pub use spinner::Spinner;
pub use toast::Toast;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

use crate::config::ComponentConfig;
use crate::html::Attributes;
use crate::routing::{RequestContext, RouteTable};

// ─────────────────────────────────────────────────────────────────────────────
// Render context
// ─────────────────────────────────────────────────────────────────────────────

/// Collaborators available while mounting a component
#[derive(Clone, Copy)]
pub struct MountContext<'a> {
    pub config: &'a ComponentConfig,
    pub ids: &'a dyn IdGenerator,
    pub router: Option<&'a dyn RouteTable>,
    pub request: Option<&'a RequestContext>,
}

impl<'a> MountContext<'a> {
    pub fn new(config: &'a ComponentConfig, ids: &'a dyn IdGenerator) -> Self {
        Self {
            config,
            ids,
            router: None,
            request: None,
        }
    }

    pub fn with_router(mut self, router: &'a dyn RouteTable) -> Self {
        self.router = Some(router);
        self
    }

    pub fn with_request(mut self, request: &'a RequestContext) -> Self {
        self.request = Some(request);
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Render options record
// ─────────────────────────────────────────────────────────────────────────────

/// Flat key/value record handed to the template layer
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RenderOptions(Map<String, Value>);

impl RenderOptions {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn with_opt<V: Into<Value>>(self, key: &str, value: Option<V>) -> Self {
        let value = value.map(Into::into).unwrap_or(Value::Null);
        self.with(key, value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn bool(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(Value::as_bool)
    }

    /// Attribute map stored under `key` (`attrs`, `buttonAttrs`, ...)
    pub fn attributes(&self, key: &str) -> Attributes {
        self.0
            .get(key)
            .and_then(Value::as_object)
            .cloned()
            .map(Attributes::from)
            .unwrap_or_default()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Component contract
// ─────────────────────────────────────────────────────────────────────────────

pub trait Component: DeserializeOwned + Default {
    /// Config table name (`[components.<NAME>]`)
    const NAME: &'static str;

    /// Defaulting rule per configurable property
    const RULES: &'static [Rule];

    /// Resolve props against configuration; safe to call more than once
    fn mount(&mut self, ctx: &MountContext<'_>);

    /// Derive the render options record
    fn options(&self) -> RenderOptions;

    /// Defaulting pass bound to this component's config table and rules
    fn defaults<'a>(ctx: &MountContext<'a>) -> Defaults<'a> {
        Defaults::new(ctx.config.component(Self::NAME), Self::RULES)
    }
}

#[derive(Debug)]
pub enum ComponentError {
    /// No component registered under this name
    Unknown(String),
    /// Props could not be deserialized into the component
    InvalidProps { component: String, message: String },
}

impl fmt::Display for ComponentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(name) => write!(f, "Unknown component '{}'", name),
            Self::InvalidProps { component, message } => {
                write!(f, "Invalid props for '{}': {}", component, message)
            }
        }
    }
}

impl std::error::Error for ComponentError {}

/// Deserialize props, mount and derive options for one component type
pub fn render_with<C: Component>(
    props: Value,
    ctx: &MountContext<'_>,
) -> Result<RenderOptions, ComponentError> {
    let mut component: C = if props.is_null() {
        C::default()
    } else {
        serde_json::from_value(props).map_err(|e| ComponentError::InvalidProps {
            component: C::NAME.to_string(),
            message: e.to_string(),
        })?
    };
    component.mount(ctx);
    Ok(component.options())
}

/// Names accepted by [`render`]
pub const NAMES: &[&str] = &[
    Accordion::NAME,
    AccordionItem::NAME,
    Alert::NAME,
    Badge::NAME,
    Breadcrumbs::NAME,
    Button::NAME,
    ButtonGroup::NAME,
    Card::NAME,
    Carousel::NAME,
    CarouselItem::NAME,
    Collapse::NAME,
    Dropdown::NAME,
    DropdownItem::NAME,
    DropdownDivider::NAME,
    DropdownHeader::NAME,
    Link::NAME,
    ListGroup::NAME,
    ListGroupItem::NAME,
    Modal::NAME,
    Nav::NAME,
    NavItem::NAME,
    Navbar::NAME,
    Offcanvas::NAME,
    Pagination::NAME,
    PaginationItem::NAME,
    Placeholder::NAME,
    Progress::NAME,
    Spinner::NAME,
    Toast::NAME,
];

pub fn names() -> &'static [&'static str] {
    NAMES
}

/// Render a component by name (`button`, `AccordionItem`, `list_group_item`, ...)
pub fn render(
    name: &str,
    props: Value,
    ctx: &MountContext<'_>,
) -> Result<RenderOptions, ComponentError> {
    let normalized = crate::traits::stimulus::kebab_case(name.trim());
    match normalized.as_str() {
        "accordion" => render_with::<Accordion>(props, ctx),
        "accordion-item" => render_with::<AccordionItem>(props, ctx),
        "alert" => render_with::<Alert>(props, ctx),
        "badge" => render_with::<Badge>(props, ctx),
        "breadcrumbs" => render_with::<Breadcrumbs>(props, ctx),
        "button" => render_with::<Button>(props, ctx),
        "button-group" => render_with::<ButtonGroup>(props, ctx),
        "card" => render_with::<Card>(props, ctx),
        "carousel" => render_with::<Carousel>(props, ctx),
        "carousel-item" => render_with::<CarouselItem>(props, ctx),
        "collapse" => render_with::<Collapse>(props, ctx),
        "dropdown" => render_with::<Dropdown>(props, ctx),
        "dropdown-item" => render_with::<DropdownItem>(props, ctx),
        "dropdown-divider" => render_with::<DropdownDivider>(props, ctx),
        "dropdown-header" => render_with::<DropdownHeader>(props, ctx),
        "link" => render_with::<Link>(props, ctx),
        "list-group" => render_with::<ListGroup>(props, ctx),
        "list-group-item" => render_with::<ListGroupItem>(props, ctx),
        "modal" => render_with::<Modal>(props, ctx),
        "nav" => render_with::<Nav>(props, ctx),
        "nav-item" => render_with::<NavItem>(props, ctx),
        "navbar" => render_with::<Navbar>(props, ctx),
        "offcanvas" => render_with::<Offcanvas>(props, ctx),
        "pagination" => render_with::<Pagination>(props, ctx),
        "pagination-item" => render_with::<PaginationItem>(props, ctx),
        "placeholder" => render_with::<Placeholder>(props, ctx),
        "progress" => render_with::<Progress>(props, ctx),
        "spinner" => render_with::<Spinner>(props, ctx),
        "toast" => render_with::<Toast>(props, ctx),
        _ => Err(ComponentError::Unknown(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::Harness;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_every_name_renders_with_defaults() {
        let h = Harness::new();
        for name in NAMES {
            let options = render(name, Value::Null, &h.ctx());
            assert!(options.is_ok(), "{} failed: {:?}", name, options.err());
            let options = options.unwrap();
            assert!(options.get("classes").is_some(), "{} has no classes", name);
            assert!(options.get("attrs").is_some(), "{} has no attrs", name);
        }
    }

    #[test]
    fn test_name_normalization() {
        let h = Harness::new();
        assert!(render("AccordionItem", json!({}), &h.ctx()).is_ok());
        assert!(render("list_group_item", json!({}), &h.ctx()).is_ok());
        assert!(render("dropdown-header", json!({}), &h.ctx()).is_ok());
    }

    #[test]
    fn test_unknown_component() {
        let h = Harness::new();
        let err = render("jumbotron", json!({}), &h.ctx()).unwrap_err();
        assert!(matches!(err, ComponentError::Unknown(ref n) if n == "jumbotron"));
    }

    #[test]
    fn test_invalid_props() {
        let h = Harness::new();
        let err = render("button", json!({ "outline": "yes" }), &h.ctx()).unwrap_err();
        assert!(matches!(err, ComponentError::InvalidProps { .. }));
        assert!(err.to_string().contains("button"));
    }

    #[test]
    fn test_registry_matches_direct_construction() {
        let h = Harness::new();
        let props = json!({ "variant": "success", "size": "lg", "label": "Go" });
        let via_registry = render("button", props.clone(), &h.ctx()).unwrap();

        let mut button: Button = serde_json::from_value(props).unwrap();
        button.mount(&h.ctx());
        assert_eq!(via_registry, button.options());
    }

    #[test]
    fn test_rule_tables_have_unique_keys() {
        fn check<C: Component>() {
            let mut keys: Vec<_> = C::RULES.iter().map(|r| r.key).collect();
            let total = keys.len();
            keys.sort();
            keys.dedup();
            assert_eq!(keys.len(), total, "duplicate rule keys in {}", C::NAME);
        }
        check::<Accordion>();
        check::<AccordionItem>();
        check::<Alert>();
        check::<Badge>();
        check::<Breadcrumbs>();
        check::<Button>();
        check::<ButtonGroup>();
        check::<Card>();
        check::<Carousel>();
        check::<CarouselItem>();
        check::<Collapse>();
        check::<Dropdown>();
        check::<DropdownItem>();
        check::<DropdownHeader>();
        check::<Link>();
        check::<ListGroup>();
        check::<ListGroupItem>();
        check::<Modal>();
        check::<Nav>();
        check::<NavItem>();
        check::<Navbar>();
        check::<Offcanvas>();
        check::<Pagination>();
        check::<PaginationItem>();
        check::<Placeholder>();
        check::<Progress>();
        check::<Spinner>();
        check::<Toast>();
    }

    #[test]
    fn test_mount_applies_every_rule() {
        fn check<C: Component>() {
            let h = Harness::new();
            defaults::take_applied();
            let mut component = C::default();
            component.mount(&h.ctx());
            let applied = defaults::take_applied();
            for rule in C::RULES {
                assert!(
                    applied.iter().any(|key| key == rule.key),
                    "{} never applies '{}'",
                    C::NAME,
                    rule.key
                );
            }
        }
        check::<Accordion>();
        check::<AccordionItem>();
        check::<Alert>();
        check::<Badge>();
        check::<Breadcrumbs>();
        check::<Button>();
        check::<ButtonGroup>();
        check::<Card>();
        check::<Carousel>();
        check::<CarouselItem>();
        check::<Collapse>();
        check::<Dropdown>();
        check::<DropdownItem>();
        check::<DropdownDivider>();
        check::<DropdownHeader>();
        check::<Link>();
        check::<ListGroup>();
        check::<ListGroupItem>();
        check::<Modal>();
        check::<Nav>();
        check::<NavItem>();
        check::<Navbar>();
        check::<Offcanvas>();
        check::<Pagination>();
        check::<PaginationItem>();
        check::<Placeholder>();
        check::<Progress>();
        check::<Spinner>();
        check::<Toast>();
    }

    #[test]
    fn test_options_are_idempotent() {
        let h = Harness::new();
        for name in NAMES {
            let mut first = None;
            for _ in 0..2 {
                let options = render(name, json!({ "id": "fixed" }), &h.ctx()).unwrap();
                match &first {
                    None => first = Some(options),
                    Some(prev) => assert_eq!(prev, &options, "{} is not stable", name),
                }
            }
        }
    }

    #[test]
    fn test_mount_twice_is_stable() {
        let h = Harness::new();
        let mut alert: Alert = serde_json::from_value(json!({ "class": "mb-3" })).unwrap();
        alert.mount(&h.ctx());
        let once = alert.options();
        alert.mount(&h.ctx());
        assert_eq!(once, alert.options());
    }
}
