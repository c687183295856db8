//! Shared fixtures for component tests

use serde_json::Value;

use super::{Component, MountContext, RenderOptions, SequentialIdGenerator};
use crate::config::ComponentConfig;
use crate::routing::{RequestContext, StaticRouteTable};

pub(crate) struct Harness {
    pub config: ComponentConfig,
    pub ids: SequentialIdGenerator,
    pub router: Option<StaticRouteTable>,
    pub request: Option<RequestContext>,
}

impl Harness {
    /// Library defaults, deterministic IDs, no router
    pub fn new() -> Self {
        Self {
            config: ComponentConfig::library_defaults(),
            ids: SequentialIdGenerator::new(),
            router: None,
            request: None,
        }
    }

    /// Library defaults overlaid with a TOML snippet of component tables
    pub fn with_config(toml: &str) -> Self {
        let overrides = toml::from_str(toml).expect("valid component config");
        Self {
            config: ComponentConfig::library_defaults().with_overrides(overrides),
            ..Self::new()
        }
    }

    pub fn ctx(&self) -> MountContext<'_> {
        let mut ctx = MountContext::new(&self.config, &self.ids);
        if let Some(router) = &self.router {
            ctx = ctx.with_router(router);
        }
        if let Some(request) = &self.request {
            ctx = ctx.with_request(request);
        }
        ctx
    }

    /// Deserialize, mount and derive options
    pub fn render<C: Component>(&self, props: Value) -> RenderOptions {
        let mut component: C = serde_json::from_value(props).expect("valid props");
        component.mount(&self.ctx());
        component.options()
    }
}

/// Classes string under `key` split into a list
pub(crate) fn classes(options: &RenderOptions, key: &str) -> Vec<String> {
    options
        .str(key)
        .unwrap_or_default()
        .split_whitespace()
        .map(String::from)
        .collect()
}
