//! strapkit - server-side Bootstrap components
//!
//! Components take typed props, resolve them against configured defaults and
//! derive the class strings and HTML attributes a template renders. Around
//! that engine sit a route-derived search index and a document theme helper.
//!
//! ```
//! use serde_json::json;
//! use strapkit::components::{self, MountContext, SequentialIdGenerator};
//! use strapkit::config::ComponentConfig;
//!
//! let config = ComponentConfig::library_defaults();
//! let ids = SequentialIdGenerator::new();
//! let ctx = MountContext::new(&config, &ids);
//!
//! let options = components::render("button", json!({ "variant": "danger", "size": "sm" }), &ctx).unwrap();
//! assert_eq!(options.str("classes"), Some("btn btn-danger btn-sm"));
//! ```

pub mod components;
pub mod config;
pub mod html;
pub mod logging;
pub mod routing;
pub mod search;
pub mod server;
pub mod theme;
pub mod traits;
pub mod util;
