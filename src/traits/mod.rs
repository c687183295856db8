//! Composition capabilities shared by components
//!
//! Each capability is a small standalone type. Components assemble the ones
//! they need by delegation instead of inheriting from a common base:
//!
//! - [`variant`] - semantic color classes per component family
//! - [`size`] - size token classes per family
//! - [`state`] - active / disabled / block classes and attributes
//! - [`icon`] - icon slots and label spacing
//! - [`tooltip`] - tooltip and popover `data-bs-*` attributes
//! - [`stimulus`] - `data-controller` behavior hooks

pub mod icon;
pub mod size;
pub mod state;
pub mod stimulus;
pub mod tooltip;
pub mod variant;

pub use icon::IconSlots;
pub use size::{Size, SizeFamily};
pub use state::{BlockStyle, ElementKind, StateFlags};
pub use stimulus::Controllers;
pub use tooltip::{Overlay, Popover, Tooltip};
pub use variant::{Variant, VariantFamily};
