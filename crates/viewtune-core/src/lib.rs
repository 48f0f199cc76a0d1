//! viewtune Core - image transform and filter state
//!
//! This crate holds the platform-independent part of viewtune: the per-image
//! transform/filter state, the CSS descriptors it publishes, the keyboard
//! dispatch table, and the viewer configuration. Nothing here touches the DOM;
//! the state writes through the [`ImageElement`] trait, which `viewtune-wasm`
//! implements for `<img>` elements.

pub mod config;
pub mod css;
pub mod element;
pub mod keymap;
pub mod state;

pub use config::{ConfigError, FilterPreset, ViewerConfig};
pub use element::{ImageElement, MemoryImage};
pub use keymap::{bound_codes, dispatch, KeyAction};
pub use state::{ImageTransformState, TransformSnapshot};
