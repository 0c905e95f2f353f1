//! Terminal UI rendering.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready types computed from state
//! - [`renderer`]: Rendering entry point
//! - [`components`]: Per-section renderers and layout
//! - [`helpers`]: Cursor positioning, highlighting and text utilities
//! - [`theme`]: Color schemes and ANSI escape generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    DisplayItem, EmptyState, FooterInfo, HeaderInfo, PreviewInfo, SearchBarInfo, TagBarInfo, TagChip,
    UIViewModel,
};
