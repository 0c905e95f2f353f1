//! Domain layer for the reelbox plugin.
//!
//! Core types independent of Zellij APIs and storage formats.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`short`]: The short video item and its identifier
//!
//! # Examples
//!
//! ```
//! use reelbox::domain::{Result, Short};
//!
//! fn sample() -> Result<Short> {
//!     Ok(Short::new(7, "Dog Run").with_tags(["funny", "dogs"]))
//! }
//! # assert!(sample().is_ok());
//! ```

pub mod error;
pub mod short;

pub use error::{ReelboxError, Result};
pub use short::{Short, ShortId};
