//! Utility modules.
//!
//! Provides:
//! - [`Scrollback`] - Bounded terminal output buffer
//! - [`logging`] - `log` backend for the browser console

pub mod logging;
mod scrollback;

pub use scrollback::Scrollback;
