//! A simulated shell over an in-memory directory tree.
//!
//! - [`core`] - directory tree, path resolution and the command interpreter
//! - [`models`] - output lines, the output sink and command history
//! - [`app`], [`components`] - the Leptos terminal that hosts a session

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;
