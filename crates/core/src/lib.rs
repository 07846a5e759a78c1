#![warn(clippy::all, missing_docs)]

//! Core state for the Terraforming Mars companion.
//!
//! This crate hosts the resource counters, the board tracker, the
//! session controller, and configuration handling used by the terminal
//! UI and any future frontends.

pub mod board;
pub mod config;
pub mod resource;
pub mod session;
pub mod view_model;

pub use board::BoardState;
pub use config::AppConfig;
pub use resource::{ResourceKind, ResourceState};
pub use session::{Action, GameSession};
pub use view_model::ResourceCollection;
