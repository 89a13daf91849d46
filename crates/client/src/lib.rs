//! Terminal frontend for the arena duel.
//!
//! The binary loads [`ClientConfig`] from the environment, installs file
//! logging, builds a [`runtime::Runtime`] and hands it to [`ArenaApp`], which
//! owns the terminal until the player quits.

mod app;
pub mod config;
mod input;
pub mod logging;
mod presentation;

pub use app::ArenaApp;
pub use config::ClientConfig;
pub use input::{InputHandler, KeyAction};
