//! Interactive move and resize of windows.
// We deny clippy pedantic lints, primarily to keep code as correct as possible
#![warn(clippy::pedantic)]
// Geometry is exchanged as i32 with display servers which store sizes unsigned.
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::must_use_candidate
)]
pub mod config;
mod display_action;
mod display_event;
pub mod display_servers;
pub mod errors;
mod event_loop;
mod handlers;
pub mod models;
pub mod state;
pub mod utils;

pub use config::Config;
pub use display_action::DisplayAction;
pub use display_event::{DisplayEvent, PointerMotion};
pub use display_servers::{DisplayServer, KeyboardGrab};
pub use errors::{DragError, Result};
pub use models::Manager;
pub use state::State;
pub use utils::modmask_lookup::ModMask;
