//! Configuration, logging and the scripted display server around `wmdrag-core`.
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
mod config;
pub mod replay;
pub mod utils;

pub use config::*;
