//! Renda viewer library
//!
//! This crate contains the desktop viewer's surfaces used by the
//! executable in `src/main.rs`: application glue, the holdings list
//! view, and the small infrastructure around it (config, API client).
//!
//! Notes
//! - The library is exposed mainly to enable testing and internal
//!   reuse; most consumers should use the `renda-viewer` binary.

pub mod api_client;
pub mod app;
pub mod config;
pub mod message;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
pub mod views;
pub mod widgets;
