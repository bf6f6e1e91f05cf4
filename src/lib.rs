//! Fontpeek Library
//!
//! Backend for the fontpeek font preview tool: folder font listing, system
//! font detection, and the HTTP API serving both.

pub mod fonts;
pub mod server;
pub mod types;
