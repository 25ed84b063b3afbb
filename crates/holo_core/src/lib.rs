//! Plumbing shared by the holo render crates: glam wrappers with serde support,
//! configuration and tracing setup.

pub mod config;
pub mod serde_glam;
pub mod trace;

pub use config::{ConnectionTarget, IpcPort, RenderConfig};
