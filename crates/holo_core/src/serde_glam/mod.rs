//! Serde wrappers around the glam types that travel through descriptors and messages.
//! They (de)serialize as flat float sequences so that `[1.0, 2.0, 3.0]` in a toml or json
//! document maps directly onto a position.

mod quat;
mod vec3;
mod vec4;

pub use quat::Quat;
pub use vec3::Vec3;
pub use vec4::Vec4;
