use holo_core::serde_glam::{Quat, Vec3, Vec4};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::primitive::PrimitiveShape;

/// One primitive as it should appear on the device, before it is submitted.
///
/// The shape is resolved from its name when the descriptor is built and the name is kept,
/// so that an unknown name can be reported later with what the caller actually asked for.
/// Ranges are not validated: NaN positions or colors outside `[0, 1]` are sent as they are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawRenderDescriptor", into = "RawRenderDescriptor")]
pub struct RenderDescriptor {
    shape_name: SmolStr,
    shape: Option<PrimitiveShape>,
    position: Vec3,
    rotation: Quat,
    scale: Vec3,
    color: Vec4,
}

/// What is actually written to disk or to a message: the shape by name only.
#[derive(Clone, Serialize, Deserialize)]
struct RawRenderDescriptor {
    shape: SmolStr,
    position: Vec3,
    rotation: Quat,
    scale: Vec3,
    color: Vec4,
}

impl From<RawRenderDescriptor> for RenderDescriptor {
    fn from(raw: RawRenderDescriptor) -> Self {
        RenderDescriptor::new(&raw.shape, raw.position, raw.rotation, raw.scale, raw.color)
    }
}

impl From<RenderDescriptor> for RawRenderDescriptor {
    fn from(desc: RenderDescriptor) -> Self {
        RawRenderDescriptor {
            shape: desc.shape_name,
            position: desc.position,
            rotation: desc.rotation,
            scale: desc.scale,
            color: desc.color,
        }
    }
}

impl RenderDescriptor {
    /// - position: `[x, y, z]`
    /// - rotation: quaternion `[x, y, z, w]`
    /// - scale: `[sx, sy, sz]`
    /// - color: `[r, g, b, a]`
    pub fn new(
        shape_name: &str,
        position: impl Into<Vec3>,
        rotation: impl Into<Quat>,
        scale: impl Into<Vec3>,
        color: impl Into<Vec4>,
    ) -> Self {
        Self {
            shape_name: shape_name.into(),
            shape: PrimitiveShape::resolve(shape_name),
            position: position.into(),
            rotation: rotation.into(),
            scale: scale.into(),
            color: color.into(),
        }
    }

    pub fn with_shape(
        shape: PrimitiveShape,
        position: impl Into<Vec3>,
        rotation: impl Into<Quat>,
        scale: impl Into<Vec3>,
        color: impl Into<Vec4>,
    ) -> Self {
        Self::new(shape.name(), position, rotation, scale, color)
    }

    /// `None` when the name given at construction is not a known primitive.
    pub fn shape(&self) -> Option<PrimitiveShape> {
        self.shape
    }
    pub fn shape_name(&self) -> &str {
        &self.shape_name
    }
    pub fn position(&self) -> glam::Vec3 {
        self.position.0
    }
    pub fn rotation(&self) -> glam::Quat {
        self.rotation.0
    }
    pub fn scale(&self) -> glam::Vec3 {
        self.scale.0
    }
    pub fn color(&self) -> glam::Vec4 {
        self.color.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn red_cube() -> RenderDescriptor {
        RenderDescriptor::new(
            "cube",
            [0.0, 0.0, 1.0],
            [0.0, 0.0, 0.0, 1.0],
            [0.2, 0.2, 0.2],
            [1.0, 0.0, 0.0, 1.0],
        )
    }

    #[test]
    fn test_new_resolves_shape() {
        let desc = red_cube();
        assert_eq!(desc.shape(), Some(PrimitiveShape::Cube));
        assert_eq!(desc.shape_name(), "cube");
        assert_eq!(desc.position(), glam::Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(desc.rotation(), glam::Quat::IDENTITY);
        assert_eq!(desc.color(), glam::Vec4::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_unknown_shape_is_kept_by_name() {
        let desc = RenderDescriptor::new(
            "dodecahedron",
            glam::Vec3::ZERO,
            glam::Quat::IDENTITY,
            glam::Vec3::ONE,
            glam::Vec4::ONE,
        );
        assert_eq!(desc.shape(), None);
        assert_eq!(desc.shape_name(), "dodecahedron");
    }

    #[test]
    fn test_deserialize_resolves_shape() {
        let json = r#"{
            "shape": "sphere",
            "position": [1.0, 2.0, 3.0],
            "rotation": [0.0, 0.0, 0.0, 1.0],
            "scale": [0.5, 0.5, 0.5],
            "color": [0.0, 1.0, 0.0, 0.5]
        }"#;
        let desc: RenderDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(desc.shape(), Some(PrimitiveShape::Sphere));
        assert_eq!(desc.scale(), glam::Vec3::splat(0.5));

        let again: RenderDescriptor =
            serde_json::from_str(&serde_json::to_string(&desc).unwrap()).unwrap();
        assert_eq!(again, desc);
    }
}
