use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The primitives the remote renderer knows how to create.
/// The discriminant is the code the device expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveShape {
    Sphere = 0,
    Capsule = 1,
    Cylinder = 2,
    Cube = 3,
    //NOTE: planes are known to render badly on the device, prefer quads
    Plane = 4,
    Quad = 5,
}

const SHAPE_TABLE: [(&str, PrimitiveShape); 6] = [
    ("cube", PrimitiveShape::Cube),
    ("capsule", PrimitiveShape::Capsule),
    ("cylinder", PrimitiveShape::Cylinder),
    ("sphere", PrimitiveShape::Sphere),
    ("plane", PrimitiveShape::Plane),
    ("quad", PrimitiveShape::Quad),
];

impl PrimitiveShape {
    pub const ALL: [PrimitiveShape; 6] = [
        PrimitiveShape::Cube,
        PrimitiveShape::Capsule,
        PrimitiveShape::Cylinder,
        PrimitiveShape::Sphere,
        PrimitiveShape::Plane,
        PrimitiveShape::Quad,
    ];

    /// Case sensitive lookup. An unknown name is not an error here, the caller decides.
    pub fn resolve(name: &str) -> Option<Self> {
        SHAPE_TABLE
            .iter()
            .find(|(shape_name, _)| *shape_name == name)
            .map(|(_, shape)| *shape)
    }

    pub fn name(self) -> &'static str {
        match self {
            PrimitiveShape::Cube => "cube",
            PrimitiveShape::Capsule => "capsule",
            PrimitiveShape::Cylinder => "cylinder",
            PrimitiveShape::Sphere => "sphere",
            PrimitiveShape::Plane => "plane",
            PrimitiveShape::Quad => "quad",
        }
    }

    pub fn code(self) -> u32 {
        self as u32
    }
}

impl std::fmt::Display for PrimitiveShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PrimitiveShape {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s).ok_or("unknown primitive shape")
    }
}

#[cfg(test)]
mod test {
    use super::PrimitiveShape;
    use std::collections::HashSet;

    #[test]
    fn test_resolve_every_name() {
        assert_eq!(PrimitiveShape::resolve("cube"), Some(PrimitiveShape::Cube));
        assert_eq!(PrimitiveShape::resolve("capsule"), Some(PrimitiveShape::Capsule));
        assert_eq!(PrimitiveShape::resolve("cylinder"), Some(PrimitiveShape::Cylinder));
        assert_eq!(PrimitiveShape::resolve("sphere"), Some(PrimitiveShape::Sphere));
        assert_eq!(PrimitiveShape::resolve("plane"), Some(PrimitiveShape::Plane));
        assert_eq!(PrimitiveShape::resolve("quad"), Some(PrimitiveShape::Quad));

        let distinct: HashSet<_> = ["cube", "capsule", "cylinder", "sphere", "plane", "quad"]
            .iter()
            .filter_map(|name| PrimitiveShape::resolve(name))
            .collect();
        assert_eq!(distinct.len(), 6);
    }

    #[test]
    fn test_resolve_unknown() {
        assert_eq!(PrimitiveShape::resolve("pyramid"), None);
        assert_eq!(PrimitiveShape::resolve(""), None);
        // lookup is case sensitive
        assert_eq!(PrimitiveShape::resolve("Cube"), None);
        assert!("torus".parse::<PrimitiveShape>().is_err());
    }

    #[test]
    fn test_name_round_trip() {
        for shape in PrimitiveShape::ALL {
            assert_eq!(shape.to_string().parse::<PrimitiveShape>(), Ok(shape));
        }
        let codes: HashSet<u32> = PrimitiveShape::ALL.iter().map(|s| s.code()).collect();
        assert_eq!(codes.len(), 6);
        assert_eq!(PrimitiveShape::Cube.code(), 3);
    }
}
