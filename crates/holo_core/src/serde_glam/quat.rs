use serde::{
    de::{self, SeqAccess, Visitor},
    Deserialize, Serialize,
};

/// Rotation quaternion, serialized in `[x, y, z, w]` order.
/// The value is kept as given: it is not normalized.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Quat(pub glam::Quat);

impl Default for Quat {
    fn default() -> Self {
        Quat(glam::Quat::IDENTITY)
    }
}

impl From<Quat> for glam::Quat {
    fn from(src: Quat) -> glam::Quat {
        src.0
    }
}
impl From<glam::Quat> for Quat {
    fn from(src: glam::Quat) -> Quat {
        Quat(src)
    }
}
impl From<[f32; 4]> for Quat {
    fn from(src: [f32; 4]) -> Quat {
        // from_array does not normalize, which is what we want here
        Quat(glam::Quat::from_array(src))
    }
}

struct QuatDeserializer;
impl<'de> Visitor<'de> for QuatDeserializer {
    type Value = Quat;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a quaternion as a sequence of four floats [x, y, z, w]")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut values = [0.0f32; 4];
        for (i, value) in values.iter_mut().enumerate() {
            *value = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(i, &self))?;
        }
        Ok(Quat(glam::Quat::from_array(values)))
    }
}

impl Serialize for Quat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(4))?;
        seq.serialize_element(&self.0.x)?;
        seq.serialize_element(&self.0.y)?;
        seq.serialize_element(&self.0.z)?;
        seq.serialize_element(&self.0.w)?;
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Quat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(QuatDeserializer)
    }
}
