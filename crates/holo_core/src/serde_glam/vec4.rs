use serde::{
    de::{self, SeqAccess, Visitor},
    Deserialize, Serialize,
};

/// Used for rgba colors.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec4(pub glam::Vec4);

impl From<Vec4> for glam::Vec4 {
    fn from(src: Vec4) -> glam::Vec4 {
        src.0
    }
}
impl From<glam::Vec4> for Vec4 {
    fn from(src: glam::Vec4) -> Vec4 {
        Vec4(src)
    }
}
impl From<[f32; 4]> for Vec4 {
    fn from(src: [f32; 4]) -> Vec4 {
        Vec4(glam::Vec4::from_array(src))
    }
}

struct Vec4Deserializer;
impl<'de> Visitor<'de> for Vec4Deserializer {
    type Value = Vec4;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence of four floats [x, y, z, w]")
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
        Ok(Vec4(glam::Vec4::from_array(values)))
    }
}

impl Serialize for Vec4 {
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

impl<'de> Deserialize<'de> for Vec4 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(Vec4Deserializer)
    }
}
