use serde::{
    de::{self, SeqAccess, Visitor},
    Deserialize, Serialize,
};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3(pub glam::Vec3);

impl From<Vec3> for glam::Vec3 {
    fn from(src: Vec3) -> glam::Vec3 {
        src.0
    }
}
impl From<glam::Vec3> for Vec3 {
    fn from(src: glam::Vec3) -> Vec3 {
        Vec3(src)
    }
}
impl From<[f32; 3]> for Vec3 {
    fn from(src: [f32; 3]) -> Vec3 {
        Vec3(glam::Vec3::from_array(src))
    }
}

struct Vec3Deserializer;
impl<'de> Visitor<'de> for Vec3Deserializer {
    type Value = Vec3;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence of three floats [x, y, z]")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let x: f32 = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let y: f32 = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        let z: f32 = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(2, &self))?;
        Ok(Vec3(glam::Vec3 { x, y, z }))
    }
}

impl Serialize for Vec3 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(3))?;
        seq.serialize_element(&self.0.x)?;
        seq.serialize_element(&self.0.y)?;
        seq.serialize_element(&self.0.z)?;
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Vec3 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(Vec3Deserializer)
    }
}
