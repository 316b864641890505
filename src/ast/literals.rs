use serde::{Deserialize, Serialize};

/// Value carried by a scalar constant. Exactly one kind is ever present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum ConstValue {
    Str(#[serde(with = "latin1")] Vec<u8>),
    Float(f64),
    Integer(i64),
    Nil,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstExpr {
    pub value: ConstValue,
    #[serde(default)]
    pub is_hex: bool,
}

impl ConstExpr {
    pub fn new(value: ConstValue, is_hex: bool) -> Self {
        Self { value, is_hex }
    }

    pub fn string(bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(ConstValue::Str(bytes.into()), false)
    }

    pub fn float(value: f64) -> Self {
        Self::new(ConstValue::Float(value), false)
    }

    pub fn integer(value: i64) -> Self {
        Self::new(ConstValue::Integer(value), false)
    }

    pub fn hex(value: i64) -> Self {
        Self::new(ConstValue::Integer(value), true)
    }

    pub fn nil() -> Self {
        Self::new(ConstValue::Nil, false)
    }
}

/// String constants are single-byte strings. In JSON they travel as text with
/// one code point per byte, so every code point must be <= U+00FF.
pub mod latin1 {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let text: String = bytes.iter().map(|&b| char::from(b)).collect();
        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.chars()
            .map(|ch| {
                u8::try_from(u32::from(ch)).map_err(|_| {
                    de::Error::custom(format!(
                        "character U+{:04X} does not fit in a single-byte string",
                        u32::from(ch)
                    ))
                })
            })
            .collect()
    }
}
