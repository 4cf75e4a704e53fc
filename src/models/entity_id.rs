use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identificador de entidad del backend (camión, remolque, categoría, ítem).
/// Django lo envía como número; en el DOM viaja como texto (data-*), así que
/// se normaliza a String en ambos sentidos.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Int(i64),
            Float(f64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Int(n) => EntityId::from(n),
            RawId::Float(n) if n.fract() == 0.0 => EntityId::from(n as i64),
            RawId::Float(n) => EntityId(n.to_string()),
            RawId::Text(s) => EntityId(s.trim().to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_and_text_ids_match() {
        let from_number: EntityId = serde_json::from_str("42").unwrap();
        let from_text: EntityId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(from_number, from_text);
        assert_eq!(serde_json::to_string(&from_number).unwrap(), "\"42\"");
    }
}
