//! Serde bridge for [`Value`].
//!
//! Decoding goes through `deserialize_any`, so any self-describing format
//! (JSON, YAML, TOML) lands in the same tree. Encoding maps each variant onto
//! the matching serde primitive, which lets callers re-encode a sub-tree in
//! the format it came from.

use std::fmt;

use serde::de::{
    self, Deserialize, Deserializer, EnumAccess, MapAccess, SeqAccess, VariantAccess, Visitor,
};
use serde::ser::{Serialize, Serializer};

use super::{Mapping, Value};

/// Key the `toml` crate uses to pass datetimes through `deserialize_any`.
const TOML_DATETIME_KEY: &str = "$__toml_private_datetime";

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(x) => serializer.serialize_f64(*x),
            Value::String(s) => serializer.serialize_str(s),
            Value::Mapping(map) => serializer.collect_map(map),
            Value::Sequence(items) => serializer.collect_seq(items),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a document value")
    }

    fn visit_bool<E: de::Error>(self, b: bool) -> Result<Value, E> {
        Ok(Value::Bool(b))
    }

    fn visit_i64<E: de::Error>(self, n: i64) -> Result<Value, E> {
        Ok(Value::Int(n))
    }

    #[allow(
        clippy::cast_precision_loss,
        reason = "integers beyond i64 only survive as floats"
    )]
    fn visit_u64<E: de::Error>(self, n: u64) -> Result<Value, E> {
        Ok(i64::try_from(n).map_or(Value::Float(n as f64), Value::Int))
    }

    fn visit_f64<E: de::Error>(self, x: f64) -> Result<Value, E> {
        Ok(Value::Float(x))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<Value, E> {
        Ok(Value::String(s.to_owned()))
    }

    fn visit_string<E: de::Error>(self, s: String) -> Result<Value, E> {
        Ok(Value::String(s))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<Value>()? {
            items.push(item);
        }
        Ok(Value::Sequence(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Value, A::Error> {
        let mut map = Mapping::new();
        while let Some(MapKey(key)) = access.next_key::<MapKey>()? {
            let value = access.next_value::<Value>()?;
            map.insert(key, value);
        }

        // TOML datetimes arrive as a single-entry table; keep them as text.
        if map.len() == 1 && matches!(map.get(TOML_DATETIME_KEY), Some(Value::String(_))) {
            if let Some(stamp) = map.remove(TOML_DATETIME_KEY) {
                return Ok(stamp);
            }
        }
        Ok(Value::Mapping(map))
    }

    // YAML tags (`!vault abc`, `!!binary ...`) arrive as enums; drop the tag.
    fn visit_enum<A: EnumAccess<'de>>(self, data: A) -> Result<Value, A::Error> {
        let (_tag, variant) = data.variant::<de::IgnoredAny>()?;
        variant.newtype_variant::<Value>()
    }
}

/// A mapping key. Non-string scalar keys (legal in YAML) use their text form.
struct MapKey(String);

impl<'de> Deserialize<'de> for MapKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MapKeyVisitor)
    }
}

struct MapKeyVisitor;

impl Visitor<'_> for MapKeyVisitor {
    type Value = MapKey;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a scalar mapping key")
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<MapKey, E> {
        Ok(MapKey(s.to_owned()))
    }

    fn visit_string<E: de::Error>(self, s: String) -> Result<MapKey, E> {
        Ok(MapKey(s))
    }

    fn visit_bool<E: de::Error>(self, b: bool) -> Result<MapKey, E> {
        Ok(MapKey(b.to_string()))
    }

    fn visit_i64<E: de::Error>(self, n: i64) -> Result<MapKey, E> {
        Ok(MapKey(n.to_string()))
    }

    fn visit_u64<E: de::Error>(self, n: u64) -> Result<MapKey, E> {
        Ok(MapKey(n.to_string()))
    }

    fn visit_f64<E: de::Error>(self, x: f64) -> Result<MapKey, E> {
        Ok(MapKey(x.to_string()))
    }

    fn visit_unit<E: de::Error>(self) -> Result<MapKey, E> {
        Ok(MapKey("null".to_owned()))
    }
}
