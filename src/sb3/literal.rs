//! The compact tuple encodings: literal blocks (`[10, "hi"]`), inputs
//! (`[1, [4, "10"]]`, `[3, "blockid", [4, "0"]]`) and fields (`["value", "id"]`).

use super::VarVal;
use crate::prelude::*;
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// The leading integer of a literal tuple
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LiteralCode {
    Number = 4,
    PositiveNumber = 5,
    PositiveInteger = 6,
    Integer = 7,
    Angle = 8,
    Color = 9,
    String = 10,
    Broadcast = 11,
    Variable = 12,
    List = 13,
}

impl TryFrom<u64> for LiteralCode {
    type Error = u64;

    fn try_from(code: u64) -> Result<Self, u64> {
        Ok(match code {
            4 => LiteralCode::Number,
            5 => LiteralCode::PositiveNumber,
            6 => LiteralCode::PositiveInteger,
            7 => LiteralCode::Integer,
            8 => LiteralCode::Angle,
            9 => LiteralCode::Color,
            10 => LiteralCode::String,
            11 => LiteralCode::Broadcast,
            12 => LiteralCode::Variable,
            13 => LiteralCode::List,
            other => return Err(other),
        })
    }
}

/// A literal value, either inlined into an input or stored as a top-level block.
///
/// Numeric values are kept as they were written (the editor writes both `"10"` and
/// `10`), so that an empty numeric slot can be told apart from a zero.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(VarVal),
    PositiveNumber(VarVal),
    PositiveInteger(VarVal),
    Integer(VarVal),
    Angle(VarVal),
    Color(Box<str>),
    String(VarVal),
    Broadcast {
        name: Box<str>,
        id: Box<str>,
    },
    /// trailing elements are canvas coordinates when the reporter is top-level
    Variable {
        name: Box<str>,
        id: Box<str>,
        extra: Vec<Value>,
    },
    List {
        name: Box<str>,
        id: Box<str>,
        extra: Vec<Value>,
    },
}

impl Literal {
    pub fn code(&self) -> LiteralCode {
        match self {
            Literal::Number(_) => LiteralCode::Number,
            Literal::PositiveNumber(_) => LiteralCode::PositiveNumber,
            Literal::PositiveInteger(_) => LiteralCode::PositiveInteger,
            Literal::Integer(_) => LiteralCode::Integer,
            Literal::Angle(_) => LiteralCode::Angle,
            Literal::Color(_) => LiteralCode::Color,
            Literal::String(_) => LiteralCode::String,
            Literal::Broadcast { .. } => LiteralCode::Broadcast,
            Literal::Variable { .. } => LiteralCode::Variable,
            Literal::List { .. } => LiteralCode::List,
        }
    }

    /// decodes the elements of a literal tuple, the `[` having already been consumed
    pub(crate) fn from_seq<'de, A: SeqAccess<'de>>(mut seq: A) -> Result<Self, A::Error> {
        let raw_code: u64 = seq
            .next_element()?
            .ok_or_else(|| de::Error::custom("empty literal array"))?;
        let code = LiteralCode::try_from(raw_code)
            .map_err(|code| de::Error::custom(format!("unrecognized literal tag code {code}")))?;

        macro_rules! next {
            ($what:literal) => {
                seq.next_element()?.ok_or_else(|| {
                    de::Error::custom(format!(
                        "literal with tag code {} is missing its {}",
                        code as u32, $what
                    ))
                })?
            };
        }

        let literal = match code {
            LiteralCode::Number => Literal::Number(next!("value")),
            LiteralCode::PositiveNumber => Literal::PositiveNumber(next!("value")),
            LiteralCode::PositiveInteger => Literal::PositiveInteger(next!("value")),
            LiteralCode::Integer => Literal::Integer(next!("value")),
            LiteralCode::Angle => Literal::Angle(next!("value")),
            LiteralCode::Color => Literal::Color(next!("value")),
            LiteralCode::String => Literal::String(next!("value")),
            LiteralCode::Broadcast => Literal::Broadcast {
                name: next!("name"),
                id: next!("id"),
            },
            LiteralCode::Variable | LiteralCode::List => {
                let name = next!("name");
                let id = next!("id");
                let mut extra = vec![];
                while let Some(value) = seq.next_element::<Value>()? {
                    extra.push(value);
                }
                if code == LiteralCode::Variable {
                    Literal::Variable { name, id, extra }
                } else {
                    Literal::List { name, id, extra }
                }
            }
        };
        if !matches!(code, LiteralCode::Variable | LiteralCode::List) {
            // drain anything unexpected so the rest of the document still parses
            while seq.next_element::<de::IgnoredAny>()?.is_some() {}
        }
        Ok(literal)
    }
}

impl Serialize for Literal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(None)?;
        seq.serialize_element(&(self.code() as u32))?;
        match self {
            Literal::Number(val)
            | Literal::PositiveNumber(val)
            | Literal::PositiveInteger(val)
            | Literal::Integer(val)
            | Literal::Angle(val)
            | Literal::String(val) => seq.serialize_element(val)?,
            Literal::Color(color) => seq.serialize_element(color)?,
            Literal::Broadcast { name, id } => {
                seq.serialize_element(name)?;
                seq.serialize_element(id)?;
            }
            Literal::Variable { name, id, extra } | Literal::List { name, id, extra } => {
                seq.serialize_element(name)?;
                seq.serialize_element(id)?;
                for value in extra {
                    seq.serialize_element(value)?;
                }
            }
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Literal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LiteralVisitor;

        impl<'de> Visitor<'de> for LiteralVisitor {
            type Value = Literal;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a literal array")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Literal, A::Error> {
                Literal::from_seq(seq)
            }
        }

        deserializer.deserialize_seq(LiteralVisitor)
    }
}

/// The value plugged into an input slot: another block, or an inlined literal
#[derive(Debug, Clone, PartialEq)]
pub enum InputValue {
    Block(Box<str>),
    Literal(Literal),
}

impl Serialize for InputValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            InputValue::Block(id) => serializer.serialize_str(id),
            InputValue::Literal(literal) => literal.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for InputValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct InputValueVisitor;

        impl<'de> Visitor<'de> for InputValueVisitor {
            type Value = InputValue;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a block id or a literal array")
            }

            fn visit_str<E: de::Error>(self, id: &str) -> Result<InputValue, E> {
                Ok(InputValue::Block(id.into()))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<InputValue, A::Error> {
                Literal::from_seq(seq).map(InputValue::Literal)
            }
        }

        deserializer.deserialize_any(InputValueVisitor)
    }
}

/// The leading integer of an input tuple
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum ShadowKind {
    /// the slot only holds its shadow (default) value
    Shadow = 1,
    /// a block without any shadow behind it
    NoShadow = 2,
    /// a block plugged in over a shadow
    Obscured = 3,
}

/// An input slot of a block, including C mouths (`SUBSTACK`)
#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    pub shadow: ShadowKind,
    pub value: Option<InputValue>,
    /// the shadow hidden behind `value`; kept, but never rendered
    pub obscured: Option<InputValue>,
}

impl Serialize for Input {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(None)?;
        seq.serialize_element(&(self.shadow as u32))?;
        seq.serialize_element(&self.value)?;
        if self.shadow == ShadowKind::Obscured || self.obscured.is_some() {
            seq.serialize_element(&self.obscured)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Input {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct InputVisitor;

        impl<'de> Visitor<'de> for InputVisitor {
            type Value = Input;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an input array")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Input, A::Error> {
                let shadow = match seq.next_element::<u64>()? {
                    Some(1) => ShadowKind::Shadow,
                    Some(2) => ShadowKind::NoShadow,
                    Some(3) => ShadowKind::Obscured,
                    Some(other) => {
                        return Err(de::Error::custom(format!(
                            "unrecognized input shadow code {other}"
                        )))
                    }
                    None => return Err(de::Error::custom("empty input array")),
                };
                let value = seq.next_element::<Option<InputValue>>()?.flatten();
                let obscured = seq.next_element::<Option<InputValue>>()?.flatten();
                while seq.next_element::<de::IgnoredAny>()?.is_some() {}
                Ok(Input {
                    shadow,
                    value,
                    obscured,
                })
            }
        }

        deserializer.deserialize_seq(InputVisitor)
    }
}

/// A field (dropdown or text box that can't take a block)
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub value: Option<VarVal>,
    /// only present for fields naming a variable, list or broadcast
    pub id: Option<Box<str>>,
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(None)?;
        seq.serialize_element(&self.value)?;
        if let Some(id) = &self.id {
            seq.serialize_element(id)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldVisitor;

        impl<'de> Visitor<'de> for FieldVisitor {
            type Value = Field;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a field array")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Field, A::Error> {
                let value = seq.next_element::<Option<VarVal>>()?.flatten();
                let id = seq.next_element::<Option<Box<str>>>()?.flatten();
                while seq.next_element::<de::IgnoredAny>()?.is_some() {}
                Ok(Field { value, id })
            }
        }

        deserializer.deserialize_seq(FieldVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_with_obscured_shadow() -> Result<(), serde_json::Error> {
        let input: Input = serde_json::from_str(r#"[3, "abc", [4, "10"]]"#)?;
        assert_eq!(input.shadow, ShadowKind::Obscured);
        assert_eq!(input.value, Some(InputValue::Block("abc".into())));
        assert_eq!(
            input.obscured,
            Some(InputValue::Literal(Literal::Number(VarVal::String("10".into()))))
        );
        Ok(())
    }

    #[test]
    fn input_with_empty_slot() -> Result<(), serde_json::Error> {
        let input: Input = serde_json::from_str("[2, null]")?;
        assert_eq!(input.shadow, ShadowKind::NoShadow);
        assert_eq!(input.value, None);
        Ok(())
    }

    #[test]
    fn unknown_shadow_code_is_rejected() {
        assert!(serde_json::from_str::<Input>(r#"[7, "abc"]"#).is_err());
    }

    #[test]
    fn field_with_and_without_id() -> Result<(), serde_json::Error> {
        let field: Field = serde_json::from_str(r#"["score", "v1"]"#)?;
        assert_eq!(field.value, Some(VarVal::String("score".into())));
        assert_eq!(field.id.as_deref(), Some("v1"));
        let field: Field = serde_json::from_str("[90]")?;
        assert_eq!(field.value, Some(VarVal::Float(90.0)));
        assert_eq!(field.id, None);
        let field: Field = serde_json::from_str(r#"["A", null]"#)?;
        assert_eq!(field.id, None);
        Ok(())
    }

    #[test]
    fn variable_literal_keeps_coordinates() -> Result<(), serde_json::Error> {
        let literal: Literal = serde_json::from_str(r#"[12, "score", "v1", 31, 75.5]"#)?;
        let Literal::Variable { name, id, extra } = &literal else {
            panic!("expected a variable, got {literal:?}");
        };
        assert_eq!((&**name, &**id, extra.len()), ("score", "v1", 2));
        assert_eq!(serde_json::to_string(&literal)?, r#"[12,"score","v1",31,75.5]"#);
        Ok(())
    }

    #[test]
    fn literal_missing_value_is_rejected() {
        let err = serde_json::from_str::<Literal>("[11, \"go\"]").unwrap_err();
        assert!(err.to_string().contains("11"), "{err}");
    }
}
