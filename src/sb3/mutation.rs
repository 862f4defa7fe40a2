use super::VarVal;
use crate::prelude::*;
use lazy_regex::{lazy_regex, Lazy};
use regex::Regex;
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Represents a mutation on a block. See <https://en.scratch-wiki.info/wiki/Scratch_File_Format#Mutations>
///
/// Only procedure calls and prototypes are expected to carry the procedure keys;
/// anything else (e.g. `hasnext` on `control_stop`) lands in `rest`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Mutation {
    /// ignored - should always be "mutation"
    #[serde(rename = "tagName", default = "default_tag_name")]
    pub tag_name: Box<str>,
    /// ignored - should always be []
    #[serde(default)]
    pub children: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proccode: Option<Box<str>>,
    #[serde(
        rename = "argumentids",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "encoded_list::deserialize",
        serialize_with = "encoded_list::serialize"
    )]
    pub argument_ids: Option<Vec<Box<str>>>,
    /// prototype only
    #[serde(
        rename = "argumentnames",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "encoded_list::deserialize",
        serialize_with = "encoded_list::serialize"
    )]
    pub argument_names: Option<Vec<Box<str>>>,
    /// prototype only
    #[serde(
        rename = "argumentdefaults",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "encoded_list::deserialize",
        serialize_with = "encoded_list::serialize"
    )]
    pub argument_defaults: Option<Vec<VarVal>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "warp::deserialize",
        serialize_with = "warp::serialize"
    )]
    pub warp: Option<bool>,
    #[serde(flatten)]
    pub rest: BTreeMap<Box<str>, Value>,
}

fn default_tag_name() -> Box<str> {
    "mutation".into()
}

impl Default for Mutation {
    fn default() -> Self {
        Mutation {
            tag_name: default_tag_name(),
            children: vec![],
            proccode: None,
            argument_ids: None,
            argument_names: None,
            argument_defaults: None,
            warp: None,
            rest: BTreeMap::new(),
        }
    }
}

/// The type of a custom block argument, as given by its proccode placeholder
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgKind {
    /// `%s` (or the legacy `%n`)
    StringNumber,
    /// `%b`
    Boolean,
}

/// A piece of a proccode template
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProcCodePart<'a> {
    Text(&'a str),
    Arg(ArgKind),
}

// https://github.com/scratchfoundation/scratch-blocks/blob/abbfe9/blocks_vertical/procedures.js#L207-L215
static ARG_REGEX: Lazy<Regex> = lazy_regex!(r"\\%|%[nbs]");

impl Mutation {
    /// splits the proccode into literal text and argument placeholders, in order
    pub fn proccode_parts(&self) -> Option<Vec<ProcCodePart<'_>>> {
        let proccode = self.proccode.as_deref()?;
        let mut parts = vec![];
        let mut last = 0;
        for placeholder in ARG_REGEX.find_iter(proccode) {
            if placeholder.start() > last {
                parts.push(ProcCodePart::Text(&proccode[last..placeholder.start()]));
            }
            parts.push(match placeholder.as_str() {
                "%b" => ProcCodePart::Arg(ArgKind::Boolean),
                "\\%" => ProcCodePart::Text("%"),
                _ => ProcCodePart::Arg(ArgKind::StringNumber),
            });
            last = placeholder.end();
        }
        if last < proccode.len() {
            parts.push(ProcCodePart::Text(&proccode[last..]));
        }
        Some(parts)
    }

    pub fn arg_kinds(&self) -> Vec<ArgKind> {
        self.proccode_parts()
            .unwrap_or_default()
            .into_iter()
            .filter_map(|part| match part {
                ProcCodePart::Arg(kind) => Some(kind),
                ProcCodePart::Text(_) => None,
            })
            .collect()
    }
}

/// The editor stores argument lists as JSON-encoded strings (`"[\"a\",\"b\"]"`),
/// but plain arrays turn up too. Either is accepted; the string form is written.
mod encoded_list {
    use super::*;

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            Value::String(encoded) => serde_json::from_str(&encoded)
                .map(Some)
                .map_err(|err| de::Error::custom(format!("malformed encoded list: {err}"))),
            array @ Value::Array(_) => serde_json::from_value(array)
                .map(Some)
                .map_err(|err| de::Error::custom(format!("malformed list: {err}"))),
            other => Err(de::Error::custom(format!(
                "expected a list or an encoded list, got {other}"
            ))),
        }
    }

    pub fn serialize<S, T>(list: &Option<Vec<T>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        match list {
            Some(list) => {
                let encoded = serde_json::to_string(list).map_err(serde::ser::Error::custom)?;
                serializer.serialize_str(&encoded)
            }
            None => serializer.serialize_none(),
        }
    }
}

/// `warp` is usually the string `"true"`/`"false"`, occasionally a real boolean
mod warp {
    use super::*;

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<bool>, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            Value::Bool(warp) => Ok(Some(warp)),
            Value::String(warp) => match warp.as_str() {
                "true" => Ok(Some(true)),
                "false" => Ok(Some(false)),
                other => Err(de::Error::custom(format!(
                    "unexpected string for warp mutation: {other:?}"
                ))),
            },
            other => Err(de::Error::custom(format!(
                "bad type for warp mutation: {other}"
            ))),
        }
    }

    pub fn serialize<S: Serializer>(warp: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error> {
        match warp {
            Some(true) => serializer.serialize_str("true"),
            Some(false) => serializer.serialize_str("false"),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_encoded_lists() -> Result<(), serde_json::Error> {
        let mutation: Mutation = serde_json::from_str(
            r#"{"tagName": "mutation", "children": [], "proccode": "drive %s for %b",
                "argumentids": "[\"a\",\"b\"]", "argumentnames": ["speed", "forever"],
                "argumentdefaults": "[\"\",\"false\"]", "warp": "true"}"#,
        )?;
        assert_eq!(
            mutation.argument_ids,
            Some(vec![Box::from("a"), Box::from("b")])
        );
        assert_eq!(
            mutation.argument_names,
            Some(vec![Box::from("speed"), Box::from("forever")])
        );
        assert_eq!(mutation.warp, Some(true));
        assert_eq!(
            mutation.arg_kinds(),
            [ArgKind::StringNumber, ArgKind::Boolean]
        );
        let again: Mutation = serde_json::from_str(&serde_json::to_string(&mutation)?)?;
        assert_eq!(mutation, again);
        Ok(())
    }

    #[test]
    fn unrelated_mutation_keys_are_kept() -> Result<(), serde_json::Error> {
        let mutation: Mutation =
            serde_json::from_str(r#"{"tagName": "mutation", "children": [], "hasnext": "false"}"#)?;
        assert_eq!(mutation.proccode, None);
        assert_eq!(
            mutation.rest.get("hasnext"),
            Some(&Value::String("false".into()))
        );
        Ok(())
    }

    #[test]
    fn proccode_parts_split_on_placeholders() {
        let mutation = Mutation {
            proccode: Some(r"turn %s by 100\% %b".into()),
            ..Mutation::default()
        };
        assert_eq!(
            mutation.proccode_parts(),
            Some(vec![
                ProcCodePart::Text("turn "),
                ProcCodePart::Arg(ArgKind::StringNumber),
                ProcCodePart::Text(" by 100"),
                ProcCodePart::Text("%"),
                ProcCodePart::Text(" "),
                ProcCodePart::Arg(ArgKind::Boolean),
            ])
        );
    }
}
