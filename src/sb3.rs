//! 1-1 representation of the `project.json` found inside the `scratch.sb3` archive
//! of a LEGO SPIKE / MINDSTORMS word-block project. The container archives must be
//! unzipped by the caller first. See <https://en.scratch-wiki.info/wiki/Scratch_File_Format>
//! for a loose informal specification of the underlying format.
//!
//! Everything here is a read-only snapshot: it is decoded once and then only
//! borrowed by the indexer and the renderer.

use crate::prelude::*;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

mod literal;
mod mutation;

pub use literal::{Field, Input, InputValue, Literal, LiteralCode, ShadowKind};
pub use mutation::{ArgKind, Mutation, ProcCodePart};

/// A block program
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Project {
    pub targets: Vec<Target>,
    #[serde(default)]
    pub monitors: Vec<Value>,
    #[serde(default)]
    pub extensions: Vec<Box<str>>,
    #[serde(default)]
    pub meta: Value,
}

/// A comment, possibly attached to a block
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default)]
    pub block_id: Option<Box<str>>,
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub minimized: bool,
    pub text: Box<str>,
}

/// A block - either a compact literal or a full block object.
///
/// Which one is decided by the JSON delimiter: `[` is a literal, `{` is an object.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Literal(Literal),
    Object(BlockObject),
}

impl Block {
    pub fn object(&self) -> Option<&BlockObject> {
        match self {
            Block::Object(object) => Some(object),
            Block::Literal(_) => None,
        }
    }
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Block::Literal(literal) => literal.serialize(serializer),
            Block::Object(object) => object.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BlockVisitor;

        impl<'de> Visitor<'de> for BlockVisitor {
            type Value = Block;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a literal array or a block object")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Block, A::Error> {
                Literal::from_seq(seq).map(Block::Literal)
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Block, A::Error> {
                BlockObject::deserialize(de::value::MapAccessDeserializer::new(map))
                    .map(Block::Object)
            }
        }

        deserializer.deserialize_any(BlockVisitor)
    }
}

/// A full (non-literal) block
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlockObject {
    pub opcode: Box<str>,
    #[serde(default)]
    pub next: Option<Box<str>>,
    #[serde(default)]
    pub parent: Option<Box<str>>,
    #[serde(default)]
    pub inputs: BTreeMap<Box<str>, Input>,
    #[serde(default)]
    pub fields: BTreeMap<Box<str>, Field>,
    #[serde(default)]
    pub shadow: bool,
    #[serde(default)]
    pub top_level: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mutation: Option<Mutation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<Box<str>>,
    // only present on top level blocks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

/// The (default) value of a variable, or the display value of a field
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum VarVal {
    Float(f64),
    Bool(bool),
    String(Box<str>),
}

impl VarVal {
    pub fn is_empty(&self) -> bool {
        matches!(self, VarVal::String(s) if s.is_empty())
    }
}

impl fmt::Display for VarVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VarVal::Float(n) => write!(f, "{n}"),
            VarVal::Bool(b) => write!(f, "{b}"),
            VarVal::String(s) => f.write_str(s),
        }
    }
}

/// Represents a variable
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum VariableInfo {
    CloudVar(Box<str>, VarVal, bool),
    LocalVar(Box<str>, VarVal),
}

impl VariableInfo {
    pub fn name(&self) -> &str {
        match self {
            VariableInfo::CloudVar(name, ..) | VariableInfo::LocalVar(name, _) => name,
        }
    }
}

pub type BlockMap = BTreeMap<Box<str>, Block>;

/// A target (sprite or stage)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    #[serde(default)]
    pub is_stage: bool,
    pub name: Box<str>,
    #[serde(default)]
    pub variables: BTreeMap<Box<str>, VariableInfo>,
    #[serde(default)]
    pub lists: BTreeMap<Box<str>, (Box<str>, Vec<VarVal>)>,
    #[serde(default)]
    pub broadcasts: BTreeMap<Box<str>, Box<str>>,
    #[serde(default)]
    pub blocks: BlockMap,
    #[serde(default)]
    pub comments: BTreeMap<Box<str>, Comment>,
    #[serde(default)]
    pub current_costume: u32,
    #[serde(default)]
    pub costumes: Vec<Value>,
    #[serde(default)]
    pub sounds: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer_order: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    // stage only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_state: Option<Box<str>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_transparency: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_to_speech_language: Option<Box<str>>,
    // sprite only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draggable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_style: Option<Box<str>>,
    #[serde(flatten)]
    pub unknown: BTreeMap<Box<str>, Value>,
}

impl Target {
    pub fn block_object(&self, id: &str) -> Option<&BlockObject> {
        self.blocks.get(id).and_then(Block::object)
    }

    /// comments which are anchored to a block that actually exists in this target
    pub fn anchored_comments(&self) -> BTreeMap<&str, Vec<&Comment>> {
        let mut anchored: BTreeMap<&str, Vec<&Comment>> = BTreeMap::new();
        for comment in self.comments.values() {
            if let Some(block_id) = comment.block_id.as_deref() {
                if self.blocks.contains_key(block_id) {
                    anchored.entry(block_id).or_default().push(comment);
                }
            }
        }
        anchored
    }

    /// comments that aren't attached to any (existing) block, in id order
    pub fn standalone_comments(&self) -> impl Iterator<Item = &Comment> {
        self.comments.values().filter(|comment| {
            comment
                .block_id
                .as_deref()
                .map_or(true, |id| !self.blocks.contains_key(id))
        })
    }
}

impl TryFrom<String> for Project {
    type Error = DumpError;

    fn try_from(string: String) -> Result<Self, Self::Error> {
        (&string[..]).try_into()
    }
}

impl TryFrom<&str> for Project {
    type Error = DumpError;

    fn try_from(string: &str) -> Result<Self, Self::Error> {
        serde_json::from_str(string).map_err(|err| json_error(&err, "project.json"))
    }
}

impl Project {
    pub fn from_slice(bytes: &[u8]) -> DumpResult<Self> {
        serde_json::from_slice(bytes).map_err(|err| json_error(&err, "project.json"))
    }

    pub fn to_json(&self) -> DumpResult<String> {
        serde_json::to_string(self)
            .map_err(|err| make_dump_bug!("couldn't re-encode project: {err}"))
    }
}

pub(crate) fn json_error(err: &serde_json::Error, file: &str) -> DumpError {
    use serde_json::error::Category;
    match err.classify() {
        Category::Syntax => make_dump_bad_proj!(
            "Invalid JSON syntax at {file}:{}:{}",
            err.line(),
            err.column()
        ),
        Category::Data => make_dump_bad_proj!(
            "Invalid {file} at {file}:{}:{}: {err}",
            err.line(),
            err.column()
        ),
        Category::Eof => make_dump_bad_proj!(
            "Unexpected end of file at {file}:{}:{}",
            err.line(),
            err.column()
        ),
        Category::Io => make_dump_bad_proj!("Failed to read {file}: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"{
        "targets": [{
            "isStage": true,
            "name": "Stage",
            "variables": {"v1": ["score", 0]},
            "lists": {"l1": ["items", [1, "two"]]},
            "broadcasts": {"m1": "go"},
            "blocks": {
                "a": {"opcode": "flipperevents_whenProgramStarts", "next": "b", "parent": null,
                      "inputs": {}, "fields": {}, "shadow": false, "topLevel": true,
                      "x": 12, "y": -4},
                "b": {"opcode": "flippermove_startSteer", "next": null, "parent": "a",
                      "inputs": {"STEERING": [1, [4, "30"]]}, "fields": {}, "shadow": false,
                      "topLevel": false, "comment": "c1"},
                "c": {"opcode": "procedures_prototype", "next": null, "parent": null,
                      "inputs": {}, "fields": {}, "shadow": true, "topLevel": false,
                      "mutation": {"tagName": "mutation", "children": [], "proccode": "move %s",
                                   "argumentids": "[\"x1\"]", "argumentnames": "[\"speed\"]",
                                   "argumentdefaults": "[\"\"]", "warp": "false"}},
                "n": [4, "10"],
                "p": [5, 1.5],
                "q": [6, "3"],
                "r": [7, -2],
                "s": [8, "90"],
                "t": [9, "#ff0000"],
                "u": [10, "hi"],
                "w": [11, "go", "m1"],
                "v": [12, "score", "v1", 100, 200],
                "l": [13, "items", "l1", 10, 20]
            },
            "comments": {"c1": {"blockId": "b", "x": 1, "y": 2, "width": 100, "height": 50,
                                "minimized": false, "text": "steer!"}},
            "currentCostume": 0,
            "costumes": [],
            "sounds": [],
            "volume": 100,
            "layerOrder": 0,
            "tempo": 60,
            "videoState": "on",
            "videoTransparency": 50,
            "textToSpeechLanguage": null
        }],
        "monitors": [],
        "extensions": ["flipperevents"],
        "meta": {"semver": "3.0.0"}
    }"##;

    #[test]
    fn decodes_sample() -> DumpResult<()> {
        let project = Project::try_from(SAMPLE)?;
        let target = &project.targets[0];
        assert!(target.is_stage);
        assert_eq!(target.blocks.len(), 13);
        let b = target
            .block_object("b")
            .ok_or(make_dump_bug!("b missing"))?;
        assert_eq!(&*b.opcode, "flippermove_startSteer");
        assert_eq!(b.comment.as_deref(), Some("c1"));
        assert_eq!(target.tempo, Some(60.0));
        assert!(matches!(
            target.blocks.get("v"),
            Some(Block::Literal(Literal::Variable { name, .. })) if &**name == "score"
        ));
        Ok(())
    }

    #[test]
    fn round_trip_is_structurally_equal() -> DumpResult<()> {
        let first = Project::try_from(SAMPLE)?;
        let second = Project::try_from(first.to_json()?)?;
        assert_eq!(first, second);
        // every literal tag code is exercised
        let codes = first.targets[0]
            .blocks
            .values()
            .filter_map(|block| match block {
                Block::Literal(literal) => Some(literal.code() as u32),
                Block::Object(_) => None,
            })
            .collect::<BTreeSet<_>>();
        assert_eq!(codes, (4..=13).collect::<BTreeSet<u32>>());
        Ok(())
    }

    #[test]
    fn unknown_literal_code_names_the_code() {
        let err = Project::try_from(
            r#"{"targets": [{"name": "Stage", "blocks": {"z": [42, "?"]}}]}"#,
        )
        .unwrap_err();
        assert_eq!(err.err_type, DumpErrorType::MalformedProject);
        assert!(err.msg.contains("42"), "{}", err.msg);
    }

    #[test]
    fn scalar_block_is_rejected() {
        let err =
            Project::try_from(r#"{"targets": [{"name": "Stage", "blocks": {"z": "oops"}}]}"#)
                .unwrap_err();
        assert_eq!(err.err_type, DumpErrorType::MalformedProject);
    }

    #[test]
    fn standalone_and_anchored_comments() -> DumpResult<()> {
        let project = Project::try_from(
            r#"{"targets": [{"name": "Stage",
                "blocks": {"b": {"opcode": "flippersensors_resetYaw", "topLevel": true}},
                "comments": {
                    "c1": {"blockId": "b", "text": "on b"},
                    "c2": {"blockId": null, "text": "loose"},
                    "c3": {"blockId": "gone", "text": "dangling"}
                }}]}"#,
        )?;
        let target = &project.targets[0];
        let anchored = target.anchored_comments();
        assert_eq!(anchored.get("b").map(Vec::len), Some(1));
        let standalone = target
            .standalone_comments()
            .map(|c| &*c.text)
            .collect::<Vec<_>>();
        assert_eq!(standalone, ["loose", "dangling"]);
        Ok(())
    }
}
