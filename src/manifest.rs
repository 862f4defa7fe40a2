//! The `manifest.json` header that sits next to `scratch.sb3` inside a LEGO
//! project container. It's only read to decide whether the project holds a
//! block program at all; Python projects have nothing to render.

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// "word-blocks", "icon-blocks", or "python"
    #[serde(rename = "type")]
    pub project_type: Box<str>,
    /// "llsp3" for python programs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_type: Option<Box<str>>,
    #[serde(default)]
    pub auto_delete: bool,
    #[serde(default)]
    pub created: Option<Box<str>>,
    #[serde(default)]
    pub id: Option<Box<str>>,
    #[serde(default, rename = "lastsaved")]
    pub last_saved: Option<Box<str>>,
    #[serde(default)]
    pub size: i64,
    #[serde(default)]
    pub name: Box<str>,
    #[serde(default)]
    pub slot_index: i64,
    #[serde(default)]
    pub workspace_x: f64,
    #[serde(default)]
    pub workspace_y: f64,
    #[serde(default)]
    pub zoom_level: f64,
    /// only for block programs
    #[serde(default)]
    pub show_all_blocks: bool,
    /// e.g. 5 for MINDSTORMS, 38 for SPIKE
    #[serde(default)]
    pub version: i64,
    #[serde(default)]
    pub hardware: BTreeMap<Box<str>, Value>,
    #[serde(default)]
    pub extensions: Vec<Box<str>>,
    #[serde(flatten)]
    pub unknown: BTreeMap<Box<str>, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectKind {
    WordBlocks,
    IconBlocks,
    Python,
    Other(Box<str>),
}

impl ProjectKind {
    pub fn is_block_program(&self) -> bool {
        matches!(self, ProjectKind::WordBlocks | ProjectKind::IconBlocks)
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ProjectKind::WordBlocks => "word-blocks",
            ProjectKind::IconBlocks => "icon-blocks",
            ProjectKind::Python => "python",
            ProjectKind::Other(other) => other,
        })
    }
}

impl Manifest {
    pub fn kind(&self) -> ProjectKind {
        match &*self.project_type {
            "word-blocks" => ProjectKind::WordBlocks,
            "icon-blocks" => ProjectKind::IconBlocks,
            "python" => ProjectKind::Python,
            other => ProjectKind::Other(other.into()),
        }
    }
}

impl TryFrom<&str> for Manifest {
    type Error = DumpError;

    fn try_from(string: &str) -> Result<Self, Self::Error> {
        serde_json::from_str(string).map_err(|err| crate::sb3::json_error(&err, "manifest.json"))
    }
}

impl Manifest {
    pub fn from_slice(bytes: &[u8]) -> DumpResult<Self> {
        serde_json::from_slice(bytes).map_err(|err| crate::sb3::json_error(&err, "manifest.json"))
    }
}
