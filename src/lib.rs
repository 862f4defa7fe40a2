//! Turns LEGO SPIKE / MINDSTORMS word-block projects (the `project.json` inside
//! `scratch.sb3`) into indented, human-readable pseudocode.

#[macro_use]
mod error;

pub mod flags;
pub mod indent;
pub mod index;
pub mod manifest;
pub mod render;
pub mod rules;
pub mod sb3;

pub use error::{DumpError, DumpErrorType, DumpResult};
pub use render::{render, render_to, Diagnostics};

/// commonly used _things_ which would be nice not to have to type out every time
pub mod prelude {
    pub use crate::{DumpError, DumpErrorType, DumpResult};
    pub use core::fmt;
    pub use std::collections::{BTreeMap, BTreeSet};
}

#[cfg(target_family = "wasm")]
mod wasm {
    use crate::flags::RenderFlags;
    use crate::sb3::Project;
    use wasm_bindgen::prelude::*;

    /// renders a `project.json` document; `flags` may be `undefined` for the defaults
    #[wasm_bindgen]
    pub fn render_project_json(json: &str, flags: Option<RenderFlags>) -> Result<String, JsValue> {
        let project = Project::try_from(json)?;
        Ok(crate::render(&project, &flags.unwrap_or_default())?)
    }
}
