use serde::{Deserialize, Serialize};
#[cfg(target_family = "wasm")]
use {crate::prelude::*, wasm_bindgen::prelude::*};

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(target_family = "wasm", wasm_bindgen)]
pub enum Switch {
    On,
    Off,
}

impl Switch {
    pub fn is_on(self) -> bool {
        self == Switch::On
    }
}

/// a human-readable description of a flag, for UIs that expose them
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(target_family = "wasm", wasm_bindgen(getter_with_clone))]
pub struct FlagInfo {
    pub name: String,
    pub description: String,
    pub ty: String,
}

impl FlagInfo {
    fn new() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            ty: String::new(),
        }
    }

    fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    fn with_ty(mut self, ty: &str) -> Self {
        self.ty = ty.to_string();
        self
    }
}

/// stringifies the name of a type whilst ensuring that the type is valid
macro_rules! ty_str {
    ($ty:ty) => {{
        let _ = core::any::TypeId::of::<$ty>(); // forces the type to be valid
        stringify!($ty)
    }};
}

/// rendering flags
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(target_family = "wasm", wasm_bindgen)]
#[serde(default)]
pub struct RenderFlags {
    pub suggest_rules: Switch,
    pub comments: Switch,
    pub block_ids: Switch,
}

impl Default for RenderFlags {
    fn default() -> Self {
        Self {
            suggest_rules: Switch::Off,
            comments: Switch::On,
            block_ids: Switch::Off,
        }
    }
}

#[cfg(target_family = "wasm")]
#[wasm_bindgen]
impl FlagInfo {
    #[wasm_bindgen]
    pub fn to_js(&self) -> DumpResult<JsValue> {
        serde_wasm_bindgen::to_value(&self)
            .map_err(|_| make_dump_bug!("couldn't convert FlagInfo to JsValue"))
    }
}

#[cfg(target_family = "wasm")]
#[wasm_bindgen]
impl RenderFlags {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[wasm_bindgen]
    pub fn from_js(js: JsValue) -> DumpResult<Self> {
        serde_wasm_bindgen::from_value(js)
            .map_err(|err| make_dump_bad_proj!("couldn't read render flags: {err}"))
    }

    #[wasm_bindgen]
    pub fn to_js(&self) -> DumpResult<JsValue> {
        serde_wasm_bindgen::to_value(&self)
            .map_err(|_| make_dump_bug!("couldn't convert RenderFlags to JsValue"))
    }
}

#[cfg_attr(target_family = "wasm", wasm_bindgen)]
impl RenderFlags {
    #[cfg_attr(target_family = "wasm", wasm_bindgen)]
    #[must_use]
    pub fn flag_info(flag: &str) -> FlagInfo {
        match flag {
            "suggest_rules" => FlagInfo::new()
                .with_name("Suggest rules")
                .with_description(
                    "Collect a ready-made rule table entry for every opcode that was rendered \
                    with the generic fallback. For developers extending the opcode tables.",
                )
                .with_ty(ty_str!(Switch)),
            "comments" => FlagInfo::new()
                .with_name("Comments")
                .with_description("Render workspace comments, both attached and free-floating.")
                .with_ty(ty_str!(Switch)),
            "block_ids" => FlagInfo::new()
                .with_name("Block ids")
                .with_description(
                    "Append the id of each statement block to its line, to help find it \
                    in the LEGO app.",
                )
                .with_ty(ty_str!(Switch)),
            _ => FlagInfo::new().with_name(format!("unknown setting '{flag}'").as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let flags = RenderFlags::default();
        assert!(!flags.suggest_rules.is_on());
        assert!(flags.comments.is_on());
        assert!(!flags.block_ids.is_on());
    }

    #[test]
    fn partial_flags_fill_in_defaults() -> Result<(), serde_json::Error> {
        let flags: RenderFlags = serde_json::from_str(r#"{"suggest_rules": "On"}"#)?;
        assert_eq!(
            flags,
            RenderFlags {
                suggest_rules: Switch::On,
                ..RenderFlags::default()
            }
        );
        Ok(())
    }

    #[test]
    fn flag_info_names_every_flag() {
        for flag in ["suggest_rules", "comments", "block_ids"] {
            let info = RenderFlags::flag_info(flag);
            assert!(!info.name.starts_with("unknown"), "{flag}");
            assert_eq!(info.ty, "Switch");
        }
        assert!(RenderFlags::flag_info("nope").name.starts_with("unknown"));
    }
}
