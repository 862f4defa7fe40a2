//! Custom blocks. The signature comes from the mutation's proccode template;
//! the generic inputs of these blocks only repeat what the template says.

use super::{Position, ScriptRenderer};
use crate::prelude::*;
use crate::sb3::{ArgKind, BlockObject, Mutation, ProcCodePart};
use core::fmt::Write;

fn signature(block: &BlockObject) -> Option<(&Mutation, Vec<ProcCodePart<'_>>)> {
    let mutation = block.mutation.as_ref()?;
    Some((mutation, mutation.proccode_parts()?))
}

fn brackets(kind: ArgKind) -> (char, char) {
    match kind {
        ArgKind::StringNumber => ('(', ')'),
        ArgKind::Boolean => ('<', '>'),
    }
}

impl<'a> ScriptRenderer<'a> {
    /// `def <prototype>:`; the rest of the script is the procedure's body
    pub(super) fn definition(
        &mut self,
        w: &mut dyn Write,
        id: &'a str,
        block: &'a BlockObject,
        position: Position,
    ) -> DumpResult<bool> {
        w.write_str("def ")?;
        self.input(w, block, "custom_block")?;
        if position == Position::Expression {
            return Ok(false);
        }
        self.header_end(w, id)?;
        Ok(true)
    }

    /// the template, with each placeholder replaced by its argument's name
    pub(super) fn prototype(
        &mut self,
        w: &mut dyn Write,
        id: &'a str,
        block: &'a BlockObject,
        position: Position,
    ) -> DumpResult<()> {
        let Some((mutation, parts)) = signature(block) else {
            self.fallback(w, id, block, position)?;
            return Ok(());
        };
        let names = mutation.argument_names.as_deref().unwrap_or_default();
        let ids = mutation.argument_ids.as_deref().unwrap_or_default();
        let mut arg = 0;
        for part in parts {
            match part {
                ProcCodePart::Text(text) => w.write_str(text)?,
                ProcCodePart::Arg(kind) => {
                    let name = names
                        .get(arg)
                        .or_else(|| ids.get(arg))
                        .map_or("?", |name| &**name);
                    let (open, close) = brackets(kind);
                    write!(w, "{open}{name}{close}")?;
                    arg += 1;
                }
            }
        }
        Ok(())
    }

    /// the template, with each placeholder replaced by the matching input
    pub(super) fn procedure_call(
        &mut self,
        w: &mut dyn Write,
        id: &'a str,
        block: &'a BlockObject,
        position: Position,
    ) -> DumpResult<()> {
        let Some((mutation, parts)) = signature(block) else {
            self.fallback(w, id, block, position)?;
            return Ok(());
        };
        let ids = mutation.argument_ids.as_deref().unwrap_or_default();
        let mut arg = 0;
        for part in parts {
            match part {
                ProcCodePart::Text(text) => w.write_str(text)?,
                ProcCodePart::Arg(kind) => {
                    let (open, close) = brackets(kind);
                    w.write_char(open)?;
                    match ids.get(arg) {
                        Some(input) => self.input(w, block, input)?,
                        None => w.write_str("[missing argument]")?,
                    }
                    w.write_char(close)?;
                    arg += 1;
                }
            }
        }
        Ok(())
    }
}
