//! Opcodes without a rule are still shown: as the raw opcode, with every field
//! and input spelled out by name.

use super::{args::field, Position, ScriptRenderer};
use crate::indent::Indented;
use crate::prelude::*;
use crate::rules;
use crate::sb3::BlockObject;
use core::fmt::Write;
use itertools::Itertools;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot<'a> {
    Field(&'a str),
    Input(&'a str),
}

impl<'a> Slot<'a> {
    fn name(self) -> &'a str {
        match self {
            Slot::Field(name) | Slot::Input(name) => name,
        }
    }
}

/// fields and (non-substack) inputs, merged in name order
fn slots(block: &BlockObject) -> impl Iterator<Item = Slot<'_>> {
    let fields = block.fields.keys().map(|name| Slot::Field(name));
    let inputs = block
        .inputs
        .keys()
        .filter(|name| !rules::is_substack(name))
        .map(|name| Slot::Input(name));
    fields.merge_by(inputs, |a, b| a.name() <= b.name())
}

fn bodies(block: &BlockObject) -> impl Iterator<Item = &str> {
    block
        .inputs
        .keys()
        .map(|name| &**name)
        .filter(|name| rules::is_substack(name))
}

/// A rule table entry that would render `block` the way the fallback does,
/// but with a proper label; a starting point for whoever adds the rule.
pub(super) fn suggestion(block: &BlockObject) -> String {
    let opcode = &*block.opcode;
    let label = opcode.split_once('_').map_or(opcode, |(_, rest)| rest);
    let args = slots(block)
        .map(|slot| match slot {
            Slot::Field(name) => format!("NamedField({:?}, {name:?})", name.to_lowercase()),
            Slot::Input(name) => format!("Named({:?}, {name:?})", name.to_lowercase()),
        })
        .join(", ");
    let branches = bodies(block)
        .enumerate()
        .map(|(i, name)| match i {
            0 => format!("Branch {{ input: {name:?}, header: None }}"),
            _ => format!("Branch {{ input: {name:?}, header: Some({name:?}) }}"),
        })
        .join(", ");
    if branches.is_empty() {
        format!("({opcode:?}, Recipe::Call({label:?}, &[{args}])),")
    } else {
        format!("({opcode:?}, Recipe::Control({label:?}, &[{args}], &[{branches}])),")
    }
}

impl<'a> ScriptRenderer<'a> {
    pub(super) fn fallback(
        &mut self,
        w: &mut dyn Write,
        id: &'a str,
        block: &'a BlockObject,
        position: Position,
    ) -> DumpResult<bool> {
        debug!(opcode = %block.opcode, block = %id, "no rule for opcode, using generic fallback");
        if self.flags.suggest_rules.is_on() && !self.suggestions.contains_key(&*block.opcode) {
            self.suggestions
                .insert(block.opcode.clone(), suggestion(block));
        }

        w.write_str(&block.opcode)?;
        w.write_char('(')?;
        for (i, slot) in slots(block).enumerate() {
            if i > 0 {
                w.write_str(", ")?;
            }
            write!(w, "{}: ", slot.name())?;
            match slot {
                Slot::Field(name) => field(w, block, name)?,
                Slot::Input(name) => self.input(w, block, name)?,
            }
        }
        w.write_char(')')?;

        if position == Position::Statement {
            for (i, name) in bodies(block).enumerate() {
                if i == 0 {
                    self.header_end(w, id)?;
                } else {
                    writeln!(w, "{name}:")?;
                }
                self.body(&mut Indented::starting_now(w), block, name)?;
            }
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sb3::Project;

    fn block(json: &str) -> DumpResult<BlockObject> {
        let project = Project::try_from(format!(
            r#"{{"targets": [{{"name": "Stage", "isStage": true, "blocks": {{"b": {json}}}}}]}}"#
        ))?;
        project.targets[0]
            .block_object("b")
            .cloned()
            .ok_or(make_dump_bug!("b didn't decode as an object"))
    }

    #[test]
    fn slots_merge_fields_and_inputs_by_name() -> DumpResult<()> {
        let block = block(
            r#"{"opcode": "x_y", "fields": {"B": ["1", null], "D": ["2", null]},
                "inputs": {"A": [1, [4, "1"]], "C": [1, [4, "1"]], "SUBSTACK": [2, null]}}"#,
        )?;
        assert_eq!(
            slots(&block).collect::<Vec<_>>(),
            [
                Slot::Input("A"),
                Slot::Field("B"),
                Slot::Input("C"),
                Slot::Field("D")
            ]
        );
        assert_eq!(bodies(&block).collect::<Vec<_>>(), ["SUBSTACK"]);
        Ok(())
    }

    #[test]
    fn suggestion_for_a_plain_block() -> DumpResult<()> {
        let block = block(
            r#"{"opcode": "flipperdisplay_showThing", "fields": {"MODE": ["on", null]},
                "inputs": {"VALUE": [1, [4, "3"]]}}"#,
        )?;
        assert_eq!(
            suggestion(&block),
            r#"("flipperdisplay_showThing", Recipe::Call("showThing", &[NamedField("mode", "MODE"), Named("value", "VALUE")])),"#
        );
        Ok(())
    }

    #[test]
    fn suggestion_for_a_c_block() -> DumpResult<()> {
        let block = block(
            r#"{"opcode": "control_for_each", "fields": {"VARIABLE": ["i", "v1"]},
                "inputs": {"VALUE": [1, [6, "10"]], "SUBSTACK": [2, "s"], "SUBSTACK2": [2, "t"]}}"#,
        )?;
        assert_eq!(
            suggestion(&block),
            r#"("control_for_each", Recipe::Control("for_each", &[Named("value", "VALUE"), NamedField("variable", "VARIABLE")], &[Branch { input: "SUBSTACK", header: None }, Branch { input: "SUBSTACK2", header: Some("SUBSTACK2") }])),"#
        );
        Ok(())
    }
}
