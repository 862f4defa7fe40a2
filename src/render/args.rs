use super::ScriptRenderer;
use crate::prelude::*;
use crate::rules::{Arg, Menu};
use crate::sb3::{BlockObject, InputValue, Literal};
use core::fmt::Write;

impl<'a> ScriptRenderer<'a> {
    pub(super) fn arg(
        &mut self,
        w: &mut dyn Write,
        block: &'a BlockObject,
        arg: &Arg,
    ) -> DumpResult<()> {
        match *arg {
            Arg::Input(input) => self.input(w, block, input),
            Arg::Named(label, input) => {
                write!(w, "{label}: ")?;
                self.input(w, block, input)
            }
            Arg::Field(name) => field(w, block, name),
            Arg::NamedField(label, name) => {
                write!(w, "{label}: ")?;
                field(w, block, name)
            }
            Arg::LowerField(label, name) => {
                write!(w, "{label}: ")?;
                match field_text(block, name) {
                    Some(text) => w.write_str(&text.to_lowercase())?,
                    None => write!(w, "[missing field: {name}]")?,
                }
                Ok(())
            }
            Arg::Gated(label, input, unit) => {
                write!(w, "{label}: ")?;
                self.input(w, block, input)?;
                w.write_char(' ')?;
                field(w, block, unit)
            }
            Arg::Suffixed(label, input, unit) => {
                write!(w, "{label}: ")?;
                self.input(w, block, input)?;
                write!(w, " {unit}")?;
                Ok(())
            }
            Arg::Menu(label, name, menu) => {
                write!(w, "{label}: ")?;
                menu_field(w, block, name, menu)
            }
        }
    }

    /// whatever is plugged into the named input
    pub(super) fn input(
        &mut self,
        w: &mut dyn Write,
        block: &'a BlockObject,
        name: &str,
    ) -> DumpResult<()> {
        let input = match block.inputs.get(name) {
            Some(input) => input,
            None => {
                write!(w, "[missing input: {name}]")?;
                return Ok(());
            }
        };
        match &input.value {
            Some(InputValue::Block(id)) => self.expression(w, id),
            Some(InputValue::Literal(literal)) => write_literal(w, literal),
            None => {
                write!(w, "[empty input: {name}]")?;
                Ok(())
            }
        }
    }
}

/// the display value of a field, if it's there
pub(super) fn field_text(block: &BlockObject, name: &str) -> Option<String> {
    block.fields.get(name)?.value.as_ref().map(ToString::to_string)
}

pub(super) fn field(w: &mut dyn Write, block: &BlockObject, name: &str) -> DumpResult<()> {
    match field_text(block, name) {
        Some(text) => w.write_str(&text)?,
        None => write!(w, "[missing field: {name}]")?,
    }
    Ok(())
}

/// a coded field value, looked up in `menu`; codes the menu doesn't know are shown raw
pub(super) fn menu_field(
    w: &mut dyn Write,
    block: &BlockObject,
    name: &str,
    menu: Menu,
) -> DumpResult<()> {
    let Some(text) = field_text(block, name) else {
        write!(w, "[missing field: {name}]")?;
        return Ok(());
    };
    let label = menu
        .iter()
        .find(|(code, _)| *code == text)
        .map_or(text.as_str(), |&(_, label)| label);
    w.write_str(label)?;
    Ok(())
}

pub(super) fn write_literal(w: &mut dyn Write, literal: &Literal) -> DumpResult<()> {
    match literal {
        Literal::Number(value)
        | Literal::PositiveNumber(value)
        | Literal::PositiveInteger(value)
        | Literal::Integer(value)
        | Literal::Angle(value) => {
            if value.is_empty() {
                w.write_str("[unset number]")?;
            } else {
                write!(w, "{value}")?;
            }
        }
        Literal::Color(color) => w.write_str(color)?,
        Literal::String(value) => write!(w, "{:?}", value.to_string())?,
        Literal::Broadcast { name, .. } => write!(w, "[broadcast {name:?}]")?,
        Literal::Variable { name, .. } => write!(w, "[variable {name:?}]")?,
        Literal::List { name, .. } => write!(w, "[list {name:?}]")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sb3::VarVal;

    fn literal(literal: &Literal) -> DumpResult<String> {
        let mut out = String::new();
        write_literal(&mut out, literal)?;
        Ok(out)
    }

    #[test]
    fn numbers_keep_their_spelling() -> DumpResult<()> {
        assert_eq!(literal(&Literal::Number(VarVal::String("010".into())))?, "010");
        assert_eq!(literal(&Literal::Angle(VarVal::Float(90.0)))?, "90");
        assert_eq!(literal(&Literal::Integer(VarVal::String("".into())))?, "[unset number]");
        Ok(())
    }

    #[test]
    fn strings_are_quoted_and_escaped() -> DumpResult<()> {
        assert_eq!(literal(&Literal::String(VarVal::String("hi".into())))?, r#""hi""#);
        assert_eq!(
            literal(&Literal::String(VarVal::String("say \"x\"".into())))?,
            r#""say \"x\"""#
        );
        assert_eq!(literal(&Literal::String(VarVal::String("".into())))?, r#""""#);
        Ok(())
    }

    #[test]
    fn references() -> DumpResult<()> {
        assert_eq!(
            literal(&Literal::Broadcast {
                name: "go".into(),
                id: "b1".into()
            })?,
            r#"[broadcast "go"]"#
        );
        assert_eq!(
            literal(&Literal::List {
                name: "xs".into(),
                id: "l1".into(),
                extra: vec![]
            })?,
            r#"[list "xs"]"#
        );
        assert_eq!(literal(&Literal::Color("#ff0000".into()))?, "#ff0000");
        Ok(())
    }
}
