//! Contains the rendering rules for known opcodes, split up by block category
//! (the part of the opcode before the first `_`).
//!
//! Every rule is plain data; the renderer interprets it. Opcodes that have no
//! rule here are rendered by a generic fallback instead.

mod argument;
mod control;
mod data;
mod event;
mod flippercontrol;
mod flipperevents;
mod flipperlight;
mod flippermoremotor;
mod flippermoremove;
mod flippermotor;
mod flippermove;
mod flipperoperator;
mod flippersensors;
mod flippersound;
mod math;
mod operator;
mod procedures;
mod sound;

/// maps raw (coded) field values to something a human understands
pub type Menu = &'static [(&'static str, &'static str)];

/// One argument of a rule
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arg {
    /// the rendered input
    Input(&'static str),
    /// `label: <input>`
    Named(&'static str, &'static str),
    /// the field's display value
    Field(&'static str),
    /// `label: <field>`
    NamedField(&'static str, &'static str),
    /// `label: <field>`, lower-cased
    LowerField(&'static str, &'static str),
    /// `label: <input> <field>`, the field being a unit such as `cm` or `seconds`
    Gated(&'static str, &'static str, &'static str),
    /// `label: <input> unit`, for inputs whose unit is fixed
    Suffixed(&'static str, &'static str, &'static str),
    /// `label: <field mapped through menu>`
    Menu(&'static str, &'static str, Menu),
}

/// An extra C mouth of a control block
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Branch {
    pub input: &'static str,
    /// line printed before this branch, e.g. `else`. The first branch usually
    /// has none, and hangs straight off the block's own header.
    pub header: Option<&'static str>,
}

pub const SUBSTACK: &[Branch] = &[Branch {
    input: "SUBSTACK",
    header: None,
}];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recipe {
    /// `label(arg, arg)`
    Call(&'static str, &'static [Arg]),
    /// `label arg arg`
    Keyword(&'static str, &'static [Arg]),
    /// the bare value of a field; menu shadows and argument reporters
    Field(&'static str),
    /// the bare value of a field, mapped through a menu
    MenuField(&'static str, Menu),
    /// `[kind "field value"]`
    Reference(&'static str, &'static str),
    /// like `Call`, with the label taken from a field
    FieldCall(&'static str, &'static [Arg]),
    /// `(lhs symbol rhs)`
    Infix(&'static str, &'static str, &'static str),
    /// `(symbol operand)`
    Prefix(&'static str, &'static str),
    /// an event header; the rest of its script is indented below it
    Hat(&'static str, &'static [Arg]),
    /// a keyword header followed by one or more indented bodies
    Control(&'static str, &'static [Arg], &'static [Branch]),
    ProcedureDefinition,
    ProcedurePrototype,
    ProcedureCall,
}

pub type RuleTable = &'static [(&'static str, Recipe)];

pub const CATEGORIES: &[(&str, RuleTable)] = &[
    ("argument", argument::RULES),
    ("colour", math::COLOUR_RULES),
    ("control", control::RULES),
    ("data", data::RULES),
    ("event", event::RULES),
    ("flippercontrol", flippercontrol::RULES),
    ("flipperevents", flipperevents::RULES),
    ("flipperlight", flipperlight::RULES),
    ("flippermoremotor", flippermoremotor::RULES),
    ("flippermoremove", flippermoremove::RULES),
    ("flippermotor", flippermotor::RULES),
    ("flippermove", flippermove::RULES),
    ("flipperoperator", flipperoperator::RULES),
    ("flippersensors", flippersensors::RULES),
    ("flippersound", flippersound::RULES),
    ("math", math::RULES),
    ("operator", operator::RULES),
    ("procedures", procedures::RULES),
    ("sound", sound::RULES),
    ("text", math::TEXT_RULES),
];

/// the category an opcode belongs to, e.g. `flippermove` for `flippermove_startSteer`
pub fn category(opcode: &str) -> &str {
    opcode.split_once('_').map_or(opcode, |(category, _)| category)
}

pub fn lookup(opcode: &str) -> Option<&'static Recipe> {
    let category = category(opcode);
    let (_, table) = CATEGORIES.iter().find(|(name, _)| *name == category)?;
    table
        .iter()
        .find(|(known, _)| *known == opcode)
        .map(|(_, recipe)| recipe)
}

/// every (opcode, recipe) pair, category by category
pub fn all() -> impl Iterator<Item = (&'static str, &'static Recipe)> {
    CATEGORIES
        .iter()
        .flat_map(|(_, table)| table.iter().map(|(opcode, recipe)| (*opcode, recipe)))
}

/// `true` for inputs that hold a nested script rather than a value
pub fn is_substack(input: &str) -> bool {
    input.starts_with("SUBSTACK")
}

// menus shared between categories

pub const COLORS: Menu = &[
    ("-1", "none"),
    ("0", "black"),
    ("1", "magenta"),
    ("2", "violet"),
    ("3", "blue"),
    ("4", "azure"),
    ("5", "turquoise"),
    ("6", "green"),
    ("7", "yellow"),
    ("8", "orange"),
    ("9", "red"),
    ("10", "white"),
];

pub const STOP_METHODS: Menu = &[("0", "coast"), ("1", "brake"), ("2", "hold")];

pub const ACCELERATION: Menu = &[
    ("100 100", "very slow"),
    ("300 300", "slow"),
    ("500 500", "smooth"),
    ("1000 1000", "balanced"),
    ("2000 2000", "quick"),
    ("10000 10000", "fast"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn opcodes_are_unique() {
        let duplicates = all().map(|(opcode, _)| opcode).duplicates().collect::<Vec<_>>();
        assert!(duplicates.is_empty(), "duplicate rules: {duplicates:?}");
    }

    #[test]
    fn opcodes_are_filed_under_their_category() {
        for (name, table) in CATEGORIES {
            for (opcode, _) in *table {
                assert_eq!(category(opcode), *name, "{opcode} is in the wrong table");
            }
        }
    }

    #[test]
    fn categories_are_unique() {
        assert!(CATEGORIES.iter().map(|(name, _)| name).all_unique());
    }

    #[test]
    fn menus_have_unique_codes() {
        for menu in [COLORS, STOP_METHODS, ACCELERATION] {
            assert!(menu.iter().map(|(code, _)| code).all_unique());
        }
    }

    #[test]
    fn lookup_finds_known_and_ignores_unknown() {
        assert_eq!(
            lookup("flippersensors_resetYaw"),
            Some(&Recipe::Call("resetYaw", &[]))
        );
        assert_eq!(lookup("flippersensors_doesNotExist"), None);
        assert_eq!(lookup("nocategory"), None);
    }
}
