use super::{Arg::*, Recipe, RuleTable};

pub const RULES: RuleTable = &[
    ("operator_add", Recipe::Infix("+", "NUM1", "NUM2")),
    ("operator_subtract", Recipe::Infix("-", "NUM1", "NUM2")),
    ("operator_multiply", Recipe::Infix("*", "NUM1", "NUM2")),
    ("operator_divide", Recipe::Infix("/", "NUM1", "NUM2")),
    ("operator_mod", Recipe::Infix("mod", "NUM1", "NUM2")),
    ("operator_lt", Recipe::Infix("<", "OPERAND1", "OPERAND2")),
    ("operator_gt", Recipe::Infix(">", "OPERAND1", "OPERAND2")),
    (
        "operator_equals",
        Recipe::Infix("=", "OPERAND1", "OPERAND2"),
    ),
    ("operator_and", Recipe::Infix("and", "OPERAND1", "OPERAND2")),
    ("operator_or", Recipe::Infix("or", "OPERAND1", "OPERAND2")),
    ("operator_not", Recipe::Prefix("not", "OPERAND")),
    (
        "operator_random",
        Recipe::Call("random", &[Named("from", "FROM"), Named("to", "TO")]),
    ),
    (
        "operator_join",
        Recipe::Call("join", &[Input("STRING1"), Input("STRING2")]),
    ),
    (
        "operator_letter_of",
        Recipe::Call("letterOf", &[Named("index", "LETTER"), Input("STRING")]),
    ),
    (
        "operator_length",
        Recipe::Call("length", &[Input("STRING")]),
    ),
    (
        "operator_contains",
        Recipe::Call("contains", &[Input("STRING1"), Input("STRING2")]),
    ),
    ("operator_round", Recipe::Call("round", &[Input("NUM")])),
    (
        "operator_mathop",
        Recipe::FieldCall("OPERATOR", &[Input("NUM")]),
    ),
];
