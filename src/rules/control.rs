use super::{Arg::*, Branch, Recipe, RuleTable, SUBSTACK};

pub const RULES: RuleTable = &[
    ("control_forever", Recipe::Control("forever", &[], SUBSTACK)),
    (
        "control_repeat",
        Recipe::Control("repeat", &[Input("TIMES")], SUBSTACK),
    ),
    (
        "control_repeat_until",
        Recipe::Control("until", &[Input("CONDITION")], SUBSTACK),
    ),
    (
        "control_while",
        Recipe::Control("while", &[Input("CONDITION")], SUBSTACK),
    ),
    (
        "control_if",
        Recipe::Control("if", &[Input("CONDITION")], SUBSTACK),
    ),
    (
        "control_if_else",
        Recipe::Control(
            "if",
            &[Input("CONDITION")],
            &[
                Branch {
                    input: "SUBSTACK",
                    header: None,
                },
                Branch {
                    input: "SUBSTACK2",
                    header: Some("else"),
                },
            ],
        ),
    ),
    (
        "control_wait",
        Recipe::Call("wait", &[Suffixed("duration", "DURATION", "seconds")]),
    ),
    (
        "control_wait_until",
        Recipe::Keyword("wait until", &[Input("CONDITION")]),
    ),
    (
        "control_stop",
        Recipe::Call("stop", &[Field("STOP_OPTION")]),
    ),
];
