use super::{Arg::*, Recipe, RuleTable};

pub const RULES: RuleTable = &[
    (
        "flippercontrol_stop",
        Recipe::Call("stop", &[Field("STOP_OPTION")]),
    ),
    (
        "flippercontrol_stopOtherStacks",
        Recipe::Call("stopOtherStacks", &[]),
    ),
    (
        "flippercontrol_custom-stop",
        Recipe::Field("field_flippercontrol_custom-stop"),
    ),
];
