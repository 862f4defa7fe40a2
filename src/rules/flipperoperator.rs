use super::{Arg::*, Recipe, RuleTable};

pub const RULES: RuleTable = &[(
    "flipperoperator_isInBetween",
    Recipe::Call(
        "isInBetween",
        &[Input("VALUE"), Named("low", "LOW"), Named("high", "HIGH")],
    ),
)];
