use super::{Recipe, RuleTable};

pub const RULES: RuleTable = &[
    ("argument_reporter_boolean", Recipe::Field("VALUE")),
    ("argument_reporter_string_number", Recipe::Field("VALUE")),
];
