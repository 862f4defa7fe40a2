use super::{Recipe, RuleTable};

pub const RULES: RuleTable = &[
    ("procedures_definition", Recipe::ProcedureDefinition),
    ("procedures_prototype", Recipe::ProcedurePrototype),
    ("procedures_call", Recipe::ProcedureCall),
];
