//! Shadow blocks that only hold a value. These usually arrive compressed into
//! literals, but an uncompressed project spells them out as objects.

use super::{Recipe, RuleTable};

pub const RULES: RuleTable = &[
    ("math_number", Recipe::Field("NUM")),
    ("math_positive_number", Recipe::Field("NUM")),
    ("math_whole_number", Recipe::Field("NUM")),
    ("math_integer", Recipe::Field("NUM")),
    ("math_angle", Recipe::Field("NUM")),
];

pub const TEXT_RULES: RuleTable = &[("text", Recipe::Field("TEXT"))];

pub const COLOUR_RULES: RuleTable = &[("colour_picker", Recipe::Field("COLOUR"))];
