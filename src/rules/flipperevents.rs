use super::{Arg::*, Menu, Recipe, RuleTable, COLORS};

const GESTURES: Menu = &[
    ("tapped", "tapped"),
    ("doubletapped", "double-tapped"),
    ("shake", "shaken"),
    ("freefall", "falling"),
];

pub const RULES: RuleTable = &[
    (
        "flipperevents_whenProgramStarts",
        Recipe::Hat("whenProgramStarts", &[]),
    ),
    (
        "flipperevents_whenColor",
        Recipe::Hat(
            "whenColor",
            &[Named("port", "PORT"), Named("color", "OPTION")],
        ),
    ),
    (
        "flipperevents_whenPressed",
        Recipe::Hat(
            "whenPressed",
            &[Named("port", "PORT"), LowerField("event", "OPTION")],
        ),
    ),
    (
        "flipperevents_whenDistance",
        Recipe::Hat(
            "whenDistance",
            &[
                Named("port", "PORT"),
                NamedField("comparator", "COMPARATOR"),
                Gated("distance", "VALUE", "UNIT"),
            ],
        ),
    ),
    (
        "flipperevents_whenTilted",
        Recipe::Hat("whenTilted", &[Named("tilt", "VALUE")]),
    ),
    (
        "flipperevents_whenOrientation",
        Recipe::Hat("whenOrientation", &[NamedField("side", "VALUE")]),
    ),
    (
        "flipperevents_whenGesture",
        Recipe::Hat("whenGesture", &[Menu("gesture", "EVENT", GESTURES)]),
    ),
    (
        "flipperevents_whenButton",
        Recipe::Hat(
            "whenButton",
            &[NamedField("button", "BUTTON"), LowerField("event", "EVENT")],
        ),
    ),
    (
        "flipperevents_whenTimer",
        Recipe::Hat("whenTimer", &[Suffixed("timer", "VALUE", "seconds")]),
    ),
    (
        "flipperevents_whenCondition",
        Recipe::Hat("whenCondition", &[Input("CONDITION")]),
    ),
    (
        "flipperevents_color-selector",
        Recipe::MenuField("field_flipperevents_color-selector", COLORS),
    ),
    (
        "flipperevents_color-sensor-selector",
        Recipe::Field("field_flipperevents_color-sensor-selector"),
    ),
    (
        "flipperevents_force-sensor-selector",
        Recipe::Field("field_flipperevents_force-sensor-selector"),
    ),
    (
        "flipperevents_distance-sensor-selector",
        Recipe::Field("field_flipperevents_distance-sensor-selector"),
    ),
    (
        "flipperevents_custom-tilted",
        Recipe::Field("field_flipperevents_custom-tilted"),
    ),
];
