use super::{Arg::*, Recipe, RuleTable, COLORS};

pub const RULES: RuleTable = &[
    ("flippersensors_resetYaw", Recipe::Call("resetYaw", &[])),
    ("flippersensors_orientationAxis", Recipe::Field("AXIS")),
    (
        "flippersensors_orientation",
        Recipe::Call("orientation", &[]),
    ),
    (
        "flippersensors_color",
        Recipe::Call("color", &[Named("port", "PORT")]),
    ),
    (
        "flippersensors_isColor",
        Recipe::Call("isColor", &[Named("port", "PORT"), Named("color", "VALUE")]),
    ),
    (
        "flippersensors_reflectivity",
        Recipe::Call("reflectivity", &[Named("port", "PORT")]),
    ),
    (
        "flippersensors_isReflectivity",
        Recipe::Call(
            "isReflectivity",
            &[
                Named("port", "PORT"),
                NamedField("comparator", "COMPARATOR"),
                Suffixed("value", "VALUE", "%"),
            ],
        ),
    ),
    (
        "flippersensors_distance",
        Recipe::Call(
            "distance",
            &[Named("port", "PORT"), NamedField("unit", "UNIT")],
        ),
    ),
    (
        "flippersensors_isDistance",
        Recipe::Call(
            "isDistance",
            &[
                Named("port", "PORT"),
                NamedField("comparator", "COMPARATOR"),
                Gated("distance", "VALUE", "UNIT"),
            ],
        ),
    ),
    (
        "flippersensors_force",
        Recipe::Call(
            "force",
            &[Named("port", "PORT"), NamedField("unit", "UNIT")],
        ),
    ),
    (
        "flippersensors_isPressed",
        Recipe::Call(
            "isPressed",
            &[Named("port", "PORT"), LowerField("event", "OPTION")],
        ),
    ),
    (
        "flippersensors_isorientation",
        Recipe::Call("isOrientation", &[NamedField("side", "ORIENTATION")]),
    ),
    (
        "flippersensors_ismotion",
        Recipe::Call("isMotion", &[NamedField("motion", "MOTION")]),
    ),
    (
        "flippersensors_isTilted",
        Recipe::Call("isTilted", &[Named("tilt", "VALUE")]),
    ),
    (
        "flippersensors_buttonIsPressed",
        Recipe::Call(
            "buttonIs",
            &[NamedField("button", "BUTTON"), LowerField("event", "EVENT")],
        ),
    ),
    ("flippersensors_timer", Recipe::Call("timer", &[])),
    ("flippersensors_resetTimer", Recipe::Call("resetTimer", &[])),
    (
        "flippersensors_color-selector",
        Recipe::MenuField("field_flippersensors_color-selector", COLORS),
    ),
    (
        "flippersensors_color-sensor-selector",
        Recipe::Field("field_flippersensors_color-sensor-selector"),
    ),
    (
        "flippersensors_force-sensor-selector",
        Recipe::Field("field_flippersensors_force-sensor-selector"),
    ),
    (
        "flippersensors_distance-sensor-selector",
        Recipe::Field("field_flippersensors_distance-sensor-selector"),
    ),
    (
        "flippersensors_custom-tilted",
        Recipe::Field("field_flippersensors_custom-tilted"),
    ),
];
