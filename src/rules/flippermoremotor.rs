use super::{Arg::*, Recipe, RuleTable, ACCELERATION, STOP_METHODS};

pub const RULES: RuleTable = &[
    (
        "flippermoremotor_motorSetDegreeCounted",
        Recipe::Call(
            "setDegreesCounted",
            &[Named("port", "PORT"), Named("value", "VALUE")],
        ),
    ),
    (
        "flippermoremotor_position",
        Recipe::Call("motorPosition", &[Named("port", "PORT")]),
    ),
    (
        "flippermoremotor_power",
        Recipe::Call("motorPower", &[Named("port", "PORT")]),
    ),
    (
        "flippermoremotor_motorSetStopMethod",
        Recipe::Call(
            "setStopMethod",
            &[Named("port", "PORT"), Menu("stop", "STOP", STOP_METHODS)],
        ),
    ),
    (
        "flippermoremotor_motorSetAcceleration",
        Recipe::Call(
            "setAcceleration",
            &[
                Named("port", "PORT"),
                Menu("acceleration", "ACCELERATION", ACCELERATION),
            ],
        ),
    ),
    (
        "flippermoremotor_motorStartPower",
        Recipe::Call(
            "startMotorPower",
            &[Named("port", "PORT"), Suffixed("power", "POWER", "%")],
        ),
    ),
    (
        "flippermoremotor_motorGoToRelativePosition",
        Recipe::Call(
            "motorGoToRelativePosition",
            &[
                Named("port", "PORT"),
                Named("position", "POSITION"),
                Suffixed("speed", "SPEED", "%"),
            ],
        ),
    ),
    (
        "flippermoremotor_multiple-port-selector",
        Recipe::Field("field_flippermoremotor_multiple-port-selector"),
    ),
    (
        "flippermoremotor_single-motor-selector",
        Recipe::Field("field_flippermoremotor_single-motor-selector"),
    ),
];
