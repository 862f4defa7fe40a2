use super::{Arg::*, Menu, Recipe, RuleTable};

const POSITION_DIRECTIONS: Menu = &[
    ("shortest", "shortest path"),
    ("clockwise", "clockwise"),
    ("counterclockwise", "counterclockwise"),
];

pub const RULES: RuleTable = &[
    (
        "flippermotor_motorTurnForDirection",
        Recipe::Call(
            "motorTurnFor",
            &[
                Named("port", "PORT"),
                Named("direction", "DIRECTION"),
                Gated("amount", "VALUE", "UNIT"),
            ],
        ),
    ),
    (
        "flippermotor_motorGoDirectionToPosition",
        Recipe::Call(
            "motorGoToPosition",
            &[
                Named("port", "PORT"),
                Named("direction", "DIRECTION"),
                Named("position", "POSITION"),
            ],
        ),
    ),
    (
        "flippermotor_motorStartDirection",
        Recipe::Call(
            "startMotor",
            &[Named("port", "PORT"), Named("direction", "DIRECTION")],
        ),
    ),
    (
        "flippermotor_motorStop",
        Recipe::Call("stopMotor", &[Named("port", "PORT")]),
    ),
    (
        "flippermotor_motorSetSpeed",
        Recipe::Call(
            "setMotorSpeed",
            &[Named("port", "PORT"), Suffixed("speed", "SPEED", "%")],
        ),
    ),
    (
        "flippermotor_absolutePosition",
        Recipe::Call("motorAbsolutePosition", &[Named("port", "PORT")]),
    ),
    (
        "flippermotor_speed",
        Recipe::Call("motorSpeed", &[Named("port", "PORT")]),
    ),
    (
        "flippermotor_multiple-port-selector",
        Recipe::Field("field_flippermotor_multiple-port-selector"),
    ),
    (
        "flippermotor_single-motor-selector",
        Recipe::Field("field_flippermotor_single-motor-selector"),
    ),
    (
        "flippermotor_custom-icon-direction",
        Recipe::Field("field_flippermotor_custom-icon-direction"),
    ),
    (
        "flippermotor_custom-position-direction",
        Recipe::MenuField(
            "field_flippermotor_custom-position-direction",
            POSITION_DIRECTIONS,
        ),
    ),
    (
        "flippermotor_custom-angle",
        Recipe::Field("field_flippermotor_custom-angle"),
    ),
];
