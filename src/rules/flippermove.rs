use super::{Arg::*, Menu, Recipe, RuleTable};

const MOVE_DIRECTIONS: Menu = &[
    ("forward", "forward"),
    ("back", "backward"),
    ("clockwise", "turn right"),
    ("counterclockwise", "turn left"),
];

pub const RULES: RuleTable = &[
    (
        "flippermove_move",
        Recipe::Call(
            "move",
            &[
                Named("direction", "DIRECTION"),
                Gated("amount", "VALUE", "UNIT"),
            ],
        ),
    ),
    (
        "flippermove_steer",
        Recipe::Call(
            "steer",
            &[
                Named("steering", "STEERING"),
                Gated("amount", "VALUE", "UNIT"),
            ],
        ),
    ),
    (
        "flippermove_startMove",
        Recipe::Call("startMove", &[Named("direction", "DIRECTION")]),
    ),
    (
        "flippermove_startSteer",
        Recipe::Call("startSteer", &[Named("steering", "STEERING")]),
    ),
    ("flippermove_stopMove", Recipe::Call("stopMove", &[])),
    (
        "flippermove_movementSpeed",
        Recipe::Call("setMovementSpeed", &[Suffixed("speed", "SPEED", "%")]),
    ),
    (
        "flippermove_setMovementPair",
        Recipe::Call("setMovementMotors", &[Named("pair", "PAIR")]),
    ),
    (
        "flippermove_setDistance",
        Recipe::Call("setMotorRotation", &[Gated("distance", "DISTANCE", "UNIT")]),
    ),
    (
        "flippermove_rotation-wheel",
        Recipe::Field("field_flippermove_rotation-wheel"),
    ),
    (
        "flippermove_movement-port-selector",
        Recipe::Field("field_flippermove_movement-port-selector"),
    ),
    (
        "flippermove_custom-icon-direction",
        Recipe::MenuField("field_flippermove_custom-icon-direction", MOVE_DIRECTIONS),
    ),
    (
        "flippermove_custom-setDistance-number",
        Recipe::Field("field_flippermove_custom-setDistance-number"),
    ),
];
