use super::{Arg::*, Recipe, RuleTable, ACCELERATION, STOP_METHODS};

pub const RULES: RuleTable = &[
    (
        "flippermoremove_startDualSpeed",
        Recipe::Call(
            "startDualSpeed",
            &[
                Suffixed("left", "LEFT", "%"),
                Suffixed("right", "RIGHT", "%"),
            ],
        ),
    ),
    (
        "flippermoremove_startDualPower",
        Recipe::Call(
            "startDualPower",
            &[
                Suffixed("left", "LEFT", "%"),
                Suffixed("right", "RIGHT", "%"),
            ],
        ),
    ),
    (
        "flippermoremove_moveDistanceAtSpeed",
        Recipe::Call(
            "moveDualSpeed",
            &[
                Gated("distance", "DISTANCE", "UNIT"),
                Suffixed("left", "LEFT", "%"),
                Suffixed("right", "RIGHT", "%"),
            ],
        ),
    ),
    (
        "flippermoremove_steerDistanceAtSpeed",
        Recipe::Call(
            "steer",
            &[
                Named("steering", "STEERING"),
                Gated("distance", "DISTANCE", "UNIT"),
                Suffixed("speed", "SPEED", "%"),
            ],
        ),
    ),
    (
        "flippermoremove_steerAtSpeed",
        Recipe::Call(
            "startSteerAtSpeed",
            &[
                Named("steering", "STEERING"),
                Suffixed("speed", "SPEED", "%"),
            ],
        ),
    ),
    (
        "flippermoremove_movementSetStopMethod",
        Recipe::Call(
            "setMovementStopMethod",
            &[Menu("stop", "STOP", STOP_METHODS)],
        ),
    ),
    (
        "flippermoremove_movementSetAcceleration",
        Recipe::Call(
            "setMovementAcceleration",
            &[Menu("acceleration", "ACCELERATION", ACCELERATION)],
        ),
    ),
];
