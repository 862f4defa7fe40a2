use super::{Arg::*, Recipe, RuleTable, COLORS};

pub const RULES: RuleTable = &[
    (
        "flipperlight_lightDisplayImageOn",
        Recipe::Call("displayImage", &[Named("image", "MATRIX")]),
    ),
    (
        "flipperlight_lightDisplayImageOnForTime",
        Recipe::Call(
            "displayImageFor",
            &[
                Named("image", "MATRIX"),
                Suffixed("duration", "VALUE", "seconds"),
            ],
        ),
    ),
    (
        "flipperlight_lightDisplayText",
        Recipe::Call("displayText", &[Named("text", "TEXT")]),
    ),
    (
        "flipperlight_lightDisplayOff",
        Recipe::Call("displayOff", &[]),
    ),
    (
        "flipperlight_lightDisplaySetPixel",
        Recipe::Call(
            "setPixel",
            &[
                Named("x", "X"),
                Named("y", "Y"),
                Suffixed("brightness", "BRIGHTNESS", "%"),
            ],
        ),
    ),
    (
        "flipperlight_lightDisplaySetBrightness",
        Recipe::Call(
            "setDisplayBrightness",
            &[Suffixed("brightness", "BRIGHTNESS", "%")],
        ),
    ),
    (
        "flipperlight_lightDisplayRotate",
        Recipe::Call("rotateDisplay", &[LowerField("direction", "DIRECTION")]),
    ),
    (
        "flipperlight_lightDisplaySetOrientation",
        Recipe::Call(
            "setDisplayOrientation",
            &[NamedField("orientation", "ORIENTATION")],
        ),
    ),
    (
        "flipperlight_centerButtonLight",
        Recipe::Call("setCenterButtonLight", &[Named("color", "COLOR")]),
    ),
    (
        "flipperlight_ultrasonicLightUp",
        Recipe::Call(
            "lightUpDistanceSensor",
            &[Named("port", "PORT"), Named("value", "VALUE")],
        ),
    ),
    (
        "flipperlight_matrix-5x5-brightness-image",
        Recipe::Field("field_flipperlight_matrix-5x5-brightness-image"),
    ),
    (
        "flipperlight_matrix-5x5-image",
        Recipe::Field("field_flipperlight_matrix-5x5-image"),
    ),
    (
        "flipperlight_color-selector-vertical",
        Recipe::MenuField("field_flipperlight_color-selector-vertical", COLORS),
    ),
    (
        "flipperlight_custom-icon-direction",
        Recipe::Field("field_flipperlight_custom-icon-direction"),
    ),
    (
        "flipperlight_menu_orientation",
        Recipe::Field("orientation"),
    ),
];
