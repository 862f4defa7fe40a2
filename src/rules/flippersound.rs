use super::{Arg::*, Recipe, RuleTable};

pub const RULES: RuleTable = &[
    (
        "flippersound_playSound",
        Recipe::Call("playSound", &[Named("sound", "SOUND")]),
    ),
    (
        "flippersound_playSoundUntilDone",
        Recipe::Call("playSoundUntilDone", &[Named("sound", "SOUND")]),
    ),
    (
        "flippersound_beep",
        Recipe::Call("beep", &[Named("note", "NOTE")]),
    ),
    (
        "flippersound_beepForTime",
        Recipe::Call(
            "beepFor",
            &[
                Named("note", "NOTE"),
                Suffixed("duration", "DURATION", "seconds"),
            ],
        ),
    ),
    ("flippersound_stopSound", Recipe::Call("stopSound", &[])),
    (
        "flippersound_sound-selector",
        Recipe::Field("field_flippersound_sound-selector"),
    ),
    (
        "flippersound_custom-piano",
        Recipe::Field("field_flippersound_custom-piano"),
    ),
];
