use super::{Arg::*, Recipe, RuleTable};

pub const RULES: RuleTable = &[
    (
        "sound_setvolumeto",
        Recipe::Call("setVolume", &[Suffixed("volume", "VOLUME", "%")]),
    ),
    (
        "sound_changevolumeby",
        Recipe::Call("changeVolume", &[Named("by", "VOLUME")]),
    ),
    ("sound_volume", Recipe::Call("volume", &[])),
    ("sound_stopallsounds", Recipe::Call("stopAllSounds", &[])),
];
