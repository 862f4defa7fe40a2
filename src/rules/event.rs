use super::{Arg::*, Recipe, RuleTable};

pub const RULES: RuleTable = &[
    ("event_whenflagclicked", Recipe::Hat("whenFlagClicked", &[])),
    (
        "event_whenbroadcastreceived",
        Recipe::Hat("whenBroadcastReceived", &[Field("BROADCAST_OPTION")]),
    ),
    (
        "event_broadcast",
        Recipe::Call("broadcast", &[Input("BROADCAST_INPUT")]),
    ),
    (
        "event_broadcastandwait",
        Recipe::Call("broadcastAndWait", &[Input("BROADCAST_INPUT")]),
    ),
    ("event_broadcast_menu", Recipe::Field("BROADCAST_OPTION")),
];
