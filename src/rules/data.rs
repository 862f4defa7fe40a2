use super::{Arg::*, Recipe, RuleTable};

pub const RULES: RuleTable = &[
    ("data_variable", Recipe::Reference("variable", "VARIABLE")),
    (
        "data_setvariableto",
        Recipe::Call("setVariable", &[Field("VARIABLE"), Named("to", "VALUE")]),
    ),
    (
        "data_changevariableby",
        Recipe::Call("changeVariable", &[Field("VARIABLE"), Named("by", "VALUE")]),
    ),
    (
        "data_showvariable",
        Recipe::Call("showVariable", &[Field("VARIABLE")]),
    ),
    (
        "data_hidevariable",
        Recipe::Call("hideVariable", &[Field("VARIABLE")]),
    ),
    ("data_listcontents", Recipe::Reference("list", "LIST")),
    (
        "data_addtolist",
        Recipe::Call("addToList", &[Field("LIST"), Named("item", "ITEM")]),
    ),
    (
        "data_deleteoflist",
        Recipe::Call("deleteOfList", &[Field("LIST"), Named("index", "INDEX")]),
    ),
    (
        "data_deletealloflist",
        Recipe::Call("deleteAllOfList", &[Field("LIST")]),
    ),
    (
        "data_insertatlist",
        Recipe::Call(
            "insertAtList",
            &[
                Field("LIST"),
                Named("item", "ITEM"),
                Named("index", "INDEX"),
            ],
        ),
    ),
    (
        "data_replaceitemoflist",
        Recipe::Call(
            "replaceItemOfList",
            &[
                Field("LIST"),
                Named("index", "INDEX"),
                Named("item", "ITEM"),
            ],
        ),
    ),
    (
        "data_itemoflist",
        Recipe::Call("itemOfList", &[Field("LIST"), Named("index", "INDEX")]),
    ),
    (
        "data_itemnumoflist",
        Recipe::Call("indexOfItem", &[Field("LIST"), Named("item", "ITEM")]),
    ),
    (
        "data_lengthoflist",
        Recipe::Call("lengthOfList", &[Field("LIST")]),
    ),
    (
        "data_listcontainsitem",
        Recipe::Call("listContains", &[Field("LIST"), Named("item", "ITEM")]),
    ),
    ("data_showlist", Recipe::Call("showList", &[Field("LIST")])),
    ("data_hidelist", Recipe::Call("hideList", &[Field("LIST")])),
];
