//! Pointing-device buttons (Button page 0x09)

use super::NameTable;
use crate::hid::{Usage, UsagePage, UsagePair};
use once_cell::sync::Lazy;
use serde_json::Value;

/// A button on a pointing device (button1 = primary, button2 = secondary)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointingButton(pub u16);

const ENTRIES: &[(&str, u16)] = &[
    ("button1", 1),
    ("button2", 2),
    ("button3", 3),
    ("button4", 4),
    ("button5", 5),
    ("button6", 6),
    ("button7", 7),
    ("button8", 8),
    ("button9", 9),
    ("button10", 10),
    ("button11", 11),
    ("button12", 12),
    ("button13", 13),
    ("button14", 14),
    ("button15", 15),
    ("button16", 16),
    ("button17", 17),
    ("button18", 18),
    ("button19", 19),
    ("button20", 20),
    ("button21", 21),
    ("button22", 22),
    ("button23", 23),
    ("button24", 24),
    ("button25", 25),
    ("button26", 26),
    ("button27", 27),
    ("button28", 28),
    ("button29", 29),
    ("button30", 30),
    ("button31", 31),
    ("button32", 32),
];

static TABLE: Lazy<NameTable> = Lazy::new(|| NameTable::new(ENTRIES));

impl PointingButton {
    pub const USAGE_PAGE: UsagePage = UsagePage::BUTTON;

    /// Classify a usage pair into this code space.
    pub fn from_usage_pair(pair: UsagePair) -> Option<Self> {
        (pair.usage_page == Self::USAGE_PAGE && pair.usage.0 != 0).then(|| Self(pair.usage.0))
    }

    pub fn usage_pair(self) -> UsagePair {
        UsagePair::new(Self::USAGE_PAGE, Usage(self.0))
    }

    pub fn from_name(name: &str) -> Option<Self> {
        TABLE.value(name).map(Self)
    }

    pub fn name(self) -> Option<&'static str> {
        TABLE.name(self.0)
    }

    /// Resolve a JSON symbolic name or raw integer.
    pub fn from_json(value: &Value) -> Option<Self> {
        super::resolve_json(&TABLE, value).map(Self)
    }

    /// Symbolic name when the table has one, raw integer otherwise.
    pub fn to_json(self) -> Value {
        super::json_name(&TABLE, self.0)
    }
}
