//! Consumer key codes (Consumer page 0x0C)
//!
//! Media transport, volume, and display controls.

use super::NameTable;
use crate::hid::{Usage, UsagePage, UsagePair};
use once_cell::sync::Lazy;
use serde_json::Value;

/// A control on the consumer usage page
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConsumerKeyCode(pub u16);

const ENTRIES: &[(&str, u16)] = &[
    ("power", 0x30),
    ("display_brightness_increment", 0x6F),
    ("display_brightness_decrement", 0x70),
    ("fastforward", 0xB3),
    ("rewind", 0xB4),
    ("scan_next_track", 0xB5),
    ("scan_previous_track", 0xB6),
    ("eject", 0xB8),
    ("play_or_pause", 0xCD),
    ("mute", 0xE2),
    ("volume_increment", 0xE9),
    ("volume_decrement", 0xEA),
];

static TABLE: Lazy<NameTable> = Lazy::new(|| NameTable::new(ENTRIES));

impl ConsumerKeyCode {
    pub const USAGE_PAGE: UsagePage = UsagePage::CONSUMER;

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
