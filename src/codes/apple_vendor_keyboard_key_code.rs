//! Apple vendor keyboard key codes (vendor page 0xFF01)
//!
//! The `function` usage here is one of the two hardware encodings of the
//! logical `fn` modifier; the other lives on the top-case page.

use super::NameTable;
use crate::hid::{Usage, UsagePage, UsagePair};
use once_cell::sync::Lazy;
use serde_json::Value;

/// A key on the Apple vendor keyboard usage page
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AppleVendorKeyboardKeyCode(pub u16);

const ENTRIES: &[(&str, u16)] = &[
    ("spotlight", 0x01),
    ("dashboard", 0x02),
    ("function", 0x03),
    ("launchpad", 0x04),
    ("expose_all", 0x10),
    ("expose_desktop", 0x11),
    ("brightness_up", 0x20),
    ("brightness_down", 0x21),
    ("language", 0x30),
];

static TABLE: Lazy<NameTable> = Lazy::new(|| NameTable::new(ENTRIES));

impl AppleVendorKeyboardKeyCode {
    pub const USAGE_PAGE: UsagePage = UsagePage::APPLE_VENDOR_KEYBOARD;

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
