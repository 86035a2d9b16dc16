//! Apple vendor top-case key codes (vendor page 0x00FF)
//!
//! Laptop top-case controls. `keyboard_fn` is the second hardware encoding
//! of the logical `fn` modifier.

use super::NameTable;
use crate::hid::{Usage, UsagePage, UsagePair};
use once_cell::sync::Lazy;
use serde_json::Value;

/// A key on the Apple vendor top-case usage page
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AppleVendorTopCaseKeyCode(pub u16);

const ENTRIES: &[(&str, u16)] = &[
    ("keyboard_fn", 0x03),
    ("brightness_up", 0x04),
    ("brightness_down", 0x05),
    ("video_mirror", 0x06),
    ("illumination_toggle", 0x07),
    ("illumination_up", 0x08),
    ("illumination_down", 0x09),
];

static TABLE: Lazy<NameTable> = Lazy::new(|| NameTable::new(ENTRIES));

impl AppleVendorTopCaseKeyCode {
    pub const USAGE_PAGE: UsagePage = UsagePage::APPLE_VENDOR_TOP_CASE;

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
