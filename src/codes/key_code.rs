//! Standard keyboard key codes (Keyboard/Keypad page 0x07)
//!
//! The wrapped value is the HID usage itself; symbolic names follow the
//! configuration wire format (`left_control`, `spacebar`, `f1`, ...).

use super::NameTable;
use crate::hid::{Usage, UsagePage, UsagePair};
use once_cell::sync::Lazy;
use serde_json::Value;

/// A key on the standard keyboard/keypad usage page
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyCode(pub u16);

/// Symbolic names per USB HID Usage Tables §10
const ENTRIES: &[(&str, u16)] = &[
    ("a", 0x04),
    ("b", 0x05),
    ("c", 0x06),
    ("d", 0x07),
    ("e", 0x08),
    ("f", 0x09),
    ("g", 0x0A),
    ("h", 0x0B),
    ("i", 0x0C),
    ("j", 0x0D),
    ("k", 0x0E),
    ("l", 0x0F),
    ("m", 0x10),
    ("n", 0x11),
    ("o", 0x12),
    ("p", 0x13),
    ("q", 0x14),
    ("r", 0x15),
    ("s", 0x16),
    ("t", 0x17),
    ("u", 0x18),
    ("v", 0x19),
    ("w", 0x1A),
    ("x", 0x1B),
    ("y", 0x1C),
    ("z", 0x1D),
    ("1", 0x1E),
    ("2", 0x1F),
    ("3", 0x20),
    ("4", 0x21),
    ("5", 0x22),
    ("6", 0x23),
    ("7", 0x24),
    ("8", 0x25),
    ("9", 0x26),
    ("0", 0x27),
    ("return_or_enter", 0x28),
    ("escape", 0x29),
    ("delete_or_backspace", 0x2A),
    ("tab", 0x2B),
    ("spacebar", 0x2C),
    ("hyphen", 0x2D),
    ("equal_sign", 0x2E),
    ("open_bracket", 0x2F),
    ("close_bracket", 0x30),
    ("backslash", 0x31),
    ("non_us_pound", 0x32),
    ("semicolon", 0x33),
    ("quote", 0x34),
    ("grave_accent_and_tilde", 0x35),
    ("comma", 0x36),
    ("period", 0x37),
    ("slash", 0x38),
    ("caps_lock", 0x39),
    ("f1", 0x3A),
    ("f2", 0x3B),
    ("f3", 0x3C),
    ("f4", 0x3D),
    ("f5", 0x3E),
    ("f6", 0x3F),
    ("f7", 0x40),
    ("f8", 0x41),
    ("f9", 0x42),
    ("f10", 0x43),
    ("f11", 0x44),
    ("f12", 0x45),
    ("print_screen", 0x46),
    ("scroll_lock", 0x47),
    ("pause", 0x48),
    ("insert", 0x49),
    ("home", 0x4A),
    ("page_up", 0x4B),
    ("delete_forward", 0x4C),
    ("end", 0x4D),
    ("page_down", 0x4E),
    ("right_arrow", 0x4F),
    ("left_arrow", 0x50),
    ("down_arrow", 0x51),
    ("up_arrow", 0x52),
    ("left_control", 0xE0),
    ("left_shift", 0xE1),
    ("left_option", 0xE2),
    ("left_command", 0xE3),
    ("right_control", 0xE4),
    ("right_shift", 0xE5),
    ("right_option", 0xE6),
    ("right_command", 0xE7),
];

static TABLE: Lazy<NameTable> = Lazy::new(|| NameTable::new(ENTRIES));

impl KeyCode {
    pub const USAGE_PAGE: UsagePage = UsagePage::KEYBOARD_OR_KEYPAD;

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
