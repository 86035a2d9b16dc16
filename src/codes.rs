//! Code spaces for momentary switch values
//!
//! Five disjoint code spaces cover the hardware that produces momentary
//! switch events: the standard keyboard page, the consumer page, two Apple
//! vendor pages, and the pointing-device button page. Each submodule owns
//! one space: its value newtype, its symbolic-name table, and its
//! usage-pair mapping.

pub mod apple_vendor_keyboard_key_code;
pub mod apple_vendor_top_case_key_code;
pub mod consumer_key_code;
pub mod key_code;
pub mod pointing_button;

pub use apple_vendor_keyboard_key_code::AppleVendorKeyboardKeyCode;
pub use apple_vendor_top_case_key_code::AppleVendorTopCaseKeyCode;
pub use consumer_key_code::ConsumerKeyCode;
pub use key_code::KeyCode;
pub use pointing_button::PointingButton;

use serde_json::Value;
use std::collections::HashMap;

/// Bidirectional symbolic-name index over one code space's entries.
///
/// The first entry wins when several names share a value, so the entry order
/// decides the canonical name used for encoding.
pub(crate) struct NameTable {
    by_name: HashMap<&'static str, u16>,
    by_value: HashMap<u16, &'static str>,
}

impl NameTable {
    pub(crate) fn new(entries: &'static [(&'static str, u16)]) -> Self {
        let mut by_name = HashMap::with_capacity(entries.len());
        let mut by_value = HashMap::with_capacity(entries.len());
        for &(name, value) in entries {
            by_name.insert(name, value);
            by_value.entry(value).or_insert(name);
        }
        Self { by_name, by_value }
    }

    pub(crate) fn value(&self, name: &str) -> Option<u16> {
        self.by_name.get(name).copied()
    }

    pub(crate) fn name(&self, value: u16) -> Option<&'static str> {
        self.by_value.get(&value).copied()
    }
}

/// Resolve a JSON value against a table: a string must be a known symbolic
/// name; an integer is taken as the raw usage.
pub(crate) fn resolve_json(table: &NameTable, value: &Value) -> Option<u16> {
    match value {
        Value::String(name) => table.value(name),
        Value::Number(number) => number.as_u64().and_then(|n| u16::try_from(n).ok()),
        _ => None,
    }
}

/// Encode a value as its symbolic name when the table has one, else as the
/// raw integer. Keeps unnamed codes representable on the wire.
pub(crate) fn json_name(table: &NameTable, value: u16) -> Value {
    match table.name(value) {
        Some(name) => Value::from(name),
        None => Value::from(value),
    }
}
