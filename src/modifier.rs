//! Logical keyboard modifier flags
//!
//! A modifier flag is derived from physical usage codes by the switch event
//! classification; the manipulator engine consumes it. `Fn` is produced by
//! two distinct hardware encodings (Apple vendor keyboard `function` and
//! Apple vendor top-case `keyboard_fn`).

use serde::{Deserialize, Serialize};

/// Logical modifier state of a keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierFlag {
    LeftControl,
    LeftShift,
    LeftOption,
    LeftCommand,
    RightControl,
    RightShift,
    RightOption,
    RightCommand,
    Fn,
}

impl ModifierFlag {
    /// All possible flags
    pub fn all() -> &'static [ModifierFlag] {
        &[
            ModifierFlag::LeftControl,
            ModifierFlag::LeftShift,
            ModifierFlag::LeftOption,
            ModifierFlag::LeftCommand,
            ModifierFlag::RightControl,
            ModifierFlag::RightShift,
            ModifierFlag::RightOption,
            ModifierFlag::RightCommand,
            ModifierFlag::Fn,
        ]
    }

    /// Wire-format name (matches the serde representation)
    pub fn as_str(&self) -> &'static str {
        match self {
            ModifierFlag::LeftControl => "left_control",
            ModifierFlag::LeftShift => "left_shift",
            ModifierFlag::LeftOption => "left_option",
            ModifierFlag::LeftCommand => "left_command",
            ModifierFlag::RightControl => "right_control",
            ModifierFlag::RightShift => "right_shift",
            ModifierFlag::RightOption => "right_option",
            ModifierFlag::RightCommand => "right_command",
            ModifierFlag::Fn => "fn",
        }
    }
}

impl std::fmt::Display for ModifierFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_names_match_as_str() {
        for flag in ModifierFlag::all() {
            let json = serde_json::to_value(flag).unwrap();
            assert_eq!(json, serde_json::json!(flag.as_str()));
        }
    }
}
