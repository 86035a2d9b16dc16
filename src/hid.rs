//! USB HID usage identifiers
//!
//! A `(usage page, usage)` pair names an input element's category and
//! specific function per the USB HID Usage Tables. The hardware-report layer
//! produces these pairs; virtual-device report synthesis consumes them.

use serde::{Deserialize, Serialize};

/// HID usage page (element category), e.g. Keyboard/Keypad (0x07)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UsagePage(pub u16);

impl UsagePage {
    /// Keyboard/Keypad page (USB HID Usage Tables §10)
    pub const KEYBOARD_OR_KEYPAD: UsagePage = UsagePage(0x07);
    /// Button page (USB HID Usage Tables §12), used by pointing devices
    pub const BUTTON: UsagePage = UsagePage(0x09);
    /// Consumer page (USB HID Usage Tables §15)
    pub const CONSUMER: UsagePage = UsagePage(0x0C);
    /// Apple vendor page carrying top-case usages (keyboard fn, illumination)
    pub const APPLE_VENDOR_TOP_CASE: UsagePage = UsagePage(0x00FF);
    /// Apple vendor keyboard page (spotlight, launchpad, function, ...)
    pub const APPLE_VENDOR_KEYBOARD: UsagePage = UsagePage(0xFF01);
}

/// HID usage (specific element function) within a usage page
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Usage(pub u16);

/// Well-known usages referenced by the modifier-flag classification
pub mod usage {
    /// Keyboard/Keypad page (0x07) modifier usages
    pub mod keyboard_or_keypad {
        use crate::hid::Usage;

        pub const KEYBOARD_LEFT_CONTROL: Usage = Usage(0xE0);
        pub const KEYBOARD_LEFT_SHIFT: Usage = Usage(0xE1);
        pub const KEYBOARD_LEFT_ALT: Usage = Usage(0xE2);
        pub const KEYBOARD_LEFT_GUI: Usage = Usage(0xE3);
        pub const KEYBOARD_RIGHT_CONTROL: Usage = Usage(0xE4);
        pub const KEYBOARD_RIGHT_SHIFT: Usage = Usage(0xE5);
        pub const KEYBOARD_RIGHT_ALT: Usage = Usage(0xE6);
        pub const KEYBOARD_RIGHT_GUI: Usage = Usage(0xE7);
    }

    /// Apple vendor keyboard page (0xFF01)
    pub mod apple_vendor_keyboard {
        use crate::hid::Usage;

        pub const FUNCTION: Usage = Usage(0x0003);
    }

    /// Apple vendor top-case page (0x00FF)
    pub mod apple_vendor_top_case {
        use crate::hid::Usage;

        pub const KEYBOARD_FN: Usage = Usage(0x0003);
    }
}

/// A complete HID element identity as reported by hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UsagePair {
    pub usage_page: UsagePage,
    pub usage: Usage,
}

impl UsagePair {
    pub const fn new(usage_page: UsagePage, usage: Usage) -> Self {
        Self { usage_page, usage }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_pair_ordering() {
        // Pairs order by page first, then usage
        let a = UsagePair::new(UsagePage::KEYBOARD_OR_KEYPAD, Usage(0xFF));
        let b = UsagePair::new(UsagePage::BUTTON, Usage(0x01));
        assert!(a < b);
    }
}
