//! Momentary switch events
//!
//! A [`SwitchEvent`] is the canonical identity of a single physical input
//! activation (key, consumer control, vendor key, pointing button). The
//! hardware layer produces usage pairs, `SwitchEvent` classifies them, and
//! the manipulator engine keys its rule evaluation off the resulting values,
//! relying on their equality, ordering, and hashing.

use crate::codes::{
    AppleVendorKeyboardKeyCode, AppleVendorTopCaseKeyCode, ConsumerKeyCode, KeyCode,
    PointingButton,
};
use crate::hid::{usage, UsagePage, UsagePair};
use crate::modifier::ModifierFlag;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

/// Decode failure for the switch event wire format
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnmarshalError {
    /// The top-level JSON value was not an object
    #[error("expected a JSON object, got `{0}`")]
    MalformedInput(String),
    /// The object held a key outside the five recognized code spaces
    #[error("unknown key: `{0}`")]
    UnknownKey(String),
    /// A recognized key held a value that resolves to no code in its space
    #[error("invalid value for `{key}`: `{value}`")]
    InvalidValue { key: String, value: String },
}

/// Event from momentary switch hardware such as a key, consumer control, or
/// pointing button.
///
/// Exactly one code space is active at a time; `Empty` marks the absence of
/// a switch. The derived ordering is lexicographic over (variant rank,
/// payload) with `Empty` ranked last, a fixed tie-break shared by everything
/// that sorts or deduplicates events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SwitchEvent {
    KeyCode(KeyCode),
    ConsumerKeyCode(ConsumerKeyCode),
    AppleVendorKeyboardKeyCode(AppleVendorKeyboardKeyCode),
    AppleVendorTopCaseKeyCode(AppleVendorTopCaseKeyCode),
    PointingButton(PointingButton),
    #[default]
    Empty,
}

/// A value in one of the five momentary switch code spaces.
///
/// The seam between the payload newtypes and [`SwitchEvent`]: it keeps
/// [`SwitchEvent::find`] and [`SwitchEvent::set`] generic over the active
/// code space.
pub trait SwitchCode: Copy {
    /// Wrap the code in its event variant.
    fn into_event(self) -> SwitchEvent;
    /// Extract the code when `event` holds this space's variant.
    fn from_event(event: &SwitchEvent) -> Option<Self>;
}

macro_rules! impl_switch_code {
    ($($code:ident),*) => {
        $(
            impl SwitchCode for $code {
                fn into_event(self) -> SwitchEvent {
                    SwitchEvent::$code(self)
                }

                fn from_event(event: &SwitchEvent) -> Option<Self> {
                    match *event {
                        SwitchEvent::$code(value) => Some(value),
                        _ => None,
                    }
                }
            }

            impl From<$code> for SwitchEvent {
                fn from(value: $code) -> Self {
                    SwitchEvent::$code(value)
                }
            }
        )*
    };
}

impl_switch_code!(
    KeyCode,
    ConsumerKeyCode,
    AppleVendorKeyboardKeyCode,
    AppleVendorTopCaseKeyCode,
    PointingButton
);

/// Usage-pair classification, tried in order. First match wins; this order
/// is the canonical tie-break across code spaces and must not change.
const CLASSIFIERS: [fn(UsagePair) -> Option<SwitchEvent>; 5] = [
    |pair| KeyCode::from_usage_pair(pair).map(SwitchEvent::KeyCode),
    |pair| ConsumerKeyCode::from_usage_pair(pair).map(SwitchEvent::ConsumerKeyCode),
    |pair| {
        AppleVendorKeyboardKeyCode::from_usage_pair(pair)
            .map(SwitchEvent::AppleVendorKeyboardKeyCode)
    },
    |pair| {
        AppleVendorTopCaseKeyCode::from_usage_pair(pair).map(SwitchEvent::AppleVendorTopCaseKeyCode)
    },
    |pair| PointingButton::from_usage_pair(pair).map(SwitchEvent::PointingButton),
];

impl SwitchEvent {
    /// Classify a hardware usage pair.
    ///
    /// Returns `Empty` when no code space claims the pair.
    pub fn from_usage_pair(pair: UsagePair) -> Self {
        CLASSIFIERS
            .iter()
            .find_map(|classify| classify(pair))
            .unwrap_or(SwitchEvent::Empty)
    }

    /// Replace the active code with `value`.
    pub fn set<T: SwitchCode>(&mut self, value: T) {
        *self = value.into_event();
    }

    /// The payload iff this event holds `T`'s code space.
    pub fn find<T: SwitchCode>(&self) -> Option<T> {
        T::from_event(self)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SwitchEvent::Empty)
    }

    /// Inverse of [`from_usage_pair`](Self::from_usage_pair); `None` for `Empty`.
    pub fn usage_pair(&self) -> Option<UsagePair> {
        match *self {
            SwitchEvent::KeyCode(value) => Some(value.usage_pair()),
            SwitchEvent::ConsumerKeyCode(value) => Some(value.usage_pair()),
            SwitchEvent::AppleVendorKeyboardKeyCode(value) => Some(value.usage_pair()),
            SwitchEvent::AppleVendorTopCaseKeyCode(value) => Some(value.usage_pair()),
            SwitchEvent::PointingButton(value) => Some(value.usage_pair()),
            SwitchEvent::Empty => None,
        }
    }

    /// The logical modifier this switch drives, if any.
    ///
    /// Both vendor `fn` encodings collapse onto [`ModifierFlag::Fn`].
    pub fn modifier_flag(&self) -> Option<ModifierFlag> {
        let pair = self.usage_pair()?;

        if pair.usage_page == UsagePage::KEYBOARD_OR_KEYPAD {
            use usage::keyboard_or_keypad::*;
            match pair.usage {
                KEYBOARD_LEFT_CONTROL => Some(ModifierFlag::LeftControl),
                KEYBOARD_LEFT_SHIFT => Some(ModifierFlag::LeftShift),
                KEYBOARD_LEFT_ALT => Some(ModifierFlag::LeftOption),
                KEYBOARD_LEFT_GUI => Some(ModifierFlag::LeftCommand),
                KEYBOARD_RIGHT_CONTROL => Some(ModifierFlag::RightControl),
                KEYBOARD_RIGHT_SHIFT => Some(ModifierFlag::RightShift),
                KEYBOARD_RIGHT_ALT => Some(ModifierFlag::RightOption),
                KEYBOARD_RIGHT_GUI => Some(ModifierFlag::RightCommand),
                _ => None,
            }
        } else if pair.usage_page == UsagePage::APPLE_VENDOR_KEYBOARD {
            (pair.usage == usage::apple_vendor_keyboard::FUNCTION).then_some(ModifierFlag::Fn)
        } else if pair.usage_page == UsagePage::APPLE_VENDOR_TOP_CASE {
            (pair.usage == usage::apple_vendor_top_case::KEYBOARD_FN).then_some(ModifierFlag::Fn)
        } else {
            None
        }
    }

    pub fn is_modifier_flag(&self) -> bool {
        self.modifier_flag().is_some()
    }

    pub fn is_pointing_button(&self) -> bool {
        matches!(self, SwitchEvent::PointingButton(_))
    }

    /// Encode as an object with exactly one code-space key; `{}` for `Empty`.
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        match *self {
            SwitchEvent::KeyCode(value) => {
                object.insert("key_code".into(), value.to_json());
            }
            SwitchEvent::ConsumerKeyCode(value) => {
                object.insert("consumer_key_code".into(), value.to_json());
            }
            SwitchEvent::AppleVendorKeyboardKeyCode(value) => {
                object.insert("apple_vendor_keyboard_key_code".into(), value.to_json());
            }
            SwitchEvent::AppleVendorTopCaseKeyCode(value) => {
                object.insert("apple_vendor_top_case_key_code".into(), value.to_json());
            }
            SwitchEvent::PointingButton(value) => {
                object.insert("pointing_button".into(), value.to_json());
            }
            SwitchEvent::Empty => {}
        }
        Value::Object(object)
    }

    /// Decode the wire format.
    ///
    /// The input must be an object; each recognized key sets the matching
    /// code space from a symbolic name or raw integer. `{}` decodes to
    /// `Empty`.
    ///
    /// # Errors
    ///
    /// [`UnmarshalError`] naming the offending key or value.
    pub fn from_json(json: &Value) -> Result<Self, UnmarshalError> {
        let object = json
            .as_object()
            .ok_or_else(|| UnmarshalError::MalformedInput(json.to_string()))?;

        let mut event = SwitchEvent::Empty;
        for (key, value) in object {
            match key.as_str() {
                "key_code" => event.set(resolve(KeyCode::from_json(value), key, value)?),
                "consumer_key_code" => {
                    event.set(resolve(ConsumerKeyCode::from_json(value), key, value)?)
                }
                "apple_vendor_keyboard_key_code" => event.set(resolve(
                    AppleVendorKeyboardKeyCode::from_json(value),
                    key,
                    value,
                )?),
                "apple_vendor_top_case_key_code" => event.set(resolve(
                    AppleVendorTopCaseKeyCode::from_json(value),
                    key,
                    value,
                )?),
                "pointing_button" => {
                    event.set(resolve(PointingButton::from_json(value), key, value)?)
                }
                _ => return Err(UnmarshalError::UnknownKey(key.clone())),
            }
        }
        Ok(event)
    }
}

fn resolve<T>(code: Option<T>, key: &str, value: &Value) -> Result<T, UnmarshalError> {
    code.ok_or_else(|| UnmarshalError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

impl Serialize for SwitchEvent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SwitchEvent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = Value::deserialize(deserializer)?;
        SwitchEvent::from_json(&json).map_err(serde::de::Error::custom)
    }
}
