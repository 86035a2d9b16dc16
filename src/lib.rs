//! Core types for the HIDRemap input-remapping engine
//!
//! Two correctness-critical building blocks live here; everything else in
//! the engine (hardware report capture, manipulator rule evaluation,
//! virtual device emission, UI state display) consumes them without
//! re-verifying their invariants:
//!
//! - [`SwitchEvent`]: a canonical, hashable, totally-ordered identity for a
//!   single momentary switch activation, with lossless conversion to and
//!   from HID `(usage page, usage)` pairs, a fixed-priority classification
//!   across the five code spaces, modifier-flag derivation, and the
//!   single-key-object JSON wire format.
//! - [`StateStore`]: crash-tolerant JSON key-value persistence with an
//!   atomic whole-file rewrite per mutation, used to carry runtime state
//!   across process restarts.

pub mod codes;
pub mod event;
pub mod hid;
pub mod modifier;
pub mod state;

pub use codes::{
    AppleVendorKeyboardKeyCode, AppleVendorTopCaseKeyCode, ConsumerKeyCode, KeyCode,
    PointingButton,
};
pub use event::{SwitchCode, SwitchEvent, UnmarshalError};
pub use hid::{Usage, UsagePage, UsagePair};
pub use modifier::ModifierFlag;
pub use state::StateStore;
