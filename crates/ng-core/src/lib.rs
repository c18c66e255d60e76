//! # ng-core
//!
//! Core data model for Notify Gate.
//!
//! This crate defines the event snapshot consumed by the policy evaluator:
//! the flags describing a message, the channel it arrived on, and the
//! receiving user's state, plus the enumerated notification preferences.

pub mod event;
pub mod prefs;

pub use event::NotificationEvent;
pub use prefs::{ChannelNotificationPref, GlobalNotificationPref, PrefParseError};
