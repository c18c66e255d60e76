//! # ng-policy
//!
//! Notification policy evaluator for Notify Gate.
//!
//! This crate decides, for a single message event, whether a notification
//! should be delivered to the user. The decision is an ordered chain of
//! rules (mute, Do Not Disturb, broadcast mentions, channel preference,
//! global preference, mobile throttling) where the first rule to produce a
//! verdict wins.

pub mod engine;
pub mod rules;

pub use engine::{evaluate, evaluate_explained, RuleVerdict};
pub use rules::PolicyRule;
