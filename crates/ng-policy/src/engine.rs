//! Notification policy evaluation engine.
//!
//! This module runs the rule chain against an event snapshot. Rules are
//! evaluated in fixed order; the first rule to produce a verdict wins and
//! later rules are never consulted. A rule may also decline, in which case
//! evaluation falls through to the next rule, and finally to suppression.

use crate::rules::PolicyRule;
use ng_core::NotificationEvent;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Outcome of evaluating an event: the verdict plus the rule that produced it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleVerdict {
    /// The rule that decided.
    pub rule: PolicyRule,
    /// `true` to deliver the notification, `false` to suppress it.
    pub deliver: bool,
}

/// Decides whether a notification should be delivered for this event.
///
/// Pure and total: every event maps to exactly one verdict, with no error
/// path and no side effects beyond trace output.
pub fn evaluate(event: &NotificationEvent) -> bool {
    evaluate_explained(event).deliver
}

/// Like [`evaluate`], but also reports which rule decided.
#[instrument(
    skip(event),
    fields(
        channel_pref = %event.channel_notification_pref,
        global_pref = %event.global_notification_pref,
    )
)]
pub fn evaluate_explained(event: &NotificationEvent) -> RuleVerdict {
    for rule in PolicyRule::CHAIN {
        match rule.apply(event) {
            Some(deliver) => {
                debug!(rule = %rule, deliver, "policy rule decided");
                return RuleVerdict { rule, deliver };
            }
            None => trace!(rule = %rule, "no verdict, falling through"),
        }
    }

    debug!("chain exhausted, suppressing");
    RuleVerdict {
        rule: PolicyRule::DefaultSuppress,
        deliver: false,
    }
}
