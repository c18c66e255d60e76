//! Notification policy rules.
//!
//! Each rule inspects the event and either produces a delivery verdict or
//! declines, deferring to the next rule in the chain. Rule order is fixed:
//! muting outranks Do Not Disturb, which outranks broadcast mentions, which
//! outrank the scoped preferences, which outrank device throttling.

use ng_core::{ChannelNotificationPref, GlobalNotificationPref, NotificationEvent};
use serde::{Deserialize, Serialize};

/// Identifies a rule in the evaluation chain.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PolicyRule {
    /// The channel is muted; only subscribed thread replies get through.
    ChannelMuted,
    /// The user is in Do Not Disturb without an override.
    DoNotDisturb,
    /// The message tags the whole channel and the user has not opted out.
    BroadcastMention,
    /// The per-channel preference (`Nothing`/`Everything`/`Mentions`) decides.
    ChannelPreference,
    /// Channel preference is `Default`; the global preference decides.
    GlobalPreference,
    /// Mobile device past its push cap.
    MobileThrottle,
    /// No rule produced a verdict; suppress.
    DefaultSuppress,
}

impl PolicyRule {
    /// The verdict-producing rules, in evaluation order. [`Self::DefaultSuppress`]
    /// is not part of the chain; it is what the engine reports when the chain
    /// is exhausted.
    pub const CHAIN: [PolicyRule; 6] = [
        PolicyRule::ChannelMuted,
        PolicyRule::DoNotDisturb,
        PolicyRule::BroadcastMention,
        PolicyRule::ChannelPreference,
        PolicyRule::GlobalPreference,
        PolicyRule::MobileThrottle,
    ];

    /// Returns the database string representation.
    pub fn as_db_str(&self) -> &'static str {
        match self {
            PolicyRule::ChannelMuted => "channel_muted",
            PolicyRule::DoNotDisturb => "do_not_disturb",
            PolicyRule::BroadcastMention => "broadcast_mention",
            PolicyRule::ChannelPreference => "channel_preference",
            PolicyRule::GlobalPreference => "global_preference",
            PolicyRule::MobileThrottle => "mobile_throttle",
            PolicyRule::DefaultSuppress => "default_suppress",
        }
    }

    /// Applies this rule to the event. `Some(verdict)` decides delivery and
    /// stops the chain; `None` defers to the next rule.
    pub fn apply(&self, event: &NotificationEvent) -> Option<bool> {
        match self {
            // Muting is the highest-precedence suppressor. The single
            // carve-out is a thread reply the user subscribed to.
            PolicyRule::ChannelMuted => {
                if event.channel_muted {
                    Some(event.is_thread_message && event.user_subscribed)
                } else {
                    None
                }
            }

            PolicyRule::DoNotDisturb => {
                if event.user_in_dnd && !event.dnd_override {
                    Some(false)
                } else {
                    None
                }
            }

            // A suppressed broadcast mention does not force suppression; the
            // event keeps flowing through the scoped preferences.
            PolicyRule::BroadcastMention => {
                if event.is_broadcast_mention && !event.channel_mentions_suppressed {
                    Some(true)
                } else {
                    None
                }
            }

            PolicyRule::ChannelPreference => match event.channel_notification_pref {
                ChannelNotificationPref::Nothing => Some(false),
                ChannelNotificationPref::Everything => Some(thread_gate(event)),
                ChannelNotificationPref::Mentions => {
                    if event.is_dm {
                        Some(thread_gate(event))
                    } else if event.is_mention {
                        Some(!event.is_file_comment_owned_by_user)
                    } else {
                        // Neither a DM nor a mention: no verdict at this level.
                        None
                    }
                }
                ChannelNotificationPref::Default => None,
            },

            PolicyRule::GlobalPreference => {
                if event.channel_notification_pref != ChannelNotificationPref::Default {
                    return None;
                }
                match event.global_notification_pref {
                    GlobalNotificationPref::All => {
                        if !event.user_presence_active {
                            Some(thread_gate(event))
                        } else if event.highlight_word {
                            Some(thread_gate(event))
                        } else {
                            // Active user, no highlight: no verdict at this level.
                            None
                        }
                    }
                    GlobalNotificationPref::Mentions => Some(event.is_mention),
                    GlobalNotificationPref::Dms => Some(event.is_dm),
                    GlobalNotificationPref::HighlightWords => Some(event.highlight_word),
                    GlobalNotificationPref::Never => Some(false),
                }
            }

            PolicyRule::MobileThrottle => {
                if event.is_mobile && event.past_mobile_push_threshold {
                    Some(false)
                } else {
                    None
                }
            }

            PolicyRule::DefaultSuppress => Some(false),
        }
    }
}

impl std::fmt::Display for PolicyRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_db_str())
    }
}

/// Thread replies only notify subscribers; non-thread messages pass.
fn thread_gate(event: &NotificationEvent) -> bool {
    if event.is_thread_message {
        event.user_subscribed
    } else {
        true
    }
}
