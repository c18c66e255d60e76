//! Notification event snapshot.
//!
//! This module defines the immutable input record consumed by the policy
//! evaluator. Callers populate every field from their own data sources
//! (channel settings, user preferences, presence, DND state) before
//! evaluation; no cross-field consistency is enforced here.

use crate::prefs::{ChannelNotificationPref, GlobalNotificationPref};
use serde::{Deserialize, Serialize};

/// A snapshot of everything the policy evaluator needs to know about one
/// incoming message: the message itself, the channel it arrived on, and the
/// receiving user's state at that moment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct NotificationEvent {
    /// The user has muted the channel this message arrived on.
    pub channel_muted: bool,
    /// The message is a reply inside a thread.
    pub is_thread_message: bool,
    /// The user is subscribed to the thread.
    pub user_subscribed: bool,
    /// The user currently has Do Not Disturb enabled.
    pub user_in_dnd: bool,
    /// This message is allowed to bypass Do Not Disturb.
    pub dnd_override: bool,
    /// The message tags the whole channel (@everyone, @here, @channel).
    pub is_broadcast_mention: bool,
    /// The user has opted out of broadcast mentions for this channel.
    pub channel_mentions_suppressed: bool,
    /// Per-channel notification scope setting.
    pub channel_notification_pref: ChannelNotificationPref,
    /// User-wide fallback notification scope.
    pub global_notification_pref: GlobalNotificationPref,
    /// The message is a direct message.
    pub is_dm: bool,
    /// The user is directly mentioned.
    pub is_mention: bool,
    /// The mention occurs in a comment on a file the user owns.
    pub is_file_comment_owned_by_user: bool,
    /// The user is currently active/online.
    pub user_presence_active: bool,
    /// The message contains a user-configured highlight word.
    pub highlight_word: bool,
    /// The target device is mobile.
    pub is_mobile: bool,
    /// The device has passed its push notification cap.
    #[serde(default)]
    pub past_mobile_push_threshold: bool,
}

impl NotificationEvent {
    /// Creates an event with every flag cleared, channel preference
    /// `Default` and global preference `All`.
    pub fn new() -> Self {
        Self {
            channel_muted: false,
            is_thread_message: false,
            user_subscribed: false,
            user_in_dnd: false,
            dnd_override: false,
            is_broadcast_mention: false,
            channel_mentions_suppressed: false,
            channel_notification_pref: ChannelNotificationPref::Default,
            global_notification_pref: GlobalNotificationPref::All,
            is_dm: false,
            is_mention: false,
            is_file_comment_owned_by_user: false,
            user_presence_active: false,
            highlight_word: false,
            is_mobile: false,
            past_mobile_push_threshold: false,
        }
    }

    /// Sets whether the channel is muted.
    pub fn with_channel_muted(mut self, muted: bool) -> Self {
        self.channel_muted = muted;
        self
    }

    /// Sets whether the message is a thread reply.
    pub fn with_thread_message(mut self, thread: bool) -> Self {
        self.is_thread_message = thread;
        self
    }

    /// Sets whether the user is subscribed to the thread.
    pub fn with_user_subscribed(mut self, subscribed: bool) -> Self {
        self.user_subscribed = subscribed;
        self
    }

    /// Sets whether the user is in Do Not Disturb.
    pub fn with_user_in_dnd(mut self, dnd: bool) -> Self {
        self.user_in_dnd = dnd;
        self
    }

    /// Sets whether this message may bypass Do Not Disturb.
    pub fn with_dnd_override(mut self, override_dnd: bool) -> Self {
        self.dnd_override = override_dnd;
        self
    }

    /// Sets whether the message is a broadcast mention.
    pub fn with_broadcast_mention(mut self, broadcast: bool) -> Self {
        self.is_broadcast_mention = broadcast;
        self
    }

    /// Sets whether broadcast mentions are suppressed for this channel.
    pub fn with_channel_mentions_suppressed(mut self, suppressed: bool) -> Self {
        self.channel_mentions_suppressed = suppressed;
        self
    }

    /// Sets the per-channel notification preference.
    pub fn with_channel_pref(mut self, pref: ChannelNotificationPref) -> Self {
        self.channel_notification_pref = pref;
        self
    }

    /// Sets the global notification preference.
    pub fn with_global_pref(mut self, pref: GlobalNotificationPref) -> Self {
        self.global_notification_pref = pref;
        self
    }

    /// Sets whether the message is a direct message.
    pub fn with_dm(mut self, dm: bool) -> Self {
        self.is_dm = dm;
        self
    }

    /// Sets whether the user is directly mentioned.
    pub fn with_mention(mut self, mention: bool) -> Self {
        self.is_mention = mention;
        self
    }

    /// Sets whether the mention is in a comment on a file the user owns.
    pub fn with_file_comment_owned_by_user(mut self, owned: bool) -> Self {
        self.is_file_comment_owned_by_user = owned;
        self
    }

    /// Sets whether the user is currently active.
    pub fn with_presence_active(mut self, active: bool) -> Self {
        self.user_presence_active = active;
        self
    }

    /// Sets whether the message contains a highlight word.
    pub fn with_highlight_word(mut self, highlight: bool) -> Self {
        self.highlight_word = highlight;
        self
    }

    /// Sets whether the target device is mobile.
    pub fn with_mobile(mut self, mobile: bool) -> Self {
        self.is_mobile = mobile;
        self
    }

    /// Sets whether the device has passed its push cap.
    pub fn with_past_mobile_push_threshold(mut self, past: bool) -> Self {
        self.past_mobile_push_threshold = past;
        self
    }
}

impl Default for NotificationEvent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_event_is_all_clear() {
        let event = NotificationEvent::new();

        assert!(!event.channel_muted);
        assert!(!event.user_in_dnd);
        assert!(!event.is_broadcast_mention);
        assert!(!event.past_mobile_push_threshold);
        assert_eq!(
            event.channel_notification_pref,
            ChannelNotificationPref::Default
        );
        assert_eq!(event.global_notification_pref, GlobalNotificationPref::All);
    }

    #[test]
    fn test_builder_sets_fields() {
        let event = NotificationEvent::new()
            .with_channel_muted(true)
            .with_thread_message(true)
            .with_user_subscribed(true)
            .with_channel_pref(ChannelNotificationPref::Everything)
            .with_global_pref(GlobalNotificationPref::Never);

        assert!(event.channel_muted);
        assert!(event.is_thread_message);
        assert!(event.user_subscribed);
        assert_eq!(
            event.channel_notification_pref,
            ChannelNotificationPref::Everything
        );
        assert_eq!(event.global_notification_pref, GlobalNotificationPref::Never);
    }

    #[test]
    fn test_push_threshold_defaults_to_false_in_snapshots() {
        // Snapshot without the device-cap field, as produced by callers
        // that do not track per-device push counts.
        let json = r#"{
            "channel_muted": false,
            "is_thread_message": false,
            "user_subscribed": false,
            "user_in_dnd": true,
            "dnd_override": false,
            "is_broadcast_mention": false,
            "channel_mentions_suppressed": false,
            "channel_notification_pref": "default",
            "global_notification_pref": "all",
            "is_dm": false,
            "is_mention": false,
            "is_file_comment_owned_by_user": false,
            "user_presence_active": false,
            "highlight_word": false,
            "is_mobile": true
        }"#;

        let event: NotificationEvent = serde_json::from_str(json).unwrap();
        assert!(!event.past_mobile_push_threshold);
        assert!(event.user_in_dnd);
        assert!(event.is_mobile);
    }

    #[test]
    fn test_snapshot_json_roundtrip() {
        let event = NotificationEvent::new()
            .with_dm(true)
            .with_global_pref(GlobalNotificationPref::Dms)
            .with_past_mobile_push_threshold(true);

        let json = serde_json::to_string(&event).unwrap();
        let parsed: NotificationEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }
}
