use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The user-visible SDK version that introduced channel-based notifications
/// (Android O). Older platforms show notifications without channels and the
/// activity skips registration entirely on them.
pub const CHANNELS_MIN_SDK_VERSION: i32 = 26;

/// Id of the channel the activity registers at startup. Notifications
/// posted by the web runtime reference this id, so registration has to
/// happen before the first notification is shown.
pub const DEFAULT_CHANNEL_ID: &str = "default";

/// Interruption level of a notification channel
///
/// The discriminants are the platform's `IMPORTANCE_*` codes, see
/// [the NotificationManager docs](https://developer.android.com/reference/android/app/NotificationManager#IMPORTANCE_DEFAULT)
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum Importance {
    None = 0,
    Min = 1,
    Low = 2,
    Default = 3,
    High = 4,
    Max = 5,
}

/// Descriptor for a notification channel
///
/// Immutable once built; registering the same descriptor again has no
/// additional effect (the platform treats registration as an upsert keyed
/// by id).
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationChannel {
    pub id: String,
    pub name: String,
    pub importance: Importance,
    pub description: String,
    pub vibration: bool,
}

impl NotificationChannel {
    pub fn new(id: impl Into<String>, name: impl Into<String>, importance: Importance) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            importance,
            description: String::new(),
            vibration: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_vibration(mut self, vibration: bool) -> Self {
        self.vibration = vibration;
        self
    }

    /// The fixed channel the activity registers during creation:
    /// id [`DEFAULT_CHANNEL_ID`], high importance, vibration enabled.
    pub fn default_channel() -> Self {
        Self::new(DEFAULT_CHANNEL_ID, "Default notifications", Importance::High)
            .with_description("Push notifications")
            .with_vibration(true)
    }
}

/// Capability for registering notification channels with the platform.
///
/// Handed to the activity at construction so tests can substitute a double;
/// on device this is backed by the system notification service. The call is
/// side-effect-only, callers observe no result.
pub trait NotificationManager: Send + Sync {
    fn create_channel(&self, channel: &NotificationChannel);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_channel_matches_the_shell_contract() {
        let channel = NotificationChannel::default_channel();

        assert_eq!(channel.id, DEFAULT_CHANNEL_ID);
        assert_eq!(channel.importance, Importance::High);
        assert!(channel.vibration);
        assert!(!channel.description.is_empty());
    }

    #[test]
    fn importance_round_trips_through_platform_codes() {
        assert_eq!(i32::from(Importance::High), 4);
        assert_eq!(Importance::try_from(4).unwrap(), Importance::High);
        assert_eq!(Importance::try_from(0).unwrap(), Importance::None);
        assert!(Importance::try_from(9).is_err());
    }
}
