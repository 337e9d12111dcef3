use std::collections::HashMap;

use bitflags::bitflags;

mod action;
pub use action::Action;

mod extra;
pub use extra::Extra;

bitflags! {
    /// Launch flags carried by an activation request
    ///
    /// See [the Intent docs](https://developer.android.com/reference/android/content/Intent#FLAG_ACTIVITY_NEW_TASK)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct IntentFlags: u32 {
        const NEW_TASK = 0x10000000;
        const CLEAR_TOP = 0x04000000;
        const SINGLE_TOP = 0x20000000;
        const BROUGHT_TO_FRONT = 0x00400000;
    }
}

/// An activation request delivered to the activity: why and how the process
/// was started or resumed.
///
/// This is a read-only record. The activity inspects it once per activation
/// and never stores or mutates it. A notification tap, an external link and
/// a plain launcher start all arrive through the same shape; the action,
/// the data reference and every extra value are individually optional.
///
/// Extras iteration yields keys in an unspecified order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Intent {
    action: Option<String>,
    data: Option<String>,
    flags: IntentFlags,
    extras: HashMap<String, Option<Extra>>,
}

impl Intent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the action identifier, either an [`Action`] or a raw string.
    pub fn with_action(mut self, action: impl AsRef<str>) -> Self {
        self.action = Some(action.as_ref().to_owned());
        self
    }

    /// Sets the data reference (typically a URI in string form).
    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn with_flags(mut self, flags: IntentFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Adds an extra. A later value for the same key replaces the earlier one.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Extra>) -> Self {
        self.extras.insert(key.into(), Some(value.into()));
        self
    }

    /// Adds an extra whose value is absent. Platform bundles can carry null
    /// entries and the diagnostics output reports them as the literal `null`.
    pub fn with_absent_extra(mut self, key: impl Into<String>) -> Self {
        self.extras.insert(key.into(), None);
        self
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }

    pub fn flags(&self) -> IntentFlags {
        self.flags
    }

    /// Looks up an extra value. Returns `None` both for a missing key and
    /// for a key with an absent value.
    pub fn extra(&self, key: &str) -> Option<&Extra> {
        self.extras.get(key).and_then(|value| value.as_ref())
    }

    pub fn has_extras(&self) -> bool {
        !self.extras.is_empty()
    }

    pub fn extras(&self) -> impl Iterator<Item = (&str, Option<&Extra>)> {
        self.extras
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_round_trip() {
        let intent = Intent::new()
            .with_action(Action::View)
            .with_data("https://example.com/recipe/42")
            .with_flags(IntentFlags::NEW_TASK | IntentFlags::CLEAR_TOP)
            .with_extra("from", "push")
            .with_extra("badge", 3);

        assert_eq!(intent.action(), Some("android.intent.action.VIEW"));
        assert_eq!(intent.data(), Some("https://example.com/recipe/42"));
        assert!(intent.flags().contains(IntentFlags::NEW_TASK));
        assert_eq!(intent.extra("from"), Some(&Extra::String("push".into())));
        assert_eq!(intent.extra("badge"), Some(&Extra::Int(3)));
        assert_eq!(intent.extra("missing"), None);
    }

    #[test]
    fn absent_extra_is_kept_but_reads_as_none() {
        let intent = Intent::new().with_absent_extra("payload");

        assert!(intent.has_extras());
        assert_eq!(intent.extra("payload"), None);
        let entries: Vec<_> = intent.extras().collect();
        assert_eq!(entries, vec![("payload", None)]);
    }

    #[test]
    fn empty_intent_has_nothing_set() {
        let intent = Intent::new();

        assert_eq!(intent.action(), None);
        assert_eq!(intent.data(), None);
        assert!(intent.flags().is_empty());
        assert!(!intent.has_extras());
    }

    #[test]
    fn extra_display_matches_platform_stringification() {
        assert_eq!(Extra::from("push").to_string(), "push");
        assert_eq!(Extra::from(true).to_string(), "true");
        assert_eq!(Extra::from(-7).to_string(), "-7");
        assert_eq!(Extra::from(1234567890123i64).to_string(), "1234567890123");
    }

    #[test]
    fn unknown_flag_bits_are_dropped_at_the_boundary() {
        let flags = IntentFlags::from_bits_truncate(0x10000000 | 0x1);
        assert_eq!(flags, IntentFlags::NEW_TASK);
    }
}
