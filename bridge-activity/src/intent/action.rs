/// Well-known action identifiers an activity can be activated with
pub enum Action {
    Main,
    View,
    Send,
    Edit,
}

impl AsRef<str> for Action {
    fn as_ref(&self) -> &str {
        match self {
            Self::Main => "android.intent.action.MAIN",
            Self::View => "android.intent.action.VIEW",
            Self::Send => "android.intent.action.SEND",
            Self::Edit => "android.intent.action.EDIT",
        }
    }
}
