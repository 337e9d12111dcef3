use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActivityError {
    /// The embedded web-bridge runtime failed while handling a lifecycle
    /// callback. Creation failures are fatal to the activity and are
    /// propagated to the platform unmodified.
    #[error("Bridge runtime error: {0}")]
    BridgeInit(String),

    #[error("Java VM or JNI error, including Java exceptions")]
    JavaError(String),

    #[error("System property unavailable: {0}")]
    PropertyUnavailable(String),
}

pub type Result<T> = std::result::Result<T, ActivityError>;

// We don't want to expose jni-rs in the public API so the Android backend
// uses an internal error type and we strip the error details down to
// strings at the API boundary.
#[cfg(target_os = "android")]
#[derive(Error, Debug)]
pub(crate) enum InternalActivityError {
    #[error("A Java exception was thrown via a JNI method call")]
    JniException(String),
    #[error("A Java VM error")]
    JvmError(jni::errors::Error),
}

#[cfg(target_os = "android")]
pub(crate) type InternalResult<T> = std::result::Result<T, InternalActivityError>;

#[cfg(target_os = "android")]
impl From<jni::errors::Error> for InternalActivityError {
    fn from(value: jni::errors::Error) -> Self {
        InternalActivityError::JvmError(value)
    }
}

#[cfg(target_os = "android")]
impl From<InternalActivityError> for ActivityError {
    fn from(value: InternalActivityError) -> Self {
        match value {
            InternalActivityError::JniException(msg) => ActivityError::JavaError(msg),
            InternalActivityError::JvmError(err) => ActivityError::JavaError(err.to_string()),
        }
    }
}
