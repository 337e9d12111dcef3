//! Glue for hosting a hybrid web-bridge activity in Rust.
//!
//! The actual application lives in a web bundle loaded by an embedded
//! bridge runtime; this crate provides the thin native shell around it:
//! it forwards the two activity lifecycle callbacks (creation and
//! re-activation) to the runtime, registers the notification channel the
//! shell's push notifications rely on, and can dump incoming activation
//! requests for debugging.
//!
//! Platform services are injected capabilities rather than ambient
//! singletons, so the whole component runs unmodified against test
//! doubles. The real Android wiring lives in the target-gated
//! [`android`] module.

use std::sync::Arc;

use log::{debug, trace};

mod channel;
pub use channel::{
    Importance, NotificationChannel, NotificationManager, CHANNELS_MIN_SDK_VERSION,
    DEFAULT_CHANNEL_ID,
};

mod diagnostics;
pub use diagnostics::{DiagnosticsSink, LogSink, LOG_TAG};

mod error;
pub use error::{ActivityError, Result};

pub mod intent;
pub use intent::Intent;

#[cfg(target_os = "android")]
pub mod android;

/// Callback interface implemented by the embedded web-bridge runtime.
///
/// The runtime owns the web view and everything loaded into it; the
/// activity delegates each lifecycle callback here before doing its own
/// work, per the framework contract.
pub trait BridgeHost {
    /// Called exactly once while the activity is being created.
    ///
    /// `saved_state` is the opaque state blob from a previous instance of
    /// the activity, if any. It is passed through uninspected. An error
    /// here is fatal to activity creation and propagates unmodified.
    fn on_create(&mut self, saved_state: Option<&[u8]>) -> Result<()>;

    /// Called when the already-running activity receives a new activation
    /// request, e.g. from a notification tap or an external link.
    fn on_new_intent(&mut self, intent: &Intent);
}

/// Static configuration for a [`BridgeActivity`].
#[derive(Debug, Clone)]
pub struct ActivityConfig {
    /// The user-visible SDK version of the running platform. Decides
    /// whether notification channel registration applies at all.
    pub sdk_version: i32,

    /// Gates activation-request logging. Debug builds of a shell turn
    /// this on; release builds leave it off. It is one flag on one
    /// component, not a separate code path.
    pub diagnostics: bool,
}

impl ActivityConfig {
    pub fn new(sdk_version: i32) -> Self {
        Self {
            sdk_version,
            diagnostics: false,
        }
    }

    pub fn with_diagnostics(mut self, diagnostics: bool) -> Self {
        self.diagnostics = diagnostics;
        self
    }
}

/// The host activity of the shell.
///
/// Wraps the bridge runtime and performs the one-time platform setup on
/// creation. All methods run synchronously on the platform main thread and
/// complete before returning control to the framework.
pub struct BridgeActivity<H: BridgeHost> {
    host: H,
    config: ActivityConfig,
    notifications: Option<Arc<dyn NotificationManager>>,
    sink: Arc<dyn DiagnosticsSink>,
}

impl<H: BridgeHost> BridgeActivity<H> {
    /// Wraps `host` with the given configuration, no notification
    /// capability and the default `log`-crate diagnostics sink.
    pub fn new(host: H, config: ActivityConfig) -> Self {
        Self {
            host,
            config,
            notifications: None,
            sink: Arc::new(LogSink),
        }
    }

    /// Injects the platform notification capability. Without one, channel
    /// registration is silently skipped; notifications are simply not
    /// reachable on such a device.
    pub fn with_notification_manager(mut self, manager: Arc<dyn NotificationManager>) -> Self {
        self.notifications = Some(manager);
        self
    }

    pub fn with_diagnostics_sink(mut self, sink: Arc<dyn DiagnosticsSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Creation callback.
    ///
    /// Delegates to the bridge runtime first (its failure is fatal and
    /// propagates), then registers the default notification channel, then
    /// logs the activation request that started the process if
    /// diagnostics are enabled. `intent` is absent for process starts
    /// that carry no activation request.
    pub fn on_create(&mut self, saved_state: Option<&[u8]>, intent: Option<&Intent>) -> Result<()> {
        trace!(target: LOG_TAG, "onCreate");
        self.host.on_create(saved_state)?;
        self.register_default_channel();
        if self.config.diagnostics {
            diagnostics::log_intent(self.sink.as_ref(), intent);
        }
        Ok(())
    }

    /// Re-activation callback, delivered instead of a fresh process start
    /// when the activity is already running.
    ///
    /// Delegates to the bridge runtime first, then logs the request if
    /// diagnostics are enabled.
    pub fn on_new_intent(&mut self, intent: &Intent) {
        trace!(target: LOG_TAG, "onNewIntent");
        self.host.on_new_intent(intent);
        if self.config.diagnostics {
            diagnostics::log_intent(self.sink.as_ref(), Some(intent));
        }
    }

    // Channel registration must precede the first notification that
    // references the channel id; creation-time is the only ordering the
    // shell needs. Registration is an upsert on the platform side, so
    // re-creation of the activity is harmless.
    fn register_default_channel(&self) {
        if self.config.sdk_version < CHANNELS_MIN_SDK_VERSION {
            trace!(
                target: LOG_TAG,
                "platform predates notification channels (sdk {}), skipping registration",
                self.config.sdk_version
            );
            return;
        }
        let Some(manager) = &self.notifications else {
            debug!(target: LOG_TAG, "notification manager unavailable, skipping channel registration");
            return;
        };
        manager.create_channel(&NotificationChannel::default_channel());
        debug!(target: LOG_TAG, "notification channel {:?} registered", DEFAULT_CHANNEL_ID);
    }
}
