//! Android wiring for the activity.
//!
//! Everything here runs on the platform main thread, attached to the JVM
//! that owns the activity (reached through `ndk-context`). JNI failures in
//! the notification path are cleared and logged rather than propagated:
//! the lifecycle callbacks are best-effort and a device without a usable
//! notification service simply doesn't get a channel.

use jni::objects::{JObject, JString, JValue};
use jni::JNIEnv;
use log::error;

use crate::channel::{NotificationChannel, NotificationManager};
use crate::diagnostics::LOG_TAG;
use crate::error::{ActivityError, InternalActivityError, InternalResult, Result};
use crate::intent::{Intent, IntentFlags};
use crate::ActivityConfig;

/// The user-visible SDK version of the framework
///
/// Also referred to as [`Build.VERSION_CODES`](https://developer.android.com/reference/android/os/Build.VERSION_CODES)
pub fn sdk_version() -> Result<i32> {
    let mut prop = android_properties::getprop("ro.build.version.sdk");
    match prop.value() {
        Some(value) => value.parse().map_err(|_| {
            ActivityError::PropertyUnavailable(format!(
                "unparsable ro.build.version.sdk value {value:?}"
            ))
        }),
        None => Err(ActivityError::PropertyUnavailable(
            "ro.build.version.sdk".to_owned(),
        )),
    }
}

/// Builds an [`ActivityConfig`] for the running device, with diagnostics
/// following the shell's build profile.
pub fn platform_config() -> Result<ActivityConfig> {
    Ok(ActivityConfig::new(sdk_version()?).with_diagnostics(cfg!(debug_assertions)))
}

/// [`NotificationManager`] backed by the platform notification service.
///
/// The service is resolved from the activity context on every call rather
/// than cached: channel registration happens once at creation and the
/// context handle must not outlive the activity.
#[derive(Debug, Default)]
pub struct PlatformNotificationManager;

impl PlatformNotificationManager {
    pub fn new() -> Self {
        Self
    }

    fn register(&self, channel: &NotificationChannel) -> InternalResult<()> {
        let ctx = ndk_context::android_context();
        let vm = unsafe { jni::JavaVM::from_raw(ctx.vm() as *mut jni_sys::JavaVM) }?;
        let context = unsafe { JObject::from_raw(ctx.context() as jni::sys::jobject) };
        let mut env = vm.attach_current_thread_permanently()?;

        let result: std::result::Result<(), jni::errors::Error> =
            env.with_local_frame(16, |env| {
                let id = env.new_string(&channel.id)?;
                let name = env.new_string(&channel.name)?;
                let importance: i32 = channel.importance.into();
                let channel_class = env.find_class("android/app/NotificationChannel")?;
                let channel_obj = env.new_object(
                    channel_class,
                    "(Ljava/lang/String;Ljava/lang/CharSequence;I)V",
                    &[
                        JValue::Object(&id),
                        JValue::Object(&name),
                        JValue::Int(importance),
                    ],
                )?;

                let description = env.new_string(&channel.description)?;
                env.call_method(
                    &channel_obj,
                    "setDescription",
                    "(Ljava/lang/String;)V",
                    &[JValue::Object(&description)],
                )?;
                env.call_method(
                    &channel_obj,
                    "enableVibration",
                    "(Z)V",
                    &[JValue::Bool(channel.vibration.into())],
                )?;

                let service = env.new_string("notification")?;
                let manager = env
                    .call_method(
                        &context,
                        "getSystemService",
                        "(Ljava/lang/String;)Ljava/lang/Object;",
                        &[JValue::Object(&service)],
                    )?
                    .l()?;
                if manager.is_null() {
                    // Capability unreachable on this device; not an error.
                    return Ok(());
                }
                env.call_method(
                    &manager,
                    "createNotificationChannel",
                    "(Landroid/app/NotificationChannel;)V",
                    &[JValue::Object(&channel_obj)],
                )?;
                Ok(())
            });
        result.map_err(|err| clear_and_map_exception(&mut env, err))
    }
}

impl NotificationManager for PlatformNotificationManager {
    fn create_channel(&self, channel: &NotificationChannel) {
        if let Err(err) = self.register(channel) {
            error!(
                target: LOG_TAG,
                "failed to register notification channel {:?}: {err}", channel.id
            );
        }
    }
}

/// Reads the platform intent that activated the shell into the host-side
/// [`Intent`] record. Extra values are stringified at the boundary; absent
/// values stay absent.
pub fn intent_from_java(env: &mut JNIEnv, intent: &JObject) -> Result<Intent> {
    let result: std::result::Result<Intent, jni::errors::Error> =
        env.with_local_frame(32, |env| read_intent(env, intent));
    result
        .map_err(|err| clear_and_map_exception(env, err))
        .map_err(ActivityError::from)
}

fn read_intent(
    env: &mut JNIEnv,
    obj: &JObject,
) -> std::result::Result<Intent, jni::errors::Error> {
    let mut intent = Intent::new();

    if let Some(action) = get_string_property(env, obj, "getAction")? {
        intent = intent.with_action(action);
    }
    if let Some(data) = get_string_property(env, obj, "getDataString")? {
        intent = intent.with_data(data);
    }
    let flags = env.call_method(obj, "getFlags", "()I", &[])?.i()?;
    intent = intent.with_flags(IntentFlags::from_bits_truncate(flags as u32));

    let extras = env
        .call_method(obj, "getExtras", "()Landroid/os/Bundle;", &[])?
        .l()?;
    if extras.is_null() {
        return Ok(intent);
    }

    let keys = env
        .call_method(&extras, "keySet", "()Ljava/util/Set;", &[])?
        .l()?;
    let iter = env
        .call_method(&keys, "iterator", "()Ljava/util/Iterator;", &[])?
        .l()?;
    while env.call_method(&iter, "hasNext", "()Z", &[])?.z()? {
        let key_obj = env
            .call_method(&iter, "next", "()Ljava/lang/Object;", &[])?
            .l()?;
        let key_string = JString::from(key_obj);
        let key: String = env.get_string(&key_string)?.into();

        let value = env
            .call_method(
                &extras,
                "get",
                "(Ljava/lang/String;)Ljava/lang/Object;",
                &[JValue::Object(&key_string)],
            )?
            .l()?;
        if value.is_null() {
            intent = intent.with_absent_extra(key);
        } else {
            let value = env
                .call_method(&value, "toString", "()Ljava/lang/String;", &[])?
                .l()?;
            let value = JString::from(value);
            let value: String = env.get_string(&value)?.into();
            intent = intent.with_extra(key, value);
        }
    }
    Ok(intent)
}

fn get_string_property(
    env: &mut JNIEnv,
    obj: &JObject,
    method: &str,
) -> std::result::Result<Option<String>, jni::errors::Error> {
    let value = env
        .call_method(obj, method, "()Ljava/lang/String;", &[])?
        .l()?;
    if value.is_null() {
        return Ok(None);
    }
    let value = JString::from(value);
    Ok(Some(env.get_string(&value)?.into()))
}

// The JNI calls above aren't made from a Java native-method frame that
// would unwind and rethrow for us, so a thrown exception must be cleared
// before anything else crosses the boundary.
fn clear_and_map_exception(env: &mut JNIEnv, err: jni::errors::Error) -> InternalActivityError {
    if !matches!(err, jni::errors::Error::JavaException) {
        return err.into();
    }
    let message = env
        .with_local_frame(4, |env| -> std::result::Result<String, jni::errors::Error> {
            let throwable = env.exception_occurred()?;
            env.exception_clear()?;

            let message = env
                .call_method(&throwable, "getMessage", "()Ljava/lang/String;", &[])?
                .l()?;
            if message.is_null() {
                return Ok("<no message>".to_owned());
            }
            let message = JString::from(message);
            Ok(env.get_string(&message)?.into())
        })
        .unwrap_or_else(|err| format!("UNKNOWN (failed to query throwable: {err:?})"));
    InternalActivityError::JniException(message)
}
