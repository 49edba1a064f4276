// Android media library bridge
//
// MediaStore queries run on the Kotlin side of the host activity. This module
// reaches the activity through JNI and exchanges pages and asset info as JSON.
// The activity is expected to expose:
//
//   hasMediaPermission(): Boolean
//   requestMediaPermission()
//   static getMediaPermissionResult(): String?   ("granted" / "denied", null while pending)
//   queryMediaAssets(optionsJson: String): String?
//   getMediaAssetInfo(assetId: String): String?
//   static getLastError(): String?
//   static clearLastError()

use crate::error::MediaLibraryError;
use crate::library::MediaLibrary;
use crate::models::{Asset, AssetInfo, AssetsOptions, PagedAssets, PermissionStatus};
use jni::objects::{JClass, JObject, JString, JValue};
use jni::JNIEnv;
use ndk_context::android_context;
use std::time::Duration;

const DEFAULT_MAIN_ACTIVITY_CLASS: &str = "dev/dioxus/main/MainActivity";

/// How long to wait for the user to answer the permission dialog
const PERMISSION_TIMEOUT: Duration = Duration::from_secs(60);
const PERMISSION_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Configuration of the Android bridge
#[derive(Debug, Clone)]
pub struct AndroidLibraryConfig {
    /// Fully qualified class name in slash format (e.g., "com/example/myapp/MainActivity")
    pub main_activity_class: String,
}

impl Default for AndroidLibraryConfig {
    fn default() -> Self {
        Self {
            main_activity_class: DEFAULT_MAIN_ACTIVITY_CLASS.to_string(),
        }
    }
}

/// Media library backed by Android's MediaStore
#[derive(Debug, Clone, Default)]
pub struct AndroidMediaLibrary {
    config: AndroidLibraryConfig,
}

impl AndroidMediaLibrary {
    pub fn new(config: AndroidLibraryConfig) -> Self {
        Self { config }
    }
}

fn bridge_error(context: &'static str) -> impl Fn(jni::errors::Error) -> MediaLibraryError {
    move |e| MediaLibraryError::Other(format!("{} failed: {}", context, e))
}

/// Attach to the VM and run `f` against the activity instance and class
fn with_activity<T>(
    config: &AndroidLibraryConfig,
    f: impl for<'a> FnOnce(&mut JNIEnv<'a>, &JObject<'a>, &JClass<'a>) -> Result<T, MediaLibraryError>,
) -> Result<T, MediaLibraryError> {
    let vm_ptr = android_context().vm() as *mut *const jni::sys::JNIInvokeInterface_;
    let vm = unsafe { jni::JavaVM::from_raw(vm_ptr) }.map_err(bridge_error("JavaVM"))?;
    let mut env = vm
        .attach_current_thread()
        .map_err(bridge_error("JNI attach"))?;

    let (activity, class) = get_activity_instance(&mut env, config)?;
    f(&mut env, &activity, &class)
}

fn get_app_class_loader<'a>(env: &mut JNIEnv<'a>) -> Result<JObject<'a>, MediaLibraryError> {
    let at_cls = env
        .find_class("android/app/ActivityThread")
        .map_err(bridge_error("ActivityThread lookup"))?;
    let at = env
        .call_static_method(
            &at_cls,
            "currentActivityThread",
            "()Landroid/app/ActivityThread;",
            &[],
        )
        .and_then(|v| v.l())
        .map_err(bridge_error("currentActivityThread"))?;

    let app = env
        .call_method(&at, "getApplication", "()Landroid/app/Application;", &[])
        .and_then(|v| v.l())
        .map_err(bridge_error("getApplication"))?;

    let owner = if app.is_null() {
        env.call_method(&at, "getSystemContext", "()Landroid/app/ContextImpl;", &[])
            .and_then(|v| v.l())
            .map_err(bridge_error("getSystemContext"))?
    } else {
        app
    };

    env.call_method(&owner, "getClassLoader", "()Ljava/lang/ClassLoader;", &[])
        .and_then(|v| v.l())
        .map_err(bridge_error("getClassLoader"))
}

fn load_class<'a>(
    env: &mut JNIEnv<'a>,
    loader: &JObject<'a>,
    fq_slash: &str,
) -> Result<JClass<'a>, MediaLibraryError> {
    // ClassLoader.loadClass wants dots
    let name: JString = env
        .new_string(fq_slash.replace('/', "."))
        .map_err(bridge_error("new_string"))?;
    let cls_obj = env
        .call_method(
            loader,
            "loadClass",
            "(Ljava/lang/String;)Ljava/lang/Class;",
            &[JValue::Object(&JObject::from(name))],
        )
        .and_then(|v| v.l())
        .map_err(bridge_error("ClassLoader.loadClass"))?;
    Ok(JClass::from(cls_obj))
}

fn get_activity_instance<'a>(
    env: &mut JNIEnv<'a>,
    config: &AndroidLibraryConfig,
) -> Result<(JObject<'a>, JClass<'a>), MediaLibraryError> {
    let loader = get_app_class_loader(env)?;
    let cls = load_class(env, &loader, &config.main_activity_class)?;
    let signature = format!("()L{};", config.main_activity_class);

    let instance = match env
        .call_static_method(&cls, "getInstance", &signature, &[])
        .and_then(|v| v.l())
    {
        Ok(instance) => instance,
        Err(_) => {
            if env.exception_check().unwrap_or(false) {
                let _ = env.exception_clear();
            }
            // Kotlin companion objects keep the static accessor one level down
            let comp_signature = format!("L{}$Companion;", config.main_activity_class);
            let companion = env
                .get_static_field(&cls, "Companion", &comp_signature)
                .and_then(|v| v.l())
                .map_err(bridge_error("MainActivity.Companion"))?;
            if companion.is_null() {
                return Err(MediaLibraryError::Other(
                    "MainActivity.Companion is null, activity not initialized?".to_string(),
                ));
            }
            env.call_method(&companion, "getInstance", &signature, &[])
                .and_then(|v| v.l())
                .map_err(bridge_error("Companion.getInstance"))?
        }
    };

    if instance.is_null() {
        return Err(MediaLibraryError::Other(
            "MainActivity instance is null, activity not initialized?".to_string(),
        ));
    }

    Ok((instance, cls))
}

fn optional_string<'a>(
    env: &mut JNIEnv<'a>,
    obj: JObject<'a>,
) -> Result<Option<String>, MediaLibraryError> {
    if obj.is_null() {
        return Ok(None);
    }
    let value: String = env
        .get_string(&JString::from(obj))
        .map_err(bridge_error("String conversion"))?
        .into();
    Ok(Some(value))
}

fn last_error<'a>(
    env: &mut JNIEnv<'a>,
    class: &JClass<'a>,
) -> Result<Option<String>, MediaLibraryError> {
    let obj = env
        .call_static_method(class, "getLastError", "()Ljava/lang/String;", &[])
        .and_then(|v| v.l())
        .map_err(bridge_error("getLastError"))?;
    optional_string(env, obj)
}

/// Call an instance method taking one string and returning a nullable string
fn call_json_method(
    config: &AndroidLibraryConfig,
    method: &'static str,
    argument: &str,
) -> Result<Option<String>, MediaLibraryError> {
    with_activity(config, |env, activity, class| {
        env.call_static_method(class, "clearLastError", "()V", &[])
            .map_err(bridge_error("clearLastError"))?;

        let arg = env.new_string(argument).map_err(bridge_error("new_string"))?;
        let obj = env
            .call_method(
                activity,
                method,
                "(Ljava/lang/String;)Ljava/lang/String;",
                &[JValue::Object(&JObject::from(arg))],
            )
            .and_then(|v| v.l())
            .map_err(bridge_error(method))?;

        if let Some(err) = last_error(env, class)? {
            return Err(MediaLibraryError::Other(err));
        }
        optional_string(env, obj)
    })
}

fn permission_result(
    config: &AndroidLibraryConfig,
) -> Result<Option<PermissionStatus>, MediaLibraryError> {
    with_activity(config, |env, _activity, class| {
        let obj = env
            .call_static_method(class, "getMediaPermissionResult", "()Ljava/lang/String;", &[])
            .and_then(|v| v.l())
            .map_err(bridge_error("getMediaPermissionResult"))?;
        Ok(optional_string(env, obj)?.map(|answer| match answer.as_str() {
            "granted" => PermissionStatus::Granted,
            "denied" => PermissionStatus::Denied,
            _ => PermissionStatus::Undetermined,
        }))
    })
}

impl MediaLibrary for AndroidMediaLibrary {
    async fn request_permissions(&self) -> Result<PermissionStatus, MediaLibraryError> {
        let already_granted = with_activity(&self.config, |env, activity, _class| {
            env.call_method(activity, "hasMediaPermission", "()Z", &[])
                .and_then(|v| v.z())
                .map_err(bridge_error("hasMediaPermission"))
        })?;
        if already_granted {
            return Ok(PermissionStatus::Granted);
        }

        with_activity(&self.config, |env, activity, _class| {
            env.call_method(activity, "requestMediaPermission", "()V", &[])
                .map_err(bridge_error("requestMediaPermission"))?;
            Ok(())
        })?;

        let attempts = PERMISSION_TIMEOUT.as_millis() / PERMISSION_POLL_INTERVAL.as_millis();
        for _ in 0..attempts {
            tokio::time::sleep(PERMISSION_POLL_INTERVAL).await;
            if let Some(status) = permission_result(&self.config)? {
                log::info!("Media permission answered: {:?}", status);
                return Ok(status);
            }
        }

        Err(MediaLibraryError::Timeout(
            "media permission dialog was not answered".to_string(),
        ))
    }

    async fn get_assets(&self, options: AssetsOptions) -> Result<PagedAssets, MediaLibraryError> {
        let request = serde_json::to_string(&options)?;
        log::debug!("queryMediaAssets {}", request);
        match call_json_method(&self.config, "queryMediaAssets", &request)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Err(MediaLibraryError::Other(
                "queryMediaAssets returned no page".to_string(),
            )),
        }
    }

    async fn get_asset_info(&self, asset: &Asset) -> Result<AssetInfo, MediaLibraryError> {
        match call_json_method(&self.config, "getMediaAssetInfo", &asset.id)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Err(MediaLibraryError::NotFound(format!("asset {}", asset.id))),
        }
    }
}
