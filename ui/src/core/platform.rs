//! Browser glue: timezone discovery, confirmation dialogs, page reload,
//! and the short settle delay used after form rebuilds. Native builds get
//! inert fallbacks so the crate and its tests compile off-wasm.

/// The viewer's IANA timezone, as reported by the Intl API.
#[cfg(target_arch = "wasm32")]
pub fn browser_timezone() -> String {
    use wasm_bindgen::JsValue;

    let format = js_sys::Intl::DateTimeFormat::new(&js_sys::Array::new(), &js_sys::Object::new());
    js_sys::Reflect::get(&format.resolved_options(), &JsValue::from_str("timeZone"))
        .ok()
        .and_then(|value| value.as_string())
        .unwrap_or_else(|| "UTC".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn browser_timezone() -> String {
    "UTC".to_string()
}

/// Blocking yes/no prompt. Off-wasm there is nobody to ask; answer yes.
#[cfg(target_arch = "wasm32")]
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn confirm(_message: &str) -> bool {
    true
}

/// Full-page reload; the recovery path after share deletion.
#[cfg(target_arch = "wasm32")]
pub fn reload_page() {
    if let Some(window) = web_sys::window() {
        if window.location().reload().is_err() {
            tracing::warn!("page reload request was rejected");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn reload_page() {
    tracing::debug!("page reload skipped outside the browser");
}

/// Let a freshly rebuilt form mount before touching its state. Matches the
/// deferred step the restore path has always used.
#[cfg(target_arch = "wasm32")]
pub async fn settle() {
    gloo_timers::future::TimeoutFuture::new(100).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn settle() {}
