//! Outbound link activation
//!
//! Fire-and-forget: open a law's reference page in a new, unprivileged
//! browsing context. Failures are logged, never returned.

/// Open `url` in a new tab with `noopener,noreferrer` (WASM only)
#[cfg(target_arch = "wasm32")]
pub fn open_external(url: &str) {
    let Some(window) = web_sys::window() else {
        log::error!("No window; cannot open {}", url);
        return;
    };
    if let Err(e) = window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer") {
        log::error!("Failed to open {}: {:?}", url, e);
    }
}

/// Native stub: print the URL for the user to follow
#[cfg(not(target_arch = "wasm32"))]
pub fn open_external(url: &str) {
    log::info!("Opening {}", url);
    println!("{url}");
}
