//! Thin wrappers over the few browser APIs the pages use directly.

/// Ask the user to confirm a destructive action. No window means no.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

pub fn set_document_title(title: &str) {
    match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document.set_title(title),
        None => log::warn!("no document; title {:?} not applied", title),
    }
}

/// Leave the app with a full page load of `url`, or reload the current page.
pub fn hard_visit(url: Option<&str>) {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        log::warn!("no window; cannot leave for {:?}", url);
        return;
    };
    let result = match url {
        Some(url) => location.set_href(url),
        None => location.reload(),
    };
    if let Err(err) = result {
        log::warn!("full page visit failed: {:?}", err);
    }
}
