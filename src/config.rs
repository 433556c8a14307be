//! Runtime configuration read from `<meta>` tags in the host page.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use wasm_bindgen::JsCast;

const META_API_BASE: &str = "taskboard-api-base";
const META_CSRF_TOKEN: &str = "csrf-token";
const META_APP_NAME: &str = "application-name";
const META_LOG_LEVEL: &str = "taskboard-log-level";
const META_ASSET_VERSION: &str = "taskboard-asset-version";

const DEFAULT_APP_NAME: &str = "Taskboard";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Prefix for every backend request; empty means same origin.
    pub api_base: String,
    pub csrf_token: Option<String>,
    pub app_name: String,
    pub log_level: log::Level,
    /// Asset version the host page was built with, if the backend versions assets.
    pub asset_version: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            csrf_token: None,
            app_name: DEFAULT_APP_NAME.to_string(),
            log_level: log::Level::Info,
            asset_version: None,
        }
    }
}

impl AppConfig {
    pub fn from_document() -> Self {
        Self::from_lookup(meta_content)
    }

    /// Build from a name -> value lookup. Blank values fall back to defaults.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let value = |name: &str| get(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        Self {
            api_base: value(META_API_BASE)
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            csrf_token: value(META_CSRF_TOKEN),
            app_name: value(META_APP_NAME).unwrap_or(defaults.app_name),
            log_level: value(META_LOG_LEVEL)
                .and_then(|level| level.parse().ok())
                .unwrap_or(defaults.log_level),
            asset_version: value(META_ASSET_VERSION),
        }
    }

    pub fn document_title(&self, page: &str) -> String {
        format!("{} - {}", page, self.app_name)
    }
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()??;
    let meta = element.dyn_into::<web_sys::HtmlMetaElement>().ok()?;
    Some(meta.content())
}
