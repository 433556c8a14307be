//! HTTP access to the backend.
//!
//! Every response is a page object; callers only ever see its `props`. A
//! mutation's response is the page the backend redirected to, so it carries
//! the fresh snapshot and that page's flash.

use std::sync::{Arc, Mutex};

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::ApiError;
use super::routes::{ApiRoute, Method};
use crate::config::AppConfig;
use crate::core::browser::hard_visit;
use crate::models::PageObject;

const CONFLICT: u16 = 409;

/// Clones share the last asset version the backend reported.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: String,
    csrf_token: Option<String>,
    version: Arc<Mutex<Option<String>>>,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base: config.api_base.clone(),
            csrf_token: config.csrf_token.clone(),
            version: Arc::new(Mutex::new(config.asset_version.clone())),
        }
    }

    /// Sent back as `X-Inertia-Version` so the backend can spot stale assets.
    pub fn asset_version(&self) -> Option<String> {
        self.version.lock().ok().and_then(|v| v.clone())
    }

    fn remember_version(&self, version: Option<&str>) {
        let Some(version) = version.filter(|v| !v.is_empty()) else {
            return;
        };
        match self.version.lock() {
            Ok(mut slot) => *slot = Some(version.to_string()),
            Err(_) => log::warn!("asset version lock poisoned; keeping the old version"),
        }
    }

    pub fn url(&self, route: ApiRoute, query: Option<&str>) -> String {
        match query {
            Some(q) if !q.is_empty() => format!("{}{}?{}", self.base, route.path(), q),
            _ => format!("{}{}", self.base, route.path()),
        }
    }

    /// Fetch the props of a GET page.
    pub async fn load<P: DeserializeOwned>(&self, route: ApiRoute, query: Option<&str>) -> Result<P, ApiError> {
        let url = self.url(route, query);
        log::debug!("{} {} ({})", Method::Get, url, route.name());
        let response = self.request(Method::Get, &url).send().await?;
        self.read_page(response).await
    }

    /// Send a mutation and return the props of the page the backend answers with.
    pub async fn submit<P, B>(&self, route: ApiRoute, body: Option<&B>) -> Result<P, ApiError>
    where
        P: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(route, None);
        log::info!("{} {} ({})", route.method(), url, route.name());
        let builder = self.request(route.method(), &url);
        let response = match body {
            Some(body) => builder.json(body)?.send().await?,
            None => builder.send().await?,
        };
        self.read_page(response).await
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        }
        .header("Accept", "application/json")
        .header("X-Requested-With", "XMLHttpRequest")
        .header("X-Inertia", "true");

        let builder = match self.asset_version() {
            Some(version) => builder.header("X-Inertia-Version", &version),
            None => builder,
        };
        match &self.csrf_token {
            Some(token) => builder.header("X-CSRF-TOKEN", token),
            None => builder,
        }
    }

    async fn read_page<P: DeserializeOwned>(&self, response: Response) -> Result<P, ApiError> {
        let status = response.status();
        if status == CONFLICT {
            // Asset version mismatch or external redirect: leave the SPA.
            let location = response.headers().get("X-Inertia-Location");
            log::info!("backend asked for a full visit to {:?}", location);
            hard_visit(location.as_deref());
            return Err(ApiError::Reload { location });
        }
        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::from_status(status, &body);
            log::warn!("{} {} -> {}", status, response.url(), err);
            return Err(err);
        }

        let page: PageObject<P> = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        log::debug!("received page {} at {}", page.component, page.url);
        self.remember_version(page.version.as_deref());
        Ok(page.props)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::Resource;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(&AppConfig {
            api_base: base.to_string(),
            ..AppConfig::default()
        })
    }

    #[test]
    fn url_joins_base_path_and_query() {
        let api = client("https://api.example.test");
        assert_eq!(
            api.url(ApiRoute::Index(Resource::Tasks), Some("search=&filter=all")),
            "https://api.example.test/tasks?search=&filter=all"
        );
    }

    #[test]
    fn url_without_query_or_base() {
        let api = client("");
        assert_eq!(api.url(ApiRoute::Update(Resource::Lists, 3), None), "/lists/3");
        assert_eq!(api.url(ApiRoute::Index(Resource::Lists), Some("")), "/lists");
    }

    #[test]
    fn version_is_seeded_from_config_and_shared_by_clones() {
        let api = ApiClient::new(&AppConfig {
            asset_version: Some("abc123".to_string()),
            ..AppConfig::default()
        });
        let copy = api.clone();
        assert_eq!(copy.asset_version().as_deref(), Some("abc123"));

        api.remember_version(Some("def456"));
        assert_eq!(copy.asset_version().as_deref(), Some("def456"));
    }

    #[test]
    fn missing_or_blank_version_keeps_the_last_one() {
        let api = client("");
        assert_eq!(api.asset_version(), None);
        api.remember_version(Some("v1"));
        api.remember_version(None);
        api.remember_version(Some(""));
        assert_eq!(api.asset_version().as_deref(), Some("v1"));
    }
}
