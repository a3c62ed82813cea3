//! Resolution, creation, upload, and download of translation resources.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::{debug, error};

use crate::cache::{CacheLookup, TranslationCache};
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::translation::record::{
    Component, ComponentsResponse, CreationResponse, ListingResponse, Translation,
};
use crate::translation::xliff;

/// Client over a Weblate-style translation API.
///
/// Holds its own translation cache; construct one per process (or per test)
/// and share it. The cache lock is held across each resolver operation
/// including its network call, so concurrent callers racing on the same
/// (component, locale) pair cannot issue duplicate create requests.
pub struct WeblateClient {
    http: Arc<dyn HttpClient>,
    cache: Mutex<TranslationCache>,
}

impl WeblateClient {
    /// Creates a client with an empty cache on top of the given transport.
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self {
            http,
            cache: Mutex::new(TranslationCache::new()),
        }
    }

    /// Returns whether a translation exists for the locale, fetching the
    /// component's translation listing at most once per process.
    ///
    /// The first call for a component issues one GET against its translations
    /// endpoint and populates the cache; later calls for any locale of the
    /// same component are answered without network traffic.
    pub async fn has_translation(&self, component: &Component, locale: &str) -> Result<bool> {
        let mut cache = self.cache.lock().await;
        self.ensure_listed(&mut cache, component).await?;
        Ok(matches!(
            cache.lookup(&component.slug, locale),
            CacheLookup::Present(_)
        ))
    }

    /// Returns the translation for the locale, creating it upstream when it
    /// does not exist yet.
    ///
    /// Resolution never fails merely because the locale is absent; it only
    /// fails when the listing or creation request itself fails.
    pub async fn get_translation(
        &self,
        component: &Component,
        locale: &str,
    ) -> Result<Translation> {
        let mut cache = self.cache.lock().await;
        self.ensure_listed(&mut cache, component).await?;
        if let CacheLookup::Present(translation) = cache.lookup(&component.slug, locale) {
            return Ok(translation);
        }
        self.create(&mut cache, component, locale).await
    }

    /// Creates the translation upstream and caches the resulting record.
    ///
    /// The server is expected to answer 201; the record is stored under the
    /// requested locale with its `created` flag set, overwriting any prior
    /// absent marker.
    pub async fn add_translation(
        &self,
        component: &Component,
        locale: &str,
    ) -> Result<Translation> {
        let mut cache = self.cache.lock().await;
        self.create(&mut cache, component, locale).await
    }

    /// Uploads file content to the translation's file endpoint, replacing the
    /// upstream content.
    ///
    /// Every `trans-unit` element in the content is rewritten to declare
    /// `xml:space="preserve"` before upload.
    pub async fn upload_translation(&self, translation: &Translation, content: &str) -> Result<()> {
        let url = &translation.file_url;
        let body = content.replace("<trans-unit", "<trans-unit xml:space=\"preserve\"");

        let response = self
            .http
            .post_file(url, &[("method", "replace")], &translation.filename, &body)
            .await?;

        if response.status != 200 {
            error!(
                url,
                status = response.status,
                response = %response.body,
                content,
                "translation upload failed"
            );
            return Err(Error::UnexpectedStatus {
                url: url.clone(),
                status: response.status,
                body: response.body,
            });
        }

        debug!(url, locale = %translation.language_code, "translation uploaded");
        Ok(())
    }

    /// Downloads the translation's file content.
    ///
    /// With `format = "json"` the endpoint is queried as-is and the JSON body
    /// is converted to XLIFF 1.2; any other format is passed as a `format`
    /// query parameter and the body returned unchanged. A body starting with
    /// an XML declaration is always returned unchanged, whatever format was
    /// requested.
    pub async fn download_translation(
        &self,
        translation: &Translation,
        format: &str,
    ) -> Result<String> {
        let url = if format == "json" {
            translation.file_url.clone()
        } else {
            format!("{}?format={format}", translation.file_url)
        };

        let response = self.http.get(&url).await?;
        if response.status != 200 {
            error!(
                url,
                status = response.status,
                response = %response.body,
                "translation download failed"
            );
            return Err(Error::UnexpectedStatus {
                url,
                status: response.status,
                body: response.body,
            });
        }

        // The server may answer with native XLIFF even for other formats.
        if format == "xliff" || response.body.starts_with("<?xml") {
            return Ok(response.body);
        }
        if format != "json" {
            return Ok(response.body);
        }

        let values: serde_json::Map<String, serde_json::Value> = decode(&url, &response.body)?;
        debug!(url, entries = values.len(), "converting downloaded JSON to XLIFF");
        Ok(xliff::document(&values, translation))
    }

    /// Lists the components available under a components endpoint.
    pub async fn list_components(&self, components_url: &str) -> Result<Vec<Component>> {
        let response = self.http.get(components_url).await?;
        if response.status != 200 {
            return Err(Error::UnexpectedStatus {
                url: components_url.to_string(),
                status: response.status,
                body: response.body,
            });
        }
        let components: ComponentsResponse = decode(components_url, &response.body)?;
        Ok(components.results)
    }

    /// Fetches and caches the component's translation listing unless the
    /// slug was already queried. Marks the slug queried even when the
    /// listing is empty.
    async fn ensure_listed(
        &self,
        cache: &mut TranslationCache,
        component: &Component,
    ) -> Result<()> {
        if cache.queried(&component.slug) {
            return Ok(());
        }

        let url = &component.translations_url;
        let response = self.http.get(url).await?;
        if response.status != 200 {
            error!(
                url,
                status = response.status,
                response = %response.body,
                "translation listing failed"
            );
            return Err(Error::UnexpectedStatus {
                url: url.clone(),
                status: response.status,
                body: response.body,
            });
        }

        let listing: ListingResponse = decode(url, &response.body)?;
        cache.mark_queried(&component.slug);
        for payload in listing.results {
            let translation = Translation::from(payload);
            debug!(
                slug = %component.slug,
                locale = %translation.language_code,
                "caching translation from listing"
            );
            let locale = translation.language_code.clone();
            cache.insert(&component.slug, &locale, translation);
        }
        Ok(())
    }

    /// Issues the creation request and stores the resulting record under the
    /// requested locale.
    async fn create(
        &self,
        cache: &mut TranslationCache,
        component: &Component,
        locale: &str,
    ) -> Result<Translation> {
        let url = &component.translations_url;
        let response = self
            .http
            .post_form(url, &[("language_code", locale)])
            .await?;

        if response.status != 201 {
            error!(
                url,
                status = response.status,
                response = %response.body,
                locale,
                "translation creation failed"
            );
            return Err(Error::UnexpectedStatus {
                url: url.clone(),
                status: response.status,
                body: response.body,
            });
        }

        let created: CreationResponse = decode(url, &response.body)?;
        let mut translation = Translation::from(created.data);
        translation.created = true;

        debug!(slug = %component.slug, locale, "caching created translation");
        cache.insert(&component.slug, locale, translation.clone());
        Ok(translation)
    }
}

/// Decodes a JSON body, logging the parse failure together with the raw
/// content before surfacing it.
fn decode<T: DeserializeOwned>(url: &str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|source| {
        error!(url, error = %source, content = body, "failed to decode response as JSON");
        Error::Decode {
            url: url.to_string(),
            source,
        }
    })
}
