//! Component and translation records plus the wire shapes they are built
//! from.

use serde::Deserialize;

/// A project/module unit owning zero or more per-locale translations.
///
/// Immutable; the slug is the primary cache key and `translations_url` is the
/// endpoint for listing and creating translations under the component.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Component {
    /// Stable identifier combining project and component name.
    pub slug: String,
    /// Endpoint for listing/creating translations under this component.
    pub translations_url: String,
}

/// One locale's translation resource within a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Source language code, `"en"` when the server omits it.
    pub source_language: String,
    /// Target locale identifier, `"en"` when the server omits it.
    pub language_code: String,
    /// File name used for uploads, `"translation.xliff"` when omitted.
    pub filename: String,
    /// Endpoint for uploading/downloading this translation's file; empty
    /// string when unknown.
    pub file_url: String,
    /// `true` only when this record was produced by a create call in the
    /// current process; listing-derived records carry `false`.
    pub created: bool,
}

/// Raw translation entry as returned by listing and creation responses.
///
/// Every field is optional on the wire; unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TranslationPayload {
    #[serde(default)]
    pub source_language: Option<String>,
    #[serde(default)]
    pub language_code: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
}

/// Listing response envelope: `{"results": [...]}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ListingResponse {
    pub results: Vec<TranslationPayload>,
}

/// Creation response envelope: `{"data": {...}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct CreationResponse {
    pub data: TranslationPayload,
}

/// Component listing envelope: `{"results": [...]}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ComponentsResponse {
    pub results: Vec<Component>,
}

impl From<TranslationPayload> for Translation {
    fn from(payload: TranslationPayload) -> Self {
        Self {
            source_language: payload.source_language.unwrap_or_else(|| "en".to_string()),
            // Creation responses may omit language_code; the record then
            // claims "en" even for other locales. Kept as upstream behaves.
            language_code: payload.language_code.unwrap_or_else(|| "en".to_string()),
            filename: payload
                .filename
                .unwrap_or_else(|| "translation.xliff".to_string()),
            file_url: payload.file_url.unwrap_or_default(),
            created: false,
        }
    }
}
