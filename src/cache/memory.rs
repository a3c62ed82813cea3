//! In-memory cache of resolved translations, keyed by component slug and
//! locale.
//!
//! The cache distinguishes three states per (slug, locale) pair: the slug was
//! never queried, the slug was queried but the locale is absent, or a record
//! is present. The distinction is what prevents re-listing a component whose
//! translations were already fetched, even when the wanted locale was not
//! among them.

use std::collections::HashMap;

use crate::translation::Translation;

/// Outcome of a cache lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheLookup {
    /// The component slug has never been queried.
    Unknown,
    /// The slug was queried, but no record exists for the locale.
    Absent,
    /// A record exists for the (slug, locale) pair.
    Present(Translation),
}

/// Two-level map: component slug → (locale → [`Translation`]).
///
/// No I/O and no locking here; the owning client serializes access.
#[derive(Debug, Default)]
pub struct TranslationCache {
    components: HashMap<String, HashMap<String, Translation>>,
}

impl TranslationCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if a listing was already fetched (or a record stored)
    /// for this slug, even when the listing was empty.
    pub fn queried(&self, slug: &str) -> bool {
        self.components.contains_key(slug)
    }

    /// Looks up the state of a (slug, locale) pair.
    pub fn lookup(&self, slug: &str, locale: &str) -> CacheLookup {
        match self.components.get(slug) {
            None => CacheLookup::Unknown,
            Some(locales) => match locales.get(locale) {
                None => CacheLookup::Absent,
                Some(translation) => CacheLookup::Present(translation.clone()),
            },
        }
    }

    /// Pins the slug as queried without storing any record. Idempotent;
    /// existing records are kept.
    pub fn mark_queried(&mut self, slug: &str) {
        self.components.entry(slug.to_string()).or_default();
    }

    /// Stores a record under (slug, locale), overwriting any prior entry and
    /// marking the slug as queried.
    pub fn insert(&mut self, slug: &str, locale: &str, translation: Translation) {
        self.components
            .entry(slug.to_string())
            .or_default()
            .insert(locale.to_string(), translation);
    }
}
