//! Async client for the remote creature reference-data service.
//!
//! [`DexClient`] fronts the service's key→JSON lookups with typed accessors
//! and a process-lifetime [`TtlCache`]. Identifiers are trimmed, lower-cased,
//! and percent-encoded before they are substituted into resource URLs; raw
//! JSON bodies are cached per URL and records are rebuilt from them on every
//! request.

mod cache;
mod error;
mod payload;

pub use cache::{DEFAULT_TTL, TtlCache};
pub use error::FetchError;

use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use rotom_dex::{Creature, EvolutionNode, Move, Species, TypeRecord};

/// Public reference-data service
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Typed accessor layer over the remote reference data.
pub struct DexClient {
    http: reqwest::Client,
    base: Url,
    cache: TtlCache<Value>,
}

impl DexClient {
    /// Client against the public service with the default cache TTL.
    pub fn new() -> Self {
        Self::with_base(DEFAULT_BASE_URL).expect("default base URL is well-formed")
    }

    /// Client against a non-default base URL (mirrors, local fixtures).
    pub fn with_base(base: &str) -> Result<Self, FetchError> {
        let base = Url::parse(base).map_err(|e| FetchError::upstream(base, e))?;
        if base.cannot_be_a_base() {
            return Err(FetchError::upstream(
                base.as_str(),
                "base URL cannot carry path segments",
            ));
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base,
            cache: TtlCache::new(DEFAULT_TTL),
        })
    }

    /// Fetch a creature record by name or numeric id.
    pub async fn creature(&self, name_or_id: &str) -> Result<Creature, FetchError> {
        let ident = canonical(name_or_id);
        let url = self.endpoint("pokemon", &ident);
        let payload: payload::CreaturePayload = self.fetch(url, &ident).await?;
        Ok(payload.into_record())
    }

    /// Fetch a species record (carries the evolution-chain reference).
    pub async fn species(&self, name: &str) -> Result<Species, FetchError> {
        let ident = canonical(name);
        let url = self.endpoint("pokemon-species", &ident);
        let payload: payload::SpeciesPayload = self.fetch(url, &ident).await?;
        Ok(payload.into_record())
    }

    /// Fetch an elemental type's damage relations.
    pub async fn type_record(&self, name: &str) -> Result<TypeRecord, FetchError> {
        let ident = canonical(name);
        let url = self.endpoint("type", &ident);
        let payload: payload::TypePayload = self.fetch(url, &ident).await?;
        payload
            .into_record()
            .ok_or_else(|| FetchError::upstream(&ident, "unknown elemental type tag"))
    }

    /// Fetch an evolution tree from its absolute resource URL, as embedded in
    /// a species record.
    pub async fn evolution_chain(&self, url: &str) -> Result<EvolutionNode, FetchError> {
        let target = Url::parse(url).map_err(|e| FetchError::upstream(url, e))?;
        let payload: payload::ChainPayload = self.fetch(target, url).await?;
        Ok(payload.into_record())
    }

    /// Fetch a move record by name.
    pub async fn move_record(&self, name: &str) -> Result<Move, FetchError> {
        let ident = canonical(name);
        let url = self.endpoint("move", &ident);
        let payload: payload::MovePayload = self.fetch(url, &ident).await?;
        Ok(payload.into_record())
    }

    async fn fetch<T: DeserializeOwned>(&self, url: Url, ident: &str) -> Result<T, FetchError> {
        let json = self.fetch_json(url, ident).await?;
        serde_json::from_value(json).map_err(|e| FetchError::upstream(ident, e))
    }

    /// Cached raw fetch. Only successful bodies are stored, so a failed
    /// request is retried by the next identical one.
    async fn fetch_json(&self, url: Url, ident: &str) -> Result<Value, FetchError> {
        self.cache
            .get_or_fetch(url.as_str(), || async {
                tracing::debug!(url = %url, "cache miss, fetching");
                let response = self
                    .http
                    .get(url.clone())
                    .send()
                    .await
                    .map_err(|e| FetchError::upstream(ident, e))?;

                let status = response.status();
                if status == StatusCode::NOT_FOUND {
                    return Err(FetchError::NotFound(ident.to_string()));
                }
                if !status.is_success() {
                    tracing::warn!(url = %url, status = %status, "upstream returned failure status");
                    return Err(FetchError::upstream(ident, format!("unexpected status {status}")));
                }

                response
                    .json()
                    .await
                    .map_err(|e| FetchError::upstream(ident, e))
            })
            .await
    }

    fn endpoint(&self, family: &str, ident: &str) -> Url {
        let mut url = self.base.clone();
        // `with_base` rejects cannot-be-a-base URLs, so the segment writer is
        // always available; `push` percent-encodes the identifier.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(family).push(ident);
        }
        url
    }
}

impl Default for DexClient {
    fn default() -> Self {
        Self::new()
    }
}

fn canonical(ident: &str) -> String {
    ident.trim().to_lowercase()
}
