use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// One search hit returned by the catalog. Only the fields the app reads are kept.
/// A field that is `null` or of the wrong type falls back to its default
/// instead of failing the whole response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CatalogRecord {
    #[serde(default, deserialize_with = "lenient")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient")]
    pub author_name: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub first_publish_year: Option<i32>,
    #[serde(default, deserialize_with = "lenient")]
    pub cover_i: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub key: Option<String>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Body of a title search. `docs` is required.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResponse {
    pub docs: Vec<CatalogRecord>,
}
