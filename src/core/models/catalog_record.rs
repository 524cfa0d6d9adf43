use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CatalogPerson {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
}

/// One artwork entry as returned by the catalog. Fields of the wrong type
/// decode as absent instead of failing the page.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CatalogRecord {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_people")]
    pub people: Option<Vec<CatalogPerson>>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub dated: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub medium: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub primaryimageurl: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogResponse {
    #[serde(default, deserialize_with = "lenient_records")]
    pub records: Option<Vec<CatalogRecord>>,
}

fn text_from_value(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_from_value(Value::deserialize(deserializer)?))
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_people<'de, D>(deserializer: D) -> Result<Option<Vec<CatalogPerson>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(entries) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };

    Ok(Some(
        entries
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect(),
    ))
}

fn lenient_records<'de, D>(deserializer: D) -> Result<Option<Vec<CatalogRecord>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(entries) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };

    let records: Vec<CatalogRecord> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("[CATALOG] Skipping unreadable record #{}: {}", index, e);
                None
            }
        })
        .collect();

    Ok(Some(records))
}

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogOutcome {
    Records(Vec<CatalogRecord>),
    Empty,
}

impl CatalogOutcome {
    pub fn classify(response: CatalogResponse) -> Self {
        match response.records {
            Some(records) if !records.is_empty() => CatalogOutcome::Records(records),
            _ => CatalogOutcome::Empty,
        }
    }
}
