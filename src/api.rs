//! REST Countries v3.1 client with a 7-day local cache.

use std::collections::HashMap;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use serde::Deserialize;

use crate::models::Country;
use crate::names;
use crate::storage::Storage;

// Raw API payload, limited to the fields we request.

#[derive(Debug, Deserialize)]
struct RawName {
    common: String,
    #[allow(dead_code)]
    #[serde(default)]
    official: String,
}

#[derive(Debug, Deserialize)]
struct RawCurrency {
    name: String,
    symbol: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawFlags {
    png: String,
    svg: String,
}

#[derive(Debug, Deserialize)]
struct RawCountry {
    name: RawName,
    cca3: String,
    #[serde(default)]
    capital: Vec<String>,
    #[serde(default)]
    currencies: HashMap<String, RawCurrency>,
    flags: RawFlags,
    region: String,
    subregion: Option<String>,
    population: u64,
}

/// Flatten one API row into the quiz-facing shape. The first capital and the
/// first currency win, matching the original client.
fn normalize(raw: RawCountry) -> Country {
    let currency_code = raw.currencies.keys().next().cloned();
    let currency = currency_code
        .as_ref()
        .and_then(|code| raw.currencies.get(code));

    Country {
        code: raw.cca3,
        name: raw.name.common,
        capital: raw.capital.into_iter().next(),
        currency: currency.map(|c| c.name.clone()),
        currency_symbol: currency.and_then(|c| c.symbol.clone()),
        currency_code,
        flag_url: raw.flags.svg,
        flag_png_url: raw.flags.png,
        region: raw.region,
        subregion: raw.subregion,
        population: raw.population,
    }
}

async fn fetch_from_api() -> Result<Vec<Country>> {
    let url = names::countries_url();
    tracing::info!("fetching country data from {}", names::API_BASE_URL);

    let resp = reqwest::get(&url).await?;
    if !resp.status().is_success() {
        return Err(eyre!("countries API returned {}", resp.status()));
    }

    let raw: Vec<RawCountry> = resp.json().await?;
    let countries: Vec<Country> = raw
        .into_iter()
        .map(normalize)
        .filter(|c| !c.name.is_empty() && !c.flag_url.is_empty())
        .collect();

    tracing::info!("loaded {} countries", countries.len());
    Ok(countries)
}

/// Country snapshot for quiz generation: fresh cache first, then the API,
/// then stale cache as an offline fallback.
pub async fn fetch_countries(storage: &Storage) -> Result<Vec<Country>> {
    if let Some(cached) = storage.cache_get::<Vec<Country>>(
        names::COUNTRIES_CACHE_FILE,
        names::COUNTRIES_CACHE_TTL_MS,
    ) {
        tracing::debug!("using cached country data ({} countries)", cached.len());
        return Ok(cached);
    }

    match fetch_from_api().await {
        Ok(countries) => {
            if let Err(e) = storage.cache_set(names::COUNTRIES_CACHE_FILE, &countries) {
                tracing::warn!("could not cache country data: {e}");
            }
            Ok(countries)
        }
        Err(e) => {
            if let Some(stale) =
                storage.cache_get_stale::<Vec<Country>>(names::COUNTRIES_CACHE_FILE)
            {
                tracing::warn!("countries API unavailable ({e}); using stale cache");
                Ok(stale)
            } else {
                Err(e)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "name": { "common": "Switzerland", "official": "Swiss Confederation" },
        "cca3": "CHE",
        "capital": ["Bern"],
        "currencies": { "CHF": { "name": "Swiss franc", "symbol": "Fr." } },
        "flags": { "png": "https://flagcdn.com/w320/ch.png", "svg": "https://flagcdn.com/ch.svg" },
        "region": "Europe",
        "subregion": "Western Europe",
        "population": 8654622
    }"#;

    #[test]
    fn normalization_takes_first_capital_and_currency() {
        let raw: RawCountry = serde_json::from_str(SAMPLE).unwrap();
        let country = normalize(raw);

        assert_eq!(country.code, "CHE");
        assert_eq!(country.name, "Switzerland");
        assert_eq!(country.capital.as_deref(), Some("Bern"));
        assert_eq!(country.currency.as_deref(), Some("Swiss franc"));
        assert_eq!(country.currency_code.as_deref(), Some("CHF"));
        assert_eq!(country.currency_symbol.as_deref(), Some("Fr."));
        assert_eq!(country.flag_url, "https://flagcdn.com/ch.svg");
    }

    #[test]
    fn missing_optional_fields_become_none() {
        let json = r#"{
            "name": { "common": "Antarctica" },
            "cca3": "ATA",
            "flags": { "png": "https://flagcdn.com/w320/aq.png", "svg": "https://flagcdn.com/aq.svg" },
            "region": "Antarctic",
            "subregion": null,
            "population": 1000
        }"#;
        let raw: RawCountry = serde_json::from_str(json).unwrap();
        let country = normalize(raw);

        assert!(country.capital.is_none());
        assert!(country.currency.is_none());
        assert!(country.subregion.is_none());
    }
}
