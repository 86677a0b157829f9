use contracts::shared::autocomplete::{AutocompleteOption, SearchQuery, SearchResponse};
use gloo_net::http::Request;
use web_sys::AbortSignal;

/// `source_url` with the search query appended.
pub fn search_url(source_url: &str, query: &str) -> Result<String, String> {
    let qs = serde_qs::to_string(&SearchQuery::new(query)).map_err(|e| e.to_string())?;
    let separator = if source_url.contains('?') { '&' } else { '?' };
    Ok(format!("{}{}{}", source_url, separator, qs))
}

/// Candidates for `query`. Aborting `signal` cancels the request.
pub async fn search(
    source_url: &str,
    query: &str,
    signal: Option<&AbortSignal>,
) -> Result<Vec<AutocompleteOption>, String> {
    let url = search_url(source_url, query)?;

    let response = Request::get(&url)
        .abort_signal(signal)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: SearchResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data.into_options())
}
