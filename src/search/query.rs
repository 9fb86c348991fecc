//! Request URL assembly.

use super::{MediaCategory, Search};
use crate::ItunesSearchError;
use crate::entities::ParameterValue;
use url::Url;
use url::form_urlencoded;

/// Query value of the explicit-content flag.
fn explicit_flag(allow_explicit: bool) -> &'static str {
    if allow_explicit { "Yes" } else { "No" }
}

/// Builds the generic search URL for an already validated search.
///
/// Parameters are always emitted in the same order so that identical
/// searches produce byte-identical URLs.
pub(crate) fn search_url<C>(
    base: &Url,
    search: &Search<C>,
    term: &str,
    country_code: &str,
) -> Result<Url, ItunesSearchError>
where
    C: MediaCategory,
{
    let limit = search.limit().to_string();
    let version = search.api_version().to_string();

    let params = [
        ("term", term),
        ("country", country_code),
        ("media", C::MEDIA.parameter_value()),
        ("entity", search.return_type().parameter_value()),
        ("attribute", search.attribute().parameter_value()),
        ("limit", limit.as_str()),
        ("lang", search.return_language().parameter_value()),
        ("version", version.as_str()),
        ("explicit", explicit_flag(search.explicit_allowed())),
    ];

    with_query(base, &params)
}

/// Replaces the query of `base` with the form-encoded `params`, in order.
pub(crate) fn with_query(base: &Url, params: &[(&str, &str)]) -> Result<Url, ItunesSearchError> {
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter())
        .finish();

    let mut endpoint = base.clone();
    endpoint.set_query(None);
    endpoint.set_fragment(None);

    let raw = format!("{}?{}", endpoint, query);
    Url::parse(&raw).map_err(|e| ItunesSearchError::UrlConstruction { url: raw, source: e })
}
