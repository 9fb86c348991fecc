//! Pre-flight checks run before any request is dispatched.

use crate::ItunesSearchError;

/// Returns the search term, or an error if it is absent or empty.
pub(crate) fn require_search_term(term: Option<&str>) -> Result<&str, ItunesSearchError> {
    match term {
        Some(term) if !term.is_empty() => Ok(term),
        _ => Err(ItunesSearchError::MissingRequiredParameter("term")),
    }
}

/// The remote service only knows protocol versions 1 and 2.
pub(crate) fn check_api_version(version: u32) -> Result<(), ItunesSearchError> {
    if (1..=2).contains(&version) {
        Ok(())
    } else {
        Err(ItunesSearchError::InvalidParameter {
            parameter: "version",
            reason: format!("API version must be 1 or 2, got {}", version),
        })
    }
}

/// Limits must be positive. The upper bound is left to the remote service.
pub(crate) fn check_limit(limit: u32) -> Result<(), ItunesSearchError> {
    if limit == 0 {
        return Err(ItunesSearchError::InvalidParameter {
            parameter: "limit",
            reason: "limit must be at least 1".to_string(),
        });
    }
    Ok(())
}

/// Normalizes an ISO 3166-1 alpha-2 country code to upper case.
///
/// Only the shape is checked (two ASCII letters); whether the storefront
/// exists is left to the remote service.
pub(crate) fn normalize_country_code(code: &str) -> Result<String, ItunesSearchError> {
    let code = code.trim();
    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ItunesSearchError::InvalidParameter {
            parameter: "country",
            reason: format!("'{}' is not an ISO 3166-1 alpha-2 country code", code),
        });
    }
    Ok(code.to_ascii_uppercase())
}
