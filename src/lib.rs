//! itunes_search - a blocking client for Apple's iTunes Search API
//!
//! This library builds request URLs for the iTunes Search web service and the
//! iTunes RSS top charts, performs the HTTP GET and hands back the parsed JSON
//! document. One fluent builder per media category collects the optional
//! parameters; `execute()` validates them, assembles the URL and sends the
//! request.
//!
//! # Examples
//!
//! ```no_run
//! use itunes_search::{MusicAttribute, MusicReturnType, MusicSearch};
//!
//! let albums = MusicSearch::new()
//!     .with("jack johnson")
//!     .in_attribute(MusicAttribute::Artist)
//!     .and_return(MusicReturnType::Album)
//!     .with_limit(10)
//!     .execute()?;
//!
//! for album in albums["results"].as_array().into_iter().flatten() {
//!     println!("{}", album["collectionName"]);
//! }
//! # Ok::<(), itunes_search::ItunesSearchError>(())
//! ```

mod client;
mod entities;
mod lookup;
mod search;
mod transport;
mod validation;

pub use client::{
    DEFAULT_RSS_BASE_URL, DEFAULT_SEARCH_URL, DEFAULT_USER_AGENT, ItunesClient,
    ItunesClientBuilder,
};
pub use entities::{
    AllAttribute, AllReturnType, AudiobookAttribute, AudiobookReturnType, EBookAttribute,
    EBookReturnType, Media, MovieAttribute, MovieReturnType, MusicAttribute, MusicReturnType,
    MusicVideoAttribute, MusicVideoReturnType, ParameterValue, PodcastAttribute,
    PodcastReturnType, ReturnLanguage, ShortFilmAttribute, ShortFilmReturnType,
    SoftwareAttribute, SoftwareReturnType, TvShowAttribute, TvShowReturnType,
};
pub use lookup::{DEFAULT_LOOKUP_LIMIT, LookupKind, LookupRequest, PodcastGenre};
pub use search::category;
pub use search::{DEFAULT_API_VERSION, DEFAULT_COUNTRY_CODE, DEFAULT_LIMIT, Search};
pub use transport::{HttpTransport, Transport, TransportError};

use thiserror::Error;

/// The raw JSON document returned by the remote service.
///
/// The library does not model the result schema; search responses carry a
/// `resultCount` and a `results` array, RSS responses a `feed` object.
pub type SearchResult = serde_json::Value;

/// Movie search
pub type MovieSearch = Search<category::Movie>;
/// Podcast search
pub type PodcastSearch = Search<category::Podcast>;
/// Music search
pub type MusicSearch = Search<category::Music>;
/// Music video search
pub type MusicVideoSearch = Search<category::MusicVideo>;
/// Audiobook search
pub type AudiobookSearch = Search<category::Audiobook>;
/// Short film search
pub type ShortFilmSearch = Search<category::ShortFilm>;
/// TV show search
pub type TvShowSearch = Search<category::TvShow>;
/// Software search
pub type SoftwareSearch = Search<category::Software>;
/// E-book search
pub type EBookSearch = Search<category::EBook>;
/// Search across every media kind
pub type AllMediaSearch = Search<category::All>;

/// Top-level error type for itunes_search operations
#[derive(Debug, Error)]
pub enum ItunesSearchError {
    /// A required parameter (the search term) is absent or empty
    #[error("Search execution failed: missing {0} parameter")]
    MissingRequiredParameter(&'static str),

    /// A parameter is set to a value the service does not accept
    #[error("Search execution failed: invalid {parameter} parameter: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },

    /// The assembled request is not a well-formed URL
    #[error("Error during url construction of {url}: {source}")]
    UrlConstruction {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Communication with the remote service failed
    #[error("Network communication error: {0}")]
    NetworkCommunication(#[from] TransportError),
}

/// Fetches the top podcasts of the US storefront, 100 unless `limit` is given.
///
/// # Errors
///
/// See [`LookupRequest::execute`].
pub fn top_podcasts(limit: Option<u32>) -> Result<SearchResult, ItunesSearchError> {
    ItunesClient::new()?.top_podcasts(limit)
}

/// Fetches podcasts of a genre, 100 unless `limit` is given.
///
/// # Errors
///
/// See [`LookupRequest::execute`].
pub fn podcasts_in_genre(
    genre_id: impl Into<u32>,
    limit: Option<u32>,
) -> Result<SearchResult, ItunesSearchError> {
    ItunesClient::new()?.podcasts_in_genre(genre_id, limit)
}
