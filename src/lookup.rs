//! Pre-canned podcast lookups that need no search term.
//!
//! Top charts come from the iTunes RSS feed, where country and limit are part
//! of the path. Genre listings use the search endpoint filtered by genre id.

use crate::client::ItunesClient;
use crate::search::{DEFAULT_COUNTRY_CODE, with_query};
use crate::transport::Transport;
use crate::validation::{check_limit, normalize_country_code};
use crate::{ItunesSearchError, SearchResult};
use url::Url;

/// Number of podcasts returned when no limit is given
pub const DEFAULT_LOOKUP_LIMIT: u32 = 100;

/// Well-known iTunes podcast genres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PodcastGenre {
    Arts,
    Comedy,
    Education,
    KidsAndFamily,
    TvAndFilm,
    Music,
    NewsAndPolitics,
    Technology,
    Business,
    SocietyAndCulture,
}

impl PodcastGenre {
    /// The iTunes genre id
    pub fn id(self) -> u32 {
        match self {
            PodcastGenre::Arts => 1301,
            PodcastGenre::Comedy => 1303,
            PodcastGenre::Education => 1304,
            PodcastGenre::KidsAndFamily => 1305,
            PodcastGenre::TvAndFilm => 1309,
            PodcastGenre::Music => 1310,
            PodcastGenre::NewsAndPolitics => 1311,
            PodcastGenre::Technology => 1318,
            PodcastGenre::Business => 1321,
            PodcastGenre::SocietyAndCulture => 1324,
        }
    }
}

impl From<PodcastGenre> for u32 {
    fn from(genre: PodcastGenre) -> Self {
        genre.id()
    }
}

/// What a [`LookupRequest`] lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    /// The top podcasts chart of a storefront
    TopPodcasts,
    /// Podcasts of the genre with this id
    PodcastGenre(u32),
}

/// A term-less lookup, parameterized by country, genre and limit only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    kind: LookupKind,
    country_code: String,
    limit: Option<u32>,
}

impl LookupRequest {
    /// Lists the top podcasts.
    pub fn top_podcasts() -> Self {
        Self::new(LookupKind::TopPodcasts)
    }

    /// Lists podcasts of a genre, given as [`PodcastGenre`] or a raw genre id.
    pub fn podcasts_in_genre(genre_id: impl Into<u32>) -> Self {
        Self::new(LookupKind::PodcastGenre(genre_id.into()))
    }

    fn new(kind: LookupKind) -> Self {
        Self {
            kind,
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            limit: None,
        }
    }

    /// Sets the storefront. Default is US.
    #[must_use]
    pub fn in_country(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = country_code.into();
        self
    }

    /// Sets the maximum number of podcasts. Default is 100.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// What this lookup lists.
    pub fn kind(&self) -> LookupKind {
        self.kind
    }

    /// The storefront as given, before normalization.
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// The requested limit, with the default substituted when none was set.
    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LOOKUP_LIMIT)
    }

    /// Assembles the request URL.
    ///
    /// Top charts are resolved against `rss_base_url`, genre listings against
    /// `search_url`.
    ///
    /// # Errors
    ///
    /// - [`ItunesSearchError::InvalidParameter`] for a zero limit or a malformed
    ///   country code
    /// - [`ItunesSearchError::UrlConstruction`] if the result is not a valid URL
    pub fn build_url(
        &self,
        search_url: &Url,
        rss_base_url: &Url,
    ) -> Result<Url, ItunesSearchError> {
        let limit = self.limit();
        check_limit(limit)?;
        let country_code = normalize_country_code(&self.country_code)?;

        match self.kind {
            LookupKind::TopPodcasts => {
                let path = format!(
                    "api/v1/{}/podcasts/top-podcasts/all/{}/explicit.json",
                    country_code, limit
                );
                rss_base_url
                    .join(&path)
                    .map_err(|e| ItunesSearchError::UrlConstruction {
                        url: format!("{}{}", rss_base_url, path),
                        source: e,
                    })
            }
            LookupKind::PodcastGenre(genre_id) => {
                let limit = limit.to_string();
                let genre_id = genre_id.to_string();
                with_query(
                    search_url,
                    &[
                        ("term", "podcast"),
                        ("country", country_code.as_str()),
                        ("media", "podcast"),
                        ("limit", limit.as_str()),
                        ("genreId", genre_id.as_str()),
                    ],
                )
            }
        }
    }

    /// Executes the lookup against Apple's production endpoints.
    ///
    /// # Errors
    ///
    /// Any error of [`LookupRequest::build_url`], or
    /// [`ItunesSearchError::NetworkCommunication`] if the request fails.
    pub fn execute(&self) -> Result<SearchResult, ItunesSearchError> {
        let client = ItunesClient::new()?;
        client.lookup(self)
    }

    /// Executes the lookup through the given client.
    ///
    /// # Errors
    ///
    /// See [`LookupRequest::execute`].
    pub fn execute_with<T: Transport>(
        &self,
        client: &ItunesClient<T>,
    ) -> Result<SearchResult, ItunesSearchError> {
        client.lookup(self)
    }
}
