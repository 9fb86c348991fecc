//! Fluent search request builder for the iTunes Search API.
//!
//! A [`Search`] accumulates optional parameters through chained setters and is
//! turned into a single request by [`Search::execute`]. The media category is
//! a type parameter, so only the attributes and return types that category
//! supports can be set.

pub mod category;
mod query;

pub(crate) use query::with_query;

use crate::client::ItunesClient;
use crate::entities::{Media, ReturnLanguage};
use crate::transport::Transport;
use crate::validation::{
    check_api_version, check_limit, normalize_country_code, require_search_term,
};
use crate::{ItunesSearchError, SearchResult};
use category::MediaCategory;
use url::Url;

/// Storefront searched when no country is set
pub const DEFAULT_COUNTRY_CODE: &str = "US";

/// Number of results requested when no limit is set
pub const DEFAULT_LIMIT: u32 = 50;

/// API version used when none is set
pub const DEFAULT_API_VERSION: u32 = 2;

/// A search request against one media category.
///
/// # Examples
///
/// ```no_run
/// use itunes_search::{PodcastAttribute, PodcastSearch, ReturnLanguage};
///
/// let results = PodcastSearch::new()
///     .with("radiolab")
///     .with_limit(5)
///     .in_country("NG")
///     .in_attribute(PodcastAttribute::Title)
///     .with_return_language(ReturnLanguage::Japanese)
///     .execute()
///     .unwrap();
///
/// println!("{}", results["resultCount"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Search<C: MediaCategory> {
    /// The term to search for (required)
    search_term: Option<String>,
    /// ISO 3166-1 alpha-2 code of the storefront
    country_code: String,
    /// Maximum number of results
    limit: u32,
    /// Whether explicit content is included
    allow_explicit: bool,
    /// Field the term is compared with
    attribute: C::Attribute,
    /// Language results are returned in
    return_language: ReturnLanguage,
    /// Remote protocol version, 1 or 2
    api_version: u32,
    /// Kind of result record requested
    return_type: C::ReturnType,
}

impl<C: MediaCategory> Default for Search<C> {
    fn default() -> Self {
        Self {
            search_term: None,
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            limit: DEFAULT_LIMIT,
            allow_explicit: true,
            attribute: C::Attribute::default(),
            return_language: ReturnLanguage::default(),
            api_version: DEFAULT_API_VERSION,
            return_type: C::ReturnType::default(),
        }
    }
}

impl<C: MediaCategory> Search<C> {
    /// Creates a search with every parameter at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the term to search for. Required before executing.
    #[must_use]
    pub fn with(mut self, search_term: impl Into<String>) -> Self {
        self.search_term = Some(search_term.into());
        self
    }

    /// Sets the maximum number of results. Default is 50.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Restricts which field the term is matched against. Default is all fields.
    #[must_use]
    pub fn in_attribute(mut self, attribute: C::Attribute) -> Self {
        self.attribute = attribute;
        self
    }

    /// Sets the storefront by its ISO 3166-1 alpha-2 code. Default is US.
    #[must_use]
    pub fn in_country(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = country_code.into();
        self
    }

    /// Selects the remote protocol version (1 or 2). Default is 2.
    #[must_use]
    pub fn with_api_version(mut self, api_version: u32) -> Self {
        self.api_version = api_version;
        self
    }

    /// Sets the language results are returned in. Default is English.
    #[must_use]
    pub fn with_return_language(mut self, return_language: ReturnLanguage) -> Self {
        self.return_language = return_language;
        self
    }

    /// Allows or excludes explicit content. Allowed by default.
    #[must_use]
    pub fn allow_explicit(mut self, allow_explicit: bool) -> Self {
        self.allow_explicit = allow_explicit;
        self
    }

    /// Selects the kind of result record returned.
    #[must_use]
    pub fn and_return(mut self, return_type: C::ReturnType) -> Self {
        self.return_type = return_type;
        self
    }

    /// The search term, if one was set.
    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref()
    }

    /// The media category this search is fixed to.
    pub fn media(&self) -> Media {
        C::MEDIA
    }

    /// The storefront as given, before normalization.
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Maximum number of results.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Whether explicit content is included.
    pub fn explicit_allowed(&self) -> bool {
        self.allow_explicit
    }

    /// The field the term must match.
    pub fn attribute(&self) -> C::Attribute {
        self.attribute
    }

    /// Language of the returned metadata.
    pub fn return_language(&self) -> ReturnLanguage {
        self.return_language
    }

    /// The API version requested.
    pub fn api_version(&self) -> u32 {
        self.api_version
    }

    /// The entity kind returned.
    pub fn return_type(&self) -> C::ReturnType {
        self.return_type
    }

    /// Validates the search and assembles its request URL against `search_url`.
    ///
    /// No request is sent.
    ///
    /// # Errors
    ///
    /// - [`ItunesSearchError::MissingRequiredParameter`] if no non-empty term is set
    /// - [`ItunesSearchError::InvalidParameter`] for an API version other than 1 or 2,
    ///   a zero limit, or a malformed country code
    /// - [`ItunesSearchError::UrlConstruction`] if the result is not a valid URL
    pub fn build_url(&self, search_url: &Url) -> Result<Url, ItunesSearchError> {
        let term = require_search_term(self.search_term())?;
        check_api_version(self.api_version)?;
        check_limit(self.limit)?;
        let country_code = normalize_country_code(&self.country_code)?;

        query::search_url(search_url, self, term, &country_code)
    }

    /// Executes the search against Apple's production endpoint.
    ///
    /// Blocks until the service answers. The search itself is left untouched,
    /// so executing it again sends an identical request.
    ///
    /// # Errors
    ///
    /// Any error of [`Search::build_url`], or
    /// [`ItunesSearchError::NetworkCommunication`] if the request fails.
    pub fn execute(&self) -> Result<SearchResult, ItunesSearchError> {
        let client = ItunesClient::new()?;
        client.search(self)
    }

    /// Executes the search through the given client.
    ///
    /// # Errors
    ///
    /// See [`Search::execute`].
    pub fn execute_with<T: Transport>(
        &self,
        client: &ItunesClient<T>,
    ) -> Result<SearchResult, ItunesSearchError> {
        client.search(self)
    }
}

#[cfg(test)]
mod tests {
    use super::category::{All, EBook, Movie, Music, MusicVideo, Podcast, Software, TvShow};
    use super::*;
    use crate::entities::{
        MusicAttribute, MusicReturnType, PodcastAttribute, PodcastReturnType,
        SoftwareReturnType,
    };

    fn base() -> Url {
        Url::parse("https://itunes.apple.com/search").unwrap()
    }

    #[test]
    fn test_defaults() {
        let search = Search::<Podcast>::new();

        assert_eq!(search.search_term(), None);
        assert_eq!(search.media(), Media::Podcast);
        assert_eq!(search.country_code(), "US");
        assert_eq!(search.limit(), 50);
        assert!(search.explicit_allowed());
        assert_eq!(search.attribute(), PodcastAttribute::All);
        assert_eq!(search.return_language(), ReturnLanguage::English);
        assert_eq!(search.api_version(), 2);
        assert_eq!(search.return_type(), PodcastReturnType::Podcast);
    }

    #[test]
    fn test_setters_chain() {
        let search = Search::<Music>::new()
            .with("jack johnson")
            .with_limit(25)
            .in_attribute(MusicAttribute::Artist)
            .in_country("ca")
            .with_api_version(1)
            .with_return_language(ReturnLanguage::Japanese)
            .allow_explicit(false)
            .and_return(MusicReturnType::Album);

        assert_eq!(search.search_term(), Some("jack johnson"));
        assert_eq!(search.limit(), 25);
        assert_eq!(search.attribute(), MusicAttribute::Artist);
        assert_eq!(search.country_code(), "ca");
        assert_eq!(search.api_version(), 1);
        assert_eq!(search.return_language(), ReturnLanguage::Japanese);
        assert!(!search.explicit_allowed());
        assert_eq!(search.return_type(), MusicReturnType::Album);
    }

    #[test]
    fn test_build_url_full_parameter_order() {
        let url = Search::<Podcast>::new()
            .with("radiolab")
            .with_limit(5)
            .in_country("NG")
            .in_attribute(PodcastAttribute::Title)
            .with_return_language(ReturnLanguage::Japanese)
            .with_api_version(1)
            .build_url(&base())
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://itunes.apple.com/search?term=radiolab&country=NG&media=podcast\
             &entity=podcast&attribute=titleTerm&limit=5&lang=ja&version=1&explicit=Yes"
        );
    }

    #[test]
    fn test_build_url_with_defaults() {
        let url = Search::<Music>::new().with("beatles").build_url(&base()).unwrap();

        assert_eq!(
            url.query(),
            Some(
                "term=beatles&country=US&media=music&entity=musicTrack&attribute=\
                 &limit=50&lang=en&version=2&explicit=Yes"
            )
        );
    }

    #[test]
    fn test_default_values_law() {
        let implicit = Search::<TvShow>::new().with("seinfeld");
        let explicit = Search::<TvShow>::new()
            .with("seinfeld")
            .in_country(DEFAULT_COUNTRY_CODE)
            .with_limit(DEFAULT_LIMIT)
            .allow_explicit(true)
            .in_attribute(Default::default())
            .with_return_language(ReturnLanguage::English)
            .with_api_version(DEFAULT_API_VERSION)
            .and_return(Default::default());

        assert_eq!(implicit, explicit);
        assert_eq!(
            implicit.build_url(&base()).unwrap(),
            explicit.build_url(&base()).unwrap()
        );
    }

    #[test]
    fn test_explicit_flag_values() {
        let allowed = Search::<Movie>::new().with("heat").build_url(&base()).unwrap();
        let excluded = Search::<Movie>::new()
            .with("heat")
            .allow_explicit(false)
            .build_url(&base())
            .unwrap();

        assert!(allowed.as_str().ends_with("&explicit=Yes"));
        assert!(excluded.as_str().ends_with("&explicit=No"));
    }

    #[test]
    fn test_country_is_normalized() {
        let url = Search::<Software>::new()
            .with("pages")
            .in_country("de")
            .and_return(SoftwareReturnType::MacSoftware)
            .build_url(&base())
            .unwrap();

        let query = url.query().unwrap();
        assert!(query.contains("&country=DE&"));
        assert!(query.contains("&entity=macSoftware&"));
    }

    #[test]
    fn test_term_is_escaped() {
        let url = Search::<EBook>::new()
            .with("war & peace")
            .build_url(&base())
            .unwrap();

        assert!(url.query().unwrap().starts_with("term=war+%26+peace&"));
    }

    #[test]
    fn test_whitespace_term_is_sent_as_given() {
        let url = Search::<Podcast>::new().with("   ").build_url(&base()).unwrap();

        assert!(url.query().unwrap().starts_with("term=+++&"));
    }

    fn assert_missing_term<C: MediaCategory>() {
        let result = Search::<C>::new().build_url(&base());
        assert!(
            matches!(result, Err(ItunesSearchError::MissingRequiredParameter("term"))),
            "{:?} accepted a search without term",
            C::MEDIA
        );
    }

    fn assert_invalid_version<C: MediaCategory>() {
        for version in [0, 3] {
            let result = Search::<C>::new()
                .with("term")
                .with_api_version(version)
                .build_url(&base());
            assert!(
                matches!(result, Err(ItunesSearchError::InvalidParameter { .. })),
                "{:?} accepted API version {}",
                C::MEDIA,
                version
            );
        }
    }

    #[test]
    fn test_every_category_requires_term() {
        assert_missing_term::<Movie>();
        assert_missing_term::<Podcast>();
        assert_missing_term::<Music>();
        assert_missing_term::<MusicVideo>();
        assert_missing_term::<category::Audiobook>();
        assert_missing_term::<category::ShortFilm>();
        assert_missing_term::<TvShow>();
        assert_missing_term::<Software>();
        assert_missing_term::<EBook>();
        assert_missing_term::<All>();
    }

    #[test]
    fn test_every_category_rejects_unknown_api_version() {
        assert_invalid_version::<Movie>();
        assert_invalid_version::<Podcast>();
        assert_invalid_version::<Music>();
        assert_invalid_version::<MusicVideo>();
        assert_invalid_version::<category::Audiobook>();
        assert_invalid_version::<category::ShortFilm>();
        assert_invalid_version::<TvShow>();
        assert_invalid_version::<Software>();
        assert_invalid_version::<EBook>();
        assert_invalid_version::<All>();
    }

    #[test]
    fn test_missing_term_is_reported_before_invalid_version() {
        let result = Search::<Podcast>::new().with("").with_api_version(7).build_url(&base());
        assert!(matches!(
            result,
            Err(ItunesSearchError::MissingRequiredParameter(_))
        ));
    }

    #[test]
    fn test_zero_limit_and_bad_country_are_rejected() {
        let zero_limit = Search::<Music>::new().with("x").with_limit(0).build_url(&base());
        assert!(matches!(
            zero_limit,
            Err(ItunesSearchError::InvalidParameter {
                parameter: "limit",
                ..
            })
        ));

        let bad_country = Search::<Music>::new().with("x").in_country("USA").build_url(&base());
        assert!(matches!(
            bad_country,
            Err(ItunesSearchError::InvalidParameter {
                parameter: "country",
                ..
            })
        ));
    }

    #[test]
    fn test_media_constant_per_category() {
        let url = Search::<MusicVideo>::new().with("x").build_url(&base()).unwrap();
        assert!(url.query().unwrap().contains("&media=musicVideo&entity=musicVideo&"));

        let url = Search::<All>::new().with("x").build_url(&base()).unwrap();
        assert!(url.query().unwrap().contains("&media=all&entity=allTrack&"));
    }
}
