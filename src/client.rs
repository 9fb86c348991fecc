//! `ItunesClient` - ties validation, URL assembly and transport together.

use crate::entities::ParameterValue;
use crate::lookup::LookupRequest;
use crate::search::Search;
use crate::search::category::MediaCategory;
use crate::transport::{HttpTransport, Transport};
use crate::{ItunesSearchError, SearchResult};
use tracing::instrument;
use url::Url;

/// Generic search endpoint
pub const DEFAULT_SEARCH_URL: &str = "https://itunes.apple.com/search";

/// Base of the RSS feed that serves the top charts
pub const DEFAULT_RSS_BASE_URL: &str = "https://rss.itunes.apple.com/";

/// `User-Agent` sent unless the builder overrides it
pub const DEFAULT_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client for the iTunes Search API and the iTunes RSS feed.
///
/// The client holds no per-request state; one instance can serve any number
/// of searches, from several threads if the transport allows it.
#[derive(Debug, Clone)]
pub struct ItunesClient<T = HttpTransport> {
    /// Performs the HTTP requests
    transport: T,
    /// Generic search endpoint
    search_url: Url,
    /// Base URL the top-chart paths are resolved against
    rss_base_url: Url,
}

/// Builder for [`ItunesClient`].
#[derive(Debug, Default)]
pub struct ItunesClientBuilder {
    search_url: Option<Url>,
    rss_base_url: Option<Url>,
    user_agent: Option<String>,
}

impl ItunesClientBuilder {
    /// Overrides the search endpoint (for a mock server in tests).
    #[must_use]
    pub fn search_url(mut self, url: Url) -> Self {
        self.search_url = Some(url);
        self
    }

    /// Overrides the RSS base URL (for a mock server in tests).
    #[must_use]
    pub fn rss_base_url(mut self, url: Url) -> Self {
        self.rss_base_url = Some(url);
        self
    }

    /// Sets the `User-Agent` of the default HTTP transport.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Builds a client with the blocking HTTP transport.
    ///
    /// # Errors
    ///
    /// - [`ItunesSearchError::UrlConstruction`] if a default endpoint fails to parse
    /// - [`ItunesSearchError::NetworkCommunication`] if the HTTP client cannot be built
    pub fn build(self) -> Result<ItunesClient, ItunesSearchError> {
        let user_agent = self
            .user_agent
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
        let transport = HttpTransport::new(&user_agent)?;

        self.build_with_transport(transport)
    }

    /// Builds a client that sends its requests through `transport`.
    ///
    /// The configured user agent is ignored; it only applies to the default
    /// HTTP transport.
    ///
    /// # Errors
    ///
    /// [`ItunesSearchError::UrlConstruction`] if a default endpoint fails to parse.
    pub fn build_with_transport<T: Transport>(
        self,
        transport: T,
    ) -> Result<ItunesClient<T>, ItunesSearchError> {
        let search_url = match self.search_url {
            Some(url) => url,
            None => parse_endpoint(DEFAULT_SEARCH_URL)?,
        };

        let rss_base_url = match self.rss_base_url {
            Some(url) => url,
            None => parse_endpoint(DEFAULT_RSS_BASE_URL)?,
        };

        Ok(ItunesClient {
            transport,
            search_url,
            rss_base_url: with_trailing_slash(rss_base_url),
        })
    }
}

fn parse_endpoint(url: &str) -> Result<Url, ItunesSearchError> {
    Url::parse(url).map_err(|e| ItunesSearchError::UrlConstruction {
        url: url.to_string(),
        source: e,
    })
}

/// Relative joins replace the last path segment unless the base ends in `/`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

impl ItunesClient {
    /// Creates a client for Apple's production endpoints.
    ///
    /// # Errors
    ///
    /// See [`ItunesClientBuilder::build`].
    pub fn new() -> Result<Self, ItunesSearchError> {
        Self::builder().build()
    }

    /// Creates a new builder.
    pub fn builder() -> ItunesClientBuilder {
        ItunesClientBuilder::default()
    }
}

impl<T: Transport> ItunesClient<T> {
    /// Creates a client for Apple's production endpoints that sends its
    /// requests through `transport`.
    ///
    /// # Errors
    ///
    /// See [`ItunesClientBuilder::build_with_transport`].
    pub fn with_transport(transport: T) -> Result<Self, ItunesSearchError> {
        ItunesClientBuilder::default().build_with_transport(transport)
    }

    /// The endpoint searches and genre listings are sent to.
    pub fn search_url(&self) -> &Url {
        &self.search_url
    }

    /// The base URL top-chart paths are resolved against, always ending in `/`.
    pub fn rss_base_url(&self) -> &Url {
        &self.rss_base_url
    }

    /// The transport requests go through.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Validates and executes a search.
    ///
    /// Validation happens before anything is sent, so a rejected search never
    /// reaches the transport.
    ///
    /// # Errors
    ///
    /// See [`Search::execute`].
    #[instrument(skip_all, fields(media = C::MEDIA.parameter_value()))]
    pub fn search<C: MediaCategory>(
        &self,
        search: &Search<C>,
    ) -> Result<SearchResult, ItunesSearchError> {
        let url = search.build_url(&self.search_url)?;
        self.fetch(&url)
    }

    /// Executes a term-less lookup.
    ///
    /// # Errors
    ///
    /// See [`LookupRequest::execute`].
    #[instrument(skip_all)]
    pub fn lookup(&self, request: &LookupRequest) -> Result<SearchResult, ItunesSearchError> {
        let url = request.build_url(&self.search_url, &self.rss_base_url)?;
        self.fetch(&url)
    }

    /// Fetches the top podcasts of the US storefront, 100 unless `limit` is given.
    ///
    /// # Errors
    ///
    /// See [`LookupRequest::execute`].
    pub fn top_podcasts(&self, limit: Option<u32>) -> Result<SearchResult, ItunesSearchError> {
        let mut request = LookupRequest::top_podcasts();
        if let Some(limit) = limit {
            request = request.with_limit(limit);
        }
        self.lookup(&request)
    }

    /// Fetches podcasts of a genre, 100 unless `limit` is given.
    ///
    /// # Errors
    ///
    /// See [`LookupRequest::execute`].
    pub fn podcasts_in_genre(
        &self,
        genre_id: impl Into<u32>,
        limit: Option<u32>,
    ) -> Result<SearchResult, ItunesSearchError> {
        let mut request = LookupRequest::podcasts_in_genre(genre_id);
        if let Some(limit) = limit {
            request = request.with_limit(limit);
        }
        self.lookup(&request)
    }

    fn fetch(&self, url: &Url) -> Result<SearchResult, ItunesSearchError> {
        tracing::debug!(url = %url, "dispatching request");
        Ok(self.transport.get_json(url)?)
    }
}
