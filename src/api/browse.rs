use std::future::Future;

use crate::Error;

use super::{
    request::{self, BrowseQuery, RecommendationQuery},
    response::{field, pares, Categories, Category, Featured, PagedAlbums, PagedPlaylists, Recommendations},
    Requester,
};

/// Browse and discovery endpoints of the Web API.
///
/// Every operation issues exactly one `GET` through the [`Requester`]. Options
/// that are not set are left out of the query entirely.
pub trait BrowseApi: Requester {
    /// Get a list of Spotify featured playlists (shown, for example, on a Spotify player's 'Browse' tab).
    ///
    /// # Arguments
    /// - `query`: sends `country`, `locale`, `timestamp`, `limit` (1..=50) and `offset`.
    fn featured_playlists(
        &self,
        query: &BrowseQuery,
    ) -> impl Future<Output = Result<Featured<PagedPlaylists>, Error>> {
        async move {
            let body = self
                .send(
                    request::get!("browse/featured-playlists")
                        .param("country", query.country.as_deref())
                        .param("locale", query.locale.as_deref())
                        .param("timestamp", query.timestamp)
                        .param("limit", query.limit)
                        .param("offset", query.offset),
                )
                .await?;
            Featured::from_body(body, "playlists")
        }
    }

    /// Get a list of new album releases featured in Spotify (shown, for example, on a Spotify player's 'Browse' tab).
    ///
    /// # Arguments
    /// - `query`: sends `country`, `limit` (1..=50) and `offset`.
    fn new_releases(
        &self,
        query: &BrowseQuery,
    ) -> impl Future<Output = Result<Featured<PagedAlbums>, Error>> {
        async move {
            let body = self
                .send(
                    request::get!("browse/new-releases")
                        .param("country", query.country.as_deref())
                        .param("limit", query.limit)
                        .param("offset", query.offset),
                )
                .await?;
            Featured::from_body(body, "albums")
        }
    }

    /// Get a list of categories used to tag items in Spotify.
    ///
    /// # Arguments
    /// - `query`: sends `country`, `locale`, `limit` (1..=50) and `offset`.
    fn categories(&self, query: &BrowseQuery) -> impl Future<Output = Result<Categories, Error>> {
        async move {
            let mut body = self
                .send(
                    request::get!("browse/categories")
                        .param("country", query.country.as_deref())
                        .param("locale", query.locale.as_deref())
                        .param("limit", query.limit)
                        .param("offset", query.offset),
                )
                .await?;
            field(&mut body, "categories")
        }
    }

    /// Get a single category used to tag items in Spotify.
    ///
    /// # Arguments
    /// - `category_id`: The [Spotify category ID](https://developer.spotify.com/documentation/web-api/concepts/spotify-uris-ids) for the category.
    /// - `query`: sends `country` and `locale`.
    fn category<S: AsRef<str>>(
        &self,
        category_id: S,
        query: &BrowseQuery,
    ) -> impl Future<Output = Result<Category, Error>> {
        async move {
            let id = urlencoding::encode(category_id.as_ref());
            let body = self
                .send(
                    request::get!("browse/categories/{}", id)
                        .param("country", query.country.as_deref())
                        .param("locale", query.locale.as_deref()),
                )
                .await?;
            Ok(pares!(body)?)
        }
    }

    /// Get a list of Spotify playlists tagged with a particular category.
    ///
    /// # Arguments
    /// - `category_id`: The [Spotify category ID](https://developer.spotify.com/documentation/web-api/concepts/spotify-uris-ids) for the category.
    /// - `query`: sends `country`, `limit` (1..=50) and `offset`.
    fn category_playlists<S: AsRef<str>>(
        &self,
        category_id: S,
        query: &BrowseQuery,
    ) -> impl Future<Output = Result<PagedPlaylists, Error>> {
        async move {
            let id = urlencoding::encode(category_id.as_ref());
            let mut body = self
                .send(
                    request::get!("browse/categories/{}/playlists", id)
                        .param("country", query.country.as_deref())
                        .param("limit", query.limit)
                        .param("offset", query.offset),
                )
                .await?;
            field(&mut body, "playlists")
        }
    }

    /// Recommendations are generated based on the available information for a given seed entity and matched against similar artists and tracks.
    ///
    /// The query is validated before anything is sent: a malformed attribute
    /// filter name fails with [`Error::InvalidArgument`] and no request is made.
    fn recommendations(
        &self,
        query: &RecommendationQuery,
    ) -> impl Future<Output = Result<Recommendations, Error>> {
        async move {
            let params = query.into_params()?;
            let body = self
                .send(request::get!("recommendations").params(params))
                .await?;
            Ok(pares!(body)?)
        }
    }

    /// Retrieve a list of available genres seed parameter values for [recommendations](BrowseApi::recommendations).
    fn recommendation_genre_seeds(&self) -> impl Future<Output = Result<Vec<String>, Error>> {
        async move {
            let mut body = self
                .send(request::get!("recommendations/available-genre-seeds"))
                .await?;
            field(&mut body, "genres")
        }
    }
}

impl<R: Requester> BrowseApi for R {}

#[cfg(test)]
mod test {
    use std::cell::RefCell;

    use chrono::NaiveDateTime;
    use serde_json::{json, Value};

    use super::*;
    use crate::api::{
        response::{fixtures, Paged},
        Market, Method, SpotifyRequest,
    };

    /// Records every request and answers with a canned body.
    struct Recorder {
        body: Value,
        requests: RefCell<Vec<SpotifyRequest>>,
    }

    impl Recorder {
        fn new(body: Value) -> Self {
            Self {
                body,
                requests: RefCell::new(Vec::new()),
            }
        }

        fn only_request(&self) -> SpotifyRequest {
            let requests = self.requests.borrow();
            assert_eq!(requests.len(), 1, "expected exactly one request");
            requests[0].clone()
        }
    }

    impl Requester for Recorder {
        async fn send(&self, request: SpotifyRequest) -> Result<Value, Error> {
            self.requests.borrow_mut().push(request);
            Ok(self.body.clone())
        }
    }

    struct Failing;

    impl Requester for Failing {
        async fn send(&self, _request: SpotifyRequest) -> Result<Value, Error> {
            Err(Error::Request {
                error_type: crate::SpotifyErrorType::Unauthorized,
                code: 401,
                message: "The access token expired".to_string(),
            })
        }
    }

    fn playlists_body() -> Value {
        let items = (0..5).map(|i| fixtures::playlist(&format!("pl{i}"))).collect();
        json!({
            "message": "Monday morning music, coming right up!",
            "playlists": fixtures::page("featured-playlists", items, 0, 5),
        })
    }

    #[tokio::test]
    async fn featured_playlists_defaults() {
        let spotify = Recorder::new(playlists_body());
        let featured = spotify.featured_playlists(&BrowseQuery::new()).await.unwrap();

        let request = spotify.only_request();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "browse/featured-playlists");
        assert_eq!(request.params.encode().unwrap(), "limit=20&offset=0");

        assert_eq!(featured.message.as_deref(), Some("Monday morning music, coming right up!"));
        assert_eq!(featured.page.items.len(), 5);
        assert_eq!(featured.page.offset() + featured.page.items().len(), featured.page.total());
    }

    #[tokio::test]
    async fn featured_playlists_with_options() {
        let spotify = Recorder::new(playlists_body());
        let timestamp = NaiveDateTime::parse_from_str("2014-10-23T09:00:00", "%Y-%m-%dT%H:%M:%S").unwrap();
        let query = BrowseQuery::new()
            .country("SE")
            .locale("sv_SE")
            .timestamp(timestamp)
            .limit(5)
            .offset(10);
        spotify.featured_playlists(&query).await.unwrap();

        let params = spotify.only_request().params;
        assert_eq!(params.get("country"), Some("SE"));
        assert_eq!(params.get("locale"), Some("sv_SE"));
        assert_eq!(params.get("timestamp"), Some("2014-10-23T09:00:00"));
        assert_eq!(params.get("limit"), Some("5"));
        assert_eq!(params.get("offset"), Some("10"));
    }

    #[tokio::test]
    async fn new_releases_only_sends_supported_options() {
        let items = (0..3).map(|i| fixtures::album(&format!("al{i}"))).collect();
        let spotify = Recorder::new(json!({
            "message": "New albums",
            "albums": fixtures::page("new-releases", items, 0, 3),
        }));

        let query = BrowseQuery::new().country("NL").locale("nl_NL");
        let featured = spotify.new_releases(&query).await.unwrap();

        let request = spotify.only_request();
        assert_eq!(request.path, "browse/new-releases");
        assert_eq!(request.params.encode().unwrap(), "country=NL&limit=20&offset=0");
        assert_eq!(featured.message.as_deref(), Some("New albums"));
        assert_eq!(featured.page.items.len(), 3);
    }

    #[tokio::test]
    async fn categories_page() {
        let items = vec![json!({
            "href": "https://api.spotify.com/v1/browse/categories/toplists",
            "icons": [fixtures::image()],
            "id": "toplists",
            "name": "Top Lists"
        })];
        let spotify = Recorder::new(json!({ "categories": fixtures::page("categories", items, 0, 1) }));

        let categories = spotify
            .categories(&BrowseQuery::new().locale("es_MX"))
            .await
            .unwrap();

        let request = spotify.only_request();
        assert_eq!(request.path, "browse/categories");
        assert_eq!(request.params.encode().unwrap(), "locale=es_MX&limit=20&offset=0");
        assert_eq!(categories.items[0].name, "Top Lists");
    }

    #[tokio::test]
    async fn single_category() {
        let spotify = Recorder::new(json!({
            "href": "https://api.spotify.com/v1/browse/categories/dinner",
            "icons": [fixtures::image()],
            "id": "dinner",
            "name": "Dinner"
        }));

        let category = spotify
            .category("dinner", &BrowseQuery::new().limit(5).country("US"))
            .await
            .unwrap();

        let request = spotify.only_request();
        assert_eq!(request.path, "browse/categories/dinner");
        assert_eq!(request.params.encode().unwrap(), "country=US");
        assert_eq!(category.id, "dinner");
        assert_eq!(category.icons.len(), 1);
    }

    #[tokio::test]
    async fn category_playlists_path() {
        let items = (0..2).map(|i| fixtures::playlist(&format!("pl{i}"))).collect();
        let spotify = Recorder::new(json!({ "playlists": fixtures::page("categories/x/playlists", items, 0, 2) }));

        let page = spotify
            .category_playlists("x", &BrowseQuery::new())
            .await
            .unwrap();

        let request = spotify.only_request();
        assert_eq!(request.path, "browse/categories/x/playlists");
        assert_eq!(request.params.encode().unwrap(), "limit=20&offset=0");
        assert_eq!(page.items.len(), 2);
    }

    #[tokio::test]
    async fn category_id_is_encoded() {
        let spotify = Recorder::new(json!({ "playlists": fixtures::page("categories", vec![], 0, 0) }));
        spotify
            .category_playlists("hip hop", &BrowseQuery::new())
            .await
            .unwrap();
        assert_eq!(spotify.only_request().path, "browse/categories/hip%20hop/playlists");
    }

    fn recommendations_body() -> Value {
        json!({
            "seeds": [{
                "afterFilteringSize": 100,
                "afterRelinkingSize": 100,
                "href": "https://api.spotify.com/v1/artists/a",
                "id": "a",
                "initialPoolSize": 250,
                "type": "artist"
            }],
            "tracks": [fixtures::track("t1")]
        })
    }

    #[tokio::test]
    async fn recommendations_query() {
        let spotify = Recorder::new(recommendations_body());
        let query = RecommendationQuery::new()
            .artists(["a", "b"])
            .attribute("min_tempo", 120)
            .attribute("foo_bar", 1);
        let recommendations = spotify.recommendations(&query).await.unwrap();

        let request = spotify.only_request();
        assert_eq!(request.path, "recommendations");
        assert_eq!(request.params.get("seed_artists"), Some("a,b"));
        assert_eq!(request.params.get("market"), Some("from_token"));
        assert_eq!(request.params.get("limit"), Some("20"));
        assert_eq!(request.params.get("min_tempo"), Some("120"));
        assert!(!request.params.contains("foo_bar"));
        assert!(!request.params.contains("seed_genres"));
        assert!(!request.params.contains("seed_tracks"));

        assert_eq!(recommendations.seeds[0].id, "a");
        assert_eq!(recommendations.tracks.len(), 1);
    }

    #[tokio::test]
    async fn recommendations_without_market() {
        let spotify = Recorder::new(recommendations_body());
        spotify
            .recommendations(&RecommendationQuery::new().genres(["jazz"]).market(None))
            .await
            .unwrap();
        assert!(!spotify.only_request().params.contains("market"));

        let spotify = Recorder::new(recommendations_body());
        spotify
            .recommendations(&RecommendationQuery::new().market(Market::country("JP")))
            .await
            .unwrap();
        assert_eq!(spotify.only_request().params.get("market"), Some("JP"));
    }

    #[tokio::test]
    async fn malformed_attribute_sends_nothing() {
        let spotify = Recorder::new(recommendations_body());
        let result = spotify
            .recommendations(&RecommendationQuery::new().attribute("badname", 1))
            .await;

        assert!(matches!(result, Err(Error::InvalidArgument("attributes", _))));
        assert!(spotify.requests.borrow().is_empty());
    }

    #[tokio::test]
    async fn genre_seeds() {
        let spotify = Recorder::new(json!({ "genres": ["acoustic", "afrobeat", "alt-rock"] }));
        let genres = spotify.recommendation_genre_seeds().await.unwrap();

        let request = spotify.only_request();
        assert_eq!(request.path, "recommendations/available-genre-seeds");
        assert!(request.params.is_empty());
        assert_eq!(genres, ["acoustic", "afrobeat", "alt-rock"]);
    }

    #[tokio::test]
    async fn requester_errors_propagate() {
        let result = Failing.categories(&BrowseQuery::new()).await;
        assert!(matches!(result, Err(Error::Request { code: 401, .. })));
    }

    #[tokio::test]
    async fn unexpected_body_shape() {
        let spotify = Recorder::new(json!({ "genres": "acoustic" }));
        let result = spotify.recommendation_genre_seeds().await;
        assert!(matches!(result, Err(Error::Json { .. })));

        let spotify = Recorder::new(json!({ "error": "nope" }));
        let result = spotify.categories(&BrowseQuery::new()).await;
        assert!(matches!(result, Err(Error::MissingField("categories"))));
    }
}
