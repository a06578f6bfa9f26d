use std::time::Duration;

use log::debug;
use reqwest::{
    Client,
    header::{self, HeaderMap},
};
use serde::Deserialize;

use crate::{FetcherError, RepositoryRecord, SearchFetcher, SearchPage, SearchRequest, StdResult};

/// The REST repository search endpoint for GitHub.
pub const GITHUB_SEARCH_ENDPOINT: &str = "https://api.github.com/search/repositories";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Deserialize, Debug)]
struct SearchResponseBody {
    items: Vec<RepositoryRecord>,
}

impl From<reqwest::Error> for FetcherError {
    fn from(error: reqwest::Error) -> Self {
        match error.is_decode() {
            true => FetcherError::Parse(error.to_string()),
            false => FetcherError::Remote(error.to_string()),
        }
    }
}

/// Returns `true` if a `Link` header advertises a `rel="next"` target.
///
/// Format: `<https://...&page=2>; rel="next", <https://...&page=34>; rel="last"`
fn has_next_link(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::LINK)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .any(|link| {
            link.split(';').skip(1).any(|param| {
                let param = param.trim();
                param == r#"rel="next""# || param == "rel=next"
            })
        })
}

/// Fetches repository search results from a REST API.
pub struct RestSearchFetcher {
    client: Client,
    endpoint: String,
}

impl RestSearchFetcher {
    /// Creates a new `RestSearchFetcher` instance targeting the given endpoint.
    pub fn try_new(endpoint: &str) -> StdResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl SearchFetcher for RestSearchFetcher {
    async fn fetch(&self, request: &SearchRequest) -> Result<SearchPage, FetcherError> {
        debug!("Sending {request}");
        let response = self
            .client
            .get(&self.endpoint)
            .header(header::ACCEPT, "application/vnd.github+json")
            .query(request)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetcherError::Status(status.as_u16()));
        }
        let has_next_page = has_next_link(response.headers());
        let body = response.json::<SearchResponseBody>().await?;
        debug!(
            "Received {} repositories for page {}, next page: {has_next_page}",
            body.items.len(),
            request.page()
        );

        Ok(SearchPage::new(body.items, has_next_page))
    }
}

#[cfg(test)]
mod tests {
    use httpmock::{Method::GET, MockServer};
    use reqwest::header::HeaderValue;
    use serde_json::json;

    use super::*;

    fn mock_json_value() -> serde_json::Value {
        json!({
            "total_count": 3,
            "incomplete_results": false,
            "items": [
                {
                    "id": 1,
                    "full_name": "org-1/repository-1",
                    "html_url": "https://github.com/org-1/repository-1",
                    "language": "Rust",
                    "stargazers_count": 200
                },
                {
                    "id": 2,
                    "full_name": "org-1/repository-2",
                    "html_url": "https://github.com/org-1/repository-2",
                    "language": null,
                    "stargazers_count": 100
                }
            ]
        })
    }

    fn link_headers(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::LINK, HeaderValue::from_static(value));

        headers
    }

    mod link_header {
        use super::*;

        #[test]
        fn next_link_is_detected() {
            let headers = link_headers(
                r#"<https://api.github.com/search/repositories?q=x&page=2>; rel="next", <https://api.github.com/search/repositories?q=x&page=10>; rel="last""#,
            );

            assert!(has_next_link(&headers));
        }

        #[test]
        fn last_page_has_no_next_link() {
            let headers = link_headers(
                r#"<https://api.github.com/search/repositories?q=x&page=1>; rel="first", <https://api.github.com/search/repositories?q=x&page=9>; rel="prev""#,
            );

            assert!(!has_next_link(&headers));
        }

        #[test]
        fn missing_header_has_no_next_link() {
            assert!(!has_next_link(&HeaderMap::new()));
        }

        #[test]
        fn next_in_url_is_not_a_relation() {
            let headers = link_headers(r#"<https://example.com/next>; rel="prev""#);

            assert!(!has_next_link(&headers));
        }
    }

    #[tokio::test]
    async fn fetch_page_with_next_link() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/search/repositories")
                .query_param("q", "tetris")
                .query_param("per_page", "100")
                .query_param("sort", "stars")
                .query_param("order", "desc")
                .query_param("page", "2");
            then.status(200)
                .header("Content-Type", "application/json")
                .header(
                    "Link",
                    r#"<https://api.github.com/search/repositories?q=tetris&page=3>; rel="next""#,
                )
                .json_body(mock_json_value());
        });
        let fetcher = RestSearchFetcher::try_new(&server.url("/search/repositories")).unwrap();
        let request = SearchRequest::new("tetris").next_page();

        let page = fetcher.fetch(&request).await.unwrap();

        mock.assert();
        assert_eq!(
            SearchPage::new(
                vec![
                    RepositoryRecord::new(
                        "org-1/repository-1",
                        "https://github.com/org-1/repository-1",
                        Some("Rust")
                    ),
                    RepositoryRecord::new(
                        "org-1/repository-2",
                        "https://github.com/org-1/repository-2",
                        None
                    ),
                ],
                true
            ),
            page
        );
    }

    #[tokio::test]
    async fn fetch_last_page_without_link() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/search/repositories");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({ "items": [] }));
        });
        let fetcher = RestSearchFetcher::try_new(&server.url("/search/repositories")).unwrap();

        let page = fetcher.fetch(&SearchRequest::dummy()).await.unwrap();

        mock.assert();
        assert_eq!(SearchPage::new(vec![], false), page);
    }

    #[tokio::test]
    async fn fetch_fails_with_status_on_non_success_response() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/search/repositories");
            then.status(422)
                .header("Content-Type", "application/json")
                .json_body(json!({ "message": "Validation Failed" }));
        });
        let fetcher = RestSearchFetcher::try_new(&server.url("/search/repositories")).unwrap();

        let error = fetcher
            .fetch(&SearchRequest::dummy())
            .await
            .expect_err("Fetch should fail on a non-success status");

        mock.assert();
        assert_eq!(FetcherError::Status(422), error);
    }

    #[tokio::test]
    async fn fetch_fails_with_parse_error_on_malformed_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/search/repositories");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({ "unexpected": true }));
        });
        let fetcher = RestSearchFetcher::try_new(&server.url("/search/repositories")).unwrap();

        let error = fetcher
            .fetch(&SearchRequest::dummy())
            .await
            .expect_err("Fetch should fail on a malformed body");

        mock.assert();
        assert!(matches!(error, FetcherError::Parse(_)));
    }
}
