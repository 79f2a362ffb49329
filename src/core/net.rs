// src/core/net.rs
//
// Talks to the indexing service: GET <service>/index?url=<target>.

use reqwest::blocking::Client;
use serde::Deserialize;
use url::Url;

use crate::{
    config::{
        consts::{INDEX_PATH, INDEX_QUERY_PARAM, USER_AGENT},
        options::ClientOptions,
    },
    core::index::WordIndex,
    error::ClientError,
};

/// Anything that can turn a URL into a word index. Blocking; the client
/// calls it from a worker thread.
pub trait IndexService: Send + Sync {
    fn fetch_index(&self, url: &str) -> Result<WordIndex, ClientError>;
}

pub struct HttpIndexService {
    http: Client,
    endpoint: Url,
}

impl HttpIndexService {
    pub fn new(options: &ClientOptions) -> Result<Self, ClientError> {
        let endpoint = index_endpoint(&options.service_url)?;
        let http = Client::builder()
            .timeout(options.timeout())
            .user_agent(USER_AGENT)
            .build()?;

        logd!("Net: endpoint={} timeout={:?}", endpoint, options.timeout());
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Full request URL for indexing `target`. The target is passed through
    /// untouched (only query-encoded); validating it is the service's job.
    pub fn request_url(&self, target: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair(INDEX_QUERY_PARAM, target);
        url
    }
}

impl IndexService for HttpIndexService {
    fn fetch_index(&self, target: &str) -> Result<WordIndex, ClientError> {
        let url = self.request_url(target);
        logd!("Net: GET {}", url);

        let resp = self.http.get(url).send()?;
        let status = resp.status();
        let body = resp.text()?;

        if !status.is_success() {
            let message = error_message(&body)
                .unwrap_or_else(|| s!(status.canonical_reason().unwrap_or("no details")));
            logf!("Net: service refused {} ({}: {})", target, status.as_u16(), message);
            return Err(ClientError::Status { status: status.as_u16(), message });
        }

        let index = WordIndex::from_json(&body)?;
        logd!("Net: {} words for {}", index.len(), target);
        Ok(index)
    }
}

/// `<service>/index`, keeping any path prefix the service is mounted under.
fn index_endpoint(service_url: &str) -> Result<Url, ClientError> {
    let invalid = |source| ClientError::InvalidServiceUrl { url: s!(service_url), source };

    let mut base = Url::parse(service_url.trim()).map_err(invalid)?;
    if !base.path().ends_with('/') {
        let path = join!(base.path(), "/");
        base.set_path(&path);
    }
    base.set_query(None);
    base.set_fragment(None);
    base.join(INDEX_PATH).map_err(invalid)
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Service errors look like `{"error": "..."}`; fall back to the raw body.
fn error_message(body: &str) -> Option<String> {
    if let Ok(e) = serde_json::from_str::<ErrorBody>(body) {
        return Some(e.error);
    }
    let body = body.trim();
    (!body.is_empty()).then(|| s!(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(base: &str) -> HttpIndexService {
        let opts = ClientOptions { service_url: s!(base), ..ClientOptions::default() };
        HttpIndexService::new(&opts).unwrap()
    }

    #[test]
    fn endpoint_from_bare_host() {
        assert_eq!(service("http://127.0.0.1:5000").endpoint().as_str(), "http://127.0.0.1:5000/index");
        assert_eq!(service("http://127.0.0.1:5000/").endpoint().as_str(), "http://127.0.0.1:5000/index");
    }

    #[test]
    fn endpoint_keeps_mount_prefix() {
        assert_eq!(service("http://host/app").endpoint().as_str(), "http://host/app/index");
        assert_eq!(service("http://host/app/?x=1").endpoint().as_str(), "http://host/app/index");
    }

    #[test]
    fn target_is_query_encoded() {
        let url = service("http://host").request_url("https://example.com/a?b=c d");
        assert_eq!(
            url.as_str(),
            "http://host/index?url=https%3A%2F%2Fexample.com%2Fa%3Fb%3Dc+d"
        );
        let pairs: Vec<_> = url.query_pairs().collect();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].1, "https://example.com/a?b=c d");
    }

    #[test]
    fn target_is_not_validated() {
        let url = service("http://host").request_url("not a url");
        assert_eq!(url.query(), Some("url=not+a+url"));
    }

    #[test]
    fn zero_timeout_builds_without_timeout() {
        let opts = ClientOptions { timeout_secs: 0, ..ClientOptions::default() };
        assert!(opts.timeout().is_none());
        assert!(HttpIndexService::new(&opts).is_ok());
    }

    #[test]
    fn bad_service_url_is_reported() {
        let opts = ClientOptions { service_url: s!("not a url"), ..ClientOptions::default() };
        let err = HttpIndexService::new(&opts).err().unwrap();
        assert!(matches!(err, ClientError::InvalidServiceUrl { .. }));
        assert!(err.to_string().contains("not a url"));
    }

    #[test]
    fn error_message_prefers_error_field() {
        assert_eq!(
            error_message(r#"{"error": "Must include a valid url"}"#).as_deref(),
            Some("Must include a valid url")
        );
        assert_eq!(error_message("  upstream down \n").as_deref(), Some("upstream down"));
        assert_eq!(error_message("   "), None);
    }
}
