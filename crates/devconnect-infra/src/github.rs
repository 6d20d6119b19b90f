//! GitHub REST client for a profile's public repositories.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url, header};

use devconnect_core::ports::{GithubClient, UpstreamError};

/// Number of repositories returned per lookup.
const REPO_LIMIT: &str = "5";

/// GitHub client configuration.
#[derive(Debug, Clone)]
pub struct GithubConfig {
    /// Base URL of the REST API, e.g. `https://api.github.com`.
    pub api_base: String,
    /// Service credential sent as `Authorization: token <value>`.
    pub token: Option<String>,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            token: None,
            user_agent: "devconnect-api".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl GithubConfig {
    /// Load from `GITHUB_API_URL` and `GITHUB_TOKEN`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let token = std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty());
        if token.is_none() {
            tracing::warn!("GITHUB_TOKEN not set. GitHub lookups will be anonymous and rate limited.");
        }

        Self {
            api_base: std::env::var("GITHUB_API_URL").unwrap_or(defaults.api_base),
            token,
            ..defaults
        }
    }
}

/// Build `{base}/users/{username}/repos?per_page=5&sort=created:asc`.
pub fn repos_url(api_base: &str, username: &str) -> Result<Url, UpstreamError> {
    let mut url =
        Url::parse(api_base).map_err(|e| UpstreamError::Transport(format!("bad API base: {e}")))?;

    url.path_segments_mut()
        .map_err(|_| UpstreamError::Transport("API base cannot carry a path".to_string()))?
        .pop_if_empty()
        .extend(["users", username, "repos"]);

    url.query_pairs_mut()
        .append_pair("per_page", REPO_LIMIT)
        .append_pair("sort", "created:asc");

    Ok(url)
}

/// reqwest-backed [`GithubClient`].
pub struct HttpGithubClient {
    client: reqwest::Client,
    config: GithubConfig,
}

impl HttpGithubClient {
    pub fn new(config: GithubConfig) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl GithubClient for HttpGithubClient {
    async fn recent_repos(&self, username: &str) -> Result<serde_json::Value, UpstreamError> {
        let url = repos_url(&self.config.api_base, username)?;

        let mut request = self.client.get(url);
        if let Some(token) = &self.config.token {
            request = request.header(header::AUTHORIZATION, format!("token {token}"));
        }

        let response = request
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::debug!(%username, status = status.as_u16(), "GitHub lookup failed");
            return Err(UpstreamError::Status(status.as_u16()));
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repos_url_has_limit_and_sort() {
        let url = repos_url("https://api.github.com", "octocat").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.github.com/users/octocat/repos?per_page=5&sort=created%3Aasc"
        );
    }

    #[test]
    fn test_repos_url_escapes_username() {
        let url = repos_url("http://localhost:9000/", "a b/c").unwrap();
        assert_eq!(url.path(), "/users/a%20b%2Fc/repos");
    }

    #[test]
    fn test_repos_url_rejects_bad_base() {
        assert!(repos_url("not a url", "octocat").is_err());
    }

    /// Fake GitHub that knows `octocat` and echoes the Authorization header back.
    async fn user_repos(
        req: actix_web::HttpRequest,
        username: actix_web::web::Path<String>,
    ) -> actix_web::HttpResponse {
        if username.as_str() != "octocat" {
            return actix_web::HttpResponse::NotFound().finish();
        }
        let auth = req
            .headers()
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        actix_web::HttpResponse::Ok().json(serde_json::json!([{
            "name": "hello-world",
            "authorization": auth,
            "query": req.query_string(),
        }]))
    }

    fn start_fake_github() -> String {
        let server = actix_web::HttpServer::new(|| {
            actix_web::App::new().route(
                "/users/{username}/repos",
                actix_web::web::get().to(user_repos),
            )
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
        let addr = server.addrs()[0];
        actix_rt::spawn(server.run());
        format!("http://{addr}")
    }

    fn client(api_base: String, token: Option<&str>) -> HttpGithubClient {
        HttpGithubClient::new(GithubConfig {
            api_base,
            token: token.map(str::to_owned),
            ..GithubConfig::default()
        })
        .unwrap()
    }

    #[actix_rt::test]
    async fn test_sends_token_authorization_header() {
        let base = start_fake_github();

        let repos = client(base, Some("secret"))
            .recent_repos("octocat")
            .await
            .unwrap();

        assert_eq!(repos[0]["name"], "hello-world");
        assert_eq!(repos[0]["authorization"], "token secret");
        assert_eq!(repos[0]["query"], "per_page=5&sort=created%3Aasc");
    }

    #[actix_rt::test]
    async fn test_anonymous_lookup_sends_no_authorization() {
        let base = start_fake_github();

        let repos = client(base, None).recent_repos("octocat").await.unwrap();

        assert_eq!(repos[0]["authorization"], serde_json::Value::Null);
    }

    #[actix_rt::test]
    async fn test_non_200_is_status_error() {
        let base = start_fake_github();

        let err = client(base, Some("secret"))
            .recent_repos("ghost")
            .await
            .unwrap_err();

        assert!(matches!(err, UpstreamError::Status(404)));
    }

    #[actix_rt::test]
    async fn test_unreachable_host_is_transport_error() {
        let err = client("http://127.0.0.1:1".to_string(), None)
            .recent_repos("octocat")
            .await
            .unwrap_err();

        assert!(matches!(err, UpstreamError::Transport(_)));
    }
}
