use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, Response, StatusCode, Url};
use serde::Deserialize;
use tracing::debug;

use crate::modules::stats::application::ports::outgoing::{StatsFetchError, StatsFetcher};
use crate::modules::stats::domain::entities::{GithubStats, LanguageCount, StatsProvider};

const TOP_LANGUAGES: usize = 5;
const REPOS_PER_PAGE: &str = "100";

#[derive(Debug, Deserialize)]
struct GithubUser {
    login: String,
    name: Option<String>,
    avatar_url: Option<String>,
    public_repos: u64,
    followers: u64,
    following: u64,
}

#[derive(Debug, Deserialize)]
struct GithubRepo {
    #[serde(default)]
    fork: bool,
    #[serde(default)]
    stargazers_count: u64,
    #[serde(default)]
    forks_count: u64,
    language: Option<String>,
}

/// GitHub REST client producing a profile summary from the user record and
/// the first page of owned repositories.
#[derive(Clone)]
pub struct GithubStatsClient {
    client: Client,
    api_base: Url,
    token: Option<String>,
}

impl GithubStatsClient {
    pub fn new(
        api_base: &str,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, StatsFetchError> {
        let mut base = api_base.trim_end_matches('/').to_string();
        base.push('/');
        let api_base =
            Url::parse(&base).map_err(|e| StatsFetchError::Upstream(format!("bad base URL: {e}")))?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("portfolio-backend/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| StatsFetchError::Upstream(e.to_string()))?;

        Ok(Self {
            client,
            api_base,
            token,
        })
    }

    fn url(&self, path: &str) -> Result<Url, StatsFetchError> {
        self.api_base
            .join(path)
            .map_err(|e| StatsFetchError::Upstream(e.to_string()))
    }

    async fn get(&self, url: Url) -> Result<Response, StatsFetchError> {
        let mut req = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/vnd.github+json");
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| StatsFetchError::Upstream(e.to_string()))?;

        check_status(resp.status())?;
        Ok(resp)
    }
}

fn check_status(status: StatusCode) -> Result<(), StatsFetchError> {
    match status {
        s if s.is_success() => Ok(()),
        StatusCode::NOT_FOUND => Err(StatsFetchError::NotFound),
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => Err(StatsFetchError::RateLimited),
        s => Err(StatsFetchError::Upstream(format!("GitHub responded with {s}"))),
    }
}

fn summarize(user: GithubUser, repos: &[GithubRepo]) -> GithubStats {
    let own: Vec<&GithubRepo> = repos.iter().filter(|r| !r.fork).collect();

    let mut by_language: HashMap<&str, u64> = HashMap::new();
    for lang in own.iter().filter_map(|r| r.language.as_deref()) {
        *by_language.entry(lang).or_default() += 1;
    }

    let mut top_languages: Vec<LanguageCount> = by_language
        .into_iter()
        .map(|(language, repos)| LanguageCount {
            language: language.to_string(),
            repos,
        })
        .collect();
    top_languages.sort_by(|a, b| b.repos.cmp(&a.repos).then_with(|| a.language.cmp(&b.language)));
    top_languages.truncate(TOP_LANGUAGES);

    GithubStats {
        username: user.login,
        name: user.name,
        avatar_url: user.avatar_url,
        public_repos: user.public_repos,
        followers: user.followers,
        following: user.following,
        total_stars: own.iter().map(|r| r.stargazers_count).sum(),
        total_forks: own.iter().map(|r| r.forks_count).sum(),
        top_languages,
    }
}

#[async_trait]
impl StatsFetcher for GithubStatsClient {
    fn provider(&self) -> StatsProvider {
        StatsProvider::Github
    }

    async fn fetch(&self, username: &str) -> Result<serde_json::Value, StatsFetchError> {
        let user: GithubUser = self
            .get(self.url(&format!("users/{username}"))?)
            .await?
            .json()
            .await
            .map_err(|e| StatsFetchError::Decode(e.to_string()))?;

        let mut repos_url = self.url(&format!("users/{username}/repos"))?;
        repos_url
            .query_pairs_mut()
            .append_pair("per_page", REPOS_PER_PAGE)
            .append_pair("type", "owner");

        let repos: Vec<GithubRepo> = self
            .get(repos_url)
            .await?
            .json()
            .await
            .map_err(|e| StatsFetchError::Decode(e.to_string()))?;

        debug!(username, repos = repos.len(), "Fetched GitHub profile");

        serde_json::to_value(summarize(user, &repos))
            .map_err(|e| StatsFetchError::Decode(e.to_string()))
    }
}
