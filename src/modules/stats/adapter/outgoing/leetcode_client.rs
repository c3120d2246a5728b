use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode, Url};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::modules::stats::application::ports::outgoing::{StatsFetchError, StatsFetcher};
use crate::modules::stats::domain::entities::{LeetCodeStats, StatsProvider};

const USER_STATS_QUERY: &str = r#"
query userStats($username: String!) {
  allQuestionsCount { difficulty count }
  matchedUser(username: $username) {
    username
    profile { ranking reputation }
    submitStatsGlobal { acSubmissionNum { difficulty count } }
  }
}
"#;

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseData {
    #[serde(default)]
    all_questions_count: Vec<DifficultyCount>,
    matched_user: Option<MatchedUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatchedUser {
    username: String,
    profile: Option<Profile>,
    submit_stats_global: Option<SubmitStats>,
}

#[derive(Debug, Deserialize)]
struct Profile {
    ranking: Option<u64>,
    reputation: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitStats {
    #[serde(default)]
    ac_submission_num: Vec<DifficultyCount>,
}

#[derive(Debug, Deserialize)]
struct DifficultyCount {
    difficulty: String,
    count: u64,
}

fn count_for(counts: &[DifficultyCount], difficulty: &str) -> u64 {
    counts
        .iter()
        .find(|c| c.difficulty.eq_ignore_ascii_case(difficulty))
        .map(|c| c.count)
        .unwrap_or(0)
}

/// LeetCode's public GraphQL endpoint.
#[derive(Clone)]
pub struct LeetCodeStatsClient {
    client: Client,
    endpoint: Url,
}

impl LeetCodeStatsClient {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, StatsFetchError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| StatsFetchError::Upstream(format!("bad endpoint: {e}")))?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("portfolio-backend/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| StatsFetchError::Upstream(e.to_string()))?;

        Ok(Self { client, endpoint })
    }
}

fn summarize(resp: GraphQlResponse) -> Result<LeetCodeStats, StatsFetchError> {
    let data = match resp.data {
        Some(data) => data,
        None => {
            let msg = resp
                .errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(StatsFetchError::Decode(msg));
        }
    };

    // Unknown users come back as `matchedUser: null`, usually with an
    // error entry alongside.
    let user = data.matched_user.ok_or(StatsFetchError::NotFound)?;
    let solved = user
        .submit_stats_global
        .map(|s| s.ac_submission_num)
        .unwrap_or_default();
    let profile = user.profile;

    Ok(LeetCodeStats {
        username: user.username,
        ranking: profile.as_ref().and_then(|p| p.ranking),
        reputation: profile.as_ref().and_then(|p| p.reputation),
        total_solved: count_for(&solved, "All"),
        easy_solved: count_for(&solved, "Easy"),
        medium_solved: count_for(&solved, "Medium"),
        hard_solved: count_for(&solved, "Hard"),
        total_questions: count_for(&data.all_questions_count, "All"),
    })
}

#[async_trait]
impl StatsFetcher for LeetCodeStatsClient {
    fn provider(&self) -> StatsProvider {
        StatsProvider::Leetcode
    }

    async fn fetch(&self, username: &str) -> Result<serde_json::Value, StatsFetchError> {
        let body = json!({
            "query": USER_STATS_QUERY,
            "variables": { "username": username },
        });

        let resp = self
            .client
            .post(self.endpoint.clone())
            .header(header::REFERER, "https://leetcode.com")
            .json(&body)
            .send()
            .await
            .map_err(|e| StatsFetchError::Upstream(e.to_string()))?;

        match resp.status() {
            s if s.is_success() => {}
            StatusCode::TOO_MANY_REQUESTS | StatusCode::FORBIDDEN => {
                return Err(StatsFetchError::RateLimited)
            }
            s => {
                return Err(StatsFetchError::Upstream(format!(
                    "LeetCode responded with {s}"
                )))
            }
        }

        let parsed: GraphQlResponse = resp
            .json()
            .await
            .map_err(|e| StatsFetchError::Decode(e.to_string()))?;

        let stats = summarize(parsed)?;
        debug!(username, solved = stats.total_solved, "Fetched LeetCode profile");

        serde_json::to_value(stats).map_err(|e| StatsFetchError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(value: serde_json::Value) -> GraphQlResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_summarize_counts_by_difficulty() {
        let resp = parse(json!({
            "data": {
                "allQuestionsCount": [
                    {"difficulty": "All", "count": 3000},
                    {"difficulty": "Easy", "count": 800}
                ],
                "matchedUser": {
                    "username": "alice",
                    "profile": {"ranking": 12345, "reputation": 7},
                    "submitStatsGlobal": {
                        "acSubmissionNum": [
                            {"difficulty": "All", "count": 210},
                            {"difficulty": "Easy", "count": 100},
                            {"difficulty": "Medium", "count": 90},
                            {"difficulty": "Hard", "count": 20}
                        ]
                    }
                }
            }
        }));

        let stats = summarize(resp).unwrap();

        assert_eq!(stats.username, "alice");
        assert_eq!(stats.ranking, Some(12345));
        assert_eq!(stats.total_solved, 210);
        assert_eq!(stats.hard_solved, 20);
        assert_eq!(stats.total_questions, 3000);
    }

    #[test]
    fn test_unknown_user_is_not_found() {
        let resp = parse(json!({
            "data": {"allQuestionsCount": [], "matchedUser": null},
            "errors": [{"message": "That user does not exist."}]
        }));

        assert_eq!(summarize(resp).unwrap_err(), StatsFetchError::NotFound);
    }

    #[test]
    fn test_missing_data_reports_errors() {
        let resp = parse(json!({
            "data": null,
            "errors": [{"message": "rate"}, {"message": "limit"}]
        }));

        assert_eq!(
            summarize(resp).unwrap_err(),
            StatsFetchError::Decode("rate; limit".to_string())
        );
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let resp = parse(json!({
            "data": {
                "allQuestionsCount": [],
                "matchedUser": {"username": "bob", "profile": null, "submitStatsGlobal": null}
            }
        }));

        let value = serde_json::to_value(summarize(resp).unwrap()).unwrap();

        assert_eq!(value["totalSolved"], 0);
        assert!(value["ranking"].is_null());
    }
}
