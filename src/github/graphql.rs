use anyhow::{Context, Result, bail};
use reqwest::Client;
use serde_json::{Value, json};
use tracing::debug;

use super::aggregate::group_pull_requests;
use super::models::*;
use super::queries;

pub const DEFAULT_API_URL: &str = "https://api.github.com/graphql";

const PAGE_SIZE: u32 = 50;

#[derive(Clone)]
pub struct GithubClient {
    client: Client,
    api_url: String,
    token: String,
}

impl GithubClient {
    pub fn new(token: &str, api_url: &str) -> Result<Self> {
        if !api_url.starts_with("https://") {
            bail!("GitHub API URL must use HTTPS: {}", api_url);
        }

        let client = Client::builder()
            .user_agent("ghprofile")
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_url: api_url.to_string(),
            token: token.to_string(),
        })
    }

    async fn query(&self, query: &str, variables: Value) -> Result<Value> {
        let body = json!({
            "query": query,
            "variables": variables,
        });

        let resp = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .context("GitHub API request failed")?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            bail!("GitHub API returned {}: {}", status, text);
        }

        let data: Value = resp
            .json()
            .await
            .context("Failed to parse GitHub response")?;

        if let Some(errors) = data.get("errors") {
            let error_msg = errors
                .as_array()
                .and_then(|arr| arr.first())
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .unwrap_or("Unknown GraphQL error");
            bail!("GraphQL error: {}", error_msg);
        }

        Ok(data)
    }

    /// Minimal existence probe. Network, not-found, and auth failures are
    /// not distinguished; all of them read as "no such user".
    pub async fn user_exists(&self, login: &str) -> bool {
        let variables = json!({ "login": login });
        match self.query(queries::USER_EXISTS_QUERY, variables).await {
            Ok(data) => data["data"]["user"]["login"].as_str().is_some(),
            Err(e) => {
                debug!(login = login, error = %e, "User existence probe failed");
                false
            }
        }
    }

    pub async fn fetch_profile(&self, login: &str) -> Result<UserProfile> {
        let variables = json!({ "login": login });
        let data = self.query(queries::USER_PROFILE_QUERY, variables).await?;
        let profile = parse_profile(&data["data"]["user"])?;
        debug!(login = login, "Fetched profile");
        Ok(profile)
    }

    /// Fetch every page of the author-scoped pull-request search and hand the
    /// merged edge list to the aggregation pipeline. Stops when the
    /// accumulated edge count reaches the reported total, or as soon as a
    /// page comes back empty.
    pub async fn fetch_pull_requests(&self, login: &str) -> Result<UserPullRequests> {
        let search_query = format!("author:{} -user:{} is:pr sort:created-desc", login, login);

        let mut all_edges: Vec<PrEdge> = Vec::new();
        let mut issue_count: u32 = 0;
        let mut cursor: Option<String> = None;

        loop {
            let variables = json!({
                "searchQuery": search_query,
                "first": PAGE_SIZE,
                "after": cursor,
            });

            let data = self
                .query(queries::USER_PULL_REQUESTS_QUERY, variables)
                .await?;
            let page = parse_search_page(&data["data"]["search"])?;

            issue_count = page.issue_count;
            let next = next_search_cursor(all_edges.len() + page.edges.len(), &page);
            all_edges.extend(page.edges);

            match next {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        debug!(
            login = login,
            total = issue_count,
            edges = all_edges.len(),
            "Fetched pull requests"
        );
        Ok(group_pull_requests(issue_count, &all_edges))
    }

    pub async fn fetch_repositories(&self, login: &str) -> Result<UserRepositories> {
        let mut repositories: Vec<RepoSummary> = Vec::new();
        let mut total_count: u32 = 0;
        let mut cursor: Option<String> = None;

        loop {
            let variables = json!({
                "login": login,
                "first": PAGE_SIZE,
                "after": cursor,
            });

            let data = self
                .query(queries::USER_REPOSITORIES_QUERY, variables)
                .await?;
            let page = parse_repositories_page(&data["data"]["user"]["repositories"])?;

            total_count = page.total_count;
            repositories.extend(page.repositories);

            match page.next_cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        debug!(
            login = login,
            count = repositories.len(),
            "Fetched repositories"
        );
        Ok(UserRepositories {
            total_count,
            repositories,
        })
    }
}

pub fn parse_profile(user: &Value) -> Result<UserProfile> {
    let login = user["login"]
        .as_str()
        .context("Missing user login")?
        .to_string();
    Ok(UserProfile {
        login,
        name: str_field(user, "name"),
        bio: str_field(user, "bio"),
        followers: user["followers"]["totalCount"].as_u64().unwrap_or(0) as u32,
        following: user["following"]["totalCount"].as_u64().unwrap_or(0) as u32,
        location: str_field(user, "location"),
        company: str_field(user, "company"),
        website_url: str_field(user, "websiteUrl"),
        avatar_url: str_field(user, "avatarUrl"),
        url: str_field(user, "url"),
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchPage {
    pub issue_count: u32,
    pub edges: Vec<PrEdge>,
    /// Cursor of the last raw edge, skipped nodes included; pagination must
    /// resume after the whole page, not after the last kept edge.
    pub last_cursor: Option<String>,
}

pub fn parse_search_page(search: &Value) -> Result<SearchPage> {
    let issue_count = search["issueCount"]
        .as_u64()
        .context("Missing search issueCount")? as u32;
    let edges_json = search["edges"].as_array().context("Missing search edges")?;

    let mut edges = Vec::with_capacity(edges_json.len());
    for edge in edges_json {
        let node = &edge["node"];
        // The search may surface non-PR nodes; skip anything without a number.
        if node.get("number").is_none_or(Value::is_null) {
            continue;
        }
        edges.push(PrEdge {
            pull_request: parse_pull_request(node),
            repo: parse_edge_repo(&node["repository"]),
        });
    }

    let last_cursor = edges_json
        .last()
        .and_then(|e| e["cursor"].as_str())
        .map(|s| s.to_string());

    Ok(SearchPage {
        issue_count,
        edges,
        last_cursor,
    })
}

/// Decide whether another search page is needed after merging `page`.
/// `accumulated` counts kept edges so far, this page included. Returns the
/// cursor to resume from, or `None` when the reported total has been reached
/// or the page was empty.
pub fn next_search_cursor(accumulated: usize, page: &SearchPage) -> Option<String> {
    if accumulated as u32 >= page.issue_count {
        return None;
    }
    page.last_cursor.clone()
}

fn parse_pull_request(node: &Value) -> PullRequestItem {
    PullRequestItem {
        title: str_field(node, "title"),
        state: PrState::parse(node["state"].as_str().unwrap_or("")),
        number: node["number"].as_u64().unwrap_or(0) as u32,
        url: str_field(node, "url"),
        additions: node["additions"].as_u64().unwrap_or(0) as u32,
        deletions: node["deletions"].as_u64().unwrap_or(0) as u32,
        comments: node["comments"]["totalCount"].as_u64().unwrap_or(0) as u32,
        created_at: node["createdAt"]
            .as_str()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default(),
        closed_at: node["closedAt"].as_str().and_then(|s| s.parse().ok()),
    }
}

fn parse_edge_repo(repo: &Value) -> PrEdgeRepo {
    PrEdgeRepo {
        owner: repo["owner"]["login"].as_str().unwrap_or("").to_string(),
        name: str_field(repo, "name"),
        description: str_field(repo, "description"),
        watchers: repo["watchers"]["totalCount"].as_u64().unwrap_or(0) as u32,
        stars: repo["stargazers"]["totalCount"].as_u64().unwrap_or(0) as u32,
        forks: repo["forkCount"].as_u64().unwrap_or(0) as u32,
        lang_name: repo["primaryLanguage"]["name"]
            .as_str()
            .unwrap_or("")
            .to_string(),
        lang_color: repo["primaryLanguage"]["color"]
            .as_str()
            .unwrap_or("")
            .to_string(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RepositoriesPage {
    pub total_count: u32,
    pub repositories: Vec<RepoSummary>,
    pub next_cursor: Option<String>,
}

pub fn parse_repositories_page(repos: &Value) -> Result<RepositoriesPage> {
    let total_count = repos["totalCount"]
        .as_u64()
        .context("Missing repositories totalCount")? as u32;
    let nodes = repos["nodes"]
        .as_array()
        .context("Missing repository nodes")?;

    let repositories = nodes
        .iter()
        .map(|node| RepoSummary {
            name: str_field(node, "name"),
            description: str_field(node, "description"),
            url: str_field(node, "url"),
            watchers: node["watchers"]["totalCount"].as_u64().unwrap_or(0) as u32,
            stars: node["stargazerCount"].as_u64().unwrap_or(0) as u32,
            forks: node["forkCount"].as_u64().unwrap_or(0) as u32,
            lang_name: node["primaryLanguage"]["name"]
                .as_str()
                .unwrap_or("")
                .to_string(),
            lang_color: node["primaryLanguage"]["color"]
                .as_str()
                .unwrap_or("")
                .to_string(),
            open_issues: node["issues"]["totalCount"].as_u64().unwrap_or(0) as u32,
            open_prs: node["pullRequests"]["totalCount"].as_u64().unwrap_or(0) as u32,
            license: node["licenseInfo"]["spdxId"]
                .as_str()
                .unwrap_or("")
                .to_string(),
            created_at: node["createdAt"].as_str().and_then(|s| s.parse().ok()),
            pushed_at: node["pushedAt"].as_str().and_then(|s| s.parse().ok()),
        })
        .collect();

    let page_info = &repos["pageInfo"];
    let next_cursor = if page_info["hasNextPage"].as_bool().unwrap_or(false) {
        page_info["endCursor"].as_str().map(|s| s.to_string())
    } else {
        None
    };

    Ok(RepositoriesPage {
        total_count,
        repositories,
        next_cursor,
    })
}

fn str_field(v: &Value, key: &str) -> String {
    v[key].as_str().unwrap_or("").to_string()
}
