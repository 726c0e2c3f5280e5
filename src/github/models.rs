use chrono::{DateTime, Utc};

pub const GITHUB_BASE_URL: &str = "https://github.com";

pub fn repository_url(owner: &str, name: &str) -> String {
    format!("{}/{}/{}", GITHUB_BASE_URL, owner, name)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserProfile {
    pub login: String,
    pub name: String,
    pub bio: String,
    pub followers: u32,
    pub following: u32,
    pub location: String,
    pub company: String,
    pub website_url: String,
    pub avatar_url: String,
    pub url: String,
}

/// A repository as shown on the Repositories page. Ordering as returned by
/// the remote (stargazers descending) until the view re-sorts it.
#[derive(Debug, Clone, PartialEq)]
pub struct RepoSummary {
    pub name: String,
    pub description: String,
    pub url: String,
    pub watchers: u32,
    pub stars: u32,
    pub forks: u32,
    pub lang_name: String,
    pub lang_color: String,
    pub open_issues: u32,
    pub open_prs: u32,
    pub license: String,
    pub created_at: Option<DateTime<Utc>>,
    pub pushed_at: Option<DateTime<Utc>>,
}

impl RepoSummary {
    /// Label used for language filtering; repositories without a primary
    /// language share the "None" bucket.
    pub fn language_label(&self) -> &str {
        if self.lang_name.is_empty() {
            "None"
        } else {
            &self.lang_name
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserRepositories {
    pub total_count: u32,
    pub repositories: Vec<RepoSummary>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrState {
    Open,
    Merged,
    Closed,
}

impl PrState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrState::Open => "OPEN",
            PrState::Merged => "MERGED",
            PrState::Closed => "CLOSED",
        }
    }

    /// The search query is scoped to `is:pr`, so the API reports exactly
    /// these three states; anything unexpected maps to Closed.
    pub fn parse(s: &str) -> Self {
        match s {
            "OPEN" => PrState::Open,
            "MERGED" => PrState::Merged,
            _ => PrState::Closed,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PullRequestItem {
    pub title: String,
    pub state: PrState,
    pub number: u32,
    pub url: String,
    pub additions: u32,
    pub deletions: u32,
    pub comments: u32,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

/// Repository metadata carried on each search edge. Captured once per
/// (owner, name) pair during aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct PrEdgeRepo {
    pub owner: String,
    pub name: String,
    pub description: String,
    pub watchers: u32,
    pub stars: u32,
    pub forks: u32,
    pub lang_name: String,
    pub lang_color: String,
}

impl PrEdgeRepo {
    pub fn key(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// One item of a paginated search result: the pull-request node and its
/// repository.
#[derive(Debug, Clone, PartialEq)]
pub struct PrEdge {
    pub pull_request: PullRequestItem,
    pub repo: PrEdgeRepo,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrRepository {
    pub name: String,
    pub description: String,
    pub url: String,
    pub watchers: u32,
    pub stars: u32,
    pub forks: u32,
    pub lang_name: String,
    pub lang_color: String,
    pub pull_requests: Vec<PullRequestItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrOwner {
    pub name: String,
    pub repositories: Vec<PrRepository>,
}

impl PrOwner {
    pub fn pr_count(&self) -> usize {
        self.repositories.iter().map(|r| r.pull_requests.len()).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPullRequests {
    pub total_count: u32,
    pub owners: Vec<PrOwner>,
}
