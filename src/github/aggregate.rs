//! Regroups the flat, recency-ordered search edge stream into the nested
//! Owner -> Repository -> PullRequest structure the UI navigates.

use std::collections::HashMap;

use super::models::{
    PrEdge, PrEdgeRepo, PrOwner, PrRepository, PullRequestItem, UserPullRequests, repository_url,
};

/// A map that remembers first-seen key order. Insertion order preservation is
/// the only property the grouping needs, so a key sequence plus a lookup
/// table is enough.
struct OrderedMap<V> {
    keys: Vec<String>,
    entries: HashMap<String, V>,
}

impl<V> OrderedMap<V> {
    fn new() -> Self {
        Self {
            keys: Vec::new(),
            entries: HashMap::new(),
        }
    }

    fn entry_or_insert_with(&mut self, key: &str, default: impl FnOnce() -> V) -> &mut V {
        if !self.entries.contains_key(key) {
            self.keys.push(key.to_string());
        }
        self.entries.entry(key.to_string()).or_insert_with(default)
    }

    fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    fn into_entries(self) -> impl Iterator<Item = (String, V)> {
        let mut entries = self.entries;
        self.keys
            .into_iter()
            .filter_map(move |key| entries.remove(&key).map(|value| (key, value)))
    }
}

/// Build the grouped view over all fetched edges.
///
/// Edges arrive interleaved by recency (`sort:created-desc` across all
/// repositories), not grouped, so this runs in passes: first capture each
/// repository's metadata from the edge that mentions it first, then bucket
/// the pull requests under (owner, repo), then walk both maps in first-seen
/// order to produce the final structure.
pub fn group_pull_requests(total_count: u32, edges: &[PrEdge]) -> UserPullRequests {
    let mut repo_meta: OrderedMap<PrEdgeRepo> = OrderedMap::new();
    for edge in edges {
        repo_meta.entry_or_insert_with(&edge.repo.key(), || edge.repo.clone());
    }

    let mut owners: OrderedMap<OrderedMap<Vec<PullRequestItem>>> = OrderedMap::new();
    for edge in edges {
        owners
            .entry_or_insert_with(&edge.repo.owner, OrderedMap::new)
            .entry_or_insert_with(&edge.repo.name, Vec::new)
            .push(edge.pull_request.clone());
    }

    let mut grouped = Vec::new();
    for (owner_name, repos) in owners.into_entries() {
        let mut repositories = Vec::new();
        for (repo_name, pull_requests) in repos.into_entries() {
            let key = format!("{}/{}", owner_name, repo_name);
            let Some(meta) = repo_meta.get(&key) else {
                continue;
            };
            repositories.push(PrRepository {
                name: meta.name.clone(),
                description: meta.description.clone(),
                url: repository_url(&owner_name, &repo_name),
                watchers: meta.watchers,
                stars: meta.stars,
                forks: meta.forks,
                lang_name: meta.lang_name.clone(),
                lang_color: meta.lang_color.clone(),
                pull_requests,
            });
        }
        grouped.push(PrOwner {
            name: owner_name,
            repositories,
        });
    }

    UserPullRequests {
        total_count,
        owners: grouped,
    }
}
