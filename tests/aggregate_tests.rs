use chrono::{Duration, Utc};

use ghprofile::github::aggregate::group_pull_requests;
use ghprofile::github::models::{PrEdge, PrEdgeRepo, PrState, PullRequestItem};

fn make_edge(owner: &str, repo: &str, number: u32, stars: u32) -> PrEdge {
    PrEdge {
        pull_request: PullRequestItem {
            title: format!("PR #{}", number),
            state: PrState::Open,
            number,
            url: format!("https://github.com/{}/{}/pull/{}", owner, repo, number),
            additions: 1,
            deletions: 1,
            comments: 0,
            created_at: Utc::now() - Duration::days(number as i64),
            closed_at: None,
        },
        repo: PrEdgeRepo {
            owner: owner.into(),
            name: repo.into(),
            description: format!("{} description", repo),
            watchers: 1,
            stars,
            forks: 0,
            lang_name: "Rust".into(),
            lang_color: "#dea584".into(),
        },
    }
}

#[test]
fn test_empty_edges_give_empty_grouping() {
    let grouped = group_pull_requests(0, &[]);
    assert_eq!(grouped.total_count, 0);
    assert!(grouped.owners.is_empty());
}

#[test]
fn test_groups_by_owner_then_repository() {
    let edges = vec![
        make_edge("acme", "widget", 3, 10),
        make_edge("beta", "gizmo", 2, 5),
        make_edge("acme", "widget", 1, 10),
    ];
    let grouped = group_pull_requests(3, &edges);

    assert_eq!(grouped.total_count, 3);
    assert_eq!(grouped.owners.len(), 2);

    let acme = &grouped.owners[0];
    assert_eq!(acme.name, "acme");
    assert_eq!(acme.repositories.len(), 1);
    assert_eq!(acme.repositories[0].name, "widget");
    let numbers: Vec<u32> = acme.repositories[0]
        .pull_requests
        .iter()
        .map(|pr| pr.number)
        .collect();
    assert_eq!(numbers, vec![3, 1]);

    let beta = &grouped.owners[1];
    assert_eq!(beta.name, "beta");
    assert_eq!(beta.repositories[0].pull_requests.len(), 1);
}

#[test]
fn test_owner_order_is_first_seen() {
    let edges = vec![
        make_edge("zeta", "one", 1, 0),
        make_edge("alpha", "two", 2, 0),
        make_edge("zeta", "three", 3, 0),
    ];
    let grouped = group_pull_requests(3, &edges);
    let names: Vec<&str> = grouped.owners.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["zeta", "alpha"]);
    let zeta_repos: Vec<&str> = grouped.owners[0]
        .repositories
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(zeta_repos, vec!["one", "three"]);
}

#[test]
fn test_repository_metadata_from_first_edge() {
    let mut second = make_edge("acme", "widget", 2, 99);
    second.repo.description = "changed later".into();
    let edges = vec![make_edge("acme", "widget", 1, 10), second];
    let grouped = group_pull_requests(2, &edges);

    let repo = &grouped.owners[0].repositories[0];
    assert_eq!(repo.stars, 10);
    assert_eq!(repo.description, "widget description");
    assert_eq!(repo.url, "https://github.com/acme/widget");
    assert_eq!(repo.pull_requests.len(), 2);
}

#[test]
fn test_same_repo_name_under_different_owners() {
    let edges = vec![
        make_edge("acme", "tools", 1, 1),
        make_edge("beta", "tools", 2, 2),
    ];
    let grouped = group_pull_requests(2, &edges);
    assert_eq!(grouped.owners.len(), 2);
    assert_eq!(grouped.owners[0].repositories[0].stars, 1);
    assert_eq!(grouped.owners[1].repositories[0].stars, 2);
}

#[test]
fn test_total_count_is_reported_not_derived() {
    // The remote total can exceed the edges actually fetched.
    let edges = vec![make_edge("acme", "widget", 1, 1)];
    let grouped = group_pull_requests(40, &edges);
    assert_eq!(grouped.total_count, 40);
    assert_eq!(grouped.owners[0].pr_count(), 1);
}
