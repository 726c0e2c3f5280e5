use serde_json::json;

use ghprofile::github::graphql::{
    next_search_cursor, parse_profile, parse_repositories_page, parse_search_page,
};
use ghprofile::github::models::PrState;

#[test]
fn test_parse_profile_full() {
    let user = json!({
        "login": "octocat",
        "name": "The Octocat",
        "bio": "Mascot",
        "followers": { "totalCount": 100 },
        "following": { "totalCount": 9 },
        "location": "San Francisco",
        "company": "@github",
        "websiteUrl": "https://octocat.example",
        "avatarUrl": "https://avatars.example/octocat",
        "url": "https://github.com/octocat"
    });
    let profile = parse_profile(&user).unwrap();
    assert_eq!(profile.login, "octocat");
    assert_eq!(profile.name, "The Octocat");
    assert_eq!(profile.followers, 100);
    assert_eq!(profile.following, 9);
    assert_eq!(profile.company, "@github");
    assert_eq!(profile.website_url, "https://octocat.example");
}

#[test]
fn test_parse_profile_nullable_fields_default_empty() {
    let user = json!({
        "login": "octocat",
        "name": null,
        "bio": null,
        "followers": { "totalCount": 0 },
        "following": { "totalCount": 0 },
        "location": null,
        "company": null,
        "websiteUrl": null,
        "avatarUrl": "",
        "url": "https://github.com/octocat"
    });
    let profile = parse_profile(&user).unwrap();
    assert_eq!(profile.name, "");
    assert_eq!(profile.bio, "");
    assert_eq!(profile.company, "");
}

#[test]
fn test_parse_profile_requires_login() {
    let user = json!({ "name": "No Login" });
    assert!(parse_profile(&user).is_err());
}

fn search_fixture() -> serde_json::Value {
    json!({
        "issueCount": 2,
        "edges": [
            {
                "cursor": "Y3Vyc29yOjE=",
                "node": {
                    "title": "Fix the widget",
                    "state": "MERGED",
                    "number": 42,
                    "url": "https://github.com/acme/widget/pull/42",
                    "additions": 10,
                    "deletions": 3,
                    "comments": { "totalCount": 4 },
                    "createdAt": "2024-05-01T12:00:00Z",
                    "closedAt": "2024-05-02T12:00:00Z",
                    "repository": {
                        "owner": { "login": "acme" },
                        "name": "widget",
                        "description": "A widget",
                        "watchers": { "totalCount": 3 },
                        "stargazers": { "totalCount": 50 },
                        "forkCount": 7,
                        "primaryLanguage": { "name": "Rust", "color": "#dea584" }
                    }
                }
            },
            {
                "cursor": "Y3Vyc29yOjI=",
                "node": {}
            },
            {
                "cursor": "Y3Vyc29yOjM=",
                "node": {
                    "title": "Open one",
                    "state": "OPEN",
                    "number": 7,
                    "url": "https://github.com/beta/gizmo/pull/7",
                    "additions": 1,
                    "deletions": 1,
                    "comments": { "totalCount": 0 },
                    "createdAt": "2024-06-01T00:00:00Z",
                    "closedAt": null,
                    "repository": {
                        "owner": { "login": "beta" },
                        "name": "gizmo",
                        "description": null,
                        "watchers": { "totalCount": 1 },
                        "stargazers": { "totalCount": 2 },
                        "forkCount": 0,
                        "primaryLanguage": null
                    }
                }
            }
        ]
    })
}

#[test]
fn test_parse_search_page_skips_non_pr_nodes() {
    let page = parse_search_page(&search_fixture()).unwrap();
    assert_eq!(page.issue_count, 2);
    assert_eq!(page.edges.len(), 2);

    let first = &page.edges[0];
    assert_eq!(first.pull_request.number, 42);
    assert_eq!(first.pull_request.state, PrState::Merged);
    assert!(first.pull_request.closed_at.is_some());
    assert_eq!(first.repo.owner, "acme");
    assert_eq!(first.repo.stars, 50);
    assert_eq!(first.repo.lang_name, "Rust");

    let second = &page.edges[1];
    assert_eq!(second.pull_request.state, PrState::Open);
    assert!(second.pull_request.closed_at.is_none());
    assert_eq!(second.repo.description, "");
    assert_eq!(second.repo.lang_name, "");
}

#[test]
fn test_parse_search_page_requires_edges() {
    let page = json!({ "issueCount": 0 });
    assert!(parse_search_page(&page).is_err());
}

#[test]
fn test_last_cursor_comes_from_raw_edges() {
    // The trailing edge is a non-PR node: it is dropped from the kept edges
    // but must still supply the resume cursor, or the next page would
    // overlap this one.
    let fixture = json!({
        "issueCount": 5,
        "edges": [
            {
                "cursor": "Y3Vyc29yOjE=",
                "node": {
                    "title": "Open one",
                    "state": "OPEN",
                    "number": 7,
                    "url": "https://github.com/beta/gizmo/pull/7",
                    "additions": 1,
                    "deletions": 1,
                    "comments": { "totalCount": 0 },
                    "createdAt": "2024-06-01T00:00:00Z",
                    "closedAt": null,
                    "repository": {
                        "owner": { "login": "beta" },
                        "name": "gizmo",
                        "description": null,
                        "watchers": { "totalCount": 1 },
                        "stargazers": { "totalCount": 2 },
                        "forkCount": 0,
                        "primaryLanguage": null
                    }
                }
            },
            { "cursor": "Y3Vyc29yOjI=", "node": {} }
        ]
    });
    let page = parse_search_page(&fixture).unwrap();
    assert_eq!(page.edges.len(), 1);
    assert_eq!(page.last_cursor.as_deref(), Some("Y3Vyc29yOjI="));
}

#[test]
fn test_pagination_stops_at_reported_total() {
    let page = parse_search_page(&search_fixture()).unwrap();
    assert_eq!(page.issue_count, 2);
    // Both reported items accumulated: no further page.
    assert_eq!(next_search_cursor(2, &page), None);
    assert_eq!(next_search_cursor(3, &page), None);
}

#[test]
fn test_pagination_continues_below_total() {
    let mut page = parse_search_page(&search_fixture()).unwrap();
    page.issue_count = 10;
    assert_eq!(
        next_search_cursor(2, &page).as_deref(),
        Some("Y3Vyc29yOjM=")
    );
}

#[test]
fn test_pagination_stops_on_empty_page() {
    // A short total never reached: the empty page still terminates.
    let fixture = json!({ "issueCount": 10, "edges": [] });
    let page = parse_search_page(&fixture).unwrap();
    assert!(page.edges.is_empty());
    assert_eq!(next_search_cursor(3, &page), None);
}

#[test]
fn test_parse_repositories_page() {
    let repos = json!({
        "totalCount": 12,
        "nodes": [
            {
                "name": "widget",
                "description": "A widget",
                "url": "https://github.com/octocat/widget",
                "watchers": { "totalCount": 2 },
                "stargazerCount": 30,
                "forkCount": 4,
                "primaryLanguage": { "name": "Rust", "color": "#dea584" },
                "issues": { "totalCount": 5 },
                "pullRequests": { "totalCount": 1 },
                "licenseInfo": { "spdxId": "MIT" },
                "createdAt": "2023-01-01T00:00:00Z",
                "pushedAt": "2024-07-01T00:00:00Z"
            },
            {
                "name": "notes",
                "description": null,
                "url": "https://github.com/octocat/notes",
                "watchers": { "totalCount": 0 },
                "stargazerCount": 0,
                "forkCount": 0,
                "primaryLanguage": null,
                "issues": { "totalCount": 0 },
                "pullRequests": { "totalCount": 0 },
                "licenseInfo": null,
                "createdAt": "2023-02-01T00:00:00Z",
                "pushedAt": null
            }
        ],
        "pageInfo": { "hasNextPage": true, "endCursor": "abc123" }
    });

    let page = parse_repositories_page(&repos).unwrap();
    assert_eq!(page.total_count, 12);
    assert_eq!(page.repositories.len(), 2);
    assert_eq!(page.next_cursor.as_deref(), Some("abc123"));

    let widget = &page.repositories[0];
    assert_eq!(widget.stars, 30);
    assert_eq!(widget.license, "MIT");
    assert_eq!(widget.language_label(), "Rust");
    assert!(widget.pushed_at.is_some());

    let notes = &page.repositories[1];
    assert_eq!(notes.language_label(), "None");
    assert_eq!(notes.license, "");
    assert!(notes.pushed_at.is_none());
}

#[test]
fn test_parse_repositories_last_page_has_no_cursor() {
    let repos = json!({
        "totalCount": 0,
        "nodes": [],
        "pageInfo": { "hasNextPage": false, "endCursor": null }
    });
    let page = parse_repositories_page(&repos).unwrap();
    assert!(page.repositories.is_empty());
    assert!(page.next_cursor.is_none());
}
