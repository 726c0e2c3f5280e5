pub const USER_EXISTS_QUERY: &str = r#"
query($login: String!) {
  user(login: $login) {
    login
  }
}
"#;

pub const USER_PROFILE_QUERY: &str = r#"
query($login: String!) {
  user(login: $login) {
    login
    name
    bio
    location
    company
    websiteUrl
    avatarUrl
    url
    followers {
      totalCount
    }
    following {
      totalCount
    }
  }
}
"#;

pub const USER_PULL_REQUESTS_QUERY: &str = r#"
query($searchQuery: String!, $first: Int!, $after: String) {
  search(query: $searchQuery, type: ISSUE, first: $first, after: $after) {
    issueCount
    edges {
      cursor
      node {
        ... on PullRequest {
          title
          state
          number
          url
          additions
          deletions
          comments {
            totalCount
          }
          createdAt
          closedAt
          repository {
            name
            description
            owner { login }
            primaryLanguage {
              name
              color
            }
            stargazers {
              totalCount
            }
            watchers {
              totalCount
            }
            forkCount
          }
        }
      }
    }
  }
}
"#;

pub const USER_REPOSITORIES_QUERY: &str = r#"
query($login: String!, $first: Int!, $after: String) {
  user(login: $login) {
    repositories(first: $first, after: $after, privacy: PUBLIC, isFork: false, orderBy: {field: STARGAZERS, direction: DESC}) {
      totalCount
      pageInfo {
        hasNextPage
        endCursor
      }
      nodes {
        name
        description
        url
        stargazerCount
        forkCount
        watchers {
          totalCount
        }
        primaryLanguage {
          name
          color
        }
        issues(states: OPEN) {
          totalCount
        }
        pullRequests(states: OPEN) {
          totalCount
        }
        licenseInfo {
          spdxId
        }
        createdAt
        pushedAt
      }
    }
  }
}
"#;
