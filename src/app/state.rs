use chrono::{DateTime, Utc};

use crate::github::models::{
    PrOwner, PrRepository, PrState, PullRequestItem, RepoSummary, UserProfile, UserPullRequests,
    UserRepositories,
};

/// Sub-pages of the pull-requests view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrsPage {
    Owners,
    Repos,
    List,
    ListAll,
}

/// Every screen the application can show. One variant per page; page-local
/// state lives in the matching `AppState` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    UserEntry,
    Menu,
    Profile,
    PullRequests(PrsPage),
    Repositories,
    Help,
    About,
    Credits,
}

pub const MENU_ITEMS: [(&str, &str); 4] = [
    ("Profile", "Show the user's profile"),
    ("Pull Requests", "Show pull requests created by the user"),
    ("Repositories", "Show repositories created by the user"),
    ("Help", "Show help menus"),
];

pub const HELP_ITEMS: [(&str, &str); 2] = [
    ("About", "Show about this application"),
    ("Credits", "Show license information for this application"),
];

#[derive(Debug, Default)]
pub struct UserEntryState {
    pub input: String,
    pub error: Option<String>,
    pub checking: bool,
}

impl UserEntryState {
    pub fn reset(&mut self) {
        self.input.clear();
        self.error = None;
        self.checking = false;
    }
}

#[derive(Debug, Default)]
pub struct MenuState {
    pub cursor: usize,
}

/// Profile links selectable with Tab: the account page always, the company
/// when it is an organization handle, the website when present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProfileLink {
    #[default]
    None,
    Account,
    Company,
    Website,
}

#[derive(Debug, Default)]
pub struct ProfileState {
    pub profile: Option<UserProfile>,
    pub link: ProfileLink,
    pub loading: bool,
    pub error: Option<String>,
}

impl ProfileState {
    pub fn cycle_link(&mut self) {
        let Some(profile) = &self.profile else {
            return;
        };
        loop {
            self.link = match self.link {
                ProfileLink::None => ProfileLink::Account,
                ProfileLink::Account => ProfileLink::Company,
                ProfileLink::Company => ProfileLink::Website,
                ProfileLink::Website => ProfileLink::None,
            };
            let available = match self.link {
                ProfileLink::None | ProfileLink::Account => true,
                ProfileLink::Company => profile.company.starts_with('@'),
                ProfileLink::Website => !profile.website_url.is_empty(),
            };
            if available {
                break;
            }
        }
    }

    pub fn selected_url(&self) -> Option<String> {
        let profile = self.profile.as_ref()?;
        match self.link {
            ProfileLink::None => None,
            ProfileLink::Account => Some(profile.url.clone()),
            ProfileLink::Company => {
                let login = profile.company.trim_start_matches('@').trim();
                Some(format!("{}/{}", crate::github::models::GITHUB_BASE_URL, login))
            }
            ProfileLink::Website => Some(profile.website_url.clone()),
        }
    }
}

/// One entry of a sort or filter dialog, with the item count it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RepoSort {
    #[default]
    StarsDesc,
    StarsAsc,
    PushedDesc,
    PushedAsc,
}

impl RepoSort {
    pub const ALL: [RepoSort; 4] = [
        RepoSort::StarsDesc,
        RepoSort::StarsAsc,
        RepoSort::PushedDesc,
        RepoSort::PushedAsc,
    ];

    pub fn next(self) -> Self {
        match self {
            RepoSort::StarsDesc => RepoSort::StarsAsc,
            RepoSort::StarsAsc => RepoSort::PushedDesc,
            RepoSort::PushedDesc => RepoSort::PushedAsc,
            RepoSort::PushedAsc => RepoSort::StarsDesc,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            RepoSort::StarsDesc => RepoSort::PushedAsc,
            RepoSort::StarsAsc => RepoSort::StarsDesc,
            RepoSort::PushedDesc => RepoSort::StarsAsc,
            RepoSort::PushedAsc => RepoSort::PushedDesc,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RepoSort::StarsDesc => "Stars (Desc)",
            RepoSort::StarsAsc => "Stars (Asc)",
            RepoSort::PushedDesc => "Last Pushed (Desc)",
            RepoSort::PushedAsc => "Last Pushed (Asc)",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PrSort {
    #[default]
    CreatedDesc,
    CreatedAsc,
}

impl PrSort {
    pub const ALL: [PrSort; 2] = [PrSort::CreatedDesc, PrSort::CreatedAsc];

    pub fn toggle(self) -> Self {
        match self {
            PrSort::CreatedDesc => PrSort::CreatedAsc,
            PrSort::CreatedAsc => PrSort::CreatedDesc,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PrSort::CreatedDesc => "Created (Desc)",
            PrSort::CreatedAsc => "Created (Asc)",
        }
    }
}

#[derive(Debug, Default)]
pub struct RepositoriesState {
    pub total_count: u32,
    /// Unfiltered fetch-order item set; filters always re-derive from here.
    pub original_items: Vec<RepoSummary>,
    pub items: Vec<RepoSummary>,
    pub cursor: usize,
    pub sort: RepoSort,
    pub langs: Vec<FilterOption>,
    pub lang_idx: usize,
    pub sort_dialog_open: bool,
    pub lang_dialog_open: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl RepositoriesState {
    pub fn set_items(&mut self, repos: UserRepositories) {
        self.total_count = repos.total_count;

        let mut langs: Vec<FilterOption> = vec![FilterOption {
            label: "All".to_string(),
            count: repos.repositories.len(),
        }];
        for repo in &repos.repositories {
            let label = repo.language_label();
            match langs[1..].iter_mut().find(|l| l.label == label) {
                Some(entry) => entry.count += 1,
                None => langs.push(FilterOption {
                    label: label.to_string(),
                    count: 1,
                }),
            }
        }
        // "All" stays first; languages by descending count, then name.
        langs[1..].sort_by(|a, b| b.count.cmp(&a.count).then(a.label.cmp(&b.label)));

        self.items = repos.repositories.clone();
        self.original_items = repos.repositories;
        self.langs = langs;
        self.lang_idx = 0;
        self.sort = RepoSort::StarsDesc;
        self.cursor = 0;
    }

    pub fn cycle_sort(&mut self, reverse: bool) {
        self.sort = if reverse {
            self.sort.prev()
        } else {
            self.sort.next()
        };
        self.sort_items();
        self.cursor = 0;
    }

    pub fn cycle_lang(&mut self, reverse: bool) {
        let n = self.langs.len();
        if n == 0 {
            return;
        }
        self.lang_idx = if reverse {
            (self.lang_idx + n - 1) % n
        } else {
            (self.lang_idx + 1) % n
        };
        self.filter_items();
        self.cursor = 0;
    }

    /// Re-derive the visible set from the unfiltered items, then re-apply the
    /// current sort (the original set is unsorted relative to it).
    fn filter_items(&mut self) {
        let lang = &self.langs[self.lang_idx].label;
        if lang == "All" {
            self.items = self.original_items.clone();
        } else {
            self.items = self
                .original_items
                .iter()
                .filter(|r| r.language_label() == lang)
                .cloned()
                .collect();
        }
        self.sort_items();
    }

    fn sort_items(&mut self) {
        match self.sort {
            RepoSort::StarsDesc => self.items.sort_by(|a, b| b.stars.cmp(&a.stars)),
            RepoSort::StarsAsc => self.items.sort_by(|a, b| a.stars.cmp(&b.stars)),
            RepoSort::PushedDesc => self.items.sort_by(|a, b| b.pushed_at.cmp(&a.pushed_at)),
            RepoSort::PushedAsc => self.items.sort_by(|a, b| a.pushed_at.cmp(&b.pushed_at)),
        }
    }

    pub fn selected(&self) -> Option<&RepoSummary> {
        self.items.get(self.cursor)
    }
}

/// A pull request flattened out of the owner/repo grouping, for the
/// all-pull-requests list.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatPr {
    pub owner: String,
    pub repo: String,
    pub pr: PullRequestItem,
}

impl FlatPr {
    pub fn created_at(&self) -> DateTime<Utc> {
        self.pr.created_at
    }
}

pub const PR_STATUS_FILTERS: [&str; 4] = ["All", "OPEN", "MERGED", "CLOSED"];

#[derive(Debug, Default)]
pub struct ListAllState {
    pub original_items: Vec<FlatPr>,
    pub items: Vec<FlatPr>,
    pub cursor: usize,
    pub sort: PrSort,
    pub statuses: Vec<FilterOption>,
    pub status_idx: usize,
    pub sort_dialog_open: bool,
    pub status_dialog_open: bool,
}

impl ListAllState {
    pub fn set_items(&mut self, prs: &UserPullRequests) {
        let mut items = Vec::new();
        for owner in &prs.owners {
            for repo in &owner.repositories {
                for pr in &repo.pull_requests {
                    items.push(FlatPr {
                        owner: owner.name.clone(),
                        repo: repo.name.clone(),
                        pr: pr.clone(),
                    });
                }
            }
        }

        let count_state = |state: PrState| items.iter().filter(|i| i.pr.state == state).count();
        self.statuses = vec![
            FilterOption {
                label: "All".to_string(),
                count: items.len(),
            },
            FilterOption {
                label: "OPEN".to_string(),
                count: count_state(PrState::Open),
            },
            FilterOption {
                label: "MERGED".to_string(),
                count: count_state(PrState::Merged),
            },
            FilterOption {
                label: "CLOSED".to_string(),
                count: count_state(PrState::Closed),
            },
        ];

        self.items = items.clone();
        self.original_items = items;
        self.status_idx = 0;
        self.sort = PrSort::CreatedDesc;
        self.sort_items();
        self.cursor = 0;
    }

    pub fn toggle_sort(&mut self) {
        self.sort = self.sort.toggle();
        self.sort_items();
        self.cursor = 0;
    }

    pub fn cycle_status(&mut self, reverse: bool) {
        let n = self.statuses.len();
        if n == 0 {
            return;
        }
        self.status_idx = if reverse {
            (self.status_idx + n - 1) % n
        } else {
            (self.status_idx + 1) % n
        };
        self.filter_items();
        self.cursor = 0;
    }

    fn filter_items(&mut self) {
        let status = &self.statuses[self.status_idx].label;
        if status == "All" {
            self.items = self.original_items.clone();
        } else {
            self.items = self
                .original_items
                .iter()
                .filter(|i| i.pr.state.as_str() == status)
                .cloned()
                .collect();
        }
        self.sort_items();
    }

    fn sort_items(&mut self) {
        match self.sort {
            PrSort::CreatedDesc => self.items.sort_by(|a, b| b.created_at().cmp(&a.created_at())),
            PrSort::CreatedAsc => self.items.sort_by(|a, b| a.created_at().cmp(&b.created_at())),
        }
    }

    pub fn selected(&self) -> Option<&FlatPr> {
        self.items.get(self.cursor)
    }
}

#[derive(Debug, Default)]
pub struct PullRequestsState {
    pub data: Option<UserPullRequests>,
    pub loading: bool,
    pub error: Option<String>,
    pub owner_cursor: usize,
    pub selected_owner: Option<usize>,
    pub repo_cursor: usize,
    pub selected_repo: Option<usize>,
    pub list_cursor: usize,
    pub list_all: ListAllState,
}

impl PullRequestsState {
    pub fn owners(&self) -> &[PrOwner] {
        self.data.as_ref().map(|d| d.owners.as_slice()).unwrap_or(&[])
    }

    pub fn current_owner(&self) -> Option<&PrOwner> {
        self.owners().get(self.selected_owner?)
    }

    pub fn current_repos(&self) -> &[PrRepository] {
        self.current_owner()
            .map(|o| o.repositories.as_slice())
            .unwrap_or(&[])
    }

    pub fn current_repo(&self) -> Option<&PrRepository> {
        self.current_repos().get(self.selected_repo?)
    }

    pub fn current_prs(&self) -> &[PullRequestItem] {
        self.current_repo()
            .map(|r| r.pull_requests.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Default)]
pub struct HelpState {
    pub cursor: usize,
}

#[derive(Debug)]
pub struct AppState {
    pub page: Page,
    /// The target user confirmed on the entry page.
    pub user: String,
    /// Monotonic fetch sequence; completion actions carrying an older value
    /// belong to an abandoned context and are discarded.
    pub fetch_seq: u64,
    pub spinner_frame: usize,
    pub should_quit: bool,

    pub user_entry: UserEntryState,
    pub menu: MenuState,
    pub profile: ProfileState,
    pub pull_requests: PullRequestsState,
    pub repositories: RepositoriesState,
    pub help: HelpState,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            page: Page::UserEntry,
            user: String::new(),
            fetch_seq: 0,
            spinner_frame: 0,
            should_quit: false,
            user_entry: UserEntryState::default(),
            menu: MenuState::default(),
            profile: ProfileState::default(),
            pull_requests: PullRequestsState::default(),
            repositories: RepositoriesState::default(),
            help: HelpState::default(),
        }
    }

    pub fn next_seq(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.fetch_seq
    }

    /// Whether the active page is waiting on a fetch; key input other than
    /// quit is ignored while true.
    pub fn loading(&self) -> bool {
        match self.page {
            Page::UserEntry => self.user_entry.checking,
            Page::Profile => self.profile.loading,
            Page::PullRequests(_) => self.pull_requests.loading,
            Page::Repositories => self.repositories.loading,
            _ => false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
