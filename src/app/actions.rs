use crate::github::models::{UserProfile, UserPullRequests, UserRepositories};

/// Discrete events driving the state machine: key-derived events from the
/// terminal and completion events from background fetch tasks. Completion
/// variants carry the fetch sequence captured at dispatch time.
#[derive(Debug)]
pub enum Action {
    Quit,
    Tick,
    MoveUp,
    MoveDown,
    Select,
    Back,
    InputChar(char),
    InputBackspace,
    OpenBrowser,
    SelectLink,
    ToggleListAll,
    OpenSortDialog,
    OpenLangDialog,
    OpenStatusDialog,
    DialogNext,
    DialogPrev,
    DialogClose,
    UserChecked {
        seq: u64,
        id: String,
        exists: bool,
    },
    ProfileLoaded {
        seq: u64,
        result: Result<UserProfile, String>,
    },
    PullRequestsLoaded {
        seq: u64,
        result: Result<UserPullRequests, String>,
    },
    RepositoriesLoaded {
        seq: u64,
        result: Result<UserRepositories, String>,
    },
}

/// Work the update function asks the event loop to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideEffect {
    CheckUser { seq: u64, id: String },
    FetchProfile { seq: u64, id: String },
    FetchPullRequests { seq: u64, id: String },
    FetchRepositories { seq: u64, id: String },
    OpenUrl(String),
}
