use crate::app::actions::{Action, SideEffect};
use crate::app::state::{AppState, HELP_ITEMS, MENU_ITEMS, Page, PrsPage};

/// Total dispatch from (state, action) to the next state plus side effects.
/// Pairs that make no sense on the current page fall through as no-ops.
pub fn update(state: &mut AppState, action: Action) -> Vec<SideEffect> {
    match action {
        Action::Quit => {
            state.should_quit = true;
            vec![]
        }
        Action::Tick => {
            state.spinner_frame = state.spinner_frame.wrapping_add(1);
            vec![]
        }
        Action::MoveUp => {
            move_cursor(state, true);
            vec![]
        }
        Action::MoveDown => {
            move_cursor(state, false);
            vec![]
        }
        Action::InputChar(ch) => {
            if state.page == Page::UserEntry && !state.user_entry.checking {
                state.user_entry.input.push(ch);
            }
            vec![]
        }
        Action::InputBackspace => {
            if state.page == Page::UserEntry && !state.user_entry.checking {
                state.user_entry.input.pop();
            }
            vec![]
        }
        Action::Select => select(state),
        Action::Back => {
            back(state);
            vec![]
        }
        Action::SelectLink => {
            if state.page == Page::Profile {
                state.profile.cycle_link();
            }
            vec![]
        }
        Action::ToggleListAll => {
            match state.page {
                Page::PullRequests(PrsPage::Owners) => {
                    if let Some(data) = &state.pull_requests.data {
                        let data = data.clone();
                        state.pull_requests.list_all.set_items(&data);
                        state.page = Page::PullRequests(PrsPage::ListAll);
                    }
                }
                Page::PullRequests(PrsPage::ListAll) => {
                    state.page = Page::PullRequests(PrsPage::Owners);
                }
                _ => {}
            }
            vec![]
        }
        Action::OpenSortDialog => {
            match state.page {
                Page::Repositories => state.repositories.sort_dialog_open = true,
                Page::PullRequests(PrsPage::ListAll) => {
                    state.pull_requests.list_all.sort_dialog_open = true;
                }
                _ => {}
            }
            vec![]
        }
        Action::OpenLangDialog => {
            if state.page == Page::Repositories {
                state.repositories.lang_dialog_open = true;
            }
            vec![]
        }
        Action::OpenStatusDialog => {
            if state.page == Page::PullRequests(PrsPage::ListAll) {
                state.pull_requests.list_all.status_dialog_open = true;
            }
            vec![]
        }
        Action::DialogNext => {
            dialog_step(state, false);
            vec![]
        }
        Action::DialogPrev => {
            dialog_step(state, true);
            vec![]
        }
        Action::DialogClose => {
            close_dialogs(state);
            vec![]
        }
        Action::OpenBrowser => open_browser(state),
        Action::UserChecked { seq, id, exists } => {
            if seq != state.fetch_seq {
                return vec![];
            }
            state.user_entry.checking = false;
            if exists {
                state.user_entry.error = None;
                state.user = id;
                state.menu.cursor = 0;
                state.page = Page::Menu;
            } else {
                state.user_entry.error = Some("user not found".to_string());
            }
            vec![]
        }
        Action::ProfileLoaded { seq, result } => {
            if seq != state.fetch_seq {
                return vec![];
            }
            state.profile.loading = false;
            match result {
                Ok(profile) => {
                    state.profile.error = None;
                    state.profile.profile = Some(profile);
                    state.profile.link = Default::default();
                }
                Err(msg) => state.profile.error = Some(msg),
            }
            vec![]
        }
        Action::PullRequestsLoaded { seq, result } => {
            if seq != state.fetch_seq {
                return vec![];
            }
            let prs = &mut state.pull_requests;
            prs.loading = false;
            match result {
                Ok(data) => {
                    prs.error = None;
                    prs.owner_cursor = 0;
                    prs.selected_owner = None;
                    prs.selected_repo = None;
                    prs.list_all.set_items(&data);
                    prs.data = Some(data);
                }
                Err(msg) => prs.error = Some(msg),
            }
            vec![]
        }
        Action::RepositoriesLoaded { seq, result } => {
            if seq != state.fetch_seq {
                return vec![];
            }
            state.repositories.loading = false;
            match result {
                Ok(repos) => {
                    state.repositories.error = None;
                    state.repositories.set_items(repos);
                }
                Err(msg) => state.repositories.error = Some(msg),
            }
            vec![]
        }
    }
}

fn move_cursor(state: &mut AppState, up: bool) {
    let (cursor, len) = match state.page {
        Page::Menu => (&mut state.menu.cursor, MENU_ITEMS.len()),
        Page::Help => (&mut state.help.cursor, HELP_ITEMS.len()),
        Page::Repositories => (
            &mut state.repositories.cursor,
            state.repositories.items.len(),
        ),
        Page::PullRequests(PrsPage::Owners) => {
            let len = state.pull_requests.owners().len();
            (&mut state.pull_requests.owner_cursor, len)
        }
        Page::PullRequests(PrsPage::Repos) => {
            let len = state.pull_requests.current_repos().len();
            (&mut state.pull_requests.repo_cursor, len)
        }
        Page::PullRequests(PrsPage::List) => {
            let len = state.pull_requests.current_prs().len();
            (&mut state.pull_requests.list_cursor, len)
        }
        Page::PullRequests(PrsPage::ListAll) => {
            let len = state.pull_requests.list_all.items.len();
            (&mut state.pull_requests.list_all.cursor, len)
        }
        _ => return,
    };

    if up {
        *cursor = cursor.saturating_sub(1);
    } else if *cursor + 1 < len {
        *cursor += 1;
    }
}

fn select(state: &mut AppState) -> Vec<SideEffect> {
    match state.page {
        Page::UserEntry => {
            let id = state.user_entry.input.trim().to_string();
            // Empty input is a no-op, not an error.
            if id.is_empty() || state.user_entry.checking {
                return vec![];
            }
            state.user_entry.checking = true;
            state.user_entry.error = None;
            let seq = state.next_seq();
            vec![SideEffect::CheckUser { seq, id }]
        }
        Page::Menu => match state.menu.cursor {
            0 => {
                state.page = Page::Profile;
                state.profile.loading = true;
                state.profile.error = None;
                let seq = state.next_seq();
                vec![SideEffect::FetchProfile {
                    seq,
                    id: state.user.clone(),
                }]
            }
            1 => {
                state.page = Page::PullRequests(PrsPage::Owners);
                state.pull_requests.loading = true;
                state.pull_requests.error = None;
                let seq = state.next_seq();
                vec![SideEffect::FetchPullRequests {
                    seq,
                    id: state.user.clone(),
                }]
            }
            2 => {
                state.page = Page::Repositories;
                state.repositories.loading = true;
                state.repositories.error = None;
                let seq = state.next_seq();
                vec![SideEffect::FetchRepositories {
                    seq,
                    id: state.user.clone(),
                }]
            }
            _ => {
                state.page = Page::Help;
                state.help.cursor = 0;
                vec![]
            }
        },
        Page::PullRequests(PrsPage::Owners) => {
            let prs = &mut state.pull_requests;
            if prs.owner_cursor < prs.owners().len() {
                prs.selected_owner = Some(prs.owner_cursor);
                // New parent: child list starts from the top.
                prs.repo_cursor = 0;
                state.page = Page::PullRequests(PrsPage::Repos);
            }
            vec![]
        }
        Page::PullRequests(PrsPage::Repos) => {
            let prs = &mut state.pull_requests;
            if prs.repo_cursor < prs.current_repos().len() {
                prs.selected_repo = Some(prs.repo_cursor);
                prs.list_cursor = 0;
                state.page = Page::PullRequests(PrsPage::List);
            }
            vec![]
        }
        Page::Help => {
            state.page = match state.help.cursor {
                0 => Page::About,
                _ => Page::Credits,
            };
            vec![]
        }
        _ => vec![],
    }
}

fn back(state: &mut AppState) {
    state.page = match state.page {
        Page::UserEntry => Page::UserEntry,
        Page::Menu => {
            state.user_entry.reset();
            Page::UserEntry
        }
        Page::Profile => Page::Menu,
        Page::Repositories => Page::Menu,
        Page::PullRequests(PrsPage::Owners) => Page::Menu,
        Page::PullRequests(PrsPage::Repos) => Page::PullRequests(PrsPage::Owners),
        Page::PullRequests(PrsPage::List) => Page::PullRequests(PrsPage::Repos),
        Page::PullRequests(PrsPage::ListAll) => Page::Menu,
        Page::Help => Page::Menu,
        Page::About | Page::Credits => Page::Help,
    };
}

fn dialog_step(state: &mut AppState, reverse: bool) {
    match state.page {
        Page::Repositories => {
            if state.repositories.sort_dialog_open {
                state.repositories.cycle_sort(reverse);
            } else if state.repositories.lang_dialog_open {
                state.repositories.cycle_lang(reverse);
            }
        }
        Page::PullRequests(PrsPage::ListAll) => {
            let list_all = &mut state.pull_requests.list_all;
            if list_all.sort_dialog_open {
                list_all.toggle_sort();
            } else if list_all.status_dialog_open {
                list_all.cycle_status(reverse);
            }
        }
        _ => {}
    }
}

fn close_dialogs(state: &mut AppState) {
    state.repositories.sort_dialog_open = false;
    state.repositories.lang_dialog_open = false;
    state.pull_requests.list_all.sort_dialog_open = false;
    state.pull_requests.list_all.status_dialog_open = false;
}

fn open_browser(state: &mut AppState) -> Vec<SideEffect> {
    let url = match state.page {
        Page::Profile => state.profile.selected_url(),
        Page::Repositories => state.repositories.selected().map(|r| r.url.clone()),
        Page::PullRequests(PrsPage::List) => {
            let prs = &state.pull_requests;
            prs.current_prs().get(prs.list_cursor).map(|pr| pr.url.clone())
        }
        Page::PullRequests(PrsPage::ListAll) => state
            .pull_requests
            .list_all
            .selected()
            .map(|i| i.pr.url.clone()),
        _ => None,
    };
    match url {
        Some(url) => vec![SideEffect::OpenUrl(url)],
        None => vec![],
    }
}
