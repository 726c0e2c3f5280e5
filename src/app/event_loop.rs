use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::app::actions::{Action, SideEffect};
use crate::app::state::{AppState, Page, PrsPage};
use crate::app::update::update;
use crate::app::view;
use crate::github::GithubClient;

pub async fn run(client: GithubClient) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_loop(&mut terminal, client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    client: GithubClient,
) -> Result<()> {
    let mut state = AppState::new();

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    let mut event_stream = crossterm::event::EventStream::new();
    let mut spinner_timer = tokio::time::interval(tokio::time::Duration::from_millis(120));

    loop {
        // Render
        terminal.draw(|f| view::render(f, &state))?;

        if state.should_quit {
            break;
        }

        // Wait for events
        tokio::select! {
            // Terminal events
            maybe_event = event_stream.next() => {
                if let Some(Ok(event)) = maybe_event
                    && let Some(action) = map_event_to_action(&event, &state) {
                        let effects = update(&mut state, action);
                        for effect in effects {
                            spawn_side_effect(effect, &client, &action_tx);
                        }
                    }
            }
            // Actions from background tasks
            Some(action) = action_rx.recv() => {
                let effects = update(&mut state, action);
                for effect in effects {
                    spawn_side_effect(effect, &client, &action_tx);
                }
            }
            // Spinner animation while a fetch is in flight
            _ = spinner_timer.tick() => {
                if state.loading() {
                    let _ = update(&mut state, Action::Tick);
                }
            }
        }
    }

    Ok(())
}

pub fn map_event_to_action(event: &Event, state: &AppState) -> Option<Action> {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind: event::KeyEventKind::Press,
        ..
    }) = event
    else {
        return None;
    };

    if *code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    // While a fetch is in flight only quit gets through.
    if state.loading() {
        return match code {
            KeyCode::Esc => Some(Action::Quit),
            _ => None,
        };
    }

    // An open dialog suspends normal list key handling. It closes on
    // Esc/Enter or its own opener key; other keys are ignored.
    if let Some(opener) = open_dialog_key(state) {
        return match code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::DialogNext),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::DialogPrev),
            KeyCode::Esc | KeyCode::Enter => Some(Action::DialogClose),
            KeyCode::Char(c) if *c == opener => Some(Action::DialogClose),
            _ => None,
        };
    }

    // The entry page owns the keyboard for text input.
    if state.page == Page::UserEntry {
        return match code {
            KeyCode::Enter => Some(Action::Select),
            KeyCode::Esc => Some(Action::Quit),
            KeyCode::Backspace => Some(Action::InputBackspace),
            KeyCode::Char(c) => Some(Action::InputChar(*c)),
            _ => None,
        };
    }

    match code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Enter => Some(Action::Select),
        KeyCode::Backspace => Some(Action::Back),
        KeyCode::Char('h') if modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Back),
        KeyCode::Char('x') => Some(Action::OpenBrowser),
        KeyCode::Tab => match state.page {
            Page::Profile => Some(Action::SelectLink),
            Page::PullRequests(PrsPage::Owners) | Page::PullRequests(PrsPage::ListAll) => {
                Some(Action::ToggleListAll)
            }
            _ => None,
        },
        KeyCode::Char('S') => Some(Action::OpenSortDialog),
        KeyCode::Char('L') => Some(Action::OpenLangDialog),
        KeyCode::Char('T') => Some(Action::OpenStatusDialog),
        _ => None,
    }
}

/// The key that opened the currently visible dialog, if any.
fn open_dialog_key(state: &AppState) -> Option<char> {
    match state.page {
        Page::Repositories if state.repositories.sort_dialog_open => Some('S'),
        Page::Repositories if state.repositories.lang_dialog_open => Some('L'),
        Page::PullRequests(PrsPage::ListAll) if state.pull_requests.list_all.sort_dialog_open => {
            Some('S')
        }
        Page::PullRequests(PrsPage::ListAll) if state.pull_requests.list_all.status_dialog_open => {
            Some('T')
        }
        _ => None,
    }
}

fn spawn_side_effect(
    effect: SideEffect,
    client: &GithubClient,
    action_tx: &mpsc::UnboundedSender<Action>,
) {
    match effect {
        SideEffect::CheckUser { seq, id } => {
            let client = client.clone();
            let tx = action_tx.clone();
            tokio::spawn(async move {
                debug!(id = %id, "Checking user exists");
                let exists = client.user_exists(&id).await;
                let _ = tx.send(Action::UserChecked { seq, id, exists });
            });
        }
        SideEffect::FetchProfile { seq, id } => {
            let client = client.clone();
            let tx = action_tx.clone();
            tokio::spawn(async move {
                debug!(id = %id, "Fetching profile");
                let result = client
                    .fetch_profile(&id)
                    .await
                    .map_err(|e| summarize(e, "failed to fetch profile"));
                let _ = tx.send(Action::ProfileLoaded { seq, result });
            });
        }
        SideEffect::FetchPullRequests { seq, id } => {
            let client = client.clone();
            let tx = action_tx.clone();
            tokio::spawn(async move {
                debug!(id = %id, "Fetching pull requests");
                let result = client
                    .fetch_pull_requests(&id)
                    .await
                    .map_err(|e| summarize(e, "failed to fetch pull requests"));
                let _ = tx.send(Action::PullRequestsLoaded { seq, result });
            });
        }
        SideEffect::FetchRepositories { seq, id } => {
            let client = client.clone();
            let tx = action_tx.clone();
            tokio::spawn(async move {
                debug!(id = %id, "Fetching repositories");
                let result = client
                    .fetch_repositories(&id)
                    .await
                    .map_err(|e| summarize(e, "failed to fetch repositories"));
                let _ = tx.send(Action::RepositoriesLoaded { seq, result });
            });
        }
        SideEffect::OpenUrl(url) => {
            tokio::task::spawn_blocking(move || {
                if let Err(e) = crate::util::browser::open_url(&url) {
                    error!(error = %e, "Failed to open URL");
                }
            });
        }
    }
}

fn summarize(e: anyhow::Error, summary: &str) -> String {
    error!(error = %e, "{}", summary);
    summary.to_string()
}
