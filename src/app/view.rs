use ratatui::Frame;

use crate::app::state::{AppState, Page, PrsPage};
use crate::ui::widgets;

pub fn render(f: &mut Frame, state: &AppState) {
    match state.page {
        Page::UserEntry => widgets::render_user_entry(f, state),
        Page::Menu => widgets::render_menu(f, state),
        Page::Profile => widgets::render_profile(f, state),
        Page::PullRequests(PrsPage::Owners) => widgets::render_pr_owners(f, state),
        Page::PullRequests(PrsPage::Repos) => widgets::render_pr_repos(f, state),
        Page::PullRequests(PrsPage::List) => widgets::render_pr_list(f, state),
        Page::PullRequests(PrsPage::ListAll) => widgets::render_pr_list_all(f, state),
        Page::Repositories => widgets::render_repositories(f, state),
        Page::Help => widgets::render_help_page(f, state),
        Page::About => widgets::render_about(f, state),
        Page::Credits => widgets::render_credits(f, state),
    }
}
