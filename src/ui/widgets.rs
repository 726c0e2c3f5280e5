use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, List, ListItem, Paragraph, Row, Table},
};

use crate::app::state::{
    AppState, FilterOption, HELP_ITEMS, MENU_ITEMS, PrSort, ProfileLink, RepoSort,
};
use crate::github::models::{PrState, PullRequestItem};
use crate::ui::theme;
use crate::util::time::{relative_time, relative_time_opt};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Title bar, body, help bar.
pub fn page_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

pub fn render_title(f: &mut Frame, area: Rect, crumbs: &[&str]) {
    let mut spans = vec![Span::styled(" ghprofile ", theme::TITLE)];
    for crumb in crumbs {
        spans.push(Span::styled(" > ", theme::BREADCRUMB));
        spans.push(Span::styled((*crumb).to_string(), theme::HEADER));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub fn render_help_bar(f: &mut Frame, area: Rect, text: &str) {
    f.render_widget(Paragraph::new(text).style(theme::HELP_BAR), area);
}

pub fn render_loading(f: &mut Frame, area: Rect, frame: usize) {
    let glyph = SPINNER_FRAMES[frame % SPINNER_FRAMES.len()];
    let para = Paragraph::new(format!("  {} Loading...", glyph)).style(theme::DIM);
    f.render_widget(para, area);
}

pub fn render_error_line(f: &mut Frame, area: Rect, msg: &str) {
    let para = Paragraph::new(format!("  ERROR: {}", msg)).style(theme::ERROR);
    f.render_widget(para, area);
}

pub fn render_user_entry(f: &mut Frame, state: &AppState) {
    let (title_area, body, help) = page_layout(f.area());
    render_title(f, title_area, &[]);

    let entry = &state.user_entry;
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("  Enter GitHub User ID", theme::HEADER)),
        Line::from(""),
        Line::from(vec![
            Span::raw("  > "),
            Span::styled(entry.input.clone(), theme::INPUT),
            Span::styled("█", theme::DIM),
        ]),
    ];
    if entry.checking {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(
                "  {} Loading...",
                SPINNER_FRAMES[state.spinner_frame % SPINNER_FRAMES.len()]
            ),
            theme::DIM,
        )));
    }
    if let Some(err) = &entry.error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  ERROR: {}", err),
            theme::ERROR,
        )));
    }
    f.render_widget(Paragraph::new(lines), body);

    render_help_bar(f, help, " enter: confirm | ctrl+c: quit");
}

pub fn render_menu(f: &mut Frame, state: &AppState) {
    let (title_area, body, help) = page_layout(f.area());
    render_title(f, title_area, &[&state.user]);
    render_two_line_list(f, body, &MENU_ITEMS, state.menu.cursor);
    render_help_bar(f, help, " enter: select | backspace: back | esc: quit");
}

pub fn render_help_page(f: &mut Frame, state: &AppState) {
    let (title_area, body, help) = page_layout(f.area());
    render_title(f, title_area, &["Help"]);
    render_two_line_list(f, body, &HELP_ITEMS, state.help.cursor);
    render_help_bar(f, help, " enter: select | backspace: back | esc: quit");
}

fn render_two_line_list(f: &mut Frame, area: Rect, entries: &[(&str, &str)], cursor: usize) {
    let items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .map(|(i, (title, desc))| {
            let (title_style, desc_style) = if i == cursor {
                (theme::HIGHLIGHT, theme::DIM)
            } else {
                (theme::HEADER, theme::DIM)
            };
            ListItem::new(vec![
                Line::from(Span::styled(format!("  {}", title), title_style)),
                Line::from(Span::styled(format!("    {}", desc), desc_style)),
                Line::from(""),
            ])
        })
        .collect();
    f.render_widget(List::new(items), area);
}

pub fn render_profile(f: &mut Frame, state: &AppState) {
    let (title_area, body, help) = page_layout(f.area());
    render_title(f, title_area, &[&state.user, "Profile"]);

    if state.profile.loading {
        render_loading(f, body, state.spinner_frame);
        render_help_bar(f, help, " esc: quit");
        return;
    }
    if let Some(err) = &state.profile.error {
        render_error_line(f, body, err);
        render_help_bar(f, help, " backspace: back | esc: quit");
        return;
    }
    let Some(profile) = &state.profile.profile else {
        return;
    };

    let link_style = |link: ProfileLink| {
        if state.profile.link == link {
            theme::LINK_SELECTED
        } else {
            theme::INPUT
        }
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", profile.name),
            theme::HEADER,
        )),
        Line::from(Span::styled(
            format!("  @{}", profile.login),
            link_style(ProfileLink::Account),
        )),
        Line::from(""),
        Line::from(Span::raw(format!("  {}", profile.bio))),
        Line::from(""),
        Line::from(Span::raw(format!(
            "  {} followers - {} following",
            profile.followers, profile.following
        ))),
        Line::from(vec![
            Span::raw("  🏢 "),
            Span::styled(profile.company.clone(), link_style(ProfileLink::Company)),
        ]),
        Line::from(Span::raw(format!("  🌐 {}", profile.location))),
        Line::from(vec![
            Span::raw("  🔗 "),
            Span::styled(
                profile.website_url.clone(),
                link_style(ProfileLink::Website),
            ),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), body);

    render_help_bar(
        f,
        help,
        " tab: select item | x: open in browser | backspace: back | esc: quit",
    );
}

pub fn render_pr_owners(f: &mut Frame, state: &AppState) {
    let (title_area, body, help) = page_layout(f.area());
    render_title(f, title_area, &[&state.user, "PRs"]);

    let prs = &state.pull_requests;
    if prs.loading {
        render_loading(f, body, state.spinner_frame);
        render_help_bar(f, help, " esc: quit");
        return;
    }
    if let Some(err) = &prs.error {
        render_error_line(f, body, err);
        render_help_bar(f, help, " backspace: back | esc: quit");
        return;
    }

    let owners = prs.owners();
    if owners.is_empty() {
        f.render_widget(
            Paragraph::new("  No pull requests").style(theme::DIM),
            body,
        );
        render_help_bar(f, help, " backspace: back | esc: quit");
        return;
    }

    let items: Vec<ListItem> = owners
        .iter()
        .enumerate()
        .map(|(i, owner)| {
            let title_style = if i == prs.owner_cursor {
                theme::HIGHLIGHT
            } else {
                theme::HEADER
            };
            let prs_count = owner.pr_count();
            let repos_count = owner.repositories.len();
            ListItem::new(vec![
                Line::from(Span::styled(format!("  {}", owner.name), title_style)),
                Line::from(Span::styled(
                    format!(
                        "    Total {} in {}",
                        plural(prs_count, "pull request"),
                        plural(repos_count, "repository")
                    ),
                    theme::DIM,
                )),
                Line::from(""),
            ])
        })
        .collect();
    f.render_widget(List::new(items), body);

    render_help_bar(
        f,
        help,
        " enter: select | tab: all pull requests | backspace: back | esc: quit",
    );
}

pub fn render_pr_repos(f: &mut Frame, state: &AppState) {
    let (title_area, body, help) = page_layout(f.area());
    let prs = &state.pull_requests;
    let owner_name = prs.current_owner().map(|o| o.name.as_str()).unwrap_or("");
    render_title(f, title_area, &[&state.user, "PRs", owner_name]);

    let repos = prs.current_repos();
    let items: Vec<ListItem> = repos
        .iter()
        .enumerate()
        .map(|(i, repo)| {
            let title_style = if i == prs.repo_cursor {
                theme::HIGHLIGHT
            } else {
                theme::HEADER
            };
            let mut detail = vec![Span::styled(
                format!("    Total {}", plural(repo.pull_requests.len(), "pull request")),
                theme::DIM,
            )];
            if !repo.lang_name.is_empty() {
                detail.push(Span::styled(
                    format!("  [{}]", repo.lang_name),
                    theme::DIM,
                ));
            }
            detail.push(Span::styled(format!("  ★ {}", repo.stars), theme::STARS));
            ListItem::new(vec![
                Line::from(Span::styled(format!("  {}", repo.name), title_style)),
                Line::from(detail),
                Line::from(""),
            ])
        })
        .collect();
    f.render_widget(List::new(items), body);

    render_help_bar(f, help, " enter: select | backspace: back | esc: quit");
}

pub fn render_pr_list(f: &mut Frame, state: &AppState) {
    let (title_area, body, help) = page_layout(f.area());
    let prs = &state.pull_requests;
    let owner_name = prs.current_owner().map(|o| o.name.clone()).unwrap_or_default();
    let repo_name = prs.current_repo().map(|r| r.name.clone()).unwrap_or_default();
    render_title(f, title_area, &[&state.user, "PRs", &owner_name, &repo_name]);

    render_pr_table(f, body, prs.current_prs(), None, prs.list_cursor);

    render_help_bar(
        f,
        help,
        " x: open in browser | backspace: back | esc: quit",
    );
}

pub fn render_pr_list_all(f: &mut Frame, state: &AppState) {
    let (title_area, body, help) = page_layout(f.area());
    render_title(f, title_area, &[&state.user, "PRs (ALL)"]);

    let list_all = &state.pull_requests.list_all;
    let repos: Vec<String> = list_all
        .items
        .iter()
        .map(|i| format!("{}/{}", i.owner, i.repo))
        .collect();
    let prs: Vec<&PullRequestItem> = list_all.items.iter().map(|i| &i.pr).collect();
    render_pr_table_refs(f, body, &prs, Some(&repos), list_all.cursor);

    render_help_bar(
        f,
        help,
        " S: sort | T: filter by status | x: open in browser | tab: toggle | backspace: back | esc: quit",
    );

    if list_all.sort_dialog_open {
        let entries: Vec<String> = PrSort::ALL.iter().map(|s| s.label().to_string()).collect();
        let selected = PrSort::ALL.iter().position(|s| *s == list_all.sort).unwrap_or(0);
        render_choice_dialog(f, "Sort", &entries, selected);
    }
    if list_all.status_dialog_open {
        render_filter_dialog(f, "Status", &list_all.statuses, list_all.status_idx);
    }
}

fn render_pr_table(
    f: &mut Frame,
    area: Rect,
    prs: &[PullRequestItem],
    repos: Option<&[String]>,
    cursor: usize,
) {
    let refs: Vec<&PullRequestItem> = prs.iter().collect();
    render_pr_table_refs(f, area, &refs, repos, cursor);
}

fn render_pr_table_refs(
    f: &mut Frame,
    area: Rect,
    prs: &[&PullRequestItem],
    repos: Option<&[String]>,
    cursor: usize,
) {
    if prs.is_empty() {
        f.render_widget(
            Paragraph::new("  No pull requests").style(theme::DIM),
            area,
        );
        return;
    }

    let with_repo = repos.is_some();
    let mut header_cells = vec![
        Cell::from("State").style(theme::HEADER),
        Cell::from("#").style(theme::HEADER),
    ];
    if with_repo {
        header_cells.push(Cell::from("Repository").style(theme::HEADER));
    }
    header_cells.extend([
        Cell::from("Title").style(theme::HEADER),
        Cell::from("+/-").style(theme::HEADER),
        Cell::from("Comments").style(theme::HEADER),
        Cell::from("Created").style(theme::HEADER),
        Cell::from("Closed").style(theme::HEADER),
    ]);
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = prs
        .iter()
        .enumerate()
        .map(|(i, pr)| {
            let selected = i == cursor;
            let base = if selected {
                theme::HIGHLIGHT
            } else {
                ratatui::style::Style::default()
            };
            let state_style = if selected { base } else { pr_state_style(pr.state) };

            let mut cells = vec![
                Cell::from(pr.state.as_str()).style(state_style),
                Cell::from(format!("#{}", pr.number)).style(base),
            ];
            if let Some(repos) = repos {
                cells.push(Cell::from(repos[i].as_str()).style(base));
            }
            cells.push(Cell::from(pr.title.as_str()).style(base));
            cells.push(
                Cell::from(Line::from(vec![
                    Span::styled(
                        format!("+{}", pr.additions),
                        if selected { base } else { theme::ADDITIONS },
                    ),
                    Span::raw(" "),
                    Span::styled(
                        format!("-{}", pr.deletions),
                        if selected { base } else { theme::DELETIONS },
                    ),
                ]))
                .style(base),
            );
            cells.push(Cell::from(pr.comments.to_string()).style(base));
            cells.push(Cell::from(relative_time(&pr.created_at)).style(if selected {
                base
            } else {
                theme::DIM
            }));
            cells.push(Cell::from(relative_time_opt(&pr.closed_at)).style(if selected {
                base
            } else {
                theme::DIM
            }));
            Row::new(cells).height(1)
        })
        .collect();

    let mut widths = vec![Constraint::Length(6), Constraint::Length(7)];
    if with_repo {
        widths.push(Constraint::Length(28));
    }
    widths.extend([
        Constraint::Min(20),
        Constraint::Length(12),
        Constraint::Length(8),
        Constraint::Length(14),
        Constraint::Length(14),
    ]);

    let table = Table::new(rows, widths).header(header);
    f.render_widget(table, area);
}

fn pr_state_style(state: PrState) -> ratatui::style::Style {
    match state {
        PrState::Open => theme::PR_OPEN,
        PrState::Merged => theme::PR_MERGED,
        PrState::Closed => theme::PR_CLOSED,
    }
}

pub fn render_repositories(f: &mut Frame, state: &AppState) {
    let (title_area, body, help) = page_layout(f.area());
    render_title(f, title_area, &[&state.user, "Repositories"]);

    let repos = &state.repositories;
    if repos.loading {
        render_loading(f, body, state.spinner_frame);
        render_help_bar(f, help, " esc: quit");
        return;
    }
    if let Some(err) = &repos.error {
        render_error_line(f, body, err);
        render_help_bar(f, help, " backspace: back | esc: quit");
        return;
    }

    if repos.items.is_empty() {
        f.render_widget(Paragraph::new("  No repositories").style(theme::DIM), body);
    } else {
        let header = Row::new(vec![
            Cell::from("Name").style(theme::HEADER),
            Cell::from("Language").style(theme::HEADER),
            Cell::from("Stars").style(theme::HEADER),
            Cell::from("Forks").style(theme::HEADER),
            Cell::from("License").style(theme::HEADER),
            Cell::from("Pushed").style(theme::HEADER),
            Cell::from("Description").style(theme::HEADER),
        ])
        .height(1);

        let rows: Vec<Row> = repos
            .items
            .iter()
            .enumerate()
            .map(|(i, repo)| {
                let selected = i == repos.cursor;
                let base = if selected {
                    theme::HIGHLIGHT
                } else {
                    ratatui::style::Style::default()
                };
                Row::new(vec![
                    Cell::from(repo.name.as_str()).style(if selected { base } else { theme::HEADER }),
                    Cell::from(repo.language_label()).style(base),
                    Cell::from(repo.stars.to_string()).style(if selected {
                        base
                    } else {
                        theme::STARS
                    }),
                    Cell::from(repo.forks.to_string()).style(base),
                    Cell::from(repo.license.as_str()).style(base),
                    Cell::from(relative_time_opt(&repo.pushed_at)).style(if selected {
                        base
                    } else {
                        theme::DIM
                    }),
                    Cell::from(repo.description.as_str()).style(if selected {
                        base
                    } else {
                        theme::DIM
                    }),
                ])
                .height(1)
            })
            .collect();

        let widths = [
            Constraint::Length(28),
            Constraint::Length(12),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(12),
            Constraint::Length(14),
            Constraint::Min(20),
        ];
        f.render_widget(Table::new(rows, widths).header(header), body);
    }

    render_help_bar(
        f,
        help,
        " S: sort | L: filter by language | x: open in browser | backspace: back | esc: quit",
    );

    if repos.sort_dialog_open {
        let entries: Vec<String> = RepoSort::ALL.iter().map(|s| s.label().to_string()).collect();
        let selected = RepoSort::ALL.iter().position(|s| *s == repos.sort).unwrap_or(0);
        render_choice_dialog(f, "Sort", &entries, selected);
    }
    if repos.lang_dialog_open {
        render_filter_dialog(f, "Language", &repos.langs, repos.lang_idx);
    }
}

pub fn render_about(f: &mut Frame, _state: &AppState) {
    let (title_area, body, help) = page_layout(f.area());
    render_title(f, title_area, &["Help", "About"]);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("  ghprofile", theme::HEADER)),
        Line::from(""),
        Line::from(Span::raw(
            "  A terminal application for browsing a GitHub user's profile,",
        )),
        Line::from(Span::raw("  repositories, and pull requests.")),
        Line::from(""),
        Line::from(Span::styled(
            format!("  version {}", env!("CARGO_PKG_VERSION")),
            theme::DIM,
        )),
    ];
    f.render_widget(Paragraph::new(lines), body);
    render_help_bar(f, help, " backspace: back | esc: quit");
}

pub fn render_credits(f: &mut Frame, _state: &AppState) {
    let (title_area, body, help) = page_layout(f.area());
    render_title(f, title_area, &["Help", "Credits"]);

    let deps = [
        ("ratatui", "MIT"),
        ("crossterm", "MIT"),
        ("tokio", "MIT"),
        ("reqwest", "MIT OR Apache-2.0"),
        ("serde", "MIT OR Apache-2.0"),
        ("chrono", "MIT OR Apache-2.0"),
        ("clap", "MIT OR Apache-2.0"),
        ("tracing", "MIT"),
    ];
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  This application is built with:",
            theme::HEADER,
        )),
        Line::from(""),
    ];
    for (name, license) in deps {
        lines.push(Line::from(vec![
            Span::raw(format!("  {:<12}", name)),
            Span::styled(license, theme::DIM),
        ]));
    }
    f.render_widget(Paragraph::new(lines), body);
    render_help_bar(f, help, " backspace: back | esc: quit");
}

fn render_filter_dialog(f: &mut Frame, title: &str, options: &[FilterOption], selected: usize) {
    let entries: Vec<String> = options
        .iter()
        .map(|o| format!("{} ({})", o.label, o.count))
        .collect();
    render_choice_dialog(f, title, &entries, selected);
}

fn render_choice_dialog(f: &mut Frame, title: &str, entries: &[String], selected: usize) {
    let width = entries
        .iter()
        .map(|e| e.len())
        .chain([title.len()])
        .max()
        .unwrap_or(10) as u16
        + 8;
    let height = entries.len() as u16 + 2;
    let area = centered_rect(f.area(), width, height);

    f.render_widget(Clear, area);

    let lines: Vec<Line> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            if i == selected {
                Line::from(Span::styled(format!(" > {}", entry), theme::DIALOG_SELECTED))
            } else {
                Line::from(Span::raw(format!("   {}", entry)))
            }
        })
        .collect();

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(theme::DIALOG_BORDER);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("1 {}", word)
    } else if word.ends_with('y') {
        format!("{} {}ies", n, &word[..word.len() - 1])
    } else {
        format!("{} {}s", n, word)
    }
}
