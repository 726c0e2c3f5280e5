use ratatui::style::{Color, Modifier, Style};

pub const TITLE: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Magenta)
    .add_modifier(Modifier::BOLD);

pub const BREADCRUMB: Style = Style::new().fg(Color::DarkGray);

pub const HIGHLIGHT: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Cyan)
    .add_modifier(Modifier::BOLD);

pub const HEADER: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

pub const DIM: Style = Style::new().fg(Color::DarkGray);

pub const ERROR: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

pub const HELP_BAR: Style = Style::new().fg(Color::DarkGray);

pub const INPUT: Style = Style::new().fg(Color::White);

pub const LINK_SELECTED: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Gray)
    .add_modifier(Modifier::UNDERLINED);

pub const PR_OPEN: Style = Style::new().fg(Color::Green);

pub const PR_MERGED: Style = Style::new().fg(Color::Magenta);

pub const PR_CLOSED: Style = Style::new().fg(Color::Red);

pub const ADDITIONS: Style = Style::new().fg(Color::Green);

pub const DELETIONS: Style = Style::new().fg(Color::Red);

pub const STARS: Style = Style::new().fg(Color::Yellow);

pub const DIALOG_SELECTED: Style = Style::new()
    .fg(Color::Cyan)
    .add_modifier(Modifier::BOLD);

pub const DIALOG_BORDER: Style = Style::new().fg(Color::Gray);
