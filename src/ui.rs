//! Terminal rendering of the shell preview

use ratatui::{prelude::*, widgets::*};
use tokio::time::Instant;

use crate::constants::APP_NAME;
use crate::messages::actions::PAGES;
use crate::messages::RenderState;
use crate::models::{AppSettings, DarkMode, Size, ThemeMode};

/// Colors for the active theme
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub muted: Color,
}

/// Resolve the theme; `system`/`auto` defer to the terminal's own colors
pub fn palette(app: &AppSettings) -> Palette {
    let dark = app.theme == ThemeMode::Dark || app.is_dark == Some(DarkMode::Dark);
    if dark {
        Palette {
            bg: Color::Black,
            fg: Color::White,
            accent: Color::Cyan,
            muted: Color::DarkGray,
        }
    } else if app.theme == ThemeMode::Light {
        Palette {
            bg: Color::White,
            fg: Color::Black,
            accent: Color::Blue,
            muted: Color::Gray,
        }
    } else {
        Palette {
            bg: Color::Reset,
            fg: Color::Reset,
            accent: Color::Yellow,
            muted: Color::DarkGray,
        }
    }
}

/// Sidebar width in columns
pub fn sidebar_width(collapsed: bool, size: Size) -> u16 {
    if collapsed {
        return 5;
    }
    match size {
        Size::Mini => 18,
        Size::Small => 22,
        Size::Medium => 26,
        Size::Large => 30,
    }
}

pub fn draw(f: &mut Frame, state: &RenderState) {
    let app = &state.store.app;
    let colors = palette(app);
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(colors.bg).fg(colors.fg)),
        area,
    );

    if app.is_locked {
        draw_lock_screen(f, colors, area);
        return;
    }

    let mut constraints = Vec::new();
    if app.nav_bar {
        constraints.push(Constraint::Length(1));
    }
    if app.tab_bar {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut next = 0;
    if app.nav_bar {
        draw_nav_bar(f, state, colors, chunks[next]);
        next += 1;
    }
    if app.tab_bar {
        draw_tab_bar(f, app, colors, chunks[next]);
        next += 1;
    }
    draw_body(f, state, colors, chunks[next]);
    draw_status_bar(f, state, colors, chunks[next + 1]);

    if app.open_setting_drawer {
        draw_settings_drawer(f, app, colors, area);
    }
}

fn draw_nav_bar(f: &mut Frame, state: &RenderState, colors: Palette, area: Rect) {
    let app = &state.store.app;
    let mut spans = vec![
        Span::styled(
            format!(" {} ", state.window_title),
            Style::default().fg(colors.bg).bg(colors.accent).bold(),
        ),
        Span::raw(" "),
        Span::styled(
            format!("{} | {} | {}", app.lang, app.theme.as_str(), app.size.as_str()),
            Style::default().fg(colors.muted),
        ),
    ];
    if app.is_fullscreen {
        spans.push(Span::styled(" [fullscreen]", Style::default().fg(colors.accent)));
    }
    if state.store.device.is_mobile {
        spans.push(Span::styled(" [mobile]", Style::default().fg(colors.accent)));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_tab_bar(f: &mut Frame, app: &AppSettings, colors: Palette, area: Rect) {
    let titles: Vec<Line> = PAGES
        .iter()
        .enumerate()
        .map(|(i, (title, _))| Line::from(format!("{}:{}", i + 1, title)))
        .collect();
    let selected = PAGES
        .iter()
        .position(|(title, _)| *title == app.title)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(colors.muted))
        .highlight_style(Style::default().fg(colors.accent).bold())
        .divider("|");
    f.render_widget(tabs, area);
}

fn draw_body(f: &mut Frame, state: &RenderState, colors: Palette, area: Rect) {
    let app = &state.store.app;
    let collapsed = state.store.side_bar.is_collapse;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(sidebar_width(collapsed, app.size)),
            Constraint::Min(0),
        ])
        .split(area);

    let menu: Vec<ListItem> = PAGES
        .iter()
        .map(|(title, _)| {
            let label = if collapsed {
                title.chars().take(1).collect::<String>()
            } else {
                title.to_string()
            };
            let style = if *title == app.title {
                Style::default().fg(colors.accent).bold()
            } else {
                Style::default()
            };
            ListItem::new(label).style(style)
        })
        .collect();
    let sidebar = List::new(menu).block(
        Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(colors.muted)),
    );
    f.render_widget(sidebar, chunks[0]);

    let heading = if app.title.is_empty() {
        APP_NAME.to_string()
    } else {
        app.title.clone()
    };
    let lines = vec![
        Line::from(Span::styled(heading, Style::default().bold())),
        Line::raw(""),
        Line::from(format!("animation   {}", app.animation)),
        Line::from(format!("screen out  {}", on_off(app.is_screen_out))),
        Line::from(format!("dyn. title  {}", on_off(app.dynamic_title))),
        Line::from(format!("auto-lock   {}", lock_label(app.locked_time))),
    ];
    let content = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1)));
    f.render_widget(content, chunks[1]);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, colors: Palette, area: Rect) {
    let mut status = String::from(" b:sidebar o:screen-out f:fullscreen d:theme l:lang g:settings k:lock q:quit ");
    if let Some(deadline) = state.lock_deadline {
        let left = deadline.saturating_duration_since(Instant::now()).as_secs();
        status.push_str(&format!("| locks in {left}s "));
    }
    let bar = Paragraph::new(status).style(Style::default().fg(colors.muted));
    f.render_widget(bar, area);
}

fn draw_settings_drawer(f: &mut Frame, app: &AppSettings, colors: Palette, area: Rect) {
    let width = (area.width / 5 * 2).max(30).min(area.width);
    let drawer_area = Rect {
        x: area.x + area.width - width,
        width,
        ..area
    };

    let rows = vec![
        Row::new(vec!["n", "nav bar", on_off(app.nav_bar)]),
        Row::new(vec!["t", "tab bar", on_off(app.tab_bar)]),
        Row::new(vec!["y", "dynamic title", on_off(app.dynamic_title)]),
        Row::new(vec!["d", "theme", app.theme.as_str()]),
        Row::new(vec!["s", "size", app.size.as_str()]),
        Row::new(vec!["a", "animation", app.animation.as_str()]),
        Row::new(vec!["l", "language", app.lang.as_str()]),
        Row::new(vec![
            String::from("+/-"),
            String::from("auto-lock"),
            lock_label(app.locked_time),
        ]),
        Row::new(vec!["R", "reset all", ""]),
    ];
    let table = Table::new(
        rows,
        [Constraint::Length(4), Constraint::Length(14), Constraint::Min(0)],
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Settings (Esc to close) ")
            .border_style(Style::default().fg(colors.accent))
            .style(Style::default().bg(colors.bg).fg(colors.fg)),
    );

    f.render_widget(Clear, drawer_area);
    f.render_widget(table, drawer_area);
}

fn draw_lock_screen(f: &mut Frame, colors: Palette, area: Rect) {
    let popup_area = centered_rect(50, 30, area);
    let text = vec![
        Line::from(Span::styled("Screen locked", Style::default().bold())),
        Line::raw(""),
        Line::from("u / Enter  unlock"),
        Line::from("q          quit"),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {APP_NAME} "))
        .border_style(Style::default().fg(colors.accent));
    let lock = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    f.render_widget(Clear, popup_area);
    f.render_widget(lock, popup_area);
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

fn lock_label(millis: u64) -> String {
    if millis == 0 {
        String::from("off")
    } else {
        format!("{}s", millis / 1000)
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn render(state: &RenderState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|f| draw(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_palette() {
        let mut app = AppSettings::default();
        assert_eq!(palette(&app).bg, Color::Reset);
        app.theme = ThemeMode::Dark;
        assert_eq!(palette(&app).bg, Color::Black);
        app.theme = ThemeMode::Light;
        assert_eq!(palette(&app).bg, Color::White);
    }

    #[test]
    fn test_sidebar_width() {
        assert_eq!(sidebar_width(true, Size::Large), 5);
        assert!(sidebar_width(false, Size::Mini) < sidebar_width(false, Size::Large));
    }

    #[test]
    fn test_locked_screen_hides_shell() {
        let mut state = RenderState::default();
        state.window_title = String::from("AppShell");
        assert!(render(&state).contains("Dashboard"));

        state.store.set_is_locked(true);
        let screen = render(&state);
        assert!(screen.contains("Screen locked"));
        assert!(!screen.contains("Dashboard"));
    }

    #[test]
    fn test_settings_drawer() {
        let mut state = RenderState::default();
        state.store.set_app_setting_drawer(true);
        assert!(render(&state).contains("Settings (Esc to close)"));
    }
}
