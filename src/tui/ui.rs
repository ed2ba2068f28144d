//! TUI layout and widget definitions.
//!
//! ```text
//! ┌──────────────── College Directory ─────────────────┐
//! │ Admin Mode                                          │
//! ├─────────────────────── Tabs ───────────────────────┤  (admin only)
//! │ View Colleges │ Manage Colleges │ View Enquiries    │
//! ├─────────────────────── Body ───────────────────────┤
//! │ ...                                                 │
//! ├────────────────────── Footer ──────────────────────┤
//! │ key hints | passive notice                          │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Modals (forms, confirmation, alerts) are drawn over the body.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Cell, Clear, List, ListItem, ListState, Paragraph, Row, Table, TableState,
        Tabs, Wrap,
    },
    Frame,
};

use crate::config::UiConfig;
use crate::handlers::messages;
use crate::models::College;
use crate::state::{college_name, EditableForm, FormEditor, Notice, Tab, ViewState};
use crate::utils::errors::ErrorSeverity;
use crate::utils::helpers::{format_date, truncate_text};

const ACCENT: Color = Color::Cyan;

/// Draw the whole screen for `state`
pub fn render(frame: &mut Frame, state: &ViewState, config: &UiConfig) {
    let mut constraints = vec![Constraint::Length(3)];
    if state.is_admin {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Min(5));
    constraints.push(Constraint::Length(3));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    render_header(frame, state, chunks[0]);
    let body = if state.is_admin {
        render_tabs(frame, state, chunks[1]);
        chunks[2]
    } else {
        chunks[1]
    };
    let footer = chunks[chunks.len() - 1];

    match state.visible_tab() {
        Tab::Colleges => render_colleges(frame, state, body),
        Tab::Manage => render_manage(frame, state, body, config),
        Tab::Enquiries => render_enquiries(frame, state, body),
    }
    render_footer(frame, state, footer);

    if state.show_enquiry_form {
        render_enquiry_modal(frame, state);
    }
    if state.show_college_form {
        render_college_modal(frame, state);
    }
    if let Some(prompt) = &state.login_prompt {
        render_form_modal(frame, " Admin Login ", prompt, &[0, 0], "Enter: log in  Esc: cancel", |index, value| {
            if index == 1 { "*".repeat(value.chars().count()) } else { value.to_string() }
        });
    }
    if state.pending_delete.is_some() {
        render_confirm(frame);
    }
    if let Some(notice) = state.notices.blocking() {
        render_alert(frame, notice);
    }
}

fn render_header(frame: &mut Frame, state: &ViewState, area: Rect) {
    let mode = if state.is_admin {
        Span::styled("Admin Mode", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    } else {
        Span::styled("Visitor", Style::default().fg(Color::Gray))
    };

    let header = Paragraph::new(Line::from(vec![
        mode,
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{} colleges", state.colleges.len())),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .title(Span::styled(
                " College Directory ",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
    );

    frame.render_widget(header, area);
}

fn render_tabs(frame: &mut Frame, state: &ViewState, area: Rect) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.title())))
        .collect();
    let selected = Tab::ALL.iter().position(|t| *t == state.active_tab).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));

    frame.render_widget(tabs, area);
}

fn render_colleges(frame: &mut Frame, state: &ViewState, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Available Colleges ");

    if state.colleges.is_empty() {
        let empty = Paragraph::new("No colleges available.").block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state.colleges.iter().map(college_card).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default().with_selected(Some(state.cursor));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn college_card(college: &College) -> ListItem<'_> {
    ListItem::new(vec![
        Line::from(Span::styled(college.name.as_str(), Style::default().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(college.location.as_str(), Style::default().fg(ACCENT))),
        Line::from(college.description.as_str()),
        Line::from(""),
    ])
}

fn render_manage(frame: &mut Frame, state: &ViewState, area: Rect, config: &UiConfig) {
    let header = Row::new(["ID", "Name", "Location", "Description", "Actions"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = state
        .colleges
        .iter()
        .map(|c| {
            Row::new(vec![
                Cell::from(c.id.to_string()),
                Cell::from(c.name.as_str()),
                Cell::from(c.location.as_str()),
                Cell::from(truncate_text(&c.description, config.description_preview_chars)),
                Cell::from("e Edit  d Delete").style(Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Fill(2),
            Constraint::Fill(1),
            Constraint::Fill(3),
            Constraint::Length(16),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(" Manage Colleges "))
    .row_highlight_style(Style::default().bg(Color::DarkGray));

    let mut table_state = TableState::default().with_selected(Some(state.cursor));
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn render_enquiries(frame: &mut Frame, state: &ViewState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    let filtered = state.filtered_enquiries();
    let filter_line = Line::from(vec![
        Span::raw("Filter by College: "),
        Span::styled(
            state.college_filter.label(&state.colleges),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  Showing {} of {} enquiries", filtered.len(), state.enquiries.len()),
            Style::default().fg(Color::Gray),
        ),
    ]);
    frame.render_widget(Paragraph::new(filter_line), chunks[0]);

    let block = Block::default().borders(Borders::ALL).title(" Enquiries Management ");
    if filtered.is_empty() {
        frame.render_widget(Paragraph::new(messages::NO_ENQUIRIES).block(block), chunks[1]);
        return;
    }

    let header = Row::new(["ID", "Name", "Email", "Mobile", "Course", "College", "Date"])
        .style(Style::default().add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = filtered
        .iter()
        .skip(state.enquiry_scroll)
        .map(|e| {
            Row::new(vec![
                Cell::from(e.id.to_string()),
                Cell::from(e.name.as_str()),
                Cell::from(e.email.as_str()),
                Cell::from(e.mobile.as_str()),
                Cell::from(e.course.label()),
                Cell::from(college_name(&state.colleges, e.college)),
                Cell::from(format_date(e.created_at)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Fill(2),
            Constraint::Fill(3),
            Constraint::Length(15),
            Constraint::Length(23),
            Constraint::Fill(2),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, chunks[1]);
}

fn render_footer(frame: &mut Frame, state: &ViewState, area: Rect) {
    let hints = match (state.is_admin, state.visible_tab()) {
        (false, _) => "↑↓ select  Enter enquire  l admin login  r refresh  q quit",
        (true, Tab::Colleges) => "1-3 tabs  Enter enquire  a add  e edit  d delete  r refresh  o logout  q quit",
        (true, Tab::Manage) => "1-3 tabs  a add  e edit  d delete  r refresh  o logout  q quit",
        (true, Tab::Enquiries) => "1-3 tabs  ←→ filter  ↑↓ scroll  r refresh  o logout  q quit",
    };

    let mut spans = vec![Span::styled(hints, Style::default().fg(Color::DarkGray))];
    if let Some(notice) = state.notices.current().filter(|n| !n.blocking) {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(notice.message.as_str(), severity_style(notice.severity)));
    }

    let footer = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

fn render_enquiry_modal(frame: &mut Frame, state: &ViewState) {
    let title = match &state.selected_college {
        Some(college) => format!(" Enquiry for {} ", college.name),
        None => " Enquiry ".to_string(),
    };
    render_form_modal(
        frame,
        &title,
        &state.enquiry_form,
        &[0, 0, 0, 0],
        "Enter: Submit Enquiry  ←→: course  Esc: Cancel",
        |index, value| {
            if index == 3 {
                format!("◀ {} ▶", state.enquiry_form.form.course)
            } else {
                value.to_string()
            }
        },
    );
}

fn render_college_modal(frame: &mut Frame, state: &ViewState) {
    let (title, submit) = if state.editing_college.is_some() {
        (" Edit College ", "Enter: Update College  Esc: Cancel")
    } else {
        (" Add New College ", "Enter: Add College  Esc: Cancel")
    };
    render_form_modal(frame, title, &state.college_form, &[0, 0, 2], submit, |_, value| value.to_string());
}

/// Draw a form as a centered modal; `extra_rows` gives additional height per field
fn render_form_modal<F, D>(
    frame: &mut Frame,
    title: &str,
    editor: &FormEditor<F>,
    extra_rows: &[u16],
    hint: &str,
    display: D,
) where
    F: EditableForm + Clone,
    D: Fn(usize, &str) -> String,
{
    let field_heights: Vec<u16> = (0..F::FIELDS.len())
        .map(|i| 3 + extra_rows.get(i).copied().unwrap_or(0))
        .collect();
    let height = field_heights.iter().sum::<u16>() + 3;
    let area = centered_rect(60, height, frame.area());
    frame.render_widget(Clear, area);

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(Span::styled(title.to_string(), Style::default().add_modifier(Modifier::BOLD)));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let mut constraints: Vec<Constraint> = field_heights.iter().map(|h| Constraint::Length(*h)).collect();
    constraints.push(Constraint::Length(1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let mut scratch = editor.form.clone();
    for (index, label) in F::FIELDS.iter().enumerate() {
        let value = scratch.text_mut(index).cloned().unwrap_or_default();
        let focused = index == editor.focus;
        let border = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let mut shown = display(index, &value);
        if focused && scratch.text_mut(index).is_some() {
            shown.push('▏');
        }
        let field = Paragraph::new(shown)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).border_style(border).title(*label));
        frame.render_widget(field, rows[index]);
    }

    let footer = Paragraph::new(Span::styled(hint.to_string(), Style::default().fg(Color::DarkGray)));
    frame.render_widget(footer, rows[F::FIELDS.len()]);
}

fn render_confirm(frame: &mut Frame) {
    let area = centered_rect(50, 5, frame.area());
    frame.render_widget(Clear, area);
    let dialog = Paragraph::new(vec![
        Line::from(messages::CONFIRM_DELETE),
        Line::from(Span::styled("y: delete   n: keep", Style::default().fg(Color::DarkGray))),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(" Confirm "),
    );
    frame.render_widget(dialog, area);
}

fn render_alert(frame: &mut Frame, notice: &Notice) {
    let area = centered_rect(50, 5, frame.area());
    frame.render_widget(Clear, area);
    let style = severity_style(notice.severity);
    let dialog = Paragraph::new(vec![
        Line::from(Span::styled(notice.message.as_str(), style)),
        Line::from(Span::styled("Enter: OK", Style::default().fg(Color::DarkGray))),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(dialog, area);
}

fn severity_style(severity: ErrorSeverity) -> Style {
    match severity {
        ErrorSeverity::Info => Style::default().fg(Color::Green),
        ErrorSeverity::Warning => Style::default().fg(Color::Yellow),
        ErrorSeverity::Error | ErrorSeverity::Critical => {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        }
    }
}

/// Rectangle of `percent_x` width and fixed `height`, centered in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = area.width.saturating_mul(percent_x) / 100;
    let height = height.min(area.height);
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, Enquiry};
    use chrono::{TimeZone, Utc};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(state: &ViewState) -> String {
        draw_with(state, &UiConfig::default())
    }

    fn draw_with(state: &ViewState, config: &UiConfig) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, state, config)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn college(id: i64, name: &str) -> College {
        College {
            id,
            name: name.to_string(),
            location: "Jaipur, RJ".to_string(),
            description: "x".repeat(80),
            created_at: None,
        }
    }

    #[test]
    fn test_visitor_sees_college_cards() {
        let mut state = ViewState::new();
        state.set_colleges(vec![college(1, "Lakeside College")]);
        let screen = draw(&state);
        assert!(screen.contains("College Directory"));
        assert!(screen.contains("Lakeside College"));
        assert!(!screen.contains("Manage Colleges"));
    }

    #[test]
    fn test_manage_table_truncates_descriptions() {
        let mut state = ViewState::new();
        state.enter_admin();
        state.set_colleges(vec![college(1, "Lakeside College")]);
        state.select_tab(Tab::Manage).unwrap();
        let config = UiConfig {
            description_preview_chars: 10,
            ..UiConfig::default()
        };
        let screen = draw_with(&state, &config);
        assert!(screen.contains(&format!("{}...", "x".repeat(10))));
        assert!(!screen.contains(&"x".repeat(11)));
        assert!(screen.contains("Actions"));
    }

    #[test]
    fn test_enquiries_show_unknown_college_and_counter() {
        let mut state = ViewState::new();
        state.enter_admin();
        state.set_colleges(vec![college(1, "Lakeside College")]);
        state.set_enquiries(vec![Enquiry {
            id: 9,
            name: "Meera".to_string(),
            email: "meera@example.org".to_string(),
            mobile: "5551234".to_string(),
            course: Course::Arts,
            college: 77,
            created_at: Utc.with_ymd_and_hms(2024, 2, 10, 9, 0, 0).unwrap(),
        }]);
        state.select_tab(Tab::Enquiries).unwrap();
        let screen = draw(&state);
        assert!(screen.contains("Showing 1 of 1 enquiries"));
        assert!(screen.contains("Unknown"));
        assert!(screen.contains("2024-02-10"));
    }

    #[test]
    fn test_empty_enquiries_message() {
        let mut state = ViewState::new();
        state.enter_admin();
        state.select_tab(Tab::Enquiries).unwrap();
        assert!(draw(&state).contains("No enquiries submitted yet."));
    }

    #[test]
    fn test_password_is_masked() {
        let mut state = ViewState::new();
        state.open_login_prompt();
        if let Some(prompt) = state.login_prompt.as_mut() {
            prompt.form.username = "admin".to_string();
            prompt.form.password = "hunter2".to_string();
        }
        let screen = draw(&state);
        assert!(screen.contains("Admin Login"));
        assert!(screen.contains("*******"));
        assert!(!screen.contains("hunter2"));
    }

    #[test]
    fn test_admin_colleges_footer_lists_refresh() {
        let mut state = ViewState::new();
        state.enter_admin();
        assert!(draw(&state).contains("r refresh"));
    }

    #[test]
    fn test_alert_behind_passive_warning_is_drawn() {
        let mut state = ViewState::new();
        state.warn_passive(messages::COLLEGES_UNAVAILABLE);
        state.alert(ErrorSeverity::Error, messages::LOGIN_REQUIRED);
        let screen = draw(&state);
        assert!(screen.contains("Login required to view enquiries"));
        assert!(screen.contains("Enter: OK"));
    }

    #[test]
    fn test_alert_is_drawn_over_body() {
        let mut state = ViewState::new();
        state.alert(ErrorSeverity::Error, messages::ENQUIRY_FAILED);
        assert!(draw(&state).contains("Error submitting enquiry"));
    }
}
