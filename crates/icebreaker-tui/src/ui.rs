use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use crate::app::App;

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();

    // Main layout: header, body, footer
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(app, frame, header_area);
    render_body(app, frame, body_area);
    render_footer(app, frame, footer_area);
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let liked_count = app.deck.liked().len();
    let liked_indicator = if liked_count > 0 {
        format!(" [{} liked]", liked_count)
    } else {
        String::new()
    };

    let title = Line::from(vec![
        Span::styled(" Icebreaker ", Style::default().fg(Color::Cyan).bold()),
        Span::styled(liked_indicator, Style::default().fg(Color::DarkGray)),
        Span::raw(" "),
        Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let header = Paragraph::new(title).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(header, area);
}

fn render_body(app: &App, frame: &mut Frame, area: Rect) {
    let liked_height = if app.deck.liked().is_empty() {
        0
    } else {
        (app.deck.liked().len() + 2) as u16 // +2 for borders
    };
    let error_height = if app.error.is_some() { 1 } else { 0 };

    let [question_area, actions_area, error_area, liked_area] = Layout::vertical([
        Constraint::Min(5),
        Constraint::Length(1),
        Constraint::Length(error_height),
        Constraint::Length(liked_height),
    ])
    .areas(area);

    render_question(app, frame, question_area);
    render_actions(app, frame, actions_area);

    if let Some(error) = &app.error {
        let error_line = Paragraph::new(Span::styled(error.as_str(), Style::default().fg(Color::Red)))
            .alignment(Alignment::Center);
        frame.render_widget(error_line, error_area);
    }

    if liked_height > 0 {
        render_liked(app, frame, liked_area);
    }
}

fn render_question(app: &App, frame: &mut Frame, area: Rect) {
    let position = format!(" Question {} of {} ", app.deck.cursor() + 1, app.deck.len().max(app.deck.cursor() + 1));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(position);

    let text = if app.is_loading() {
        let dots = ".".repeat(app.animation_frame as usize + 1);
        Text::from(Span::styled(
            format!("Loading{}", dots),
            Style::default().fg(Color::Yellow),
        ))
    } else if app.deck.current().is_empty() {
        Text::from(Span::styled(
            "(blank) press r to generate a question",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Text::from(Span::styled(
            app.deck.current(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
    };

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_actions(app: &App, frame: &mut Frame, area: Rect) {
    // Dimmed while a replacement is in flight, since the keys are ignored then
    let key_style = if app.is_loading() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    };
    let label_style = if app.is_loading() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let actions = Line::from(vec![
        Span::styled(" s ", key_style),
        Span::styled(" Skip   ", label_style),
        Span::styled(" r ", key_style),
        Span::styled(" Replace   ", label_style),
        Span::styled(" l ", key_style),
        Span::styled(" Like & Next ", label_style),
    ]);

    frame.render_widget(Paragraph::new(actions).alignment(Alignment::Center), area);
}

fn render_liked(app: &App, frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = app
        .deck
        .liked()
        .iter()
        .map(|question| ListItem::new(format!("• {}", question)))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Liked Questions "),
    );
    frame.render_widget(list, area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let (mode_text, mode_style) = if app.is_loading() {
        (" GENERATING ", Style::default().bg(Color::Yellow).fg(Color::Black))
    } else {
        (" DECK ", Style::default().bg(Color::Blue).fg(Color::White))
    };

    // Key style: dark background with bright text for visibility on both light/dark terminals
    let key_style = Style::default().bg(Color::DarkGray).fg(Color::White);
    let label_style = Style::default().bg(Color::Black).fg(Color::White);

    let hints = vec![
        Span::styled(" s/→ ", key_style),
        Span::styled(" skip ", label_style),
        Span::styled(" r ", key_style),
        Span::styled(" replace ", label_style),
        Span::styled(" l/Enter ", key_style),
        Span::styled(" like ", label_style),
        Span::styled(" q ", key_style),
        Span::styled(" quit ", label_style),
    ];

    let footer_content = Line::from(
        vec![
            Span::styled(mode_text, mode_style),
            Span::styled(" ", label_style),
        ]
        .into_iter()
        .chain(hints)
        .collect::<Vec<_>>(),
    );

    let footer = Paragraph::new(footer_content).style(Style::default().bg(Color::Black));
    frame.render_widget(footer, area);
}
