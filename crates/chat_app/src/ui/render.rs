use chat_core::{Role, WidgetViewModel};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render(frame: &mut Frame, view: &WidgetViewModel) {
    let [transcript_area, quick_area, input_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(3),
    ])
    .areas(frame.area());

    render_transcript(frame, transcript_area, view);
    render_quick_replies(frame, quick_area, view);
    render_input(frame, input_area, view);
}

fn render_transcript(frame: &mut Frame, area: Rect, view: &WidgetViewModel) {
    let mut lines: Vec<Line> = Vec::new();
    for entry in &view.entries {
        let (label, style) = match entry.role {
            Role::User => (
                "you",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Role::Bot => (
                "bot",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{label} "), style),
            Span::raw(entry.text.clone()),
        ]));
        for (index, link) in entry.links.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::raw(format!("  {}. ", index + 1)),
                Span::styled(
                    link.label.clone(),
                    Style::default()
                        .fg(Color::Blue)
                        .add_modifier(Modifier::UNDERLINED),
                ),
                Span::styled(format!(" <{}>", link.href), Style::default().fg(Color::DarkGray)),
            ]));
        }
        lines.push(Line::default());
    }

    // Always show the tail so appends land at the bottom of the view.
    let inner_height = area.height.saturating_sub(2) as usize;
    let skip = lines.len().saturating_sub(inner_height);
    let tail: Vec<Line> = lines.into_iter().skip(skip).collect();

    frame.render_widget(
        Paragraph::new(tail)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("campus chat")),
        area,
    );
}

fn render_quick_replies(frame: &mut Frame, area: Rect, view: &WidgetViewModel) {
    let mut spans = Vec::new();
    for (index, label) in view.quick_replies.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("F{}", index + 1),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::raw(format!(" {label}")));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_input(frame: &mut Frame, area: Rect, view: &WidgetViewModel) {
    let title = if view.pending > 0 {
        format!("prompt ({} pending)", view.pending)
    } else {
        "prompt".to_string()
    };
    frame.render_widget(
        Paragraph::new(view.input.as_str())
            .block(Block::default().borders(Borders::ALL).title(title)),
        area,
    );
}
