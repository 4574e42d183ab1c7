use ratatui::{prelude::*, widgets::*};

const KEYS: [(&str, &str); 6] = [
    ("q / Esc", "Stop the walk and exit"),
    ("h", "Toggle this help"),
    ("⬆ / ⬇", "Switch log target"),
    ("⬅ / ➡", "Show fewer/more log levels"),
    ("- / +", "Capture fewer/more log levels"),
    ("PgUp / PgDn", "Scroll the log history"),
];

/// Draw the key bindings in a box centered on `area`
pub fn render_help(area: Rect, buf: &mut Buffer) {
    let lines = KEYS
        .iter()
        .map(|&(key, action)| {
            Line::from(vec![
                Span::from(format!("{key:>11}")).light_cyan().bold(),
                Span::raw(format!(" : {action}")),
            ])
        })
        .collect::<Vec<_>>();

    let [_, center_vert, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length((lines.len() + 4) as u16),
        Constraint::Fill(1),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(56),
        Constraint::Fill(1),
    ])
    .areas(center_vert);

    Clear.render(center, buf);

    Paragraph::new(lines)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .padding(Padding::horizontal(1))
                .title("Help"),
        )
        .render(center, buf);
}
