use crate::game::{Cell, Player, Position, SIZE};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    position: &Position,
    cursor: (usize, usize),
    computer_player: Player,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(9),    // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, position, computer_player, chunks[0]);
    render_board(frame, position, cursor, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(
    frame: &mut Frame,
    position: &Position,
    computer_player: Player,
    area: ratatui::layout::Rect,
) {
    let side = position.side_to_move();
    let color = match side {
        Player::X => Color::Red,
        Player::O => Color::Blue,
    };

    let status = if position.is_terminal() {
        format!("Game Over  |  Computer: {}", computer_player.name())
    } else {
        format!(
            "Current Player: {}  |  Computer: {}",
            side.name(),
            computer_player.name()
        )
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Tic-Tac-Toe"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    position: &Position,
    cursor: (usize, usize),
    area: ratatui::layout::Rect,
) {
    let mut lines = Vec::new();

    // Column numbers with cursor indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..SIZE {
        if col == cursor.1 {
            col_line.push(Span::styled(
                format!(" {} ", col),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col)));
        }
        col_line.push(Span::raw(" "));
    }
    lines.push(Line::from(col_line));

    lines.push(Line::from("   ┌───┬───┬───┐"));

    for row in 0..SIZE {
        let row_label = if row == cursor.0 {
            Span::styled(
                format!(" {} ", row),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::raw(format!(" {} ", row))
        };

        let mut row_spans = vec![row_label, Span::raw("│")];
        for col in 0..SIZE {
            let (symbol, color) = match position.get(row, col) {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::X => (" X ", Color::Red),
                Cell::O => (" O ", Color::Blue),
            };
            let mut style = Style::default().fg(color);
            if (row, col) == cursor {
                style = style.bg(Color::Cyan).add_modifier(Modifier::BOLD);
            }
            row_spans.push(Span::styled(symbol, style));
            row_spans.push(Span::raw("│"));
        }
        lines.push(Line::from(row_spans));

        if row < SIZE - 1 {
            lines.push(Line::from("   ├───┼───┼───┤"));
        }
    }

    lines.push(Line::from("   └───┴───┴───┘"));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let line = Line::from("←↑→↓: Move  |  Enter: Place  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
