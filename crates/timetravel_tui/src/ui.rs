//! Stateless UI rendering.

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use timetravel_tictactoe::{
    HistoryEntry, Player, Position, Square, WinResult, move_description, status_line,
};

const HELP: &str = "arrows/tab/1-9: move  enter: play  j/k: select  g: jump  s: sort  r: restart  q: quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board + moves
            Constraint::Length(4), // Status
        ])
        .split(frame.area());

    let title = Paragraph::new("Time-Travel Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    draw_board(frame, columns[0], app);
    draw_moves(frame, columns[1], app);
    draw_status(frame, rows[2], app);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let board = game.current().board();
    let winner = game.winner();

    let lines: Vec<Line> = Position::ALL
        .chunks(3)
        .enumerate()
        .flat_map(|(row, cells)| {
            let spans: Vec<Span> = cells
                .iter()
                .enumerate()
                .flat_map(|(col, &pos)| {
                    let cell = cell_span(board.get(pos), pos, app.cursor(), winner.as_ref());
                    if col < 2 {
                        vec![cell, Span::styled("│", Style::default().fg(Color::DarkGray))]
                    } else {
                        vec![cell]
                    }
                })
                .collect();
            let mut out = vec![Line::from(spans)];
            if row < 2 {
                out.push(Line::styled("───┼───┼───", Style::default().fg(Color::DarkGray)));
            }
            out
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title("Board").borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn cell_span(square: Square, pos: Position, cursor: Position, winner: Option<&WinResult>) -> Span<'static> {
    let (symbol, mut style) = match square {
        Square::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (" X ", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Square::Occupied(Player::O) => (" O ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };

    if winner.is_some_and(|w| w.contains(pos)) {
        style = style.bg(Color::Yellow);
    }
    if pos == cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    Span::styled(symbol, style)
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let current = game.current_step();

    let items: Vec<ListItem> = game
        .visible_moves()
        .map(|(step, entry)| move_item(step, entry, step == current))
        .collect();

    let order = if game.display_reversed() {
        "descending"
    } else {
        "ascending"
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!("Moves ({})", order))
                .borders(Borders::ALL),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.selected()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn move_item(step: usize, entry: &HistoryEntry, active: bool) -> ListItem<'static> {
    let style = if active {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    ListItem::new(Line::styled(move_description(step, entry), style))
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let status = status_line(&app.game().status());
    let mut lines = vec![Line::styled(status, Style::default().fg(Color::Yellow))];
    match app.message() {
        Some(message) => lines.push(Line::styled(message.to_string(), Style::default().fg(Color::Red))),
        None => lines.push(Line::styled(HELP, Style::default().fg(Color::DarkGray))),
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
