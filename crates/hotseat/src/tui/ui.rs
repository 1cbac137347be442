//! Stateless UI rendering for the setup and game screens.

use super::app::App;
use hotseat_tictactoe::{Phase, Player, Position, Slot, Square, rules};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Renders whichever screen matches the engine phase.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Body
            Constraint::Length(3), // Status
            Constraint::Length(1), // Key help
        ])
        .split(area);

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let help = match app.engine().phase() {
        Phase::Setup => {
            draw_setup(frame, chunks[1], app);
            "Tab: switch field  Enter: start game  Esc: quit"
        }
        Phase::InProgress | Phase::Finished => {
            draw_game(frame, chunks[1], app);
            "Arrows + Enter or 0-8: play  r: reset game  n: new game  q: quit"
        }
    };

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_setup(frame: &mut Frame, area: Rect, app: &App) {
    let form = center_rect(area, 44, 9);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(form);

    for (slot, row) in Slot::ALL.into_iter().zip([rows[0], rows[1]]) {
        let focused = app.focus() == slot;
        let border = if focused {
            Style::default().fg(Color::Blue)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let mut text = app.engine().names().get(slot).to_string();
        if focused {
            text.push('_');
        }
        let field = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(format!("Player {} Name ({})", slot, slot.player())),
        );
        frame.render_widget(field, row);
    }

    let start_style = if app.engine().can_start() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let start = Paragraph::new(Line::from(Span::styled("[ Start Game ]", start_style)))
        .alignment(Alignment::Center);
    frame.render_widget(start, rows[2]);
}

fn draw_game(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Names
            Constraint::Min(11),   // Board
            Constraint::Length(1), // Game over
        ])
        .split(area);

    let names = app.engine().names();
    let header = Line::from(vec![
        Span::styled(format!("{} (X)", names.of(Player::X)), mark_style(Player::X)),
        Span::raw("   vs   "),
        Span::styled(format!("{} (O)", names.of(Player::O)), mark_style(Player::O)),
    ]);
    frame.render_widget(Paragraph::new(header).alignment(Alignment::Center), chunks[0]);

    draw_board(frame, chunks[1], app);

    if app.engine().phase() == Phase::Finished {
        let over = Paragraph::new("Game Over! Thanks For Playing")
            .style(Style::default().fg(Color::Green))
            .alignment(Alignment::Center);
        frame.render_widget(over, chunks[2]);
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);
    let highlight = rules::winning_line(app.engine().board());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Length(2),
                Constraint::Length(12),
                Constraint::Length(2),
                Constraint::Length(12),
            ])
            .split(rows[row * 2]);

        for col in 0..3 {
            let pos = Position::ALL[row * 3 + col];
            let in_line = highlight.is_some_and(|line| line.contains(&pos));
            draw_cell(frame, cols[col * 2], app, pos, in_line);
            if col < 2 {
                draw_separator_vertical(frame, cols[col * 2 + 1]);
            }
        }
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn mark_style(player: Player) -> Style {
    let color = match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position, in_line: bool) {
    let (symbol, base_style) = match app.engine().board().get(pos) {
        Square::Empty if app.show_indices() => {
            (format!(" {} ", pos.to_index()), Style::default().fg(Color::DarkGray))
        }
        Square::Empty => ("   ".to_string(), Style::default()),
        Square::Occupied(player) => (format!(" {} ", player), mark_style(player)),
    };

    let style = if in_line {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if pos == app.cursor() && app.engine().phase() == Phase::InProgress {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let cell = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(symbol, style)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(cell, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
