use ratatui::prelude::*;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::{Game, Mark, Outcome, Phase, CELL_H, CELL_W, GRID, GRID_H, GRID_W, MIN_PANE_WIDTH};

pub fn draw_game(frame: &mut Frame, game: &Game) {
    let area = frame.size();

    if area.width < MIN_PANE_WIDTH {
        let msg = Paragraph::new(format!("RESIZE PANE (min width: {})", MIN_PANE_WIDTH))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("BLUE XO"));
        frame.render_widget(msg, area);
        return;
    }

    // Outer "cabinet" frame.
    let cabinet = Block::default()
        .title("BLUE XO")
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    let cabinet_inner = cabinet.inner(area);
    frame.render_widget(cabinet, area);

    // Split into grid area (left) and sidebar (right).
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min((GRID_W as u16 + 6).max(30)),
            Constraint::Length(24),
        ])
        .split(cabinet_inner);

    // Center the fixed-size grid within the left column.
    let v_center = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(GRID_H as u16),
            Constraint::Min(1),
        ])
        .split(cols[0]);
    let h_center = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(GRID_W as u16),
            Constraint::Min(1),
        ])
        .split(v_center[1]);

    draw_grid(frame, game, h_center[1]);
    draw_sidebar(frame, game, cols[1]);
}

fn draw_grid(frame: &mut Frame, game: &Game, area: Rect) {
    let step = CELL_H + 1;
    let mut lines: Vec<Line> = Vec::with_capacity(GRID_H);
    for y in 0..GRID_H {
        if y % step == 0 {
            let (left, mid, right) = if y == 0 {
                ('┌', '┬', '┐')
            } else if y == GRID_H - 1 {
                ('└', '┴', '┘')
            } else {
                ('├', '┼', '┤')
            };
            lines.push(Line::raw(lattice_row(left, mid, right)));
            continue;
        }

        let row = y / step;
        let inner = y % step - 1;
        let mut spans = vec![Span::raw("│")];
        for col in 0..GRID {
            let index = row * GRID + col;
            let text = if inner == CELL_H / 2 {
                match game.board.get(index) {
                    Some(mark) => format!("{:^width$}", mark, width = CELL_W),
                    None => " ".repeat(CELL_W),
                }
            } else {
                " ".repeat(CELL_W)
            };
            spans.push(Span::styled(text, cell_style(game, index)));
            spans.push(Span::raw("│"));
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(paragraph, area);
}

fn lattice_row(left: char, mid: char, right: char) -> String {
    let mut row = String::with_capacity(GRID_W * 3);
    row.push(left);
    for col in 0..GRID {
        for _ in 0..CELL_W {
            row.push('─');
        }
        row.push(if col == GRID - 1 { right } else { mid });
    }
    row
}

/// Winning cells get a background keyed to the winner; everything else
/// colors by occupancy, with the cursor cell shaded while moves are
/// accepted.
fn cell_style(game: &Game, index: usize) -> Style {
    if let Some(line) = game.winning_line() {
        if line.contains(&index) {
            let bg = match game.winner() {
                Some(Mark::X) => Color::Red,
                _ => Color::Green,
            };
            return Style::default()
                .fg(Color::Black)
                .bg(bg)
                .add_modifier(Modifier::BOLD);
        }
    }

    let style = match game.board.get(index) {
        Some(Mark::X) => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        Some(Mark::O) => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        None => Style::default(),
    };
    if game.is_active() && game.cursor == index {
        style.bg(Color::DarkGray)
    } else {
        style
    }
}

fn draw_sidebar(frame: &mut Frame, game: &Game, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(0), Constraint::Length(7)].as_ref())
        .split(area);

    let status = match game.phase {
        Phase::NotStarted => Line::raw("press s to start"),
        Phase::Active => Line::from(vec![Span::raw("turn: "), mark_span(game.current)]),
        Phase::Ended(Outcome::Draw) => Line::raw("It's a draw!"),
        Phase::Ended(Outcome::Win { winner, .. } | Outcome::Surrender { winner }) => {
            Line::from(vec![mark_span(winner), Span::raw(" wins")])
        }
    };

    let info = Paragraph::new(vec![
        Line::raw("TIME"),
        Line::raw(format_elapsed(game.elapsed_secs)),
        Line::raw(""),
        Line::raw("STATUS"),
        status,
    ])
    .block(Block::default().title("INFO").borders(Borders::ALL))
    .wrap(Wrap { trim: true });
    frame.render_widget(info, chunks[0]);

    let controls = match game.phase {
        Phase::NotStarted => "s start\nq quit",
        Phase::Active => "←↑↓→ move\nenter/1-9 place\ng surrender\nr reset\nq quit",
        Phase::Ended(_) => "r reset\nq quit",
    };
    let controls = Paragraph::new(controls)
        .block(Block::default().title("CONTROLS").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(controls, chunks[2]);
}

fn mark_span(mark: Mark) -> Span<'static> {
    let color = match mark {
        Mark::X => Color::Cyan,
        Mark::O => Color::Yellow,
    };
    Span::styled(
        mark.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

/// `MM:SS`, zero-padded; minutes keep growing past two digits rather than
/// rolling over into hours.
pub fn format_elapsed(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::format_elapsed;

    #[test]
    fn zero_pads_both_fields() {
        assert_eq!(format_elapsed(0), "00:00");
        assert_eq!(format_elapsed(5), "00:05");
        assert_eq!(format_elapsed(61), "01:01");
        assert_eq!(format_elapsed(599), "09:59");
    }

    #[test]
    fn minutes_grow_without_hour_rollover() {
        assert_eq!(format_elapsed(6000), "100:00");
    }
}
