//! UI rendering using ratatui.

use super::app::App;
use crate::render::CellView;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::Mark;

const BOARD_WIDTH: u16 = 40;
const BOARD_HEIGHT: u16 = 11;

/// Draws the main UI and returns where each cell was drawn.
pub fn draw(f: &mut Frame, app: &App) -> [Rect; 9] {
    let view = app.view();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(4),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let areas = render_board(f, chunks[1], app, view.cells());

    let mut status = vec![Line::from(view.status().as_str())];
    if let Some(notice) = view.notice() {
        status.push(Line::styled(notice.as_str(), Style::default().fg(Color::Red)));
    }
    let status = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    let help = Paragraph::new("Arrows + Enter/Space or 1-9 or click | R: Restart | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);

    areas
}

fn render_board(f: &mut Frame, area: Rect, app: &App, cells: &[CellView]) -> [Rect; 9] {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
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

    let mut areas = [Rect::default(); 9];
    for row in 0..3 {
        if row > 0 {
            render_separator(f, rows[row * 2 - 1]);
        }
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(33),
                Constraint::Length(1),
                Constraint::Percentage(33),
                Constraint::Length(1),
                Constraint::Percentage(34),
            ])
            .split(rows[row * 2]);

        for col in 0..3 {
            if col > 0 {
                render_vertical_sep(f, cols[col * 2 - 1]);
            }
            let index = row * 3 + col;
            areas[index] = cols[col * 2];
            render_cell(f, areas[index], app, &cells[index]);
        }
    }
    areas
}

fn render_cell(f: &mut Frame, area: Rect, app: &App, cell: &CellView) {
    let (text, mut style) = match cell.mark() {
        None => {
            let hint = if app.cell_hints() && !cell.disabled() {
                format!("{}", cell.index() + 1)
            } else {
                String::new()
            };
            (hint, Style::default().fg(Color::DarkGray))
        }
        Some(Mark::X) => (
            cell.text(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Mark::O) => (
            cell.text(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if *cell.winning() {
        style = style.bg(Color::Green);
    } else if app.engine().is_over() {
        style = style.add_modifier(Modifier::DIM);
    } else if app.cursor().index() == *cell.index() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Vertically center in a three-line cell.
    let text = format!("\n{}", text);
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw_app(app: &App) -> (String, [Rect; 9]) {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        let mut areas = [Rect::default(); 9];
        terminal
            .draw(|f| {
                areas = draw(f, app);
            })
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        (text, areas)
    }

    #[test]
    fn test_draws_status_and_cells() {
        let mut app = App::new(true);
        app.handle_key(KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE));

        let (text, areas) = draw_app(&app);
        assert!(text.contains("Player O's turn"));
        assert!(text.contains('X'));
        assert!(areas.iter().all(|a| a.width > 0 && a.height > 0));
        // Cells are laid out left to right, top to bottom.
        assert!(areas[0].x < areas[1].x && areas[1].x < areas[2].x);
        assert!(areas[0].y < areas[3].y && areas[3].y < areas[6].y);
    }

    #[test]
    fn test_draws_win() {
        let mut app = App::new(false);
        for key in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyEvent::new(KeyCode::Char(key), KeyModifiers::NONE));
        }
        let (text, _) = draw_app(&app);
        assert!(text.contains("Player X wins!"));
    }
}
