//! Rendering for the tic-tac-toe screen.
//!
//! Reads only [`GameView`] and animation timing; records the on-screen
//! rectangles of clickable widgets back into [`App`] for hit testing.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::time::Duration;

use super::app::App;
use crate::animation_config::Element;
use crate::games::tictactoe::{GameStatus, GameView, Player, Position, Square};

const CELL_WIDTH: u16 = 11;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;
const BUTTON_WIDTH: u16 = 16;

/// Draws one frame at the app's current point in the entrance animation.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let elapsed = app.elapsed();
    draw_at(frame, app, elapsed);
}

/// Draws one frame as it looks `elapsed` after the animation started.
fn draw_at(frame: &mut Frame, app: &mut App, elapsed: Duration) {
    let area = frame.area();
    let view = app.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Title
            Constraint::Length(3),         // Status
            Constraint::Min(BOARD_HEIGHT), // Board
            Constraint::Length(3),         // Play again
        ])
        .split(area);

    draw_title(frame, app, chunks[0], area, elapsed);
    draw_status(frame, app, &view, chunks[1], area, elapsed);
    draw_board(frame, app, &view, chunks[2], area, elapsed);
    draw_play_again(frame, app, &view, chunks[3], area, elapsed);
}

fn draw_title(frame: &mut Frame, app: &App, area: Rect, bounds: Rect, elapsed: Duration) {
    let progress = app.animation().progress(Element::Title, elapsed);
    if progress <= 0.0 {
        return;
    }
    let dy = app.animation().offset(Element::Title, elapsed);
    let style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let title = Paragraph::new("Tic-Tac-Toe")
        .style(fade(style, progress))
        .alignment(Alignment::Center);
    frame.render_widget(title, shift(area, 0, dy, bounds));
}

fn draw_status(
    frame: &mut Frame,
    app: &App,
    view: &GameView,
    area: Rect,
    bounds: Rect,
    elapsed: Duration,
) {
    let progress = app.animation().progress(Element::Status, elapsed);
    if progress <= 0.0 {
        return;
    }
    let dy = app.animation().offset(Element::Status, elapsed);
    let color = match view.game_status {
        GameStatus::Winner(_) => Color::Green,
        GameStatus::Tie => Color::Magenta,
        GameStatus::Next(_) => Color::Yellow,
    };
    let status = Paragraph::new(view.status.as_str())
        .style(fade(Style::default().fg(color), progress))
        .alignment(Alignment::Center);
    frame.render_widget(status, shift(area, 0, dy, bounds));
}

fn draw_board(
    frame: &mut Frame,
    app: &mut App,
    view: &GameView,
    area: Rect,
    bounds: Rect,
    elapsed: Duration,
) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    for row in 0..3 {
        let element = Element::Row(row);
        let progress = app.animation().progress(element, elapsed);
        let dx = app.animation().offset(element, elapsed);
        let row_area = shift(rows[row * 2], dx, 0, bounds);
        draw_row(frame, app, view, row_area, row, progress);
        if row < 2 && progress > 0.0 {
            draw_separator(frame, shift(rows[row * 2 + 1], dx, 0, bounds));
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    app: &mut App,
    view: &GameView,
    area: Rect,
    row: usize,
    progress: f32,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    for col in 0..3 {
        let Some(pos) = Position::from_row_col(row, col) else {
            continue;
        };
        if progress <= 0.0 {
            // Not on screen yet, so not clickable either.
            app.set_cell_area(pos, Rect::default());
            continue;
        }
        draw_cell(frame, app, view, cols[col * 2], pos, progress);
        app.set_cell_area(pos, cols[col * 2]);
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    app: &App,
    view: &GameView,
    area: Rect,
    pos: Position,
    progress: f32,
) {
    let value = view.value(pos);
    let base_style = match view.square(pos) {
        Square::Occupied(Player::X) => {
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
        }
        Square::Occupied(Player::O) => {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        }
        Square::Empty => Style::default().fg(Color::DarkGray),
    };

    let style = if pos == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else if app.is_highlighted(pos) {
        base_style.bg(Color::LightYellow)
    } else {
        base_style
    };

    // Vertically center the mark within the cell.
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("   {value:^3}   "), fade(style, progress))),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_play_again(
    frame: &mut Frame,
    app: &mut App,
    view: &GameView,
    area: Rect,
    bounds: Rect,
    elapsed: Duration,
) {
    let progress = app.animation().progress(Element::PlayAgain, elapsed);
    if progress <= 0.0 {
        app.set_play_again_area(Rect::default());
        return;
    }
    let dx = app.animation().offset(Element::PlayAgain, elapsed);
    let button_area = shift(center_rect(area, BUTTON_WIDTH, 3), dx, 0, bounds);

    let style = if view.reset_enabled {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let button = Paragraph::new("Play Again")
        .style(fade(style, progress))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, button_area);
    app.set_play_again_area(button_area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

/// Dims an element during the first part of its entrance.
fn fade(style: Style, progress: f32) -> Style {
    if progress < 0.6 {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    } else {
        style
    }
}

/// Moves `area` by (dx, dy), keeping it inside `bounds`.
fn shift(area: Rect, dx: i16, dy: i16, bounds: Rect) -> Rect {
    let max_x = bounds.right().saturating_sub(area.width);
    let max_y = bounds.bottom().saturating_sub(area.height);
    let x = (i32::from(area.x) + i32::from(dx))
        .clamp(i32::from(bounds.x), i32::from(max_x.max(bounds.x)));
    let y = (i32::from(area.y) + i32::from(dy))
        .clamp(i32::from(bounds.y), i32::from(max_y.max(bounds.y)));
    Rect {
        x: x as u16,
        y: y as u16,
        ..area
    }
    .intersection(bounds)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation_config::AnimationConfig;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::{Terminal, backend::TestBackend};

    fn render(terminal: &mut Terminal<TestBackend>, app: &mut App, elapsed: Duration) -> String {
        terminal
            .draw(|f| draw_at(f, app, elapsed))
            .expect("test backend draws");
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn left_click_at(area: Rect) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: area.x + area.width / 2,
            row: area.y + area.height / 2,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_first_frame_hides_everything() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).expect("test terminal");
        let mut app = App::new(AnimationConfig::default());

        let screen = render(&mut terminal, &mut app, Duration::ZERO);

        assert!(!screen.contains("Tic-Tac-Toe"));
        assert!(!screen.contains("Play Again"));
        for pos in Position::ALL {
            assert_eq!(app.cell_area(pos), Rect::default());
        }
        assert_eq!(app.play_again_area(), Rect::default());
    }

    #[test]
    fn test_hidden_cells_ignore_clicks() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).expect("test terminal");
        let mut app = App::new(AnimationConfig::default());
        let settled = app.animation().total_duration();

        render(&mut terminal, &mut app, settled);
        let center = app.cell_area(Position::Center);
        assert!(center.area() > 0);

        render(&mut terminal, &mut app, Duration::ZERO);
        app.handle_mouse(left_click_at(center));
        assert_eq!(app.view().value(Position::Center), "");
    }

    #[test]
    fn test_settled_frame_records_clickable_areas() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).expect("test terminal");
        let mut app = App::new(AnimationConfig::default());
        let settled = app.animation().total_duration();

        let screen = render(&mut terminal, &mut app, settled);
        assert!(screen.contains("Tic-Tac-Toe"));
        assert!(screen.contains("Next player: X"));
        assert!(screen.contains("Play Again"));

        let areas: Vec<Rect> = Position::ALL.iter().map(|pos| app.cell_area(*pos)).collect();
        for (i, a) in areas.iter().enumerate() {
            assert!(a.area() > 0);
            for b in &areas[i + 1..] {
                assert!(!a.intersects(*b));
            }
        }

        app.handle_mouse(left_click_at(app.cell_area(Position::TopRight)));
        assert_eq!(app.view().value(Position::TopRight), "X");

        let screen = render(&mut terminal, &mut app, settled);
        assert!(screen.contains("Next player: O"));
    }

    #[test]
    fn test_shift_moves_within_bounds() {
        let bounds = Rect::new(0, 0, 80, 24);
        assert_eq!(shift(Rect::new(10, 5, 20, 3), -4, 2, bounds), Rect::new(6, 7, 20, 3));
    }

    #[test]
    fn test_shift_clamps_to_bounds() {
        let bounds = Rect::new(0, 0, 80, 24);
        assert_eq!(shift(Rect::new(2, 0, 20, 3), -8, -3, bounds), Rect::new(0, 0, 20, 3));
        assert_eq!(shift(Rect::new(70, 22, 10, 2), 5, 5, bounds), Rect::new(70, 22, 10, 2));
    }

    #[test]
    fn test_center_rect() {
        let centered = center_rect(Rect::new(0, 0, 80, 24), 40, 12);
        assert_eq!(centered, Rect::new(20, 6, 40, 12));
    }

    #[test]
    fn test_fade_dims_early_frames() {
        let style = Style::default().fg(Color::Blue);
        assert_eq!(fade(style, 1.0), style);
        assert_ne!(fade(style, 0.2), style);
    }
}
