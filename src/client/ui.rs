use ratatui::{
    prelude::{Alignment, Constraint, Direction, Frame, Layout},
    style::{Color, Style},
    widgets::{
        canvas::{Canvas, Circle, Points},
        Block, BorderType, Borders, Paragraph,
    },
};

use crate::engine::player::TokenColor;
use crate::engine::snapshot::{BoardSnapshot, GameSnapshot, PlayerSnapshot, ShooterSnapshot};

/// What the terminal shows this tick.
#[derive(Clone, Copy)]
pub enum Screen<'a> {
    Menu { notice: Option<&'a str> },
    Game(&'a GameSnapshot),
}

pub fn render(screen: Screen, f: &mut Frame) {
    match screen {
        Screen::Menu { notice } => render_menu(notice, f),
        Screen::Game(GameSnapshot::Board(board)) => render_board(board, f),
        Screen::Game(GameSnapshot::Shooter(range)) => render_range(range, f),
    }
}

fn render_menu(notice: Option<&str>, f: &mut Frame) {
    let body = format!(
        "\n1. Snake and Ladder\n\
         2. Monopoly Business\n\
         3. Gesture Shooter\n\n\
         Press 1, 2 or 3 to select. `q` quits.\n\n{}",
        notice.unwrap_or(""),
    );
    f.render_widget(
        Paragraph::new(body)
            .block(titled("BOARD GAMES MENU"))
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center),
        f.size(),
    )
}

fn render_board(board: &BoardSnapshot, f: &mut Frame) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(board.players.len() as u16 + 2),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(f.size());

    let seats: Vec<String> = board.players.iter().map(seat_line).collect();
    f.render_widget(
        Paragraph::new(seats.join("\n")).block(titled(board.title)),
        rows[0],
    );

    let dice = match board.last_roll {
        Some(roll) => format!("Dice: {roll}"),
        None => "Dice: -".to_string(),
    };
    f.render_widget(
        Paragraph::new(dice)
            .block(titled("Last Roll"))
            .alignment(Alignment::Center),
        rows[1],
    );

    let mut lines = board.recent_events.clone();
    lines.push(String::new());
    if board.finished {
        lines.push("Game over".to_string());
    } else {
        lines.push("Arrows: move hand   Space: raise thumb   h: hide hand   q: quit".to_string());
    }
    f.render_widget(
        Paragraph::new(lines.join("\n")).block(titled("Table Talk")),
        rows[2],
    );
}

fn seat_line(seat: &PlayerSnapshot) -> String {
    let marker = if seat.has_turn { ">" } else { " " };
    match &seat.place {
        Some(place) => format!(
            "{marker} {} [{}]  ₹{}  at {place}  owns {}",
            seat.name,
            color_name(seat.color),
            seat.money,
            seat.properties.len(),
        ),
        None => format!(
            "{marker} {} [{}]  cell {}",
            seat.name,
            color_name(seat.color),
            seat.position,
        ),
    }
}

fn color_name(color: TokenColor) -> &'static str {
    match color {
        TokenColor::Red => "red",
        TokenColor::Blue => "blue",
    }
}

fn render_range(range: &ShooterSnapshot, f: &mut Frame) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.size());

    let field = Canvas::default()
        .block(titled("Gesture Shooter"))
        .x_bounds([0.0, range.width as f64])
        .y_bounds([0.0, range.height as f64])
        .paint(|ctx| {
            for &(x, y) in &range.targets {
                ctx.draw(&Circle {
                    x: x as f64,
                    y: flip(y, range.height),
                    radius: range.target_radius as f64,
                    color: Color::Red,
                });
            }
            for &(x, y) in &range.projectiles {
                ctx.draw(&Circle {
                    x: x as f64,
                    y: flip(y, range.height),
                    radius: range.projectile_radius as f64,
                    color: Color::Yellow,
                });
            }
            if let Some((x, y)) = range.aim {
                let crosshair = [(x as f64, flip(y, range.height))];
                ctx.draw(&Points { coords: &crosshair, color: Color::Green });
            }
        });
    f.render_widget(field, rows[0]);

    let footer = format!(
        "Score: {}   Arrows: aim   Space: shoot   h: hide hand   q: quit",
        range.score,
    );
    f.render_widget(
        Paragraph::new(footer).alignment(Alignment::Center),
        rows[1],
    );
}

/// Canvas y grows up; image y grows down.
fn flip(y: f32, height: f32) -> f64 {
    (height - y) as f64
}

fn titled(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}
