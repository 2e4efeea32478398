use super::prelude::*;

/// Immutable view of a running session, rebuilt for the render sink every
/// tick. The renderer reads it; nothing flows back.
pub enum GameSnapshot {
    Board(BoardSnapshot),
    Shooter(ShooterSnapshot),
}

pub struct BoardSnapshot {
    pub title: &'static str,
    pub players: Vec<PlayerSnapshot>,
    pub last_roll: Option<u8>,
    /// Most recent narration lines, oldest first.
    pub recent_events: Vec<String>,
    pub finished: bool,
}

pub struct PlayerSnapshot {
    pub name: String,
    pub color: TokenColor,
    pub position: usize,
    pub money: i64,
    /// Name of the place under the piece, on boards whose cells are named.
    pub place: Option<String>,
    pub properties: Vec<String>,
    pub has_turn: bool,
}

pub struct ShooterSnapshot {
    pub width: f32,
    pub height: f32,
    pub target_radius: f32,
    pub projectile_radius: f32,
    pub targets: Vec<(f32, f32)>,
    pub projectiles: Vec<(f32, f32)>,
    /// Aim point in field pixels, when a hand has been seen.
    pub aim: Option<(f32, f32)>,
    pub score: u32,
}
