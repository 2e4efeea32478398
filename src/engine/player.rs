use std::collections::BTreeSet;

use super::util::id::{ID, IDFactory};

pub type PlayerID = ID<Player>;

/// Token color a player's piece renders as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenColor {
    Red,
    Blue,
}

/// One seat at a board game. Created once at game start, never removed;
/// only the turn machines mutate it.
pub struct Player {
    pub id: PlayerID,
    pub name: String,
    pub color: TokenColor,
    /// Board cell: 1-based on the path board, 0-based on the wrap board.
    pub position: usize,
    pub money: i64,
    /// Names of owned places. Ownership lives here, not on the place.
    pub properties: BTreeSet<String>,
}

impl Player {
    pub fn new(
        id: PlayerID,
        name: impl Into<String>,
        color: TokenColor,
        position: usize,
        money: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            color,
            position,
            money,
            properties: BTreeSet::new(),
        }
    }

    /// The standard two-seat lineup both board games start with.
    pub fn lineup(start_position: usize, money: i64) -> Vec<Player> {
        let mut ids = IDFactory::new();
        vec![
            Player::new(ids.get_id(), "Player 1", TokenColor::Red, start_position, money),
            Player::new(ids.get_id(), "Player 2", TokenColor::Blue, start_position, money),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lineup_seats_get_distinct_identities() {
        let players = Player::lineup(1, 0);

        assert_eq!(players.len(), 2);
        assert_ne!(players[0].id, players[1].id);
        assert_ne!(players[0].color, players[1].color);
        assert!(players.iter().all(|p| p.position == 1 && p.properties.is_empty()));
    }
}
