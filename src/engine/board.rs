use std::collections::BTreeMap;

use log::info;
use rand::Rng;

use super::prelude::*;

/// Tuning for the path board: terminal cell plus the two remap tables.
/// Snakes always map down, ladders always map up, and their domains are
/// disjoint.
pub struct BoardTuning {
    pub last_cell: usize,
    pub snakes: BTreeMap<usize, usize>,
    pub ladders: BTreeMap<usize, usize>,
}

impl Default for BoardTuning {
    fn default() -> Self {
        Self {
            last_cell: 100,
            snakes: BTreeMap::from([
                (16, 6),
                (47, 26),
                (49, 11),
                (56, 53),
                (62, 19),
                (64, 60),
                (87, 24),
                (93, 73),
                (95, 75),
                (98, 78),
            ]),
            ladders: BTreeMap::from([
                (1, 38),
                (4, 14),
                (9, 31),
                (21, 42),
                (28, 84),
                (36, 44),
                (51, 67),
                (71, 91),
                (80, 100),
            ]),
        }
    }
}

/// The snakes-and-ladders turn machine. First seat to the last cell wins.
pub struct SnakesAndLadders {
    pub tuning: BoardTuning,
    pub players: Vec<Player>,
    /// Index into `players` of the seat holding the turn.
    pub current: usize,
    pub phase: TurnPhase,
    pub last_roll: Option<u8>,
    pub log: Vec<TurnEvent>,
}

impl SnakesAndLadders {
    pub fn new(tuning: BoardTuning, players: Vec<Player>) -> Self {
        Self {
            tuning,
            players,
            current: 0,
            phase: TurnPhase::AwaitingAction,
            last_roll: None,
            log: Vec::new(),
        }
    }

    /// The classic 10x10 board with two seats starting on cell 1.
    pub fn standard() -> Self {
        Self::new(BoardTuning::default(), Player::lineup(1, 0))
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn winner(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.position == self.tuning.last_cell)
    }

    /// One accepted trigger = one full turn: roll, move, remap, win check,
    /// pass the turn.
    pub fn apply_trigger(&mut self, rng: &mut impl Rng) {
        if self.phase != TurnPhase::AwaitingAction {
            return;
        }
        self.phase = TurnPhase::Resolving;
        let roll = roll_die(rng);
        self.resolve_roll(roll);
    }

    fn resolve_roll(&mut self, roll: u8) {
        let name = self.players[self.current].name.clone();
        self.last_roll = Some(roll);
        self.log.push(TurnEvent::Rolled { player: name.clone(), roll });
        info!("board: {name} rolled {roll}");

        // Overshoot sticks at the last cell. The remap is consulted exactly
        // once, snakes before ladders, and never chained: a remap target
        // that is itself a snake head or ladder foot stays put this turn.
        let landed = (self.players[self.current].position + roll as usize)
            .min(self.tuning.last_cell);
        let cell = if let Some(&tail) = self.tuning.snakes.get(&landed) {
            info!("board: {name} bitten by snake, {landed} -> {tail}");
            self.log.push(TurnEvent::SnakeBite { player: name.clone(), to: tail });
            tail
        } else if let Some(&top) = self.tuning.ladders.get(&landed) {
            info!("board: {name} climbed ladder, {landed} -> {top}");
            self.log.push(TurnEvent::LadderClimb { player: name.clone(), to: top });
            top
        } else {
            landed
        };
        self.players[self.current].position = cell;

        if cell == self.tuning.last_cell {
            info!("board: {name} wins");
            self.log.push(TurnEvent::Won { player: name });
            self.phase = TurnPhase::GameOver;
        } else {
            self.current = (self.current + 1) % self.players.len();
            self.phase = TurnPhase::AwaitingAction;
        }
    }
}
