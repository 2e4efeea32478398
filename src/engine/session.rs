use std::time::Instant;

use rand::RngCore;

use crate::hand::gate::{ActionGate, TURN_COOLDOWN};
use crate::hand::gesture::{GestureClassifier, GestureEvent, GestureMode};
use crate::hand::landmarks::LandmarkSet;

use super::prelude::*;

/// A runnable game. The menu constructs one, the frame loop drives it until
/// it reports finished or the user quits. Each session owns its classifier
/// and gate, so the gesture contract travels with the game it controls.
pub trait Session {
    /// Feed one frame's hand reading through classify → gate → game state.
    fn advance(&mut self, hand: Option<&LandmarkSet>, now: Instant);

    /// True once the game reached a terminal state on its own.
    fn is_finished(&self) -> bool;

    /// Build the view the render sink draws this tick.
    fn snapshot(&self) -> GameSnapshot;
}

/// Snakes & ladders behind a thumbs-up roll trigger.
pub struct SnakesSession {
    game: SnakesAndLadders,
    classifier: GestureClassifier,
    gate: ActionGate,
    rng: Box<dyn RngCore>,
}

impl SnakesSession {
    pub fn new() -> Self {
        Self::with_rng(Box::new(rand::thread_rng()))
    }

    pub fn with_rng(rng: Box<dyn RngCore>) -> Self {
        Self {
            game: SnakesAndLadders::standard(),
            classifier: GestureClassifier::new(GestureMode::ThumbOverIndexTip),
            gate: ActionGate::new(TURN_COOLDOWN),
            rng,
        }
    }
}

impl Session for SnakesSession {
    fn advance(&mut self, hand: Option<&LandmarkSet>, now: Instant) {
        let event = self.classifier.classify(hand);
        if event == GestureEvent::ShootTrigger && self.gate.fire(now) {
            self.game.apply_trigger(&mut self.rng);
        }
    }

    fn is_finished(&self) -> bool {
        self.game.phase == TurnPhase::GameOver
    }

    fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::Board(BoardSnapshot {
            title: "Snake & Ladder",
            players: board_seats(&self.game.players, self.game.current, self.game.phase, None),
            last_roll: self.game.last_roll,
            recent_events: recent_lines(&self.game.log, 6),
            finished: self.game.phase == TurnPhase::GameOver,
        })
    }
}

/// The property circuit behind a rightward-swipe roll trigger.
pub struct PropertySession {
    game: PropertyGame,
    classifier: GestureClassifier,
    gate: ActionGate,
    rng: Box<dyn RngCore>,
}

impl PropertySession {
    pub fn new() -> Self {
        Self::with_rng(Box::new(rand::thread_rng()))
    }

    pub fn with_rng(rng: Box<dyn RngCore>) -> Self {
        Self {
            game: PropertyGame::standard(),
            classifier: GestureClassifier::new(GestureMode::Swipe),
            gate: ActionGate::new(TURN_COOLDOWN),
            rng,
        }
    }
}

impl Session for PropertySession {
    fn advance(&mut self, hand: Option<&LandmarkSet>, now: Instant) {
        let event = self.classifier.classify(hand);
        if matches!(event, GestureEvent::Swipe(_)) && self.gate.fire(now) {
            self.game.apply_trigger(&mut self.rng);
        }
    }

    fn is_finished(&self) -> bool {
        // Runs until the user quits.
        false
    }

    fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::Board(BoardSnapshot {
            title: "Monopoly Business",
            players: board_seats(
                &self.game.players,
                self.game.current,
                self.game.phase,
                Some(self.game.tuning.places.as_slice()),
            ),
            last_roll: self.game.last_roll,
            recent_events: recent_lines(&self.game.log, 6),
            finished: false,
        })
    }
}

/// The target range behind aim-and-thumb shooting. Continuous-time: no
/// debounce gate, every qualifying frame fires.
pub struct ShooterSession {
    game: ShooterGame,
    classifier: GestureClassifier,
    rng: Box<dyn RngCore>,
}

impl ShooterSession {
    pub fn new() -> Self {
        Self::with_rng(Box::new(rand::thread_rng()))
    }

    pub fn with_rng(mut rng: Box<dyn RngCore>) -> Self {
        let game = ShooterGame::new(ShooterTuning::default(), &mut rng);
        Self {
            game,
            classifier: GestureClassifier::new(GestureMode::ThumbOverIndexMcp),
            rng,
        }
    }

    fn scaled_aim(&self) -> Option<(f32, f32)> {
        let (w, h) = self.game.bounds();
        self.classifier.aim().map(|(x, y)| (x * w, y * h))
    }
}

impl Session for ShooterSession {
    fn advance(&mut self, hand: Option<&LandmarkSet>, _now: Instant) {
        let event = self.classifier.classify(hand);
        self.game.tick(&mut self.rng);
        if event == GestureEvent::ShootTrigger {
            if let Some((x, y)) = self.scaled_aim() {
                self.game.shoot(x, y);
            }
        }
    }

    fn is_finished(&self) -> bool {
        false
    }

    fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::Shooter(ShooterSnapshot {
            width: self.game.tuning.width,
            height: self.game.tuning.height,
            target_radius: self.game.tuning.target_radius,
            projectile_radius: self.game.tuning.projectile_radius,
            targets: self.game.targets.values().map(|t| (t.x, t.y)).collect(),
            projectiles: self.game.projectiles.values().map(|p| (p.x, p.y)).collect(),
            aim: self.scaled_aim(),
            score: self.game.score,
        })
    }
}

fn board_seats(
    players: &[Player],
    current: usize,
    phase: TurnPhase,
    places: Option<&[Place]>,
) -> Vec<PlayerSnapshot> {
    players
        .iter()
        .enumerate()
        .map(|(seat, player)| PlayerSnapshot {
            name: player.name.clone(),
            color: player.color,
            position: player.position,
            money: player.money,
            place: places.map(|places| places[player.position].name.to_string()),
            properties: player.properties.iter().cloned().collect(),
            has_turn: seat == current && phase != TurnPhase::GameOver,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::hand::landmarks::Point;

    use super::*;

    fn seeded() -> Box<dyn RngCore> {
        Box::new(ChaCha8Rng::seed_from_u64(7))
    }

    fn rolls_taken(log: &[TurnEvent]) -> usize {
        log.iter()
            .filter(|e| matches!(e, TurnEvent::Rolled { .. }))
            .count()
    }

    #[test]
    fn a_held_thumbs_up_is_one_turn_per_cooldown_window() {
        let mut session = SnakesSession::with_rng(seeded());
        let up = LandmarkSet::thumbs_up(Point::new(0.5, 0.5));
        let t0 = Instant::now();

        // Sixty frames of the same held gesture inside one window.
        for i in 0..60u64 {
            session.advance(Some(&up), t0 + Duration::from_millis(i * 33));
        }
        assert_eq!(rolls_taken(&session.game.log), 1);

        // Past the window, the next held frame rolls again.
        session.advance(Some(&up), t0 + Duration::from_secs(3));
        assert_eq!(rolls_taken(&session.game.log), 2);
    }

    #[test]
    fn a_resting_hand_never_rolls() {
        let mut session = SnakesSession::with_rng(seeded());
        let resting = LandmarkSet::resting(Point::new(0.5, 0.5));
        let t0 = Instant::now();

        for i in 0..60u64 {
            session.advance(Some(&resting), t0 + Duration::from_millis(i * 33));
        }
        assert_eq!(rolls_taken(&session.game.log), 0);
    }

    #[test]
    fn a_swipe_rolls_and_passes_the_turn() {
        let mut session = PropertySession::with_rng(seeded());
        let t0 = Instant::now();

        session.advance(Some(&LandmarkSet::resting(Point::new(0.2, 0.5))), t0);
        session.advance(
            Some(&LandmarkSet::resting(Point::new(0.4, 0.5))),
            t0 + Duration::from_millis(33),
        );

        assert_eq!(rolls_taken(&session.game.log), 1);
        assert_eq!(session.game.current, 1);
    }

    #[test]
    fn a_lost_hand_withholds_action_indefinitely() {
        let mut session = PropertySession::with_rng(seeded());
        let t0 = Instant::now();

        for i in 0..200u64 {
            session.advance(None, t0 + Duration::from_millis(i * 33));
        }
        assert_eq!(rolls_taken(&session.game.log), 0);
    }

    #[test]
    fn the_pipeline_runs_from_oracle_to_board() {
        use crate::hand::oracle::{testing::ScriptedOracle, Frame, LandmarkOracle};

        let up = LandmarkSet::thumbs_up(Point::new(0.5, 0.5));
        let mut oracle = ScriptedOracle::new([None, Some(up), Some(up), None]);
        let mut session = SnakesSession::with_rng(seeded());
        let t0 = Instant::now();

        for seq in 0..4u64 {
            let frame = Frame::with_pose(seq, None);
            let hand = oracle.detect(&frame);
            session.advance(hand.as_ref(), t0 + Duration::from_millis(seq * 33));
        }

        // Two thumbs-up frames inside one window: exactly one turn.
        assert_eq!(rolls_taken(&session.game.log), 1);
    }

    #[test]
    fn shoot_gesture_spawns_a_projectile_at_the_scaled_aim() {
        let mut session = ShooterSession::with_rng(seeded());
        session.game.targets.clear();

        let up = LandmarkSet::thumbs_up(Point::new(0.5, 0.5));
        session.advance(Some(&up), Instant::now());

        assert_eq!(session.game.projectiles.len(), 1);
        let projectile = session.game.projectiles.values().next().unwrap();
        assert!((projectile.x - 400.0).abs() < f32::EPSILON);
        assert!((projectile.y - 300.0).abs() < f32::EPSILON);
    }

    #[test]
    fn shooting_has_no_cooldown() {
        let mut session = ShooterSession::with_rng(seeded());
        session.game.targets.clear();

        let up = LandmarkSet::thumbs_up(Point::new(0.5, 0.1));
        let t0 = Instant::now();
        for i in 0..5u64 {
            session.advance(Some(&up), t0 + Duration::from_millis(i * 33));
        }

        // Every qualifying frame fired; earlier shots have climbed away but
        // none were debounced out of existence.
        assert_eq!(session.game.score, 0);
        assert!(session.game.projectiles.len() >= 3);
    }
}
