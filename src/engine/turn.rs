use rand::Rng;

/// Phases of the turn machine both board games run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    /// Waiting for the next accepted gesture trigger.
    AwaitingAction,
    /// Mid-resolution of a roll; transient within a single trigger.
    Resolving,
    /// A player reached the terminal cell; further triggers are ignored.
    GameOver,
}

/// Uniform d6 roll, the only nondeterminism in the board games.
pub fn roll_die(rng: &mut impl Rng) -> u8 {
    rng.gen_range(1..=6)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn rolls_stay_on_the_die() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..1000 {
            let roll = roll_die(&mut rng);
            assert!((1..=6).contains(&roll));
        }
    }
}
