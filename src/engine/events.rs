use std::fmt;

/// One line of turn narration. The structured form of what lands in the
/// session log and on screen: rolls, landings, purchases, rent, remaps.
#[derive(Clone, Debug, PartialEq)]
pub enum TurnEvent {
    Rolled { player: String, roll: u8 },
    SnakeBite { player: String, to: usize },
    LadderClimb { player: String, to: usize },
    Won { player: String },
    Landed { player: String, place: String },
    Bought { player: String, place: String, price: i64 },
    PaidRent { player: String, owner: String, rent: i64 },
    InsufficientFunds { player: String, place: String },
}

impl fmt::Display for TurnEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use TurnEvent::*;
        match self {
            Rolled { player, roll } => write!(f, "{player} rolled a {roll}"),
            SnakeBite { player, to } => write!(f, "{player} bitten by snake! Down to {to}"),
            LadderClimb { player, to } => write!(f, "{player} climbed ladder! Up to {to}"),
            Won { player } => write!(f, "{player} wins!"),
            Landed { player, place } => write!(f, "{player} landed on {place}"),
            Bought { player, place, price } => {
                write!(f, "{player} bought {place} for ₹{price}")
            }
            PaidRent { player, owner, rent } => {
                write!(f, "{player} paid ₹{rent} rent to {owner}")
            }
            InsufficientFunds { player, place } => {
                write!(f, "{player} doesn't have enough money for {place}")
            }
        }
    }
}

/// The most recent `n` log lines, oldest first, rendered for display.
pub fn recent_lines(log: &[TurnEvent], n: usize) -> Vec<String> {
    let skip = log.len().saturating_sub(n);
    log[skip..].iter().map(ToString::to_string).collect()
}
