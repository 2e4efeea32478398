use log::info;
use rand::Rng;

use super::prelude::*;

/// One purchasable stop on the circuit. Rent is a fixed tenth of the price.
#[derive(Clone, Copy, Debug)]
pub struct Place {
    pub name: &'static str,
    pub price: i64,
}

impl Place {
    pub fn rent(&self) -> i64 {
        self.price / 10
    }
}

/// The twenty-stop circuit, Tamil Nadu edition.
pub const PLACES: [Place; 20] = [
    Place { name: "Chennai", price: 1000 },
    Place { name: "Madurai", price: 900 },
    Place { name: "Coimbatore", price: 800 },
    Place { name: "Salem", price: 750 },
    Place { name: "Erode", price: 700 },
    Place { name: "Trichy", price: 950 },
    Place { name: "Tirunelveli", price: 600 },
    Place { name: "Vellore", price: 700 },
    Place { name: "Thoothukudi", price: 650 },
    Place { name: "Kanchipuram", price: 800 },
    Place { name: "Tanjore", price: 750 },
    Place { name: "Nagercoil", price: 850 },
    Place { name: "Dindigul", price: 600 },
    Place { name: "Cuddalore", price: 650 },
    Place { name: "Karur", price: 550 },
    Place { name: "Sivakasi", price: 500 },
    Place { name: "Villupuram", price: 550 },
    Place { name: "Nagapattinam", price: 600 },
    Place { name: "Pudukkottai", price: 500 },
    Place { name: "Ooty", price: 1000 },
];

pub struct PropertyTuning {
    pub places: Vec<Place>,
    pub starting_money: i64,
}

impl Default for PropertyTuning {
    fn default() -> Self {
        Self { places: PLACES.to_vec(), starting_money: 5000 }
    }
}

/// The property-trading turn machine. The circuit wraps and play continues
/// until the session is quit; there is no terminal cell.
pub struct PropertyGame {
    pub tuning: PropertyTuning,
    pub players: Vec<Player>,
    /// Index into `players` of the seat holding the turn.
    pub current: usize,
    pub phase: TurnPhase,
    pub last_roll: Option<u8>,
    pub log: Vec<TurnEvent>,
}

impl PropertyGame {
    pub fn new(tuning: PropertyTuning, mut players: Vec<Player>) -> Self {
        for player in &mut players {
            player.money = tuning.starting_money;
        }
        Self {
            tuning,
            players,
            current: 0,
            phase: TurnPhase::AwaitingAction,
            last_roll: None,
            log: Vec::new(),
        }
    }

    /// The full circuit with two seats starting on the first stop.
    pub fn standard() -> Self {
        let tuning = PropertyTuning::default();
        let players = Player::lineup(0, tuning.starting_money);
        Self::new(tuning, players)
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// One accepted trigger = one full turn: roll, wrap-move, resolve the
    /// landing economics, pass the turn.
    pub fn apply_trigger(&mut self, rng: &mut impl Rng) {
        if self.phase != TurnPhase::AwaitingAction {
            return;
        }
        self.phase = TurnPhase::Resolving;
        let roll = roll_die(rng);
        self.resolve_roll(roll);
    }

    fn resolve_roll(&mut self, roll: u8) {
        let cur = self.current;
        let name = self.players[cur].name.clone();
        self.last_roll = Some(roll);
        self.log.push(TurnEvent::Rolled { player: name.clone(), roll });

        let pos = (self.players[cur].position + roll as usize) % self.tuning.places.len();
        self.players[cur].position = pos;
        let place = self.tuning.places[pos];
        info!("property: {name} rolled {roll}, landed on {}", place.name);
        self.log.push(TurnEvent::Landed {
            player: name.clone(),
            place: place.name.to_string(),
        });

        match self.owner_of(place.name) {
            // Unowned: buy outright or not at all. No debt, no partial buy.
            None => {
                let player = &mut self.players[cur];
                if player.money >= place.price {
                    player.money -= place.price;
                    player.properties.insert(place.name.to_string());
                    info!("property: {name} bought {} for {}", place.name, place.price);
                    self.log.push(TurnEvent::Bought {
                        player: name,
                        place: place.name.to_string(),
                        price: place.price,
                    });
                } else {
                    self.log.push(TurnEvent::InsufficientFunds {
                        player: name,
                        place: place.name.to_string(),
                    });
                }
            }
            // Landing on your own place costs nothing.
            Some(owner) if owner == cur => {}
            Some(owner) => {
                let rent = place.rent();
                self.players[cur].money -= rent;
                self.players[owner].money += rent;
                info!("property: {name} paid {rent} rent to {}", self.players[owner].name);
                self.log.push(TurnEvent::PaidRent {
                    player: name,
                    owner: self.players[owner].name.clone(),
                    rent,
                });
            }
        }

        self.current = (cur + 1) % self.players.len();
        self.phase = TurnPhase::AwaitingAction;
    }

    fn owner_of(&self, place: &str) -> Option<usize> {
        self.players.iter().position(|p| p.properties.contains(place))
    }
}
