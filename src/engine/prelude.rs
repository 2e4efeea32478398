pub use crate::engine::{
    board::*,
    events::*,
    player::*,
    property::*,
    session::*,
    shooter::*,
    snapshot::*,
    turn::*,
    util::id::*,
};
