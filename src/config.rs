use crate::ship::{Orientation, Ship};

pub const BOARD_SIZE: usize = 10;
pub const SHIP_LENGTH: usize = 3;
pub const NUM_SHIPS: usize = 4;
pub const FLEET: [Ship; NUM_SHIPS] = [
    Ship::new(2, 1, Orientation::Horizontal),
    Ship::new(5, 3, Orientation::Vertical),
    Ship::new(1, 6, Orientation::DiagonalDescending),
    Ship::new(7, 8, Orientation::DiagonalAscending),
];
