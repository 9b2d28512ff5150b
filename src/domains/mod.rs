pub mod car;
pub mod delivery;
pub mod furniture;
pub mod house;
pub mod shape;
pub mod theme;
