pub mod family;
pub mod monster;
