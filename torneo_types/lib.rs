pub mod common;
pub mod errors;
pub mod jugador;
pub mod partida;

pub use errors::Result;
