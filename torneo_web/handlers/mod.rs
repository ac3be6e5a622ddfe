mod helpers;
mod home_handler;
mod jugador_handler;
mod partida_handler;

pub use helpers::Submission;
pub use home_handler::home;
pub use jugador_handler::{edit_jugador, jugadores, new_jugador, save_jugador};
pub use partida_handler::{edit_partida, new_partida, partidas, save_partida};
