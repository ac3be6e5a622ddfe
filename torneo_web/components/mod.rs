pub mod form;
pub mod jugador;
pub mod layout;
pub mod partida;

pub use form::{FieldErrors, FormActions, FormContext, TextField};
pub use jugador::{JugadorListPage, JugadorUpdatePage};
pub use layout::{PageLayout, wrap_in_html};
pub use partida::{PartidaListPage, PartidaUpdatePage};
