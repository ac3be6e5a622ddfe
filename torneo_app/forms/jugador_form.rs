use chrono::NaiveDate;
use serde::Deserialize;

use torneo_types::jugador::Jugador;

use super::{EntityForm, empty_as_none};

/// Jugador has no validation rules; every field may stay empty.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JugadorForm {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub apodo: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub nombre: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub apellido: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub fecha_de_nacimiento: Option<NaiveDate>,
}

impl EntityForm for JugadorForm {
    type Entity = Jugador;

    fn update_form(&mut self, jugador: &Jugador) {
        self.id = jugador.id;
        self.apodo = jugador.apodo.clone();
        self.nombre = jugador.nombre.clone();
        self.apellido = jugador.apellido.clone();
        self.fecha_de_nacimiento = jugador.fecha_de_nacimiento;
    }

    fn create_from_form(&self) -> Jugador {
        Jugador::new(
            self.id,
            self.apodo.clone(),
            self.nombre.clone(),
            self.apellido.clone(),
            self.fecha_de_nacimiento,
        )
    }
}
