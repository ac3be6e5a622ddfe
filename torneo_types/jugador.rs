use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::{Entity, Identifiable};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Jugador {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apodo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apellido: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_de_nacimiento: Option<NaiveDate>,
}

impl Jugador {
    pub fn new(
        id: Option<i64>,
        apodo: Option<String>,
        nombre: Option<String>,
        apellido: Option<String>,
        fecha_de_nacimiento: Option<NaiveDate>,
    ) -> Self {
        Self {
            id,
            apodo,
            nombre,
            apellido,
            fecha_de_nacimiento,
        }
    }
}

impl Identifiable for Jugador {
    fn identifier(&self) -> Option<i64> {
        self.id
    }
}

impl Entity for Jugador {
    const NAME: &'static str = "jugador";
    const RESOURCE: &'static str = "jugadors";
}

pub fn get_jugador_identifier(jugador: &Jugador) -> Option<i64> {
    jugador.identifier()
}
