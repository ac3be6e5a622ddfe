use serde::{Deserialize, Serialize};

use crate::common::{Entity, Identifiable};

/// A played match: who won, who lost and the winner's score.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partida {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ganador: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perdedor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub puntos_del_ganador: Option<i32>,
}

impl Partida {
    pub fn new(
        id: Option<i64>,
        ganador: Option<String>,
        perdedor: Option<String>,
        puntos_del_ganador: Option<i32>,
    ) -> Self {
        Self {
            id,
            ganador,
            perdedor,
            puntos_del_ganador,
        }
    }
}

impl Identifiable for Partida {
    fn identifier(&self) -> Option<i64> {
        self.id
    }
}

impl Entity for Partida {
    const NAME: &'static str = "partida";
    const RESOURCE: &'static str = "partidas";
}

pub fn get_partida_identifier(partida: &Partida) -> Option<i64> {
    partida.identifier()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identifier() {
        assert_eq!(get_partida_identifier(&Partida::default()), None);

        let partida = Partida {
            id: Some(7),
            ..Default::default()
        };
        assert_eq!(get_partida_identifier(&partida), Some(7));
    }

    #[test]
    fn test_new_partida_omits_id_on_the_wire() {
        let partida = Partida::new(None, Some("Ana".into()), Some("Beto".into()), Some(10));

        let value = serde_json::to_value(&partida).unwrap();
        assert_eq!(
            value,
            json!({ "ganador": "Ana", "perdedor": "Beto", "puntosDelGanador": 10 })
        );
    }

    #[test]
    fn test_decode_backend_payload() {
        let partida: Partida = serde_json::from_value(json!({
            "id": 3,
            "ganador": "Ana",
            "perdedor": null,
            "puntosDelGanador": 4
        }))
        .unwrap();

        assert_eq!(partida.id, Some(3));
        assert_eq!(partida.ganador.as_deref(), Some("Ana"));
        assert_eq!(partida.perdedor, None);
        assert_eq!(partida.puntos_del_ganador, Some(4));
    }
}
