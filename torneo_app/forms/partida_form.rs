use serde::Deserialize;

use torneo_types::{errors::ValidationError, partida::Partida};

use super::{EntityForm, empty_as_none, required_text};

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartidaForm {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub ganador: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub perdedor: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub puntos_del_ganador: Option<i32>,
}

impl EntityForm for PartidaForm {
    type Entity = Partida;

    fn update_form(&mut self, partida: &Partida) {
        self.id = partida.id;
        self.ganador = partida.ganador.clone();
        self.perdedor = partida.perdedor.clone();
        self.puntos_del_ganador = partida.puntos_del_ganador;
    }

    fn create_from_form(&self) -> Partida {
        Partida::new(
            self.id,
            self.ganador.clone(),
            self.perdedor.clone(),
            self.puntos_del_ganador,
        )
    }

    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        required_text("ganador", &self.ganador, &mut errors);
        required_text("perdedor", &self.perdedor, &mut errors);

        match self.puntos_del_ganador {
            None => errors.push(ValidationError::Required {
                field: "puntosDelGanador",
            }),
            Some(points) if points < 0 => errors.push(ValidationError::Min {
                field: "puntosDelGanador",
                min: 0,
                value: points.into(),
            }),
            Some(_) => {}
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn ana_vs_beto(id: Option<i64>) -> Partida {
        Partida::new(id, Some("Ana".into()), Some("Beto".into()), Some(10))
    }

    #[test]
    fn test_load_then_extract_is_identity() {
        for partida in [ana_vs_beto(Some(7)), ana_vs_beto(None), Partida::default()] {
            let mut form = PartidaForm::default();
            form.update_form(&partida);
            assert_eq!(form.create_from_form(), partida);
        }
    }

    #[test]
    fn test_load_clears_fields_missing_on_entity() {
        let mut form = PartidaForm::default();
        form.update_form(&ana_vs_beto(Some(7)));
        form.update_form(&Partida::default());

        assert_eq!(form, PartidaForm::default());
    }

    #[test]
    fn test_extract_reflects_edits() {
        let mut form = PartidaForm::default();
        form.update_form(&ana_vs_beto(Some(7)));
        form.puntos_del_ganador = Some(21);

        let partida = form.create_from_form();
        assert_eq!(partida.id, Some(7));
        assert_eq!(partida.puntos_del_ganador, Some(21));
    }

    #[test]
    fn test_validate_valid_form() {
        let mut form = PartidaForm::default();
        form.update_form(&ana_vs_beto(None));
        assert!(form.is_valid());

        form.puntos_del_ganador = Some(0);
        assert!(form.is_valid(), "zero points is allowed");
    }

    #[test]
    fn test_validate_blank_form() {
        let errors = PartidaForm::default().validate();
        assert_eq!(
            errors,
            vec![
                ValidationError::Required { field: "ganador" },
                ValidationError::Required { field: "perdedor" },
                ValidationError::Required {
                    field: "puntosDelGanador"
                },
            ]
        );
    }

    #[test]
    fn test_validate_negative_points_and_blank_names() {
        let form = PartidaForm {
            id: None,
            ganador: Some("   ".into()),
            perdedor: Some("Beto".into()),
            puntos_del_ganador: Some(-1),
        };

        assert_eq!(
            form.validate(),
            vec![
                ValidationError::Required { field: "ganador" },
                ValidationError::Min {
                    field: "puntosDelGanador",
                    min: 0,
                    value: -1
                },
            ]
        );
    }

    #[test]
    fn test_decode_submission_with_empty_inputs() {
        let form: PartidaForm = serde_json::from_value(json!({
            "id": "",
            "ganador": "Ana",
            "perdedor": "Beto",
            "puntosDelGanador": "10"
        }))
        .unwrap();

        assert_eq!(form.id, None);
        assert_eq!(form.create_from_form(), ana_vs_beto(None));
    }

    #[test]
    fn test_decode_keeps_surrounding_spaces_in_names() {
        let form: PartidaForm = serde_json::from_value(json!({
            "id": " 7 ",
            "ganador": " Ana ",
            "perdedor": "Beto",
            "puntosDelGanador": " 10 "
        }))
        .unwrap();

        assert_eq!(form.ganador.as_deref(), Some(" Ana "));
        assert_eq!(form.id, Some(7));
        assert_eq!(form.puntos_del_ganador, Some(10));
    }

    #[test]
    fn test_loaded_names_survive_a_resubmission() {
        let stored = Partida::new(Some(3), Some(" Ana ".into()), Some("Beto  ".into()), Some(10));
        let mut loaded = PartidaForm::default();
        loaded.update_form(&stored);

        let submitted: PartidaForm = serde_json::from_value(json!({
            "id": "3",
            "ganador": loaded.ganador,
            "perdedor": loaded.perdedor,
            "puntosDelGanador": "10"
        }))
        .unwrap();

        assert_eq!(submitted.create_from_form(), stored);
    }

    #[test]
    fn test_decode_blank_input_is_unset() {
        let form: PartidaForm = serde_json::from_value(json!({
            "ganador": "   ",
            "puntosDelGanador": " "
        }))
        .unwrap();

        assert_eq!(form.ganador, None);
        assert_eq!(form.puntos_del_ganador, None);
    }

    #[test]
    fn test_decode_rejects_non_numeric_points() {
        let result = serde_json::from_value::<PartidaForm>(json!({
            "ganador": "Ana",
            "puntosDelGanador": "diez"
        }));
        assert!(result.is_err());
    }
}
