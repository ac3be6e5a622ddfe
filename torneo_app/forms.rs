use serde::{Deserialize, Deserializer, de};
use std::{fmt, str::FromStr};

use torneo_types::{common::Entity, errors::ValidationError};

mod jugador_form;
mod partida_form;

pub use jugador_form::JugadorForm;
pub use partida_form::PartidaForm;

/// Editable field state mirroring one entity.
///
/// `update_form` copies a loaded entity into the fields; `create_from_form`
/// builds a fresh entity out of whatever the fields hold right now.
pub trait EntityForm: Default + Clone + Send + 'static {
    type Entity: Entity;

    fn update_form(&mut self, entity: &Self::Entity);

    fn create_from_form(&self) -> Self::Entity;

    /// Rules that block submission. Empty means the form can be saved.
    fn validate(&self) -> Vec<ValidationError> {
        Vec::new()
    }

    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

/// Decodes an HTML input where an empty or blank value means "unset".
pub(crate) fn empty_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let Some(value) = Option::<String>::deserialize(de)? else {
        return Ok(None);
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    // Text keeps what was typed; numbers and dates ignore surrounding blanks.
    match value.parse::<T>() {
        Ok(parsed) => Ok(Some(parsed)),
        Err(_) => trimmed.parse::<T>().map(Some).map_err(de::Error::custom),
    }
}

pub(crate) fn required_text(
    field: &'static str,
    value: &Option<String>,
    errors: &mut Vec<ValidationError>,
) {
    if value.as_deref().is_none_or(|s| s.trim().is_empty()) {
        errors.push(ValidationError::Required { field });
    }
}
