mod entity_service;
mod partida_queries;

pub use entity_service::EntityService;
pub use partida_queries::PartidaQueries;
