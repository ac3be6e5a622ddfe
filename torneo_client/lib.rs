mod api_client;
mod partida_queries;
mod rest_service;

pub mod test_utils;

pub use api_client::ApiClient;
pub use rest_service::RestEntityService;
