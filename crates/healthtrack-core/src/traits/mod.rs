pub mod auth_gateway;
pub mod data_store;
pub mod predictor;

pub use auth_gateway::IAuthGateway;
pub use data_store::IDataStore;
pub use predictor::IPredictor;
