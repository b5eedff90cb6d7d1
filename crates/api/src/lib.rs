pub mod app;
pub mod gql;
pub mod state;

pub use state::AppState;
