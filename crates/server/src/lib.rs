pub mod errors;
pub mod extract;
pub mod observability;
pub mod response;
pub mod routes;
pub mod startup;

pub use routes::AppState;
pub use startup::run;
