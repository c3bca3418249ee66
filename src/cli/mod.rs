mod routes;
mod server;

pub use routes::*;
pub use server::*;
