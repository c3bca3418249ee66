mod sendgrid;
mod service;
mod smtp;

pub use sendgrid::*;
pub use service::*;
pub use smtp::*;
