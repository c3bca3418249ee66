mod command;
mod error;
mod inquiry;
mod mailer;

pub use command::*;
pub use error::*;
pub use inquiry::*;
pub use mailer::*;
