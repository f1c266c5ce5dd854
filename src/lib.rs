mod data;
mod error;
mod interaction;

pub use data::{InteractionData, RequestData, ResponseData, Status};
pub use error::Error;
pub use interaction::InteractionBuilder;
