mod amount;
mod message;

pub use message::{build_message, grand_total};
