pub mod assemble;
pub mod encode;
pub mod error;
pub mod line;
pub mod listing;
pub mod parser;
pub mod resolve;
pub mod symbol;

pub use assemble::{assemble, Assembly};
pub use error::{Error, LineError};
