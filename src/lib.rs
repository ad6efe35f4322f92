pub mod bot;
pub mod error;
pub mod evaluation;
pub mod guard;
pub mod movegen;
pub mod position;
pub mod search;
pub mod types;

pub use bot::Bot;
pub use error::BotError;
pub use position::{ChessPosition, Rules};
pub use types::{BotConfig, Score, SearchResult};
