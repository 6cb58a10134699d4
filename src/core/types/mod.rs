pub mod config;
mod error;
mod event;
mod record;
mod selection;
mod series;

pub use error::*;
pub use event::*;
pub use record::*;
pub use selection::*;
pub use series::*;
