pub mod compose;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod facade;
pub mod key;
pub mod model;
pub mod plate;
pub mod residue;
pub mod source;
pub mod view;

pub use config::StatisticsConfig;
pub use error::{Error, Result, SourceError};
pub use facade::Facade;
pub use key::{AccessionKey, GeneId};
pub use source::RecordSource;
pub use view::ViewKind;

#[cfg(test)]
mod test_util;
