// region:    --- Modules

mod confirm;
mod differ;
mod edit;
mod error;
mod replace;
mod replacer;
mod similarity;
mod sniff;

pub use confirm::*;
pub use differ::*;
pub use edit::*;
pub use error::*;
pub use replace::*;
pub use replacer::*;
pub use similarity::*;
pub use sniff::*;

// endregion: --- Modules
