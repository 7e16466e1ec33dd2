mod error;
mod fs;
mod style;

pub mod print;
pub mod prompt;
pub use error::WardenStdError;
pub use fs::Fs;
pub use style::is_no_color_set;
pub use style::Style;
