pub mod regexp;
pub mod value;

pub use regexp::{RegExp, RegExpError};
pub use value::{Dict, Value, UNDEFINED};
