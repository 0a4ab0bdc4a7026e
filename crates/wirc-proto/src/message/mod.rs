//! IRC message types, parsing and serialization.

mod parse;
mod serialize;
mod tags;
mod types;

pub use self::parse::parse;
pub use self::serialize::serialize;
pub use self::tags::{TagValue, Tags};
pub use self::types::{Message, Params};
