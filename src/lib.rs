pub mod error;
pub mod item;
pub mod iter;
pub mod map;
pub mod maps;
pub mod util;

pub use error::{MapError, Result};
pub use item::Item;
pub use map::Map;
