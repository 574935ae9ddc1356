pub mod artifact;
pub mod conversion;
pub mod definition;
pub mod loader;
pub mod store;

pub use conversion::*;
pub use definition::*;
pub use loader::{DatasetLoader, RawTradeRecord};
pub use store::*;
