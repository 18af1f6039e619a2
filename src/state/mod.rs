mod store;

pub use store::{SelectionState, SelectionStore};
