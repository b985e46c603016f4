mod store;

pub use store::SelectionStore;
