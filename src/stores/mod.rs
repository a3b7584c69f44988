pub mod cart_store;
pub mod order_store;

pub use cart_store::CartStore;
pub use order_store::{OrderStore, SubmissionState};
