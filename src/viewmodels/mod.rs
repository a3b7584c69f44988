pub mod order_viewmodel;

pub use order_viewmodel::OrderViewModel;
