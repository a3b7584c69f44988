pub mod use_cart;
pub mod use_language;
pub mod use_order;

pub use use_cart::{use_cart, CartAction, UseCartHandle};
pub use use_language::{use_language, UseLanguageHandle};
pub use use_order::{use_order, OrderAction, UseOrderHandle};
