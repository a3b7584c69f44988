pub mod app;
pub mod cart_modal;
pub mod category_bar;
pub mod dish_card;
pub mod header;
pub mod status_banner;

pub use app::App;
pub use cart_modal::CartModal;
pub use category_bar::CategoryBar;
pub use dish_card::DishCard;
pub use header::Header;
pub use status_banner::StatusBanner;
