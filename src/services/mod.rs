pub mod cart_persistence;
pub mod notification_client;
pub mod order_formatter;
pub mod catalog_service;

pub use cart_persistence::{CartPersistence, LocalStorageCartPersistence, MemoryCartPersistence};
pub use notification_client::{OrderNotifier, RelayNotificationClient};
pub use order_formatter::{format_order, FormattedOrder, OrderLabels};
pub use catalog_service::CatalogService;
