// ============================================================================
// KHAZHFOOD ORDER - PEDIDO EN MESA (RUST PURO + YEW)
// ============================================================================
// Capas:
// - Models: datos del menú, carrito y pedido (validados al construir)
// - Stores: estado de la app, sin I/O
// - Services: persistencia, formateo y envío al personal
// - ViewModels: orquestan un envío y devuelven el resultado
// - Hooks: conectan stores y viewmodels con Yew
// - Components: render
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod stores;
pub mod viewmodels;
pub mod hooks;
pub mod components;
pub mod utils;
