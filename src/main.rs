use khazhfood_order::components::App;
use khazhfood_order::config::CONFIG;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 KhazhFood starting...");

    yew::Renderer::<App>::new().render();
}
