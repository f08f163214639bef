use ops_dashboard::config::CONFIG;
use ops_dashboard::App;

fn main() {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Ops Dashboard ({})", CONFIG.environment);

    yew::Renderer::<App>::new().render();
}
