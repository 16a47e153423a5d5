use dioxus::prelude::*;
use ui::config::SiteConfig;
use ui::motion::MotionEngine;

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let config = SiteConfig::from_env();
    dioxus_logger::init(config.log_level()).expect("failed to init logger");
    MotionEngine::init(&config);

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::App()
}
