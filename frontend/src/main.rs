use crate::app::App;

mod app;
mod components;
mod platform;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        gloo_console::error!(format!("logger already set: {e}"));
    }
    yew::Renderer::<App>::new().render();
}
