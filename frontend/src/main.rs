use frontend::App;
use yew::Renderer;

fn main() {
    // Widget logs go to the browser console
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

    Renderer::<App>::new().render();
}
