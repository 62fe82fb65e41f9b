mod canvas;
mod components;
mod model;
mod projection;
mod render;
mod settings;
mod state;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
