use jobboard_frontend::App;

fn main() {
    jobboard_frontend::logging::init();
    yew::Renderer::<App>::new().render();
}
