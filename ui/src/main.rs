fn main() {
    drishti_ui::logs::init_logging();
    yew::Renderer::<drishti_ui::App>::new().render();
}
