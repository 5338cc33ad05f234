use dioxus::logger::tracing::Level;
use rallio::app::App;

fn main() {
  dioxus::logger::init(Level::INFO).expect("failed to init logger");
  dioxus::launch(App);
}
