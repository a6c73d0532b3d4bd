//! Frontend application entry point.

use frontend::app::App;

fn main() {
    // launch also installs the dioxus logger (tracing)
    dioxus::launch(App);
}
