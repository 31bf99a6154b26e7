#![allow(non_snake_case)]

use chuflay::client;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    dotenvy::dotenv().ok();

    dioxus::launch(client::App);
}
