//! Browser showcase exercising every selection widget over demo data.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod app;

pub use app::ShowcaseApp;

/// Mounts the showcase application onto the document body.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <ShowcaseApp /> })
}
