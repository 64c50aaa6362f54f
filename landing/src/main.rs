// IKUL cars landing page, Leptos 0.8 edition
// Developed by the IKUL cars team (c)2025

mod api;
mod console;
mod dom;
mod sections;
mod timing;

use ikul_core::timeline::{self, PreloaderPhase};
use ikul_core::{AppConfig, logging};
use leptos::prelude::*;
use sections::*;
use tracing::{info, warn};

fn main() {
    console_error_panic_hook::set_once();

    let (config, problem) = match AppConfig::from_lookup(api::build_time) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    logging::init(&config.log_filter, console::ConsoleWriter);
    if let Some(err) = problem {
        warn!(%err, "invalid build configuration, using defaults");
    }
    info!(backend = %config.backend_url, "IKUL cars landing starting");
    api::install(config);

    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    // The preloader timeline also decides when the page itself mounts.
    let preloader = timing::use_timeline(timeline::preloader());

    view! {
        <div class="app">
            <Show
                when=move || preloader.get() == PreloaderPhase::Done
                fallback=move || view! { <Preloader phase=preloader /> }
            >
                <HeroSection />
                <main>
                    <LatestSpecsShowcase />
                    <ValueProposition />
                    <ArchiveSearch />
                </main>
                <Footer />
            </Show>
        </div>
    }
}
