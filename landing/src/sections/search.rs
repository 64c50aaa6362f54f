use ikul_core::placeholder::EXAMPLE_QUERIES;
use ikul_core::{CarSummary, Directive, PlaceholderCycle, SearchController, SearchView, Ticket};
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::{info, warn};

use crate::api::{catalog, config};
use crate::timing::{BrowserTimer, Timers, use_interval, use_timers};

const POPULAR_BRANDS: [&str; 5] = ["Ferrari", "Porsche", "Lamborghini", "McLaren", "Bugatti"];

const STATS: [(&str, &str); 4] = [
    ("500+", "Car Models"),
    ("50+", "Manufacturers"),
    ("2024", "Latest Year"),
    ("100%", "Accurate Data"),
];

/// Runs a [`SearchController`] against browser timers and the catalog.
///
/// The controller decides, the driver executes: directives become timeouts,
/// fired tickets become catalog calls, and every state change is published
/// to `view` for rendering.
#[derive(Clone, Copy)]
struct SearchDriver {
    controller: StoredValue<SearchController>,
    view: RwSignal<SearchView>,
    debounce: Timers,
}

impl SearchDriver {
    fn new() -> Self {
        Self {
            controller: StoredValue::new(SearchController::new(config().search.clone())),
            view: RwSignal::new(SearchView::default()),
            debounce: use_timers(),
        }
    }

    fn input(self, raw: String) {
        if let Some(directive) = self.controller.try_update_value(|c| c.input(raw)) {
            self.apply(directive);
        }
        self.publish();
    }

    fn clear(self) {
        if let Some(directive) = self.controller.try_update_value(SearchController::clear) {
            self.apply(directive);
        }
        self.publish();
    }

    fn select(self, id: &str) {
        let Some((chosen, directive)) = self.controller.try_update_value(|c| c.select(id)) else {
            return;
        };
        self.apply(directive);
        self.publish();
        match chosen {
            Some(car) => info!(id = %car.id, name = %car.name, "car selected"),
            None => warn!(id, "selected row no longer listed"),
        }
    }

    fn apply(self, directive: Directive) {
        match directive {
            Directive::Cancel => self.debounce.update_value(|timers| timers.cancel_all()),
            Directive::Schedule(ticket, delay) => {
                match set_timeout_with_handle(move || self.fire(ticket), delay) {
                    Ok(handle) => self
                        .debounce
                        .update_value(|timers| timers.replace(BrowserTimer::Timeout(handle))),
                    Err(err) => warn!(?err, "could not arm search debounce"),
                }
            }
        }
    }

    fn fire(self, ticket: Ticket) {
        let Some(Some(request)) = self.controller.try_update_value(|c| c.fire(ticket)) else {
            return;
        };
        spawn_local(async move {
            let resolved = catalog().search(&request.query).await;
            let applied = self
                .controller
                .try_update_value(|c| c.complete(request.ticket, resolved.items));
            if applied == Some(true) {
                self.publish();
            }
        });
    }

    fn publish(self) {
        if let Some(view) = self.controller.try_with_value(SearchController::view) {
            self.view.try_set(view);
        }
    }
}

#[component]
pub fn ArchiveSearch() -> impl IntoView {
    let driver = SearchDriver::new();
    let view = driver.view;
    let input_ref = NodeRef::<Input>::new();

    let cycle = StoredValue::new(PlaceholderCycle::new(
        EXAMPLE_QUERIES,
        config().placeholder_period,
    ));
    let (placeholder, set_placeholder) = signal(cycle.with_value(PlaceholderCycle::current));
    use_interval(config().placeholder_period, move || {
        if let Some(next) = cycle.try_update_value(|cycle| cycle.advance()) {
            set_placeholder.set(next);
        }
    });

    let query = move || view.with(|v| v.query.clone());
    let searching = move || view.with(|v| v.searching);
    let has_query = move || view.with(|v| !v.query.is_empty());

    let clear = move |_: web_sys::MouseEvent| {
        driver.clear();
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    };

    view! {
        <section id="search" class="archive-search">
            <div class="search-rings">
                <div class="ring large"></div>
                <div class="ring small"></div>
                <div class="ring dot"></div>
            </div>
            <div class="section-heading">
                <h2>"Find Your " <span class="accent">"Legend"</span></h2>
                <p>
                    "Search through our comprehensive database of automotive specifications. "
                    "From classic icons to modern hypercars."
                </p>
            </div>

            <div class="search-box">
                <div class="search-field">
                    <svg class="search-icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d="M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z"
                        />
                    </svg>
                    <input
                        node_ref=input_ref
                        type="text"
                        placeholder=move || placeholder.get()
                        prop:value=query
                        on:input=move |ev| driver.input(event_target_value(&ev))
                    />
                    <Show
                        when=searching
                        fallback=move || {
                            view! {
                                <Show when=has_query>
                                    <button class="clear-button" aria-label="Clear search" on:click=clear>
                                        <svg fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                            <path
                                                stroke-linecap="round"
                                                stroke-linejoin="round"
                                                stroke-width="2"
                                                d="M6 18L18 6M6 6l12 12"
                                            />
                                        </svg>
                                    </button>
                                </Show>
                            }
                        }
                    >
                        <div class="spinner"></div>
                    </Show>
                </div>

                <Show when=move || view.with(|v| v.panel_open)>
                    <ResultsPanel driver=driver />
                </Show>

                <Show when=move || !has_query()>
                    <div class="popular-searches">
                        <p>"Popular searches:"</p>
                        <div class="brand-chips">
                            {POPULAR_BRANDS
                                .into_iter()
                                .map(|brand| {
                                    view! {
                                        <button
                                            class="brand-chip"
                                            on:click=move |_| driver.input(brand.to_string())
                                        >
                                            {brand}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Show>
            </div>

            <div class="stats">
                {STATS
                    .into_iter()
                    .map(|(number, label)| {
                        view! {
                            <div class="stat">
                                <div class="stat-number">{number}</div>
                                <div class="stat-label">{label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ResultsPanel(driver: SearchDriver) -> impl IntoView {
    let view = driver.view;

    view! {
        <div class="results-panel">
            {move || {
                let SearchView { query, results, .. } = view.get();
                if results.is_empty() {
                    view! {
                        <div class="no-results">
                            <svg fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="1.5"
                                    d="M9.172 16.172a4 4 0 015.656 0M9 12h.01M15 12h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z"
                                />
                            </svg>
                            <p>{format!("No cars found matching \"{query}\"")}</p>
                            <p class="hint">"Try searching for a different model or brand"</p>
                        </div>
                    }
                    .into_any()
                } else {
                    results
                        .into_iter()
                        .enumerate()
                        .map(|(index, car)| view! { <SearchResult car=car index=index driver=driver /> })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn SearchResult(car: CarSummary, index: usize, driver: SearchDriver) -> impl IntoView {
    let meta = result_meta(&car);
    let CarSummary { id, name, .. } = car;

    view! {
        <button
            class="search-result"
            style=format!("animation-delay: {:.1}s;", index as f32 * 0.1)
            on:click=move |_| driver.select(&id)
        >
            <div>
                <h3>{name}</h3>
                <p>{meta}</p>
            </div>
            <svg fill="none" stroke="currentColor" viewBox="0 0 24 24">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 5l7 7-7 7" />
            </svg>
        </button>
    }
}

/// Second line of a result row.
fn result_meta(car: &CarSummary) -> String {
    format!("{} • {}", car.brand, car.year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ikul_core::catalog::static_candidates;
    use pretty_assertions::assert_eq;

    #[test]
    fn result_meta_joins_brand_and_year() {
        let porsche = &static_candidates()[1];
        assert_eq!(result_meta(porsche), "Porsche • 2024");
    }

    #[test]
    fn every_popular_brand_is_searchable() {
        let min = ikul_core::SearchSettings::default().min_query_len;
        assert!(POPULAR_BRANDS.iter().all(|brand| brand.chars().count() >= min));
    }
}
