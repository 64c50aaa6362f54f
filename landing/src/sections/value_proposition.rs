use ikul_core::timeline::{self, RevealPhase};
use leptos::html::Section;
use leptos::prelude::*;
use web_sys::IntersectionObserver;

use crate::dom::observe_once;
use crate::timing::{play, use_timers};

/// Share of the section that must be on screen before the cards reveal.
const REVEAL_THRESHOLD: f64 = 0.3;

struct Proposition {
    icon: [&'static str; 2],
    title: &'static str,
    description: &'static str,
    details: &'static str,
}

static PROPOSITIONS: [Proposition; 3] = [
    Proposition {
        icon: [
            "M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z",
            "M13 13l6 6",
        ],
        title: "Meticulously Researched",
        description: "We obsess over every detail, so you don't have to.",
        details: "Every specification verified through multiple sources, technical documentation, and manufacturer data.",
    },
    Proposition {
        icon: [
            "M7 21a4 4 0 01-4-4V5a2 2 0 012-2h4a2 2 0 012 2v12a4 4 0 01-4 4zM21 5H9a2 2 0 00-2 2v12a4 4 0 004 4h6a2 2 0 002-2V7a2 2 0 00-2-2z",
            "M16 17l2 2 4-4",
        ],
        title: "Artfully Presented",
        description: "Data shouldn't be boring. We make it beautiful and intuitive.",
        details: "Interactive visualizations, 3D models, and immersive experiences that bring automotive data to life.",
    },
    Proposition {
        icon: [
            "M8 7V3m8 4V3m-9 8h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z",
            "M12 15l2 2 4-4",
        ],
        title: "Consistently Delivered",
        description: "Fresh specs, delivered to you every single week.",
        details: "Regular updates featuring the latest releases, concept cars, and exclusive previews from major manufacturers.",
    },
];

#[component]
pub fn ValueProposition() -> impl IntoView {
    let section = NodeRef::<Section>::new();
    let reveal = timeline::reveal();
    let (phase, set_phase) = signal(*reveal.initial());
    let timers = use_timers();
    let observer = StoredValue::new_local(None::<IntersectionObserver>);

    // Reveal once, the first time the section scrolls into view.
    Effect::new(move |_| {
        let Some(el) = section.get() else { return };
        if observer.with_value(Option::is_some) {
            return;
        }
        let reveal = reveal.clone();
        let armed = observe_once(&el, REVEAL_THRESHOLD, move || {
            play(&reveal, set_phase, timers);
        });
        observer.set_value(armed);
    });
    on_cleanup(move || {
        observer.try_with_value(|armed| {
            if let Some(armed) = armed {
                armed.disconnect();
            }
        });
    });

    view! {
        <section node_ref=section class="value-proposition">
            <div class="carbon-texture"></div>
            <div class="section-heading">
                <h2>"Why " <span class="accent">"IKUL"</span> "?"</h2>
                <p>
                    "We don't just collect automotive data, we transform it into an art form. "
                    "Every specification tells a story, and we make sure it's told beautifully."
                </p>
            </div>
            <div class="value-grid">
                {PROPOSITIONS
                    .iter()
                    .enumerate()
                    .map(|(index, proposition)| {
                        view! { <ValueCard proposition=proposition index=index phase=phase /> }
                    })
                    .collect_view()}
            </div>
            <div class="value-cta glass-card">
                <h3>"Experience the Difference"</h3>
                <p>
                    "Join thousands of automotive enthusiasts who trust IKUL for the most "
                    "comprehensive and beautifully presented car specifications on the web."
                </p>
                <button class="solid-button">"Start Exploring"</button>
            </div>
        </section>
    }
}

#[component]
fn ValueCard(
    proposition: &'static Proposition,
    index: usize,
    phase: ReadSignal<RevealPhase>,
) -> impl IntoView {
    let (hovered, set_hovered) = signal(false);
    let Proposition {
        icon,
        title,
        description,
        details,
    } = proposition;

    view! {
        <div
            class="value-card"
            class:visible=move || phase.get().shows(index)
            style=format!("transition-delay: {}ms;", index * 200)
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            <div class="value-icon" class:lit=move || hovered.get()>
                <svg fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    {icon
                        .iter()
                        .map(|d| {
                            view! {
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="1.5"
                                    d=*d
                                />
                            }
                        })
                        .collect_view()}
                </svg>
            </div>
            <h3>{*title}</h3>
            <p class="value-description">{*description}</p>
            <div class="value-details" class:open=move || hovered.get()>
                <p>{*details}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_card_has_copy_and_an_icon() {
        for proposition in &PROPOSITIONS {
            assert!(!proposition.title.is_empty());
            assert!(!proposition.details.is_empty());
            assert!(proposition.icon.iter().all(|d| d.starts_with('M')));
        }
    }

    #[test]
    fn reveal_covers_every_card() {
        let last = *timeline::reveal().final_phase();
        assert!((0..PROPOSITIONS.len()).all(|i| last.shows(i)));
    }
}
