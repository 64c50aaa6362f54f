use ikul_core::timeline::{self, HeroPhase};
use leptos::prelude::*;

use crate::dom::scroll_to;
use crate::timing::use_timeline;

const TAGLINE: &str = "The Art of Automotive Data";
const PARTICLES: usize = 20;

#[component]
pub fn HeroSection() -> impl IntoView {
    let phase = use_timeline(timeline::hero());
    let typed = move || phase.get() >= HeroPhase::Typed;

    view! {
        <section id="hero" class="hero">
            <div class="hero-backdrop">
                <img
                    src="https://images.unsplash.com/photo-1618418721668-0d1f72aa4bab?fm=jpg&q=85"
                    alt="Hero Background"
                />
            </div>
            <div class="hero-content">
                <h1 class="hero-title">
                    <span class="hero-title-accent">"IKUL"</span>
                    <span class="hero-title-rest">"cars"</span>
                </h1>
                <div class="hero-tagline">
                    <span class:typing-animation=move || !typed() class:text-gradient=typed>
                        {TAGLINE}
                    </span>
                </div>
                <button class="vault-button" on:click=move |_| scroll_to("latest-specs")>
                    <span>"ENTER THE VAULT"</span>
                </button>
                <Show when=move || phase.get() == HeroPhase::ScrollHint>
                    <div class="scroll-hint">
                        <span>"SCROLL"</span>
                        <svg fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M19 14l-7 7m0 0l-7-7m7 7V3"
                            />
                        </svg>
                    </div>
                </Show>
            </div>
            <Particles />
        </section>
    }
}

/// Decorative dots, placed once per mount.
#[component]
fn Particles() -> impl IntoView {
    let dots = (0..PARTICLES)
        .map(|_| particle_style(js_sys::Math::random))
        .map(|style| view! { <div class="particle" style=style></div> })
        .collect_view();

    view! { <div class="particles">{dots}</div> }
}

fn particle_style(mut random: impl FnMut() -> f64) -> String {
    format!(
        "left: {:.1}%; top: {:.1}%; animation-delay: {:.2}s; animation-duration: {:.2}s;",
        random() * 100.0,
        random() * 100.0,
        random() * 3.0,
        2.0 + random() * 3.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn particle_style_scales_each_draw() {
        let mut draws = [0.5, 0.25, 1.0, 0.0].into_iter();
        let style = particle_style(|| draws.next().unwrap_or_default());
        assert_eq!(
            style,
            "left: 50.0%; top: 25.0%; animation-delay: 3.00s; animation-duration: 2.00s;"
        );
    }
}
