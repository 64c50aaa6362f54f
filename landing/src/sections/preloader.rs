use ikul_core::timeline::PreloaderPhase;
use leptos::prelude::*;

const PHRASE: [&str; 4] = ["I", "Know", "U", "Like"];

#[component]
pub fn Preloader(phase: ReadSignal<PreloaderPhase>) -> impl IntoView {
    let class = move || match phase.get() {
        PreloaderPhase::Fade | PreloaderPhase::Done => "preloader fade-out",
        _ => "preloader",
    };
    let spelled = move || matches!(phase.get(), PreloaderPhase::Phrase);

    view! {
        <div class=class>
            <Show
                when=spelled
                fallback=move || {
                    view! {
                        <div class="wordmark" class:collapsing=move || phase.get() == PreloaderPhase::Collapse>
                            {PreloaderPhase::WORDMARK
                                .iter()
                                .enumerate()
                                .map(|(i, letter)| {
                                    let shown = move || i < phase.get().revealed_letters();
                                    view! {
                                        <span class="wordmark-letter" class:visible=shown>
                                            {*letter}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                }
            >
                <div class="phrase">
                    {PHRASE
                        .iter()
                        .map(|word| view! { <span class="phrase-word">{*word}</span> })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
