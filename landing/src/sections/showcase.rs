use ikul_core::{Car, Source};
use leptos::html::Div;
use leptos::prelude::*;
use tracing::info;

use crate::api::catalog;

/// Where a drag on the card strip began.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct DragStart {
    x: i32,
    scroll_left: i32,
}

/// Strip scroll offset for a pointer at `x`; the strip moves twice as far as the pointer.
fn drag_offset(start: DragStart, x: i32) -> i32 {
    start.scroll_left - (x - start.x) * 2
}

fn first_touch_x(ev: &web_sys::TouchEvent) -> Option<i32> {
    ev.touches().get(0).map(|touch| touch.page_x())
}

#[component]
pub fn LatestSpecsShowcase() -> impl IntoView {
    let cars = LocalResource::new(|| {
        let catalog = catalog();
        async move {
            let drop = catalog.latest().await;
            info!(cars = drop.items.len(), live = drop.source == Source::Live, "weekly drop loaded");
            drop.items
        }
    });

    view! {
        <section id="latest-specs" class="showcase">
            {move || match cars.get() {
                None => view! {
                    <div class="showcase-loading">"Loading the latest drops..."</div>
                }
                .into_any(),
                Some(cars) => view! {
                    <div class="section-heading">
                        <h2>"The " <span class="accent">"Weekly Drop"</span></h2>
                        <p>
                            "Fresh automotive specs delivered weekly. "
                            "Each car meticulously researched and beautifully presented."
                        </p>
                    </div>
                    <CardStrip cars=cars />
                }
                .into_any(),
            }}
        </section>
    }
}

#[component]
fn CardStrip(cars: Vec<Car>) -> impl IntoView {
    let strip = NodeRef::<Div>::new();
    let (drag, set_drag) = signal(None::<DragStart>);

    // Mouse and touch share these; `x` is the pointer's page coordinate.
    let begin = move |x: i32| {
        if let Some(el) = strip.get() {
            set_drag.set(Some(DragStart {
                x,
                scroll_left: el.scroll_left(),
            }));
        }
    };
    let follow = move |x: i32| -> bool {
        let (Some(start), Some(el)) = (drag.get_untracked(), strip.get()) else {
            return false;
        };
        el.set_scroll_left(drag_offset(start, x));
        true
    };
    let end = move || set_drag.set(None);

    let on_mouse_move = move |ev: web_sys::MouseEvent| {
        if follow(ev.page_x()) {
            ev.prevent_default();
        }
    };
    let on_touch_start = move |ev: web_sys::TouchEvent| {
        if let Some(x) = first_touch_x(&ev) {
            begin(x);
        }
    };
    let on_touch_move = move |ev: web_sys::TouchEvent| {
        if let Some(x) = first_touch_x(&ev) {
            follow(x);
        }
    };

    view! {
        <div class="strip-frame">
            <div
                node_ref=strip
                class="card-strip"
                class:dragging=move || drag.get().is_some()
                on:mousedown=move |ev: web_sys::MouseEvent| begin(ev.page_x())
                on:mousemove=on_mouse_move
                on:mouseup=move |_| end()
                on:mouseleave=move |_| end()
                on:touchstart=on_touch_start
                on:touchmove=on_touch_move
                on:touchend=move |_| end()
                on:touchcancel=move |_| end()
            >
                {cars
                    .into_iter()
                    .enumerate()
                    .map(|(index, car)| view! { <CarCard car=car index=index /> })
                    .collect_view()}
            </div>
            <div class="strip-fade left"></div>
            <div class="strip-fade right"></div>
        </div>
    }
}

#[component]
fn CarCard(car: Car, index: usize) -> impl IntoView {
    let (hovered, set_hovered) = signal(false);
    let specs = spec_sheet(&car);
    let Car {
        name,
        year,
        image_url,
        blueprint_image_url,
        description,
        is_latest,
        ..
    } = car;
    let alt = name.clone();

    view! {
        <div
            class="car-card"
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            <div
                class="car-card-inner"
                class:resting=move || !hovered.get()
                style=format!("animation-delay: {:.1}s;", index as f32 * 0.2)
            >
                <div class="car-photo">
                    <img
                        src=move || {
                            if hovered.get() { blueprint_image_url.clone() } else { image_url.clone() }
                        }
                        alt=alt
                        class:blueprint=move || hovered.get()
                    />
                    {is_latest.then(|| view! { <div class="latest-dot"></div> })}
                    <Show when=move || hovered.get()>
                        <div class="blueprint-overlay">
                            <div class="blueprint-title">"BLUEPRINT MODE"</div>
                            <div>"Analyzing Specifications..."</div>
                        </div>
                    </Show>
                </div>
                <div class="car-info">
                    <div class="car-heading">
                        <h3>{name}</h3>
                        <span class="car-year">{year}</span>
                    </div>
                    <Show
                        when=move || hovered.get()
                        fallback=move || view! { <p class="car-pitch">{description.clone()}</p> }
                    >
                        <div class="spec-grid">
                            {specs
                                .iter()
                                .map(|(value, unit)| {
                                    view! {
                                        <div class="spec">
                                            <span class="accent">{value.clone()}</span>
                                            " "
                                            {*unit}
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}

/// Highlighted value and label for each row of the blueprint spec grid.
fn spec_sheet(car: &Car) -> [(String, &'static str); 4] {
    [
        (car.horsepower.to_string(), "HP"),
        (car.top_speed.to_string(), "MPH"),
        (car.engine.clone(), ""),
        (format!("{}s", car.acceleration_0_60), "0-60"),
    ]
}
