//! Carousel Component
//!
//! Slide show that advances on a timer and pauses while hovered.

use gloo_timers::callback::Interval;
use leptos::*;

use crate::state::widgets::Carousel as CarouselState;

/// Milliseconds between automatic advances
const ADVANCE_INTERVAL_MS: u32 = 5000;

/// One slide
#[derive(Clone, Debug, PartialEq)]
pub struct Slide {
    pub title: &'static str,
    pub body: &'static str,
}

/// Auto-advancing carousel
#[component]
pub fn Carousel(slides: Vec<Slide>) -> impl IntoView {
    let state = create_rw_signal(CarouselState::new(slides.len()));

    let interval = Interval::new(ADVANCE_INTERVAL_MS, move || {
        state.update(|c| c.tick());
    });
    let interval = store_value(Some(interval));
    on_cleanup(move || {
        if let Some(timer) = interval.try_update_value(|t| t.take()).flatten() {
            timer.cancel();
        }
    });

    let dots = slides.len();

    view! {
        <div
            class="carousel"
            on:mouseenter=move |_| state.update(|c| c.set_paused(true))
            on:mouseleave=move |_| state.update(|c| c.set_paused(false))
        >
            <div class="carousel-track">
                {slides
                    .into_iter()
                    .enumerate()
                    .map(|(idx, slide)| {
                        view! {
                            <article
                                class="carousel-slide"
                                class:active=move || state.get().index() == idx
                            >
                                <h3>{slide.title}</h3>
                                <p>{slide.body}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="carousel-controls">
                <button class="carousel-prev" aria-label="Previous slide" on:click=move |_| state.update(|c| c.previous())>
                    "‹"
                </button>
                {(0..dots)
                    .map(|idx| {
                        view! {
                            <button
                                class="carousel-dot"
                                class:active=move || state.get().index() == idx
                                aria-label=format!("Go to slide {}", idx + 1)
                                on:click=move |_| state.update(|c| c.go_to(idx))
                            />
                        }
                    })
                    .collect_view()}
                <button class="carousel-next" aria-label="Next slide" on:click=move |_| state.update(|c| c.next())>
                    "›"
                </button>
            </div>
        </div>
    }
}
