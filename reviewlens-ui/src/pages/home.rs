//! Home Page
//!
//! Landing page with the hero copy and a feature carousel.

use leptos::*;
use leptos_router::*;

use crate::components::carousel::Slide;
use crate::components::Carousel;

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    // Fade the hero in once mounted
    let (shown, set_shown) = create_signal(false);
    create_effect(move |_| set_shown.set(true));

    let slides = vec![
        Slide {
            title: "Collect",
            body: "Reviews are scraped from the marketplace the moment you add a product.",
        },
        Slide {
            title: "Classify",
            body: "Every review is labelled positive, negative or neutral.",
        },
        Slide {
            title: "Compare",
            body: "Sentiment share, average rating and the latest reviews side by side.",
        },
    ];

    view! {
        <section class="hero">
            <div class="hero-copy" class:fade-in=move || shown.get()>
                <h1>"Know what your customers think"</h1>
                <p>"ReviewLens turns product reviews into a sentiment dashboard."</p>
                <A href="/dashboard" class="btn btn-primary">"Open dashboard"</A>
            </div>
            <Carousel slides=slides />
        </section>
    }
}
