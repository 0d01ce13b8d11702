use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::context::use_session;

const SLIDE_INTERVAL_MS: u32 = 5_000;

struct HeroSlide {
    title: &'static str,
    description: &'static str,
    image: &'static str,
}

const HERO_SLIDES: &[HeroSlide] = &[
    HeroSlide {
        title: "Innovation for a Better Tomorrow",
        description: "Discover our latest technology solutions designed to enhance every aspect of your life.",
        image: "https://images.unsplash.com/photo-1550009158-9ebf69173e03?auto=format&fit=crop&w=1200&h=600&q=80",
    },
    HeroSlide {
        title: "Powering Your Digital Future",
        description: "Leading the way in digital transformation with cutting-edge solutions.",
        image: "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?auto=format&fit=crop&w=1200&h=600&q=80",
    },
    HeroSlide {
        title: "Sustainable Technology",
        description: "Committed to creating a sustainable future through innovative technology.",
        image: "https://images.unsplash.com/photo-1497435334941-8c899ee9e8e9?auto=format&fit=crop&w=1200&h=600&q=80",
    },
];

/// Index of the slide after `current`, wrapping around
fn next_slide(current: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else {
        (current + 1) % count
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let current = RwSignal::new(0usize);
    let session = use_session();

    // rotate until the page unmounts and the signal is disposed
    spawn_local(async move {
        loop {
            TimeoutFuture::new(SLIDE_INTERVAL_MS).await;
            if current
                .try_update(|i| *i = next_slide(*i, HERO_SLIDES.len()))
                .is_none()
            {
                break;
            }
        }
    });

    let slides = HERO_SLIDES
        .iter()
        .enumerate()
        .map(|(index, slide)| {
            let class = move || {
                if current.get() == index {
                    "hero__slide hero__slide--active"
                } else {
                    "hero__slide"
                }
            };
            view! {
                <div class=class>
                    <img src=slide.image alt=slide.title />
                    <div class="hero__caption">
                        <h1>{slide.title}</h1>
                        <p>{slide.description}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    let dots = (0..HERO_SLIDES.len())
        .map(|index| {
            view! {
                <button
                    class=move || if current.get() == index { "hero__dot hero__dot--active" } else { "hero__dot" }
                    aria-label=format!("Slide {}", index + 1)
                    on:click=move |_| current.set(index)
                ></button>
            }
        })
        .collect_view();

    let greeting = move || {
        session
            .and_then(|s| s.username())
            .map(|name| format!("Welcome back, {}", name))
            .unwrap_or_else(|| "Welcome".to_string())
    };

    view! {
        <PageFrame page_id="home--system" category=PAGE_CAT_SYSTEM>
            <section class="hero">
                {slides}
                <div class="hero__dots">{dots}</div>
            </section>

            <section class="home-tiles">
                <h2 class="page__title">{greeting}</h2>
                <div class="home-tiles__grid">
                    <A href="/products" attr:class="home-tile">"Products"</A>
                    <A href="/services" attr:class="home-tile">"Services"</A>
                    <A href="/news" attr:class="home-tile">"News"</A>
                    <A href="/careers" attr:class="home-tile">"Careers"</A>
                    <A href="/sales" attr:class="home-tile">"Sales"</A>
                </div>
            </section>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_slide_wraps() {
        assert_eq!(next_slide(0, 3), 1);
        assert_eq!(next_slide(2, 3), 0);
        assert_eq!(next_slide(0, 0), 0);
    }
}
