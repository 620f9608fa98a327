//! Testimonials: header, rotating quote carousel, static grid.

use leptos::prelude::*;

use super::icons::{ICON_QUOTE, Icon};
use crate::types::{Testimonial, TestimonialsProps};

/// Seconds each rotating quote stays on screen.
const ROTATION_SECONDS: usize = 5;

/// Testimonials section.
#[component]
pub fn TestimonialsSection(props: TestimonialsProps) -> impl IntoView {
    let header = props.header;
    let cycle = props.carousel_items.len() * ROTATION_SECONDS;

    view! {
        <section class="relative z-20 w-full max-w-7xl mx-auto px-6 py-32">
            <div class="max-w-2xl mb-16 animate-on-scroll">
                <span class="inline-block text-xs uppercase tracking-widest text-orange-400 border border-orange-400/30 rounded-full px-3 py-1">
                    {header.badge}
                </span>
                <h2 class="mt-6 text-5xl font-medium text-white tracking-tighter font-manrope">
                    {header.title} " "
                    <span class="text-transparent bg-clip-text bg-gradient-to-r from-orange-400 to-orange-600">
                        {header.title_highlight}
                    </span>
                </h2>
                <p class="mt-4 text-lg text-zinc-400 font-sans">{header.subtitle}</p>
            </div>

            <div class="testimonial-carousel relative min-h-[320px]" style=format!("--cycle: {cycle}s")>
                {props
                    .carousel_items
                    .into_iter()
                    .enumerate()
                    .map(|(idx, item)| {
                        let delay = format!("animation-delay: {}s", idx * ROTATION_SECONDS);
                        view! {
                            <div class="testimonial-slide absolute inset-0" style=delay>
                                <TestimonialCard item=item />
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="mt-12 grid md:grid-cols-2 gap-6">
                {props
                    .grid_cards
                    .into_iter()
                    .map(|item| {
                        view! {
                            <div class="animate-on-scroll">
                                <TestimonialCard item=item />
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(item: Testimonial) -> impl IntoView {
    let stat_class = if item.stat_color.is_empty() {
        "text-white".to_string()
    } else {
        format!("text-{}-400", item.stat_color)
    };

    view! {
        <article class="grid md:grid-cols-3 gap-8 rounded-[2rem] bg-white/5 border border-white/10 p-10" data-company=item.company>
            <div>
                <p class=format!("text-6xl font-manrope {stat_class}")>
                    {item.stat} <span class="text-3xl">{item.stat_suffix}</span>
                </p>
                <p class="mt-3 text-sm text-zinc-400">{item.description}</p>
            </div>
            <blockquote class="md:col-span-2">
                <Icon path=ICON_QUOTE size="24" class="text-zinc-600 mb-4" />
                <p class="text-xl text-white font-sans leading-relaxed">{item.quote}</p>
                <footer class="mt-6">
                    <p class="text-sm text-white">{item.author}</p>
                    <p class="text-xs text-zinc-500">{item.role}</p>
                </footer>
            </blockquote>
        </article>
    }
}
