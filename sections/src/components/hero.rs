//! Hero section: animated headline, subtitle, CTA and the "trusted by" strip.
//!
//! The strip itself is only a mount point. The logo carousel fills it after
//! the sections are mounted.

use leptos::prelude::*;

use super::icons::{ICON_ARROW_RIGHT, Icon};
use crate::types::HeroProps;

/// Delay between two letters of an interactive word, in milliseconds.
const LETTER_STAGGER_MS: usize = 25;
/// Delay between two interactive words, in milliseconds.
const WORD_STAGGER_MS: usize = 100;

/// Hero section.
#[component]
pub fn HeroSection(props: HeroProps) -> impl IntoView {
    let headline = props.headline;

    view! {
        <section class="relative z-20 w-full max-w-7xl mx-auto px-6 pt-48 pb-24 animate-on-scroll">
            <h1 class="text-6xl md:text-8xl font-medium tracking-tighter text-white font-manrope leading-[1.05]">
                <span class="block">{headline.lead}</span>
                <span class="group inline-flex gap-4 cursor-default">
                    {headline
                        .interactive
                        .into_iter()
                        .enumerate()
                        .map(|(idx, word)| {
                            view! { <AnimatedWord word=word start_delay=idx * WORD_STAGGER_MS /> }
                        })
                        .collect::<Vec<_>>()}
                </span>
                <span class="block text-zinc-500">{headline.trailing.join(" ")}</span>
            </h1>

            <div class="mt-10 max-w-xl space-y-4">
                {props
                    .subtitle
                    .into_iter()
                    .map(|paragraph| {
                        view! { <p class="text-lg text-zinc-400 font-sans leading-relaxed">{paragraph}</p> }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="mt-10 flex items-center gap-6">
                <a
                    href="#contact-container"
                    class="group flex items-center gap-3 px-8 py-4 bg-white text-black font-semibold tracking-widest uppercase text-xs hover:bg-zinc-200 transition-all duration-300"
                >
                    {props.cta_text}
                    <Icon path=ICON_ARROW_RIGHT />
                </a>
            </div>

            <div class="mt-24">
                <p class="text-xs uppercase tracking-widest text-zinc-500 font-sans mb-6">
                    {props.trusted_by_text}
                </p>
                <div id=props.carousel_container class="logo-carousel"></div>
            </div>
        </section>
    }
}

/// A word whose letters slide up one after another on hover.
#[component]
fn AnimatedWord(word: String, start_delay: usize) -> impl IntoView {
    view! {
        <span class="inline-flex">
            {word
                .chars()
                .enumerate()
                .map(|(i, letter)| {
                    let style = format!(
                        "transition-delay: {}ms",
                        start_delay + i * LETTER_STAGGER_MS
                    );
                    view! {
                        <span class="relative inline-block overflow-hidden h-[1.1em]">
                            <span
                                class="block transition-transform duration-500 group-hover:-translate-y-full"
                                style=style.clone()
                            >
                                {letter.to_string()}
                            </span>
                            <span
                                class="absolute top-0 left-0 block translate-y-full transition-transform duration-500 group-hover:translate-y-0 text-orange-400"
                                style=style
                            >
                                {letter.to_string()}
                            </span>
                        </span>
                    }
                })
                .collect::<Vec<_>>()}
        </span>
    }
}
