//! Infinite logo strip.
//!
//! The sequence is rendered twice back to back inside one track. Animating
//! the track left by exactly the width of one copy produces a seamless loop,
//! so every item carries its own horizontal padding instead of relying on a
//! flex gap (a gap would be missing at the seam).

use leptos::prelude::*;

use crate::types::LogoEntry;

const LOGO_IMAGE_CLASS: &str = "h-10 w-20 md:h-[72px] md:w-36 object-contain";

/// Masked viewport with the duplicated logo track.
#[component]
pub fn LogoTrack(logos: Vec<LogoEntry>, track_id: String) -> impl IntoView {
    let original = logos.clone();
    let duplicate = logos;

    view! {
        <div class="w-full inline-flex flex-nowrap overflow-hidden carousel-mask group">
            <div id=track_id class="carousel-track flex items-center justify-center md:justify-start">
                <LogoSequence logos=original copy="original" />
                <LogoSequence logos=duplicate copy="duplicate" />
            </div>
        </div>
    }
}

#[component]
fn LogoSequence(logos: Vec<LogoEntry>, copy: &'static str) -> impl IntoView {
    logos
        .into_iter()
        .map(|logo| {
            view! {
                <div class="carousel-item flex-shrink-0 px-4" data-copy=copy title=logo.label>
                    <img src=logo.src alt=logo.alt class=LOGO_IMAGE_CLASS />
                </div>
            }
        })
        .collect::<Vec<_>>()
}
