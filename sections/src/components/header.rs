//! Fixed navigation bar with the progressive blur strip above it.

use leptos::prelude::*;

use super::icons::{ICON_ARROW_RIGHT, Icon};
use crate::types::{HeaderProps, Link};

/// Element id of the `<nav>`; the scroll hook toggles its backdrop class.
pub const NAV_ID: &str = "site-nav";

/// Site header.
#[component]
pub fn HeaderBar(props: HeaderProps) -> impl IntoView {
    view! {
        <div class="gradient-blur">
            <div></div>
            <div></div>
            <div></div>
            <div></div>
            <div></div>
            <div></div>
        </div>

        <div class="fixed flex w-full z-50 pt-6 pr-4 pl-4 top-0 left-0 justify-center">
            <nav
                id=NAV_ID
                class="flex md:gap-12 md:w-auto bg-black/60 w-full max-w-5xl rounded-full pt-2 pr-2 pb-2 pl-6 shadow-2xl backdrop-blur-xl gap-8 items-center justify-between"
            >
                <div class="flex items-center gap-2 shrink-0">
                    <span class="text-base font-medium tracking-tight text-white font-sans">
                        {props.brand_name}
                    </span>
                </div>

                <div class="hidden md:flex items-center gap-6">
                    {props
                        .nav_links
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    class="text-xs font-medium text-gray-400 hover:text-white transition-colors font-sans"
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="flex items-center gap-4 shrink-0">
                    <a
                        href="#"
                        class="hidden md:block text-xs font-medium text-gray-300 hover:text-white transition-colors font-sans"
                    >
                        "Sign in"
                    </a>
                    <CtaButton cta=props.cta />
                </div>
            </nav>
        </div>
    }
}

#[component]
fn CtaButton(cta: Link) -> impl IntoView {
    view! {
        <a
            href=cta.href
            class="group inline-flex overflow-hidden transition-all duration-300 hover:-translate-y-0.5 rounded-full p-[1px] relative items-center justify-center"
        >
            <span class="absolute inset-[-100%] animate-[spin_3s_linear_infinite] opacity-0 transition-opacity duration-300 group-hover:opacity-100"></span>
            <span class="transition-opacity duration-300 group-hover:opacity-0 bg-zinc-800 rounded-full absolute inset-0"></span>
            <span class="flex items-center justify-center gap-2 uppercase text-xs font-medium text-zinc-400 tracking-widest bg-gradient-to-b from-zinc-800 to-zinc-950 w-full h-full rounded-full py-2.5 px-6 relative">
                <span class="relative z-10">{cta.label}</span>
                <Icon path=ICON_ARROW_RIGHT class="relative z-10 transition-transform duration-300 group-hover:translate-x-0.5" />
            </span>
        </a>
    }
}
