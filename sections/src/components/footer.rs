//! Page footer.

use leptos::prelude::*;

use super::icons::{ICON_ARROW_UP, Icon};
use crate::types::FooterProps;

/// Site footer: brand block, link columns, social links, back-to-top.
#[component]
pub fn FooterSection(props: FooterProps) -> impl IntoView {
    let brand = props.brand;

    view! {
        <footer class="relative z-20 w-full border-t border-white/5 mt-32">
            <div class="max-w-7xl mx-auto px-6 py-20 grid lg:grid-cols-12 gap-16">
                <div class="lg:col-span-5">
                    <div class="grid grid-cols-3 gap-3 w-fit mb-10 opacity-90">
                        <div class="w-3 h-3 bg-orange-500 rotate-45"></div>
                        <div class="w-3 h-3 bg-white/20 rotate-45"></div>
                        <div class="w-3 h-3 bg-orange-500 rotate-45"></div>
                    </div>
                    <p class="text-2xl text-white font-manrope">
                        {brand.name} <span class="text-zinc-500">{brand.suffix}</span>
                    </p>
                    <p class="mt-4 text-sm text-zinc-400 max-w-sm">{brand.tagline}</p>
                </div>

                <div class="lg:col-span-7 grid grid-cols-2 md:grid-cols-3 gap-10">
                    {props
                        .link_columns
                        .into_iter()
                        .map(|column| {
                            view! {
                                <div>
                                    <h4 class="text-xs uppercase tracking-widest text-zinc-500 mb-6">{column.title}</h4>
                                    <ul class="space-y-3">
                                        {column
                                            .links
                                            .into_iter()
                                            .map(|link| {
                                                view! {
                                                    <li>
                                                        <a href=link.href class="text-sm text-zinc-300 hover:text-white transition-colors">
                                                            {link.label}
                                                        </a>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <div class="flex gap-4 items-start">
                        {props
                            .social_links
                            .into_iter()
                            .map(|social| {
                                view! {
                                    <a
                                        href=social.href
                                        aria-label=social.label
                                        class="w-9 h-9 rounded-full border border-zinc-800 flex items-center justify-center text-zinc-400 hover:text-white"
                                    >
                                        <span class="iconify" data-icon=format!("simple-icons:{}", social.icon)></span>
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>

            <div class="max-w-7xl mx-auto px-6 py-8 flex items-center justify-between border-t border-white/5">
                <p class="text-xs text-zinc-500">{props.copyright}</p>
                <a
                    href="#"
                    class="group flex items-center gap-3 text-xs text-zinc-500 hover:text-white transition-colors font-sans uppercase tracking-wider"
                >
                    "Back to top"
                    <span class="w-6 h-6 rounded border border-zinc-800 flex items-center justify-center">
                        <Icon path=ICON_ARROW_UP size="12" />
                    </span>
                </a>
            </div>
        </footer>
    }
}
