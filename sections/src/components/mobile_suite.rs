//! Mobile suite showcase: title column, phone mockup, stat cards.

use leptos::prelude::*;

use crate::types::{MobileSuiteProps, PhoneData, SuiteStats};

/// Relative bar heights of the mini chart on the phone screen (percent).
const CHART_BARS: [u8; 7] = [35, 52, 41, 68, 57, 82, 74];

/// Mobile suite section.
#[component]
pub fn MobileSuiteSection(props: MobileSuiteProps) -> impl IntoView {
    let title = props.section_title;

    view! {
        <section class="relative z-20 w-full max-w-7xl mx-auto px-6 py-32">
            <div class="grid lg:grid-cols-12 gap-12 items-center">
                <div class="lg:col-span-4 order-2 lg:order-1 animate-on-scroll">
                    <h2 class="text-5xl md:text-6xl font-medium text-white tracking-tighter font-manrope leading-[1.1]">
                        <span class="block">{title.line1}</span>
                        <span class="block">{title.line2}</span>
                        <span class="block">{title.line3}</span>
                        <span class="block text-transparent bg-clip-text bg-gradient-to-r from-orange-400 to-orange-600">
                            {title.highlight}
                        </span>
                    </h2>
                </div>
                <PhoneMockup phone=props.phone />
                <SideCards stats=props.stats />
            </div>
        </section>
    }
}

#[component]
fn PhoneMockup(phone: PhoneData) -> impl IntoView {
    view! {
        <div class="lg:col-span-4 flex order-1 lg:order-2 py-12 lg:py-0 relative justify-center">
            <div class="phone-mockup overflow-hidden bg-zinc-950 w-[330px] h-[660px] z-10 border border-zinc-800 rounded-[3.5rem] relative">
                <div class="absolute top-3 left-1/2 -translate-x-1/2 h-[32px] w-[110px] bg-black rounded-full z-50"></div>
                <div class="pt-20 px-6">
                    <p class="text-xs uppercase tracking-widest text-zinc-500">"Total balance"</p>
                    <p class="text-4xl text-white font-manrope mt-2">{phone.balance}</p>
                    <p class="text-sm text-emerald-400 mt-1">
                        {phone.change} " " <span class="text-zinc-500">{phone.period}</span>
                    </p>
                    <div class="mt-10 flex items-end gap-2 h-32">
                        {CHART_BARS
                            .iter()
                            .map(|height| {
                                view! {
                                    <div
                                        class="flex-1 rounded-t-md bg-gradient-to-t from-orange-500/40 to-orange-400"
                                        style=format!("height: {height}%")
                                    ></div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <div class="mt-10 grid grid-cols-3 gap-3">
                        <button class="rounded-2xl bg-zinc-900 py-3 text-xs text-zinc-300">"Send"</button>
                        <button class="rounded-2xl bg-zinc-900 py-3 text-xs text-zinc-300">"Receive"</button>
                        <button class="rounded-2xl bg-zinc-900 py-3 text-xs text-zinc-300">"Swap"</button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SideCards(stats: SuiteStats) -> impl IntoView {
    let cards = [
        ("Uptime", stats.uptime),
        ("Latency", stats.latency),
        ("Requests", stats.requests),
    ];

    view! {
        <div class="lg:col-span-4 order-3 space-y-4">
            {cards
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <div class="rounded-3xl bg-white/5 border border-white/10 p-6 backdrop-blur-lg animate-on-scroll">
                            <p class="text-xs uppercase tracking-widest text-zinc-500">{label}</p>
                            <p class="text-3xl text-white font-manrope mt-2">{value}</p>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
