//! Features grid and the API status card mounted inside it.

use leptos::prelude::*;

use super::icons::{ICON_GIT_BRANCH, ICON_MAIL, Icon};
use crate::types::{ApiStatusProps, FeatureCard, FeatureIcon, FeaturesProps, ServiceStatus};

/// Features section. The API status card is left as an empty slot
/// (`status_slot`) and mounted separately.
#[component]
pub fn FeaturesSection(props: FeaturesProps) -> impl IntoView {
    let main = props.main_feature;

    view! {
        <section class="relative z-20 w-full max-w-7xl mx-auto px-6 py-24">
            <div class="feature-card group overflow-hidden bg-gradient-to-br from-white/10 to-white/0 rounded-[2.5rem] mb-6 relative backdrop-blur-lg animate-on-scroll">
                <div class="grid lg:grid-cols-2 gap-0">
                    <div class="md:p-16 flex flex-col p-8 relative justify-center">
                        <h3 class="text-3xl font-medium text-white tracking-tight font-manrope mb-6">
                            {main.title}
                        </h3>
                        {main
                            .description
                            .into_iter()
                            .map(|paragraph| {
                                view! { <p class="text-zinc-400 font-sans leading-relaxed mb-4">{paragraph}</p> }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <div id=props.status_slot class="relative min-h-[420px]"></div>
                </div>
            </div>

            <div class="grid md:grid-cols-2 gap-6">
                {props
                    .cards
                    .into_iter()
                    .map(|card| view! { <SmallFeatureCard card=card /> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn SmallFeatureCard(card: FeatureCard) -> impl IntoView {
    let visual = match card.icon {
        FeatureIcon::Folder => ICON_MAIL,
        FeatureIcon::Github => ICON_GIT_BRANCH,
    };

    view! {
        <div class="group overflow-hidden flex flex-col bg-gradient-to-br from-white/5 to-white/0 rounded-[2rem] backdrop-blur-lg animate-on-scroll">
            <div class="h-48 flex items-center justify-center text-zinc-500">
                <Icon path=visual size="48" />
            </div>
            <div class="mt-auto pt-8 px-10 pb-10">
                <h4 class="text-xl font-medium text-white font-manrope mb-3">{card.title}</h4>
                <p class="text-sm text-zinc-400 font-sans leading-relaxed">{card.description}</p>
                {card
                    .link
                    .map(|link| {
                        view! {
                            <a href=link.href class="mt-4 inline-block text-sm text-orange-400 hover:text-orange-300">
                                {link.label}
                            </a>
                        }
                    })}
            </div>
        </div>
    }
}

/// Live-looking API status card.
#[component]
pub fn ApiStatusCard(props: ApiStatusProps) -> impl IntoView {
    view! {
        <div class="absolute inset-0 p-8 flex flex-col justify-end">
            <div class="font-mono text-xs text-gray-500 opacity-40 mb-8 select-none">
                <p>"import { DoubleHelix } from \"@nebula/api\";"</p>
                <p>"const client = new DoubleHelix({ region: \"auto\" });"</p>
            </div>
            <div class="space-y-3">
                {props
                    .status_items
                    .into_iter()
                    .enumerate()
                    .map(|(idx, item)| {
                        let (badge, badge_class) = match item.status {
                            ServiceStatus::Active => ("Active", "text-emerald-400"),
                            ServiceStatus::Syncing => ("Syncing", "text-orange-400 animate-pulse"),
                        };
                        let row_style = format!("animation-delay: {:.1}s", 0.2 + idx as f64 * 0.8);
                        view! {
                            <div
                                class="status-row flex items-center justify-between rounded-2xl bg-zinc-900/80 border border-white/5 px-4 py-3"
                                data-color=item.color
                                style=row_style
                            >
                                <div>
                                    <p class="text-sm text-white font-sans">{item.name}</p>
                                    <p class="text-xs text-zinc-500 font-mono">{item.region}</p>
                                </div>
                                <div class="flex items-center gap-3">
                                    {item
                                        .latency
                                        .map(|latency| {
                                            view! { <span class="text-xs text-zinc-400 font-mono">{latency}</span> }
                                        })}
                                    <span class=format!("text-xs font-mono {badge_class}")>{badge}</span>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
