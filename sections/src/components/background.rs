//! Animated background layer.

use leptos::prelude::*;

use crate::types::BackgroundProps;

/// Fixed, masked background. The animated layer is an empty mount target
/// picked up by the animation runtime once its script is loaded.
#[component]
pub fn BackgroundLayer(props: BackgroundProps) -> impl IntoView {
    let mask = format!(
        "linear-gradient(to bottom, transparent, black 0%, black {}%, transparent)",
        props.alpha_mask
    );
    let style = format!("mask-image: {mask}; -webkit-mask-image: {mask}");

    view! {
        <div
            class="aura-background-component fixed top-0 w-full h-screen mix-blend-screen brightness-50 opacity-50 saturate-0 z-10 pointer-events-none"
            data-alpha-mask=props.alpha_mask.to_string()
            style=style
        >
            {if props.enable_animation {
                view! {
                    <div class="aura-background-component top-0 w-full -z-10 absolute h-full">
                        <div
                            data-us-project=props.project_id
                            class="absolute w-full h-full left-0 top-0 -z-10"
                        ></div>
                    </div>
                }
                    .into_any()
            } else {
                view! { "" }.into_any()
            }}
        </div>
    }
}
