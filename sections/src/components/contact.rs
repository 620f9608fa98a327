//! Contact call-to-action and form with floating labels.
//!
//! The form has no action. Submission is intercepted by the lifecycle layer
//! and forwarded on the event bus.

use leptos::prelude::*;

use super::icons::{ICON_ARROW_RIGHT, Icon};
use crate::types::{ContactProps, FieldKind, FormField};

const INPUT_CLASS: &str = "peer w-full bg-transparent border-b border-white/10 py-3 text-white placeholder-transparent focus:border-orange-500 focus:outline-none transition-colors font-sans text-lg";
const LABEL_CLASS: &str = "absolute left-0 -top-5 text-xs text-zinc-500 transition-all peer-placeholder-shown:text-base peer-placeholder-shown:top-3 peer-focus:-top-5 peer-focus:text-orange-500 font-sans uppercase tracking-wider font-medium";

/// Contact section.
#[component]
pub fn ContactSection(props: ContactProps) -> impl IntoView {
    let (half, full): (Vec<FormField>, Vec<FormField>) =
        props.fields.into_iter().partition(|field| field.half);

    view! {
        <section class="w-full max-w-7xl mx-auto px-6 mb-32 relative z-20 mt-32">
            <div class="grid lg:grid-cols-12 gap-16 items-start">
                <div class="lg:col-span-5 pt-4 animate-on-scroll">
                    <h2 class="text-5xl md:text-6xl font-medium text-white tracking-tighter font-manrope mb-6 leading-[1.1]">
                        {props.title} " "
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-orange-400 to-orange-600">
                            {props.title_highlight}
                        </span>
                    </h2>
                    <p class="text-lg text-zinc-400 font-sans leading-relaxed max-w-md">{props.subtitle}</p>
                </div>

                <div class="lg:col-span-7">
                    <form id=props.form_id class="space-y-12 relative">
                        {(!half.is_empty())
                            .then(|| {
                                view! {
                                    <div class="grid grid-cols-1 md:grid-cols-2 gap-10">
                                        {half
                                            .into_iter()
                                            .map(|field| view! { <Field field=field /> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                            })}
                        {full
                            .into_iter()
                            .map(|field| view! { <Field field=field /> })
                            .collect::<Vec<_>>()}
                        <div class="flex justify-end pt-8">
                            <button
                                type="submit"
                                class="group flex items-center gap-3 px-8 py-4 bg-white text-black font-semibold tracking-widest uppercase text-xs hover:bg-zinc-200 transition-all duration-300"
                            >
                                {props.submit_text}
                                <Icon path=ICON_ARROW_RIGHT />
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Field(field: FormField) -> impl IntoView {
    let control = match field.kind {
        FieldKind::Textarea => view! {
            <textarea
                id=field.id.clone()
                name=field.id.clone()
                rows="1"
                class=format!("{INPUT_CLASS} resize-none")
                placeholder=field.label.clone()
                required=field.required
            ></textarea>
        }
        .into_any(),
        kind => view! {
            <input
                type=kind.input_type()
                id=field.id.clone()
                name=field.id.clone()
                class=INPUT_CLASS
                placeholder=field.label.clone()
                required=field.required
            />
        }
        .into_any(),
    };

    view! {
        <div class="group relative">
            {control}
            <label for=field.id class=LABEL_CLASS>
                {field.label}
            </label>
        </div>
    }
}
