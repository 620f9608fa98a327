//! Root document component - the complete HTML page
//!
//! Sections are not rendered here. The document only lays out the mount
//! containers, in order, with whatever markup has already been mounted into
//! them.

use leptos::prelude::*;

use crate::styles::PAGE_CSS;
use crate::{HeadEntry, MountedContainer, PageMeta};

/// The complete HTML document for the landing page
#[component]
pub fn PageDocument(meta: PageMeta, containers: Vec<MountedContainer>) -> impl IntoView {
    view! {
        <html lang=meta.lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=meta.description />
                <title>{meta.title}</title>
                <style inner_html=PAGE_CSS></style>
                {meta
                    .head
                    .into_iter()
                    .map(|entry| match entry {
                        HeadEntry::Script { src } => view! { <script src=src defer=true></script> }.into_any(),
                        HeadEntry::InlineScript(code) => view! { <script inner_html=code></script> }.into_any(),
                        HeadEntry::Style(css) => view! { <style inner_html=css></style> }.into_any(),
                    })
                    .collect::<Vec<_>>()}
            </head>
            <body class="bg-black text-white antialiased">
                {containers
                    .into_iter()
                    .map(|container| {
                        let class = container.classes.join(" ");
                        view! { <div id=container.id class=class inner_html=container.html></div> }
                    })
                    .collect::<Vec<_>>()}
            </body>
        </html>
    }
}
