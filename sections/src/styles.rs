//! CSS for the behaviors the markup relies on.
//!
//! Utility classes come from Tailwind at runtime; this module only carries the
//! hand-written rules the lifecycle layer drives through classes and custom
//! properties:
//!
//! - `--scroll-width` + `.animate-infinite-scroll-precise` (logo carousel)
//! - `.animate-on-scroll` / `.animate` (scroll reveal)
//! - `.gradient-blur` (header backdrop)
//! - `.testimonial-slide` rotation

/// Custom property the carousel measurement writes on the track element.
pub const SCROLL_WIDTH_PROPERTY: &str = "--scroll-width";

/// Class that starts the carousel animation once the track is measured.
pub const CAROUSEL_ANIMATION_CLASS: &str = "animate-infinite-scroll-precise";

/// Marker class of elements revealed on first intersection.
pub const REVEAL_MARKER_CLASS: &str = "animate-on-scroll";

/// Class added to a revealed element.
pub const REVEALED_CLASS: &str = "animate";

/// Page stylesheet.
pub const PAGE_CSS: &str = r#"
:root {
  color-scheme: dark;
}

body {
  margin: 0;
  background: #000;
  font-family: "Inter", system-ui, sans-serif;
}

.font-manrope {
  font-family: "Manrope", "Inter", system-ui, sans-serif;
}

/* ---------------------------------------------------------------- carousel */

.carousel-mask {
  mask-image: linear-gradient(to right, transparent 0, black 128px, black calc(100% - 128px), transparent 100%);
  -webkit-mask-image: linear-gradient(to right, transparent 0, black 128px, black calc(100% - 128px), transparent 100%);
}

.carousel-track {
  width: max-content;
  will-change: transform;
}

@keyframes infinite-scroll-precise {
  from { transform: translateX(0); }
  to { transform: translateX(calc(-1 * var(--scroll-width, 0px))); }
}

.animate-infinite-scroll-precise {
  animation: infinite-scroll-precise 40s linear infinite;
}

.group:hover .animate-infinite-scroll-precise {
  animation-play-state: paused;
}

/* ------------------------------------------------------------------ reveal */

.animate-on-scroll {
  opacity: 0;
  transform: translateY(24px);
  transition: opacity 0.8s cubic-bezier(0.16, 1, 0.3, 1), transform 0.8s cubic-bezier(0.16, 1, 0.3, 1);
}

.animate-on-scroll.animate,
.animate .animate-on-scroll {
  opacity: 1;
  transform: none;
}

@media (prefers-reduced-motion: reduce) {
  .animate-on-scroll { opacity: 1; transform: none; transition: none; }
  .animate-infinite-scroll-precise { animation: none; }
}

/* ---------------------------------------------------------- header blur */

.gradient-blur {
  position: fixed;
  z-index: 40;
  inset: 0 0 auto 0;
  height: 120px;
  pointer-events: none;
}

.gradient-blur > div {
  position: absolute;
  inset: 0;
}

.gradient-blur > div:nth-of-type(1) { backdrop-filter: blur(1px); mask: linear-gradient(to top, transparent 0%, black 12.5%, black 25%, transparent 37.5%); }
.gradient-blur > div:nth-of-type(2) { backdrop-filter: blur(2px); mask: linear-gradient(to top, transparent 12.5%, black 25%, black 37.5%, transparent 50%); }
.gradient-blur > div:nth-of-type(3) { backdrop-filter: blur(4px); mask: linear-gradient(to top, transparent 25%, black 37.5%, black 50%, transparent 62.5%); }
.gradient-blur > div:nth-of-type(4) { backdrop-filter: blur(8px); mask: linear-gradient(to top, transparent 37.5%, black 50%, black 62.5%, transparent 75%); }
.gradient-blur > div:nth-of-type(5) { backdrop-filter: blur(16px); mask: linear-gradient(to top, transparent 50%, black 62.5%, black 75%, transparent 87.5%); }
.gradient-blur > div:nth-of-type(6) { backdrop-filter: blur(32px); mask: linear-gradient(to top, transparent 62.5%, black 75%, black 87.5%, transparent 100%); }

/* ------------------------------------------------------------ testimonials */

.testimonial-slide {
  opacity: 0;
  animation: testimonial-rotate var(--cycle, 15s) infinite;
}

@keyframes testimonial-rotate {
  0%, 30% { opacity: 1; }
  33%, 100% { opacity: 0; }
}
"#;
