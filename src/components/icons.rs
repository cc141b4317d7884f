//! Inline SVG icon set.
//!
//! Icons are selected by a tagged [`IconKind`] carried in seed data and
//! mapped to a fixed rendering table here, instead of passing renderers
//! around as values. Glyphs are simple stroke primitives sized at `1em`
//! so surrounding text classes control their size and color.

use leptos::prelude::*;

/// Every icon the page can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Sun,
    Moon,
    GitHub,
    LinkedIn,
    Envelope,
    Phone,
    MapPin,
    Link,
    ExternalLink,
    Close,
    ArrowRight,
    Download,
    GraduationCap,
    Briefcase,
    Award,
    Code,
    Globe,
    Laptop,
    Tool,
    Brain,
    Magnify,
}

/// A single icon, drawn at `1em` and colored by `currentColor`.
#[component]
pub fn Icon(kind: IconKind, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <svg
            class=class
            width="1em"
            height="1em"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {glyph(kind)}
        </svg>
    }
}

/// The fixed `IconKind` -> glyph table.
fn glyph(kind: IconKind) -> AnyView {
    match kind {
        IconKind::Sun => view! {
            <circle cx="12" cy="12" r="5"></circle>
            <line x1="12" y1="1" x2="12" y2="4"></line>
            <line x1="12" y1="20" x2="12" y2="23"></line>
            <line x1="4.22" y1="4.22" x2="6.34" y2="6.34"></line>
            <line x1="17.66" y1="17.66" x2="19.78" y2="19.78"></line>
            <line x1="1" y1="12" x2="4" y2="12"></line>
            <line x1="20" y1="12" x2="23" y2="12"></line>
            <line x1="4.22" y1="19.78" x2="6.34" y2="17.66"></line>
            <line x1="17.66" y1="6.34" x2="19.78" y2="4.22"></line>
        }
        .into_any(),
        IconKind::Moon => view! {
            <path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"></path>
        }
        .into_any(),
        IconKind::GitHub => view! {
            <path d="M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22"></path>
        }
        .into_any(),
        IconKind::LinkedIn => view! {
            <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-13h4v2"></path>
            <rect x="2" y="9" width="4" height="12"></rect>
            <circle cx="4" cy="4" r="2"></circle>
        }
        .into_any(),
        IconKind::Envelope => view! {
            <rect x="2" y="4" width="20" height="16" rx="2"></rect>
            <polyline points="22,6 12,13 2,6"></polyline>
        }
        .into_any(),
        IconKind::Phone => view! {
            <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"></path>
        }
        .into_any(),
        IconKind::MapPin => view! {
            <path d="M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z"></path>
            <circle cx="12" cy="10" r="3"></circle>
        }
        .into_any(),
        IconKind::Link => view! {
            <path d="M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71"></path>
            <path d="M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71"></path>
        }
        .into_any(),
        IconKind::ExternalLink => view! {
            <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"></path>
            <polyline points="15 3 21 3 21 9"></polyline>
            <line x1="10" y1="14" x2="21" y2="3"></line>
        }
        .into_any(),
        IconKind::Close => view! {
            <line x1="18" y1="6" x2="6" y2="18"></line>
            <line x1="6" y1="6" x2="18" y2="18"></line>
        }
        .into_any(),
        IconKind::ArrowRight => view! {
            <line x1="5" y1="12" x2="19" y2="12"></line>
            <polyline points="12 5 19 12 12 19"></polyline>
        }
        .into_any(),
        IconKind::Download => view! {
            <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"></path>
            <polyline points="7 10 12 15 17 10"></polyline>
            <line x1="12" y1="15" x2="12" y2="3"></line>
        }
        .into_any(),
        IconKind::GraduationCap => view! {
            <path d="M22 9 12 4 2 9l10 5 10-5z"></path>
            <path d="M6 11.5V16c0 1.5 2.7 3 6 3s6-1.5 6-3v-4.5"></path>
        }
        .into_any(),
        IconKind::Briefcase => view! {
            <rect x="2" y="7" width="20" height="14" rx="2"></rect>
            <path d="M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"></path>
        }
        .into_any(),
        IconKind::Award => view! {
            <circle cx="12" cy="8" r="7"></circle>
            <polyline points="8.21 13.89 7 23 12 20 17 23 15.79 13.88"></polyline>
        }
        .into_any(),
        IconKind::Code => view! {
            <polyline points="16 18 22 12 16 6"></polyline>
            <polyline points="8 6 2 12 8 18"></polyline>
        }
        .into_any(),
        IconKind::Globe => view! {
            <circle cx="12" cy="12" r="10"></circle>
            <line x1="2" y1="12" x2="22" y2="12"></line>
            <path d="M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z"></path>
        }
        .into_any(),
        IconKind::Laptop => view! {
            <rect x="2" y="3" width="20" height="14" rx="2"></rect>
            <line x1="8" y1="21" x2="16" y2="21"></line>
            <line x1="12" y1="17" x2="12" y2="21"></line>
        }
        .into_any(),
        IconKind::Tool => view! {
            <path d="M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z"></path>
        }
        .into_any(),
        IconKind::Brain => view! {
            <circle cx="12" cy="12" r="9"></circle>
            <path d="M12 3v18"></path>
            <path d="M7 7.5c2 1 3.5 1 5 0s3-1 5 0"></path>
            <path d="M7 16.5c2-1 3.5-1 5 0s3 1 5 0"></path>
        }
        .into_any(),
        IconKind::Magnify => view! {
            <circle cx="11" cy="11" r="8"></circle>
            <line x1="21" y1="21" x2="16.65" y2="16.65"></line>
            <line x1="11" y1="8" x2="11" y2="14"></line>
            <line x1="8" y1="11" x2="14" y2="11"></line>
        }
        .into_any(),
    }
}
