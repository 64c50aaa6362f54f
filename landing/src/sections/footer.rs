use leptos::prelude::*;

use crate::dom::current_year;

struct Social {
    name: &'static str,
    url: &'static str,
    icon: &'static str,
}

static SOCIALS: [Social; 2] = [
    Social {
        name: "Instagram",
        url: "https://instagram.com/ikul_cars",
        icon: "M12 2.16c3.2 0 3.58.01 4.85.07 3.25.15 4.77 1.69 4.92 4.92.06 1.27.07 1.65.07 4.85s-.01 3.58-.07 4.85c-.15 3.23-1.66 4.77-4.92 4.92-1.27.06-1.64.07-4.85.07s-3.58-.01-4.85-.07c-3.26-.15-4.77-1.7-4.92-4.92C2.17 15.58 2.16 15.2 2.16 12s.01-3.58.07-4.85C2.38 3.92 3.9 2.38 7.15 2.23 8.42 2.17 8.8 2.16 12 2.16zM12 7a5 5 0 100 10 5 5 0 000-10zm0 8.2a3.2 3.2 0 110-6.4 3.2 3.2 0 010 6.4zm5.2-9.6a1.2 1.2 0 100 2.4 1.2 1.2 0 000-2.4z",
    },
    Social {
        name: "Twitter",
        url: "https://twitter.com/ikul_cars",
        icon: "M18.244 2.25h3.308l-7.227 8.26 8.502 11.24H16.17l-5.214-6.817L4.99 21.75H1.68l7.73-8.835L1.254 2.25H8.08l4.713 6.231zm-1.161 17.52h1.833L7.084 4.126H5.117z",
    },
];

const NAV_LINKS: [(&str, &str); 4] = [
    ("Home", "#hero"),
    ("Latest", "#latest-specs"),
    ("Archive", "#search"),
    ("About", "#"),
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-cta">
                <h3>"Follow us on Instagram " <span class="accent">"@ikul_cars"</span></h3>
                <p>
                    "Get behind-the-scenes content, exclusive previews, and daily automotive inspiration. "
                    "Join our community of car enthusiasts."
                </p>
            </div>

            <div class="footer-socials">
                {SOCIALS
                    .iter()
                    .map(|social| {
                        view! {
                            <a
                                href=social.url
                                target="_blank"
                                rel="noopener noreferrer"
                                class="social-link"
                                aria-label=social.name
                            >
                                <svg fill="currentColor" viewBox="0 0 24 24">
                                    <path d=social.icon />
                                </svg>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="newsletter">
                <h4>"Stay Updated"</h4>
                <p>"Get notified when we drop new specs and exclusive content."</p>
                <div class="newsletter-form">
                    <input type="email" placeholder="Enter your email" />
                    <button class="solid-button">"Subscribe"</button>
                </div>
            </div>

            <div class="footer-bottom">
                <div class="footer-logo">
                    <span class="accent">"IKUL"</span>
                    <span>"cars"</span>
                </div>
                <nav class="footer-links">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(label, href)| view! { <a href=href class="footer-link">{label}</a> })
                        .collect_view()}
                </nav>
                <div class="footer-copyright">{copyright(current_year())}</div>
            </div>
            <p class="footer-disclaimer">
                "IKUL Cars is dedicated to providing the most accurate and beautifully presented "
                "automotive specifications. All data is carefully researched and verified. Vehicle "
                "specifications may vary by market and are subject to manufacturer updates."
            </p>
        </footer>
    }
}

fn copyright(year: u32) -> String {
    format!("© {year} IKUL Cars. All rights reserved.")
}
