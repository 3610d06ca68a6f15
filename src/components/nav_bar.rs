use leptos::*;

/// Sticky top bar with the brand link on the left and page-specific links on the right.
#[component]
pub fn NavBar(children: Children) -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <div class="nav-inner">
                <a href="/" class="brand" data-testid="logo-link">
                    <span class="brand-mark">"✓"</span>
                    <span class="brand-name">"HygieneHero"</span>
                </a>
                <div class="nav-links">{children()}</div>
            </div>
        </nav>
    }
}
