use crate::auth::use_auth;
use crate::components::auth_dialog::AuthDialog;
use crate::components::nav_bar::NavBar;
use leptos::ev::KeyboardEvent;
use leptos::*;
use leptos_router::use_navigate;

/// Dashboard link for a landing-page search, or None when the query is blank.
pub fn search_href(query: &str) -> Option<String> {
    let query = query.trim();
    if query.is_empty() {
        None
    } else {
        Some(format!("/dashboard?search={}", urlencoding::encode(query)))
    }
}

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "feature-rate",
        "Rate & Review",
        "Share your experience with detailed hygiene ratings on water quality, masks, gloves, and cleanliness.",
    ),
    (
        "feature-discover",
        "Discover Locally",
        "Find the highest-rated food stalls in your area with detailed hygiene scores and community reviews.",
    ),
    (
        "feature-qr",
        "QR Code Display",
        "Stall owners can generate QR codes with their hygiene scores to display at their locations.",
    ),
];

const PILLARS: [(&str, &str); 3] = [
    ("Water Quality", "Clean water is essential for food preparation and washing."),
    ("Protective Gear", "Masks and gloves protect food from contamination."),
    ("Overall Cleanliness", "Clean cooking areas and utensils ensure food safety."),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = use_auth();
    let show_auth = create_rw_signal(false);
    let (search_query, set_search_query) = create_signal(String::new());

    let navigate = use_navigate();
    let go_to = Callback::new(move |href: String| navigate(&href, Default::default()));

    let handle_search = move || {
        if let Some(href) = search_href(&search_query.get_untracked()) {
            go_to.call(href);
        }
    };
    let handle_cta = move |_| {
        if auth.is_signed_in() {
            go_to.call("/dashboard".to_string());
        } else {
            show_auth.set(true);
        }
    };

    view! {
        <div class="page">
            <NavBar>
                <Show
                    when=move || auth.user.with(Option::is_some)
                    fallback=move || view! {
                        <button class="btn btn-primary" data-testid="get-started-btn" on:click=move |_| show_auth.set(true)>
                            "Get Started"
                        </button>
                    }
                >
                    <a href="/dashboard" class="btn btn-ghost" data-testid="dashboard-link">"Dashboard"</a>
                    <a href="/leaderboard" class="btn btn-ghost" data-testid="leaderboard-link">"Leaderboard"</a>
                    <a href="/profile" class="btn btn-primary" data-testid="profile-link">"Profile"</a>
                </Show>
            </NavBar>

            <section class="hero">
                <h1 data-testid="hero-title">"Eat Safe, " <span class="accent">"Trust Verified"</span></h1>
                <p class="lead">
                    "Discover food stalls with verified hygiene ratings. Rate, review, and help your community make safer dining choices."
                </p>
                <div class="search-bar" data-testid="search-bar">
                    <input
                        type="text"
                        placeholder="Search by city, area, or stall name..."
                        data-testid="search-input"
                        prop:value=move || search_query.get()
                        on:input=move |e| set_search_query.set(event_target_value(&e))
                        on:keydown=move |e: KeyboardEvent| {
                            if e.key() == "Enter" {
                                handle_search();
                            }
                        }
                    />
                    <button class="btn btn-primary" data-testid="search-button" on:click=move |_| handle_search()>
                        "Search"
                    </button>
                </div>
                <div class="feature-grid">
                    {FEATURES
                        .iter()
                        .map(|(test_id, title, body)| view! {
                            <div class="feature" data-testid=*test_id>
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="why">
                <h2>"Why Hygiene Matters"</h2>
                <p class="lead">"Transparent ratings help everyone make informed decisions"</p>
                <ol class="pillars">
                    {PILLARS
                        .iter()
                        .map(|(title, body)| view! {
                            <li>
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </li>
                        })
                        .collect_view()}
                </ol>
            </section>

            <section class="cta">
                <h2>"Ready to Make a Difference?"</h2>
                <p class="lead">"Join our community of food safety advocates"</p>
                <button class="btn btn-primary btn-large" data-testid="cta-button" on:click=handle_cta>
                    {move || if auth.user.with(Option::is_some) { "Go to Dashboard" } else { "Get Started Now" }}
                </button>
            </section>

            <footer class="footer">
                <span class="brand-name">"HygieneHero"</span>
                <p>"Making food safety transparent, one rating at a time."</p>
            </footer>

            <AuthDialog open=show_auth />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_href() {
        assert_eq!(search_href("   "), None);
        assert_eq!(
            search_href(" vada pav "),
            Some("/dashboard?search=vada%20pav".to_string())
        );
        assert_eq!(
            search_href("Mumbai & Pune"),
            Some("/dashboard?search=Mumbai%20%26%20Pune".to_string())
        );
    }
}
