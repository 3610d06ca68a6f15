use crate::api::StallQuery;
use crate::auth::use_auth;
use crate::components::nav_bar::NavBar;
use crate::components::stall_card::StallCard;
use crate::models::stall::Stall;
use crate::toast::use_toast;
use crate::utils::leptos_owner::with_owner_safe;
use leptos::ev::KeyboardEvent;
use leptos::logging::error;
use leptos::*;
use leptos_router::{use_navigate, use_query_map};

/// Browse and filter stalls. The free-text search lives in the URL so it can be shared.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let toast = use_toast();
    let owner = Owner::current();
    let query = use_query_map();
    let navigate = use_navigate();
    let go_to = Callback::new(move |href: String| navigate(&href, Default::default()));

    let url_search = move || query.with(|q| q.get("search").cloned().unwrap_or_default());
    let (stalls, set_stalls) = create_signal(Vec::<Stall>::new());
    let (loading, set_loading) = create_signal(true);
    let (search_query, set_search_query) = create_signal(query.with_untracked(|q| {
        q.get("search").cloned().unwrap_or_default()
    }));
    let (city_filter, set_city_filter) = create_signal(String::new());
    let (area_filter, set_area_filter) = create_signal(String::new());

    let fetch_stalls = move |search: String| {
        let filters = StallQuery {
            search,
            city: city_filter.get_untracked(),
            area: area_filter.get_untracked(),
        };
        set_loading.set(true);
        let client = auth.client();
        spawn_local(async move {
            let result = client.list_stalls(&filters).await;
            with_owner_safe(owner, "dashboard", move || {
                match result {
                    Ok(found) => set_stalls.set(found),
                    Err(err) => {
                        error!("[DASHBOARD] Failed to fetch stalls: {}", err);
                        toast.error("Failed to fetch stalls");
                    }
                }
                set_loading.set(false);
            });
        });
    };

    // Refetch whenever the URL search changes.
    create_effect(move |_| fetch_stalls(url_search()));

    let handle_search = move || {
        let term = search_query.get_untracked();
        let href = match term.trim() {
            "" => "/dashboard".to_string(),
            _ => format!("/dashboard?search={}", urlencoding::encode(&term)),
        };
        go_to.call(href);
    };

    let handle_clear = move |_| {
        set_search_query.set(String::new());
        set_city_filter.set(String::new());
        set_area_filter.set(String::new());
        go_to.call("/dashboard".to_string());
    };

    let signed_in = move || auth.user.with(Option::is_some);

    view! {
        <div class="page">
            <NavBar>
                <a href="/leaderboard" class="btn btn-ghost" data-testid="leaderboard-nav-link">"Leaderboard"</a>
                <Show when=signed_in>
                    <a href="/add-stall" class="btn btn-accent" data-testid="add-stall-nav-link">"+ Add Stall"</a>
                    <a href="/profile" class="btn btn-ghost" data-testid="profile-nav-link">
                        {move || auth.user.with(|u| u.as_ref().map(|u| u.name.clone()).unwrap_or_default())}
                    </a>
                    <button class="btn btn-ghost" data-testid="logout-button" on:click=move |_| auth.logout()>
                        "Logout"
                    </button>
                </Show>
            </NavBar>

            <main class="container">
                <h1 data-testid="dashboard-title">"Discover Food Stalls"</h1>
                <p class="lead">"Find hygiene-rated food stalls in your area"</p>

                <div class="filter-panel" data-testid="search-filter-section">
                    <input
                        type="text"
                        class="search-input"
                        placeholder="Search stalls..."
                        data-testid="search-input-dashboard"
                        prop:value=move || search_query.get()
                        on:input=move |e| set_search_query.set(event_target_value(&e))
                        on:keydown=move |e: KeyboardEvent| {
                            if e.key() == "Enter" {
                                handle_search();
                            }
                        }
                    />
                    <input
                        type="text"
                        placeholder="City"
                        data-testid="city-filter-input"
                        prop:value=move || city_filter.get()
                        on:input=move |e| set_city_filter.set(event_target_value(&e))
                    />
                    <input
                        type="text"
                        placeholder="Area"
                        data-testid="area-filter-input"
                        prop:value=move || area_filter.get()
                        on:input=move |e| set_area_filter.set(event_target_value(&e))
                    />
                    <div class="filter-actions">
                        <button
                            class="btn btn-primary"
                            data-testid="apply-filter-button"
                            on:click=move |_| fetch_stalls(query.with_untracked(|q| q.get("search").cloned().unwrap_or_default()))
                        >
                            "Apply Filters"
                        </button>
                        <button class="btn btn-outline" data-testid="clear-filter-button" on:click=handle_clear>
                            "Clear"
                        </button>
                    </div>
                </div>

                {move || {
                    if loading.get() {
                        view! { <div class="loading" data-testid="loading-spinner">"Loading..."</div> }.into_view()
                    } else if stalls.with(Vec::is_empty) {
                        view! {
                            <div class="empty-state" data-testid="no-stalls-message">
                                <p>"No stalls found"</p>
                                <Show when=signed_in>
                                    <a href="/add-stall" class="btn btn-primary">"Add First Stall"</a>
                                </Show>
                            </div>
                        }
                        .into_view()
                    } else {
                        view! {
                            <div class="stall-grid" data-testid="stalls-grid">
                                <For
                                    each=move || stalls.get()
                                    key=|stall: &Stall| stall.id.clone()
                                    children=move |stall: Stall| view! { <StallCard stall /> }
                                />
                            </div>
                        }
                        .into_view()
                    }
                }}
            </main>
        </div>
    }
}
