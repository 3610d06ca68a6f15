use crate::auth::use_auth;
use crate::components::nav_bar::NavBar;
use crate::components::score_badge::ScoreBadge;
use crate::models::stall::Stall;
use crate::toast::use_toast;
use crate::utils::leptos_owner::with_owner_safe;
use leptos::logging::error;
use leptos::*;

/// Highest-scoring stalls, optionally narrowed to a city or area.
#[component]
pub fn LeaderboardPage() -> impl IntoView {
    let auth = use_auth();
    let toast = use_toast();
    let owner = Owner::current();
    let (stalls, set_stalls) = create_signal(Vec::<Stall>::new());
    let (loading, set_loading) = create_signal(true);
    let (city, set_city) = create_signal(String::new());
    let (area, set_area) = create_signal(String::new());

    let fetch_leaderboard = move || {
        set_loading.set(true);
        let client = auth.client();
        let (city, area) = (city.get_untracked(), area.get_untracked());
        spawn_local(async move {
            let result = client.leaderboard(&city, &area).await;
            with_owner_safe(owner, "leaderboard", move || {
                match result {
                    Ok(ranked) => set_stalls.set(ranked),
                    Err(err) => {
                        error!("[LEADERBOARD] Failed to fetch leaderboard: {}", err);
                        toast.error("Failed to fetch leaderboard");
                    }
                }
                set_loading.set(false);
            });
        });
    };

    create_effect(move |_| fetch_leaderboard());

    view! {
        <div class="page">
            <NavBar>
                <a href="/dashboard" class="btn btn-ghost" data-testid="dashboard-link">"Dashboard"</a>
            </NavBar>
            <main class="container">
                <h1 data-testid="leaderboard-title">"Hygiene Leaderboard"</h1>
                <p class="lead">"The cleanest food stalls, ranked by overall hygiene score"</p>
                <div class="filter-panel">
                    <input
                        type="text"
                        placeholder="City"
                        data-testid="leaderboard-city-input"
                        prop:value=move || city.get()
                        on:input=move |e| set_city.set(event_target_value(&e))
                    />
                    <input
                        type="text"
                        placeholder="Area"
                        data-testid="leaderboard-area-input"
                        prop:value=move || area.get()
                        on:input=move |e| set_area.set(event_target_value(&e))
                    />
                    <button class="btn btn-primary" data-testid="leaderboard-filter-button" on:click=move |_| fetch_leaderboard()>
                        "Apply Filters"
                    </button>
                </div>
                {move || {
                    if loading.get() {
                        view! { <div class="loading">"Loading..."</div> }.into_view()
                    } else if stalls.with(Vec::is_empty) {
                        view! { <p class="empty-state">"No stalls ranked yet"</p> }.into_view()
                    } else {
                        view! {
                            <ol class="leaderboard" data-testid="leaderboard-list">
                                {stalls
                                    .get()
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, stall)| view! {
                                        <li class="leaderboard-row">
                                            <span class="rank">{index + 1}</span>
                                            <a href=format!("/stall/{}", stall.id) class="leaderboard-name">
                                                {stall.name.clone()}
                                            </a>
                                            <span class="muted">{stall.locality()}</span>
                                            <ScoreBadge score=stall.overall_score test_id=format!("leaderboard-score-{}", stall.id) />
                                            <span class="muted small">{format!("{} ratings", stall.rating_count)}</span>
                                        </li>
                                    })
                                    .collect_view()}
                            </ol>
                        }
                        .into_view()
                    }
                }}
            </main>
        </div>
    }
}
