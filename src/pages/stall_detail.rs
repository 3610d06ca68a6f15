use crate::auth::use_auth;
use crate::components::nav_bar::NavBar;
use crate::components::rating_dialog::RatingDialog;
use crate::components::review_form::ReviewForm;
use crate::components::reviews_list::ReviewsList;
use crate::components::score_breakdown::ScoreBreakdown;
use crate::models::review::Review;
use crate::models::stall::Stall;
use crate::toast::use_toast;
use crate::utils::leptos_owner::with_owner_safe;
use leptos::logging::{error, warn};
use leptos::*;
use leptos_router::use_params_map;

/// A failed reload of the stall already on screen leaves it in place.
pub fn keeps_loaded_stall(current: Option<&Stall>, requested_id: &str) -> bool {
    current.is_some_and(|stall| stall.id == requested_id)
}

#[component]
pub fn StallDetailPage() -> impl IntoView {
    let auth = use_auth();
    let toast = use_toast();
    let owner = Owner::current();
    let params = use_params_map();
    let stall_id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());

    let (stall, set_stall) = create_signal(None::<Stall>);
    let (reviews, set_reviews) = create_signal(Vec::<Review>::new());
    let (loading, set_loading) = create_signal(true);

    let fetch_details = move |id: String| {
        set_loading.set(true);
        let client = auth.client();
        spawn_local(async move {
            let result = client.stall_details(&id).await;
            with_owner_safe(owner, "stall detail", move || {
                match result {
                    Ok((found, found_reviews)) => {
                        set_stall.set(Some(found));
                        set_reviews.set(found_reviews);
                    }
                    Err(err) => {
                        error!("[STALL] Failed to load {}: {}", id, err);
                        let kept = stall.with_untracked(|current| keeps_loaded_stall(current.as_ref(), &id));
                        if !kept {
                            set_stall.set(None);
                            set_reviews.set(Vec::new());
                        }
                        toast.error("Failed to fetch stall details");
                    }
                }
                set_loading.set(false);
            });
        });
    };

    // The token is tracked too, so signing in refreshes the page with credentials.
    create_effect(move |_| {
        auth.token.track();
        fetch_details(stall_id());
    });

    let refresh = Callback::new(move |()| fetch_details(stall_id_untracked(params)));

    let go_back = move |_| {
        let back = window().history().and_then(|history| history.back());
        if let Err(err) = back {
            warn!("[STALL] History back failed: {:?}", err);
        }
    };

    view! {
        <div class="page">
            <NavBar>
                <button class="btn btn-ghost" data-testid="back-button" on:click=go_back>"Back"</button>
                <a href="/dashboard" class="btn btn-ghost">"Dashboard"</a>
            </NavBar>
            {move || {
                if loading.get() {
                    return view! { <div class="loading-screen">"Loading..."</div> }.into_view();
                }
                let Some(stall) = stall.get() else {
                    return view! { <div class="loading-screen">"Stall not found"</div> }.into_view();
                };
                view! { <StallDetailBody stall reviews refresh /> }.into_view()
            }}
        </div>
    }
}

fn stall_id_untracked(params: Memo<leptos_router::ParamsMap>) -> String {
    params.with_untracked(|p| p.get("id").cloned().unwrap_or_default())
}

#[component]
fn StallDetailBody(stall: Stall, reviews: ReadSignal<Vec<Review>>, refresh: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let signed_in = move || auth.user.with(Option::is_some);
    let photos = stall
        .photos
        .iter()
        .map(|src| view! { <img class="stall-photo" src=src.clone() alt=stall.name.clone() /> })
        .collect_view();
    let review_stall_id = stall.id.clone();
    let rating_stall_id = stall.id.clone();

    view! {
        <main class="container stall-detail">
            <div class="stall-gallery">
                {if stall.photos.is_empty() {
                    view! { <div class="stall-cover placeholder">"📍"</div> }.into_view()
                } else {
                    photos
                }}
            </div>
            <div class="stall-layout">
                <section class="stall-main">
                    <h1 data-testid="stall-name">{stall.name.clone()}</h1>
                    <p class="stall-location" data-testid="stall-location">{stall.full_address()}</p>
                    <p class="stall-description" data-testid="stall-description">{stall.description.clone()}</p>
                    <Show when=signed_in>
                        <ReviewForm stall_id=review_stall_id.clone() on_posted=refresh />
                    </Show>
                    <ReviewsList reviews />
                </section>
                <aside class="stall-score-card">
                    <h2>"Hygiene Score"</h2>
                    <ScoreBreakdown stall=stall.clone() />
                    <Show when=signed_in>
                        <RatingDialog stall_id=rating_stall_id.clone() on_rated=refresh />
                    </Show>
                </aside>
            </div>
        </main>
    }
}
