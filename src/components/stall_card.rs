use crate::components::score_badge::ScoreBadge;
use crate::models::stall::Stall;
use leptos::*;
use leptos_router::use_navigate;

#[component]
pub fn StallCard(stall: Stall) -> impl IntoView {
    let navigate = use_navigate();
    let href = format!("/stall/{}", stall.id);
    let cover = match stall.cover_photo() {
        Some(src) => view! { <img class="stall-cover" src=src.to_string() alt=stall.name.clone() /> }.into_view(),
        None => view! { <div class="stall-cover placeholder">"📍"</div> }.into_view(),
    };

    view! {
        <div
            class="stall-card"
            data-testid=format!("stall-card-{}", stall.id)
            on:click=move |_| navigate(&href, Default::default())
        >
            {cover}
            <div class="stall-card-body">
                <div class="stall-card-header">
                    <h3 data-testid=format!("stall-name-{}", stall.id)>{stall.name.clone()}</h3>
                    <ScoreBadge score=stall.overall_score test_id=format!("stall-score-{}", stall.id) />
                </div>
                <p class="stall-locality">{stall.locality()}</p>
                <p class="stall-description">{stall.description.clone()}</p>
                <p class="stall-ratings">{format!("★ {} ratings", stall.rating_count)}</p>
            </div>
        </div>
    }
}
