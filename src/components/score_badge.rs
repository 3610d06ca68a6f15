use crate::models::rating::{format_score, ScoreTier};
use leptos::*;

#[component]
pub fn ScoreBadge(
    #[prop(into)] score: MaybeSignal<f64>,
    #[prop(optional, into)] test_id: Option<String>,
) -> impl IntoView {
    view! {
        <span
            class=move || format!("score-badge {}", ScoreTier::of(score.get()).class())
            data-testid=test_id
        >
            {move || format_score(score.get())}
        </span>
    }
}
