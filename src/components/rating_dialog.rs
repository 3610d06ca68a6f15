use crate::auth::use_auth;
use crate::models::rating::{format_score, Dimension, Rating, MAX_SCORE, MIN_SCORE, SCORE_STEP};
use crate::toast::use_toast;
use crate::utils::leptos_owner::with_owner_safe;
use leptos::logging::error;
use leptos::*;

/// "Rate Hygiene" button plus the slider dialog it opens.
#[component]
pub fn RatingDialog(stall_id: String, #[prop(into)] on_rated: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let toast = use_toast();
    let owner = Owner::current();
    let open = create_rw_signal(false);
    let draft = create_rw_signal(Rating::new(stall_id));
    let (submitting, set_submitting) = create_signal(false);

    let submit_rating = move |_| {
        if !auth.is_signed_in() {
            toast.error("Please login to rate");
            return;
        }
        set_submitting.set(true);
        let client = auth.client();
        let rating = draft.get_untracked();
        spawn_local(async move {
            let result = client.post_rating(&rating).await;
            with_owner_safe(owner, "rating dialog", move || {
                set_submitting.set(false);
                match result {
                    Ok(()) => {
                        toast.success("Rating submitted successfully!");
                        open.set(false);
                        on_rated.call(());
                    }
                    Err(err) => {
                        error!("[RATING] Failed to rate {}: {}", rating.stall_id, err);
                        toast.error(err.user_message("Failed to submit rating"));
                    }
                }
            });
        });
    };

    let slider = move |dimension: Dimension| {
        view! {
            <div class="rating-slider">
                <label>
                    <span>{dimension.label()}</span>
                    <span class="slider-value">{move || format_score(draft.with(|r| r.get(dimension)))}</span>
                </label>
                <input
                    type="range"
                    min=MIN_SCORE
                    max=MAX_SCORE
                    step=SCORE_STEP
                    data-testid=format!("{}-slider", dimension.slug())
                    prop:value=move || draft.with(|r| r.get(dimension)).to_string()
                    on:input=move |e| {
                        if let Ok(value) = event_target_value(&e).parse::<f64>() {
                            draft.update(|r| r.set(dimension, value));
                        }
                    }
                />
            </div>
        }
    };

    view! {
        <button class="btn btn-accent" data-testid="rate-button" on:click=move |_| open.set(true)>
            "Rate Hygiene"
        </button>
        <Show when=move || open.get()>
            <div class="dialog-overlay" on:click=move |_| open.set(false)>
                <div class="dialog" data-testid="rating-dialog" on:click=|e| e.stop_propagation()>
                    <h2>"Rate Hygiene Factors"</h2>
                    {Dimension::ALL.into_iter().map(slider).collect_view()}
                    <button
                        class="btn btn-primary"
                        data-testid="submit-rating-button"
                        disabled=submitting
                        on:click=submit_rating
                    >
                        "Submit Rating"
                    </button>
                </div>
            </div>
        </Show>
    }
}
