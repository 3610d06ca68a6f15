use crate::auth::use_auth;
use crate::toast::use_toast;
use crate::utils::leptos_owner::with_owner_safe;
use leptos::logging::error;
use leptos::*;

/// Client-side gate before a review is posted.
pub fn check_review(signed_in: bool, comment: &str) -> Result<(), &'static str> {
    if !signed_in {
        Err("Please login to review")
    } else if comment.trim().is_empty() {
        Err("Please enter a comment")
    } else {
        Ok(())
    }
}

#[component]
pub fn ReviewForm(stall_id: String, #[prop(into)] on_posted: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let toast = use_toast();
    let owner = Owner::current();
    let stall_id = store_value(stall_id);
    let (comment, set_comment) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let submit_review = move |_| {
        let text = comment.get_untracked();
        if let Err(message) = check_review(auth.is_signed_in(), &text) {
            toast.error(message);
            return;
        }
        set_submitting.set(true);
        let client = auth.client();
        let stall_id = stall_id.get_value();
        spawn_local(async move {
            let result = client.post_review(&stall_id, &text).await;
            with_owner_safe(owner, "review form", move || {
                set_submitting.set(false);
                match result {
                    Ok(_) => {
                        toast.success("Review submitted successfully!");
                        set_comment.set(String::new());
                        on_posted.call(());
                    }
                    Err(err) => {
                        error!("[REVIEW] Failed to post review for {}: {}", stall_id, err);
                        toast.error("Failed to submit review");
                    }
                }
            });
        });
    };

    view! {
        <div class="review-form">
            <h3>"Write a Review"</h3>
            <textarea
                placeholder="Share your experience..."
                data-testid="review-textarea"
                prop:value=move || comment.get()
                on:input=move |e| set_comment.set(event_target_value(&e))
            />
            <button
                class="btn btn-primary"
                data-testid="submit-review-button"
                disabled=submitting
                on:click=submit_review
            >
                "Post Review"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_review() {
        assert_eq!(check_review(false, "Great"), Err("Please login to review"));
        assert_eq!(check_review(true, "  \n "), Err("Please enter a comment"));
        assert_eq!(check_review(true, "Staff wore gloves"), Ok(()));
    }
}
