use crate::models::review::Review;
use leptos::*;

#[component]
pub fn ReviewsList(#[prop(into)] reviews: Signal<Vec<Review>>) -> impl IntoView {
    view! {
        <div class="reviews-list">
            <h2>{move || format!("Reviews ({})", reviews.with(Vec::len))}</h2>
            <Show
                when=move || reviews.with(|r| !r.is_empty())
                fallback=|| view! {
                    <p class="empty-state" data-testid="no-reviews-message">
                        "No reviews yet. Be the first to review!"
                    </p>
                }
            >
                <ul>
                    <For
                        each=move || reviews.get()
                        key=|review: &Review| review.id.clone()
                        children=move |review: Review| {
                            view! {
                                <li class="review" data-testid=format!("review-{}", review.id)>
                                    <span class="avatar">{review.initial()}</span>
                                    <div>
                                        <p class="review-author">
                                            {review.user_name.clone()}
                                            {review.posted_on().map(|date| view! { <span class="review-date">{date}</span> })}
                                        </p>
                                        <p class="review-comment">{review.comment.clone()}</p>
                                    </div>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
