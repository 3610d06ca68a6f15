use crate::auth::use_auth;
use leptos::*;
use leptos_router::Redirect;

/// Renders `children` for signed-in users and sends everyone else to `/`.
/// Waits for the stored session to be restored before deciding.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let children = store_value(children);

    move || {
        if !auth.ready.get() {
            view! { <div class="loading-screen">"Loading..."</div> }.into_view()
        } else if auth.is_signed_in() {
            children.with_value(|children| children()).into_view()
        } else {
            view! { <Redirect path="/" /> }.into_view()
        }
    }
}
