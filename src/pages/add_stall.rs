use crate::auth::use_auth;
use crate::components::nav_bar::NavBar;
use crate::components::stall_form::StallForm;
use crate::models::stall::NewStall;
use crate::toast::use_toast;
use crate::utils::leptos_owner::with_owner_safe;
use leptos::logging::{error, log};
use leptos::*;
use leptos_router::use_navigate;

#[component]
pub fn AddStallPage() -> impl IntoView {
    let auth = use_auth();
    let toast = use_toast();
    let owner = Owner::current();
    let navigate = use_navigate();
    let go_to = Callback::new(move |href: String| navigate(&href, Default::default()));
    let (submitting, set_submitting) = create_signal(false);

    let create_stall = move |stall: NewStall| {
        set_submitting.set(true);
        let client = auth.client();
        spawn_local(async move {
            let result = client.create_stall(&stall).await;
            with_owner_safe(owner, "add stall", move || {
                set_submitting.set(false);
                match result {
                    Ok(created) => {
                        log!("[ADD_STALL] Created stall {}", created.id);
                        toast.success("Stall added successfully!");
                        go_to.call(format!("/stall/{}", created.id));
                    }
                    Err(err) => {
                        error!("[ADD_STALL] Failed to create {}: {}", stall.name, err);
                        toast.error(err.user_message("Failed to add stall"));
                    }
                }
            });
        });
    };

    view! {
        <div class="page">
            <NavBar>
                <a href="/dashboard" class="btn btn-ghost" data-testid="dashboard-link">"Dashboard"</a>
            </NavBar>
            <main class="container narrow">
                <div class="card">
                    <h1 data-testid="add-stall-title">"Add a Food Stall"</h1>
                    <p class="muted">"List a stall so the community can rate its hygiene."</p>
                    <StallForm on_submit=create_stall submitting />
                </div>
            </main>
        </div>
    }
}
