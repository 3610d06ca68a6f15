use crate::auth::use_auth;
use crate::components::nav_bar::NavBar;
use leptos::*;
use leptos_router::use_navigate;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let handle_logout = move |_| {
        auth.logout();
        navigate("/", Default::default());
    };

    move || {
        auth.user.get().map(|user| {
            let handle_logout = handle_logout.clone();
            view! {
                <div class="page">
                    <NavBar>
                        <a href="/dashboard" class="btn btn-ghost" data-testid="dashboard-link">"Dashboard"</a>
                    </NavBar>
                    <main class="container narrow">
                        <div class="profile-card">
                            <div class="avatar avatar-large">{user.initial()}</div>
                            <h1 data-testid="user-name">{user.name.clone()}</h1>
                            <p class="muted" data-testid="user-email">{user.email.clone()}</p>
                            <dl class="profile-fields">
                                <dt>"Name"</dt>
                                <dd>{user.name.clone()}</dd>
                                <dt>"Email"</dt>
                                <dd>{user.email.clone()}</dd>
                            </dl>
                            <a href="/qr-generator" class="btn btn-primary btn-block" data-testid="qr-generator-button">
                                "Generate QR Code for My Stall"
                            </a>
                            <button class="btn btn-danger btn-block" data-testid="logout-button" on:click=handle_logout>
                                "Logout"
                            </button>
                        </div>
                    </main>
                </div>
            }
        })
    }
}
