/// Root component for HygieneHero.
/// Provides the shared session and toast contexts and maps routes to pages.
use crate::auth::provide_auth_context;
use crate::components::require_auth::RequireAuth;
use crate::components::toaster::Toaster;
use crate::config::AppConfig;
use crate::pages::add_stall::AddStallPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::landing::LandingPage;
use crate::pages::leaderboard::LeaderboardPage;
use crate::pages::profile::ProfilePage;
use crate::pages::qr_generator::QrGeneratorPage;
use crate::pages::stall_detail::StallDetailPage;
use crate::storage::default_store;
use crate::toast::provide_toast_context;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let auth = provide_auth_context(AppConfig::from_env(), default_store());
    provide_toast_context();

    // Effects only run in the browser, so the stored session is never read during SSR.
    create_effect(move |_| auth.restore());

    view! {
        <Stylesheet id="leptos" href="/pkg/hygienehero.css" />
        <Title text="HygieneHero" />
        <Router>
            <Routes>
                <Route path="/" view=LandingPage />
                <Route path="/dashboard" view=DashboardPage />
                <Route path="/stall/:id" view=StallDetailPage />
                <Route path="/leaderboard" view=LeaderboardPage />
                <Route path="/add-stall" view=|| view! { <RequireAuth><AddStallPage /></RequireAuth> } />
                <Route path="/profile" view=|| view! { <RequireAuth><ProfilePage /></RequireAuth> } />
                <Route path="/qr-generator" view=|| view! { <RequireAuth><QrGeneratorPage /></RequireAuth> } />
            </Routes>
            <Toaster />
        </Router>
    }
}
