use crate::api::ApiError;
use crate::auth::use_auth;
use crate::models::user::AuthResponse;
use crate::toast::use_toast;
use crate::utils::leptos_owner::with_owner_safe;
use leptos::ev::SubmitEvent;
use leptos::logging::error;
use leptos::*;
use leptos_router::use_navigate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    pub fn success_message(self) -> &'static str {
        match self {
            AuthMode::Login => "Welcome back!",
            AuthMode::Register => "Account created successfully!",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            AuthMode::Login => "Login failed",
            AuthMode::Register => "Registration failed",
        }
    }
}

/// Login / register modal. On success the session is stored and the user lands on the dashboard.
#[component]
pub fn AuthDialog(open: RwSignal<bool>) -> impl IntoView {
    let auth = use_auth();
    let toast = use_toast();
    let owner = Owner::current();
    let mode = create_rw_signal(AuthMode::Login);
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (pending, set_pending) = create_signal(false);
    let navigate = use_navigate();
    let go_to_dashboard = Callback::new(move |()| navigate("/dashboard", Default::default()));

    let finish = move |mode: AuthMode, result: Result<AuthResponse, ApiError>| match result {
        Ok(AuthResponse { token, user }) => {
            auth.login(token, user);
            toast.success(mode.success_message());
            open.set(false);
            set_password.set(String::new());
            go_to_dashboard.call(());
        }
        Err(err) => {
            error!("[AUTH] {:?} failed: {}", mode, err);
            toast.error(err.user_message(mode.failure_message()));
        }
    };

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let current = mode.get_untracked();
        let client = auth.client();
        let (name, email, password) = (
            name.get_untracked(),
            email.get_untracked(),
            password.get_untracked(),
        );
        set_pending.set(true);
        spawn_local(async move {
            let result = match current {
                AuthMode::Login => client.login(&email, &password).await,
                AuthMode::Register => client.register(&name, &email, &password).await,
            };
            with_owner_safe(owner, "auth dialog", move || {
                set_pending.set(false);
                finish(current, result);
            });
        });
    };

    let tab = move |tab_mode: AuthMode, label: &'static str, test_id: &'static str| {
        view! {
            <button
                type="button"
                class=move || if mode.get() == tab_mode { "tab active" } else { "tab" }
                data-testid=test_id
                on:click=move |_| mode.set(tab_mode)
            >
                {label}
            </button>
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-overlay" on:click=move |_| open.set(false)>
                <div class="dialog" data-testid="auth-dialog" on:click=|e| e.stop_propagation()>
                    <button class="dialog-close" data-testid="close-auth-dialog" on:click=move |_| open.set(false)>
                        "×"
                    </button>
                    <h2>"Welcome to HygieneHero"</h2>
                    <div class="tabs">
                        {tab(AuthMode::Login, "Login", "login-tab")}
                        {tab(AuthMode::Register, "Register", "register-tab")}
                    </div>
                    <form
                        on:submit=handle_submit
                        data-testid=move || match mode.get() {
                            AuthMode::Login => "login-form",
                            AuthMode::Register => "register-form",
                        }
                    >
                        <Show when=move || mode.get() == AuthMode::Register>
                            <input
                                type="text"
                                placeholder="Full Name"
                                required
                                data-testid="register-name"
                                prop:value=move || name.get()
                                on:input=move |e| set_name.set(event_target_value(&e))
                            />
                        </Show>
                        <input
                            type="email"
                            placeholder="Email"
                            required
                            data-testid="auth-email"
                            prop:value=move || email.get()
                            on:input=move |e| set_email.set(event_target_value(&e))
                        />
                        <input
                            type="password"
                            placeholder="Password"
                            required
                            data-testid="auth-password"
                            prop:value=move || password.get()
                            on:input=move |e| set_password.set(event_target_value(&e))
                        />
                        <button type="submit" class="btn btn-primary" disabled=pending data-testid="auth-submit">
                            {move || match mode.get() {
                                AuthMode::Login => "Login",
                                AuthMode::Register => "Create Account",
                            }}
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
