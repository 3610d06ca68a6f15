use crate::auth::use_auth;
use crate::components::nav_bar::NavBar;
use crate::models::rating::format_score;
use crate::models::stall::{QrCode, Stall};
use crate::toast::use_toast;
use crate::utils::download::download_url;
use crate::utils::leptos_owner::with_owner_safe;
use leptos::logging::error;
use leptos::*;

/// Option label in the stall picker.
pub fn stall_option_label(stall: &Stall) -> String {
    format!("{} - Score: {}", stall.name, format_score(stall.overall_score))
}

#[component]
pub fn QrGeneratorPage() -> impl IntoView {
    let auth = use_auth();
    let toast = use_toast();
    let owner = Owner::current();
    let (stalls, set_stalls) = create_signal(Vec::<Stall>::new());
    let (selected_stall, set_selected_stall) = create_signal(None::<String>);
    let (qr_data, set_qr_data) = create_signal(None::<QrCode>);
    let (loading, set_loading) = create_signal(false);

    create_effect(move |_| {
        if auth.token.with(Option::is_none) {
            return;
        }
        let client = auth.client();
        spawn_local(async move {
            let result = client.list_stalls(&Default::default()).await;
            with_owner_safe(owner, "qr generator stalls", move || match result {
                Ok(found) => set_stalls.set(found),
                Err(err) => {
                    error!("[QR] Failed to fetch stalls: {}", err);
                    toast.error("Failed to fetch stalls");
                }
            });
        });
    });

    let generate_qr_code = move |_| {
        let Some(stall_id) = selected_stall.get_untracked() else {
            toast.error("Please select a stall");
            return;
        };
        set_loading.set(true);
        let client = auth.client();
        spawn_local(async move {
            let result = client.qr_code(&stall_id).await;
            with_owner_safe(owner, "qr generator", move || {
                match result {
                    Ok(qr) => {
                        set_qr_data.set(Some(qr));
                        toast.success("QR Code generated!");
                    }
                    Err(err) => {
                        error!("[QR] Failed to generate QR for {}: {}", stall_id, err);
                        toast.error("Failed to generate QR code");
                    }
                }
                set_loading.set(false);
            });
        });
    };

    let download_qr_code = move |_| {
        let Some(qr) = qr_data.get_untracked() else {
            return;
        };
        if let Err(err) = download_url(&qr.qr_code, &qr.download_name()) {
            error!("[QR] Download failed: {:?}", err);
        }
    };

    view! {
        <div class="page">
            <NavBar>
                <a href="/profile" class="btn btn-ghost" data-testid="profile-link">"Back to Profile"</a>
            </NavBar>
            <main class="container narrow">
                <div class="card">
                    <h1 data-testid="qr-generator-title">"Generate QR Code"</h1>
                    <p class="muted">
                        "Create a QR code displaying your stall's hygiene score to showcase at your location."
                    </p>
                    <label for="stall-select">"Select Your Stall"</label>
                    <select
                        id="stall-select"
                        data-testid="stall-select"
                        on:change=move |e| {
                            let value = event_target_value(&e);
                            set_selected_stall.set(if value.is_empty() { None } else { Some(value) });
                        }
                    >
                        <option value="" selected=move || selected_stall.with(Option::is_none)>
                            "Choose a stall"
                        </option>
                        <For
                            each=move || stalls.get()
                            key=|stall: &Stall| stall.id.clone()
                            children=move |stall: Stall| {
                                let id = stall.id.clone();
                                let is_selected = {
                                    let id = id.clone();
                                    move || selected_stall.with(|s| s.as_deref() == Some(id.as_str()))
                                };
                                view! {
                                    <option
                                        value=id.clone()
                                        selected=is_selected
                                        data-testid=format!("stall-option-{}", id)
                                    >
                                        {stall_option_label(&stall)}
                                    </option>
                                }
                            }
                        />
                    </select>
                    <button
                        class="btn btn-primary btn-block"
                        data-testid="generate-qr-button"
                        disabled=move || loading.get() || selected_stall.with(Option::is_none)
                        on:click=generate_qr_code
                    >
                        {move || if loading.get() { "Generating..." } else { "Generate QR Code" }}
                    </button>

                    {move || qr_data.get().map(|qr| view! {
                        <div class="qr-result">
                            <h3>{qr.stall.name.clone()}</h3>
                            <p>
                                "Hygiene Score: "
                                <span class="mono">{format!("{}/5.0", format_score(qr.stall.overall_score))}</span>
                            </p>
                            <img class="qr-image" src=qr.qr_code.clone() alt="QR Code" data-testid="qr-code-image" />
                            <dl class="qr-dimensions">
                                {qr
                                    .stall
                                    .dimensions()
                                    .into_iter()
                                    .map(|(label, score)| view! {
                                        <div>
                                            <dt>{label}</dt>
                                            <dd>{format_score(score)}</dd>
                                        </div>
                                    })
                                    .collect_view()}
                            </dl>
                            <button class="btn btn-accent btn-block" data-testid="download-qr-button" on:click=download_qr_code>
                                "Download QR Code"
                            </button>
                            <p class="muted small">
                                "Print and display this QR code at your stall to show customers your hygiene rating."
                            </p>
                        </div>
                    })}
                </div>
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stall_option_label() {
        let stall: Stall =
            serde_json::from_str(r#"{"id": "s1", "name": "Idli House", "overall_score": 3.76}"#)
                .unwrap();
        assert_eq!(stall_option_label(&stall), "Idli House - Score: 3.8");
    }
}
