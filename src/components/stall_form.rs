use crate::auth::use_auth;
use crate::models::stall::NewStall;
use crate::toast::use_toast;
use crate::utils::leptos_owner::with_owner_safe;
use leptos::ev::SubmitEvent;
use leptos::logging::{error, log};
use leptos::*;
use web_sys::HtmlInputElement;

/// Form for registering a new stall. Photos are uploaded as soon as they are picked.
#[component]
pub fn StallForm(
    #[prop(into)] on_submit: Callback<NewStall>,
    #[prop(into)] submitting: Signal<bool>,
) -> impl IntoView {
    let auth = use_auth();
    let toast = use_toast();
    let owner = Owner::current();
    let (name, set_name) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let (address, set_address) = create_signal(String::new());
    let (city, set_city) = create_signal(String::new());
    let (area, set_area) = create_signal(String::new());
    let (photos, set_photos) = create_signal(Vec::<String>::new());
    let (uploading, set_uploading) = create_signal(0usize);

    let upload_photos = move |ev: web_sys::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let Some(files) = input.files() else {
            return;
        };
        for index in 0..files.length() {
            let Some(file) = files.get(index) else {
                continue;
            };
            if !file.type_().starts_with("image/") {
                toast.error("File must be an image");
                continue;
            }
            set_uploading.update(|n| *n += 1);
            let client = auth.client();
            spawn_local(async move {
                let result = client.upload_photo(&file).await;
                with_owner_safe(owner, "photo upload", move || {
                    set_uploading.update(|n| *n = n.saturating_sub(1));
                    match result {
                        Ok(photo) => {
                            log!("[STALL_FORM] Uploaded {}", file.name());
                            set_photos.update(|p| p.push(photo.url));
                        }
                        Err(err) => {
                            error!("[STALL_FORM] Upload of {} failed: {}", file.name(), err);
                            toast.error(err.user_message("Failed to upload photo"));
                        }
                    }
                });
            });
        }
        input.set_value("");
    };

    let remove_photo = move |index: usize| {
        set_photos.update(|p| {
            if index < p.len() {
                p.remove(index);
            }
        });
    };

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let draft = NewStall {
            name: name.get_untracked(),
            description: description.get_untracked(),
            address: address.get_untracked(),
            city: city.get_untracked(),
            area: area.get_untracked(),
            photos: photos.get_untracked(),
        };
        match draft.normalized() {
            Ok(stall) => on_submit.call(stall),
            Err(field) => {
                toast.error(format!("{} is required", field));
            }
        }
    };

    let text_input = move |placeholder: &'static str,
                           test_id: &'static str,
                           value: ReadSignal<String>,
                           set_value: WriteSignal<String>| {
        view! {
            <input
                type="text"
                placeholder=placeholder
                required
                data-testid=test_id
                prop:value=move || value.get()
                on:input=move |e| set_value.set(event_target_value(&e))
            />
        }
    };

    view! {
        <form class="stall-form" data-testid="add-stall-form" on:submit=handle_submit>
            {text_input("Stall Name", "stall-name-input", name, set_name)}
            <textarea
                placeholder="Description"
                required
                data-testid="stall-description-input"
                prop:value=move || description.get()
                on:input=move |e| set_description.set(event_target_value(&e))
            />
            {text_input("Address", "stall-address-input", address, set_address)}
            <div class="form-row">
                {text_input("City", "stall-city-input", city, set_city)}
                {text_input("Area", "stall-area-input", area, set_area)}
            </div>
            <h3>"Photos"</h3>
            <input
                type="file"
                accept="image/*"
                multiple
                data-testid="stall-photo-input"
                on:change=upload_photos
            />
            <Show when=move || { uploading.get() > 0 }>
                <p class="muted">"Uploading..."</p>
            </Show>
            <ul class="photo-list">
                {move || {
                    photos
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, url)| {
                            view! {
                                <li>
                                    <img src=url alt=format!("Photo {}", index + 1) />
                                    <button type="button" on:click=move |_| remove_photo(index)>
                                        "Remove"
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
            <button
                type="submit"
                class="btn btn-primary"
                data-testid="submit-stall-button"
                disabled={move || submitting.get() || uploading.get() > 0}
            >
                {move || if submitting.get() { "Adding..." } else { "Add Stall" }}
            </button>
        </form>
    }
}
