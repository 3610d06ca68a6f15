use crate::toast::{use_toast, Toast, ToastKind};
use leptos::*;

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toast();

    view! {
        <div class="toaster" data-testid="toaster">
            <For
                each=move || toasts.toasts().get()
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class role="status" on:click=move |_| toasts.dismiss(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
