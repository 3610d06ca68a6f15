use leptos::logging::log;
use std::panic;

/// Forwards panics to the browser console and adds context for reactive
/// owner disposal panics.
pub fn set_custom_panic_hook() {
    console_error_panic_hook::set_once();
    let console_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        console_hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };

        if message.contains("OwnerDisposed") || message.contains("disposed") {
            log!("[PANIC] A reactive scope was used after disposal. This usually happens when:");
            log!("[PANIC] 1. A page was left while one of its requests was still in flight");
            log!("[PANIC] 2. A toast timer fired after the app was torn down");
        }
    }));
}

pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
}
