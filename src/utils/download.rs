use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlAnchorElement;

/// Saves `href` (usually a data URL) under `file_name` through a throwaway anchor.
pub fn download_url(href: &str, file_name: &str) -> Result<(), JsValue> {
    let document = leptos::document();
    let link = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()?;
    link.set_download(file_name);
    link.set_href(href);
    link.click();
    Ok(())
}
