#![cfg(all(target_arch = "wasm32", feature = "wasm-test"))]
// Run with: wasm-pack test --headless --firefox --no-default-features --features wasm-test

use gloo_timers::future::sleep;
use hygienehero::auth::AuthContext;
use hygienehero::components::require_auth::RequireAuth;
use hygienehero::components::reviews_list::ReviewsList;
use hygienehero::components::score_badge::ScoreBadge;
use hygienehero::components::score_breakdown::ScoreBreakdown;
use hygienehero::components::rating_dialog::RatingDialog;
use hygienehero::components::toaster::Toaster;
use hygienehero::config::AppConfig;
use hygienehero::models::review::Review;
use hygienehero::models::stall::Stall;
use hygienehero::pages::dashboard::DashboardPage;
use hygienehero::pages::qr_generator::QrGeneratorPage;
use hygienehero::storage::MemoryStorage;
use hygienehero::toast::{ToastContext, TOAST_TIMEOUT_MS};
use leptos::*;
use leptos_router::Router;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

// Helper: fresh container appended to the body
fn container(id: &str) -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    container.set_id(id);
    document.body().unwrap().append_child(&container).unwrap();
    container.unchecked_into()
}

fn find(root: &web_sys::HtmlElement, selector: &str) -> Option<web_sys::Element> {
    root.query_selector(selector).unwrap()
}

fn count(root: &web_sys::HtmlElement, selector: &str) -> u32 {
    root.query_selector_all(selector).unwrap().length()
}

fn click(root: &web_sys::HtmlElement, selector: &str) {
    let element: web_sys::HtmlElement = find(root, selector)
        .unwrap_or_else(|| panic!("{} rendered", selector))
        .unchecked_into();
    element.click();
}

fn type_into(root: &web_sys::HtmlElement, selector: &str, value: &str) {
    let input: web_sys::HtmlInputElement = find(root, selector).unwrap().unchecked_into();
    input.set_value(value);
    let event = web_sys::Event::new("input").unwrap();
    input.dispatch_event(&event).unwrap();
}

fn input_value(root: &web_sys::HtmlElement, selector: &str) -> String {
    find(root, selector)
        .unwrap()
        .unchecked_into::<web_sys::HtmlInputElement>()
        .value()
}

// Signed-out session and toast queue, as the app root provides them
fn provide_signed_out_contexts() -> (AuthContext, ToastContext) {
    let auth = AuthContext::new(
        AppConfig::with_backend("http://localhost:8000"),
        Rc::new(MemoryStorage::default()),
    );
    auth.ready.set(true);
    let toasts = ToastContext::new();
    provide_context(auth);
    provide_context(toasts);
    (auth, toasts)
}

fn sample_stall() -> Stall {
    serde_json::from_str(
        r#"{
            "id": "s1",
            "name": "Chai Point",
            "address": "3 Brigade Rd",
            "area": "Ashok Nagar",
            "city": "Bengaluru",
            "description": "Tea and snacks",
            "overall_score": 4.1,
            "water_quality_score": 4.5,
            "masks_score": 3.5,
            "gloves_score": 4.0,
            "cleanliness_score": 4.4,
            "rating_count": 12
        }"#,
    )
    .unwrap()
}

#[wasm_bindgen_test]
fn test_score_badge_uses_tier_class() {
    let root = container("score-badge-test");
    mount_to(root.clone(), || {
        view! {
            <ScoreBadge score=4.2 test_id="good-badge" />
            <ScoreBadge score=3.0 test_id="fair-badge" />
            <ScoreBadge score=1.5 test_id="poor-badge" />
            <ScoreBadge score=2.5 />
        }
    });

    let good = find(&root, "[data-testid=good-badge]").expect("good badge rendered");
    assert!(good.class_name().contains("score-good"));
    assert_eq!(good.text_content().as_deref(), Some("4.2"));

    let fair = find(&root, "[data-testid=fair-badge]").unwrap();
    assert!(fair.class_name().contains("score-fair"));
    assert_eq!(fair.text_content().as_deref(), Some("3.0"));

    let poor = find(&root, "[data-testid=poor-badge]").unwrap();
    assert!(poor.class_name().contains("score-poor"));

    // Badges without an id carry no empty data-testid.
    assert_eq!(count(&root, ".score-badge"), 4);
    assert_eq!(count(&root, ".score-badge[data-testid]"), 3);
}

#[wasm_bindgen_test]
fn test_score_breakdown_lists_dimensions() {
    let root = container("score-breakdown-test");
    mount_to(root.clone(), || view! { <ScoreBreakdown stall=sample_stall() /> });

    assert_eq!(count(&root, ".score-dimensions li"), 4);
    let text = find(&root, "[data-testid=score-breakdown]")
        .and_then(|e| e.text_content())
        .unwrap_or_default();
    assert!(text.contains("Water Quality"));
    assert!(text.contains("4.5"));
    assert!(text.contains("Based on 12 ratings"));
}

#[wasm_bindgen_test]
fn test_reviews_list_empty_then_populated() {
    let root = container("reviews-list-test");
    let reviews = create_rw_signal(Vec::<Review>::new());
    mount_to(root.clone(), move || view! { <ReviewsList reviews /> });

    assert!(find(&root, "[data-testid=no-reviews-message]").is_some());

    reviews.set(vec![Review {
        id: "r1".into(),
        stall_id: "s1".into(),
        user_id: "u1".into(),
        user_name: "nisha".into(),
        comment: "Vendor wore gloves".into(),
        created_at: Some("2024-05-01T10:00:00Z".into()),
    }]);

    assert!(find(&root, "[data-testid=no-reviews-message]").is_none());
    let review = find(&root, "[data-testid=review-r1]").expect("review rendered");
    let text = review.text_content().unwrap_or_default();
    assert!(text.contains("Vendor wore gloves"));
    assert!(text.contains("May 1, 2024"));
    assert_eq!(
        find(&root, ".avatar").and_then(|e| e.text_content()).as_deref(),
        Some("N")
    );
}

#[wasm_bindgen_test]
fn test_toaster_shows_and_dismisses_on_click() {
    let root = container("toaster-test");
    let toasts = create_rw_signal(None::<ToastContext>);
    mount_to(root.clone(), move || {
        let ctx = ToastContext::new();
        provide_context(ctx);
        toasts.set(Some(ctx));
        view! { <Toaster /> }
    });

    let ctx = toasts.get_untracked().expect("toast context provided");
    ctx.success("QR Code generated!");
    ctx.error("Failed to generate QR code");
    assert_eq!(count(&root, ".toast"), 2);
    assert_eq!(count(&root, ".toast-error"), 1);

    let first: web_sys::HtmlElement = find(&root, ".toast-success").unwrap().unchecked_into();
    first.click();
    assert_eq!(count(&root, ".toast"), 1);
    assert_eq!(count(&root, ".toast-success"), 0);
}

#[wasm_bindgen_test]
fn test_require_auth_waits_for_restore() {
    let root = container("require-auth-test");
    let auth_handle = create_rw_signal(None::<AuthContext>);
    mount_to(root.clone(), move || {
        let auth = AuthContext::new(
            AppConfig::with_backend("http://localhost:8000"),
            Rc::new(MemoryStorage::default()),
        );
        provide_context(auth);
        auth_handle.set(Some(auth));
        auth.login(
            "tok".into(),
            serde_json::from_str(r#"{"id":"u1","name":"Asha","email":"a@example.com"}"#).unwrap(),
        );
        view! {
            <RequireAuth>
                <p class="secret">"Profile"</p>
            </RequireAuth>
        }
    });

    assert!(root.text_content().unwrap_or_default().contains("Loading..."));
    assert!(find(&root, ".secret").is_none());

    let auth = auth_handle.get_untracked().unwrap();
    auth.ready.set(true);
    assert!(find(&root, ".secret").is_some());
}

#[wasm_bindgen_test]
async fn test_toast_dismisses_itself() {
    let root = container("toast-timeout-test");
    let toasts = create_rw_signal(None::<ToastContext>);
    mount_to(root.clone(), move || {
        let ctx = ToastContext::new();
        provide_context(ctx);
        toasts.set(Some(ctx));
        view! { <Toaster /> }
    });

    let ctx = toasts.get_untracked().unwrap();
    ctx.success("Review submitted successfully!");
    assert_eq!(count(&root, ".toast"), 1);

    sleep(Duration::from_millis(u64::from(TOAST_TIMEOUT_MS) / 2)).await;
    assert_eq!(count(&root, ".toast"), 1);

    sleep(Duration::from_millis(u64::from(TOAST_TIMEOUT_MS) / 2 + 300)).await;
    assert_eq!(count(&root, ".toast"), 0);
    assert!(ctx.toasts().get_untracked().is_empty());
}

#[wasm_bindgen_test]
fn test_rating_requires_sign_in() {
    let root = container("rating-signed-out-test");
    mount_to(root.clone(), || {
        provide_signed_out_contexts();
        view! {
            <RatingDialog stall_id="s1".to_string() on_rated=Callback::new(|()| {}) />
            <Toaster />
        }
    });

    click(&root, "[data-testid=rate-button]");
    assert!(find(&root, "[data-testid=rating-dialog]").is_some());
    assert!(find(&root, "[data-testid=water-quality-slider]").is_some());

    click(&root, "[data-testid=submit-rating-button]");
    let toast = find(&root, ".toast-error").expect("error toast shown");
    assert_eq!(toast.text_content().as_deref(), Some("Please login to rate"));
    // Nothing was sent, so the dialog stays open.
    assert!(find(&root, "[data-testid=rating-dialog]").is_some());
}

#[wasm_bindgen_test]
fn test_qr_button_disabled_without_selection() {
    let root = container("qr-generator-test");
    mount_to(root.clone(), || {
        provide_signed_out_contexts();
        view! {
            <Router>
                <QrGeneratorPage />
            </Router>
        }
    });

    let button = find(&root, "[data-testid=generate-qr-button]").expect("generate button rendered");
    assert!(button.has_attribute("disabled"));
    assert_eq!(button.text_content().as_deref(), Some("Generate QR Code"));
    assert!(find(&root, "[data-testid=qr-code-image]").is_none());
}

#[wasm_bindgen_test]
async fn test_dashboard_clear_resets_filters() {
    let root = container("dashboard-clear-test");
    mount_to(root.clone(), || {
        provide_signed_out_contexts();
        view! {
            <Router>
                <DashboardPage />
            </Router>
        }
    });

    type_into(&root, "[data-testid=search-input-dashboard]", "bhel");
    type_into(&root, "[data-testid=city-filter-input]", "Mumbai");
    type_into(&root, "[data-testid=area-filter-input]", "Dadar");
    assert_eq!(input_value(&root, "[data-testid=city-filter-input]"), "Mumbai");

    click(&root, "[data-testid=clear-filter-button]");
    sleep(Duration::from_millis(50)).await;

    assert_eq!(input_value(&root, "[data-testid=search-input-dashboard]"), "");
    assert_eq!(input_value(&root, "[data-testid=city-filter-input]"), "");
    assert_eq!(input_value(&root, "[data-testid=area-filter-input]"), "");
    let path = web_sys::window().unwrap().location().pathname().unwrap();
    assert_eq!(path, "/dashboard");
}
