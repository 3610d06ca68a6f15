pub mod auth_dialog;
pub mod nav_bar;
pub mod rating_dialog;
pub mod require_auth;
pub mod review_form;
pub mod reviews_list;
pub mod score_badge;
pub mod score_breakdown;
pub mod stall_card;
pub mod stall_form;
pub mod toaster;
