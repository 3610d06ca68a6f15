pub mod download;
pub mod leptos_owner;
pub mod panic_hook;
