pub mod rating;
pub mod review;
pub mod stall;
pub mod user;
