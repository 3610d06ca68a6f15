pub mod add_stall;
pub mod dashboard;
pub mod landing;
pub mod leaderboard;
pub mod profile;
pub mod qr_generator;
pub mod stall_detail;
