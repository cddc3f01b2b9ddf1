//! Page views, one per route table entry.

pub mod admin_users;
pub mod create_profile;
pub mod dashboard;
pub mod login;
pub mod settings;
pub mod signup;
pub mod workout_detail;
pub mod workouts;
