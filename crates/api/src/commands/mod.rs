//! HTTP request handlers, one module per resource

pub mod activity;
pub mod health;
pub mod reference_data;
pub mod user_profile;

pub use activity::get_user_activities;
pub use health::get_health;
pub use reference_data::{get_all_categories, get_all_topics};
pub use user_profile::{delete_user_profile, get_user_profile, update_user_profile};
