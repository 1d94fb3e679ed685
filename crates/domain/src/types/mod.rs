//! Domain types and models

pub mod activity;
pub mod profile;
pub mod reference;

pub use activity::UserActivities;
pub use profile::{
    DeleteConfirmation, FullProfile, FullProfileView, ProfileUpdate, ProfileView, PublicProfile,
    UpdateSummary,
};
pub use reference::{Category, Topic};
