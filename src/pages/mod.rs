//! Routed pages.

pub mod athlete;
pub mod dashboard;
pub mod fan;
pub mod influencer;
pub mod landing;
pub mod login;
pub mod marketplace;
pub mod register;
pub mod sponsor;
