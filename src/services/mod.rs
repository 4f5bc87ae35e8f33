pub mod auth;
pub mod favourites;
pub mod home;
pub mod movie;
pub mod search;
pub mod suggestions;
