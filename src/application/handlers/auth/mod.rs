//! Authentication command and query handlers.

mod get_profile;
mod login_with_google;
mod logout;

pub use get_profile::{GetProfileHandler, GetProfileQuery};
pub use login_with_google::{LoginResult, LoginWithGoogleCommand, LoginWithGoogleHandler};
pub use logout::{LogoutCommand, LogoutHandler};
