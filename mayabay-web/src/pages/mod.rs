mod admin;
mod error;
mod home;
pub mod login;

pub use admin::AdminPage;
pub use error::ErrorPage;
pub use home::HomePage;
pub use login::LoginPage;
