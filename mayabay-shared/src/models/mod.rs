pub mod auth;
pub mod checkout;
pub mod errors;
pub mod product;

pub use auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
pub use checkout::CheckoutResponse;
pub use errors::ErrorResponse;
pub use product::{NewProduct, Product};
