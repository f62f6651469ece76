pub mod cart_sidebar;
pub mod empty_results;
pub mod loading;
pub mod password_input;
pub mod product_card;
pub mod product_modal;
pub mod user_dropdown;
