pub mod cart_service;
pub mod catalog_service;
pub mod checkout_service;
pub mod notification_service;
