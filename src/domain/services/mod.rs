pub mod lifecycle;
pub mod password_service;
