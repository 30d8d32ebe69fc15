pub mod password_interceptor;
