//! Authentication utilities

mod jwt;
mod password;

pub use jwt::{Claims, JwtService, TokenPair, TokenType};
pub use password::{
    hash_password, validate_password, verify_password, PasswordService, MIN_PASSWORD_LENGTH,
};
