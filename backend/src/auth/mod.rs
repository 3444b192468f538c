//! Credential handling
//!
//! Salted one-way password hashing (bcrypt or Argon2id).

mod password;

pub use password::PasswordService;
