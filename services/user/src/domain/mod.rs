//! 用户领域模型

mod password;
mod repository;
mod user;

pub use password::{Argon2Hasher, PasswordHasher};
pub use repository::UserRepository;
pub use user::{
    MSG_EMAIL_TAKEN, MSG_INVALID_CREDENTIALS, MSG_USERNAME_TAKEN, NewUser, User,
};

#[cfg(test)]
pub use password::MockPasswordHasher;
#[cfg(test)]
pub use repository::MockUserRepository;
