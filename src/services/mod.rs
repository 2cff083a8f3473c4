pub mod hashing;
pub mod identity;
pub mod jwt;
pub mod security;
