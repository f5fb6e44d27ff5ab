use serde::{Deserialize, Serialize};

/// Youngest age the directory accepts, checked before every mutation.
pub const MINIMUM_AGE: u32 = 18;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub age: u32,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub age: u32,
}
