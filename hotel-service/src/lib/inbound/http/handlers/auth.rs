use serde::Serialize;

pub mod login;
pub mod register;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponseData {
    pub token: String,
}
