use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Registered user. `Password` carries the stored digest, never the plaintext.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct UserDto {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "userName")]
    pub user_name: String,
    #[serde(rename = "Password")]
    pub password: String,
    #[serde(rename = "emailAddress")]
    pub email_address: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct RegisterUserDto {
    #[serde(rename = "userName")]
    pub user_name: String,
    #[serde(rename = "Password")]
    pub password: String,
    #[serde(rename = "emailAddress")]
    pub email_address: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct LoginDto {
    #[serde(rename = "userName")]
    pub user_name: String,
    #[serde(rename = "Password")]
    pub password: String,
}
