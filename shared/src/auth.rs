//! Login request and the parts of the login response the console keeps.

use serde::{Deserialize, Serialize};

use crate::Restaurant;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.trim().to_string(),
            password: password.to_string(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessToken {
    pub token: String,
    #[serde(default)]
    pub expires: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access: AccessToken,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub tokens: AuthTokens,
    #[serde(default)]
    pub restaurants: Vec<Restaurant>,
}

impl LoginResponse {
    pub fn access_token(&self) -> &str {
        &self.tokens.access.token
    }

    /// Restaurant to preselect right after login
    pub fn default_restaurant_id(&self) -> Option<i64> {
        self.restaurants.first().map(|restaurant| restaurant.id)
    }
}
