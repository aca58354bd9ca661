use serde::{Deserialize, Serialize};
use strum::Display;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Actor role. Selects the backing collection and the exact wording of the
/// login failure bodies, which the legacy storefront matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    Admin,
    Seller,
    Buyer,
}

impl Role {
    /// Backing MongoDB collection for this role.
    pub fn collection(self) -> &'static str {
        match self {
            Role::Admin => "admins",
            Role::Seller => "sellers",
            Role::Buyer => "users",
        }
    }

    /// Body returned when no account exists for the submitted email.
    pub fn unknown_email_reply(self) -> &'static str {
        match self {
            Role::Admin | Role::Seller => "no user",
            Role::Buyer => "User not found",
        }
    }

    /// Body returned when the password does not match.
    pub fn bad_password_reply(self) -> &'static str {
        match self {
            Role::Admin | Role::Seller => "login fail",
            Role::Buyer => "Invalid Password",
        }
    }
}

/// Account document, one collection per role.
///
/// Passwords are stored and compared as plaintext; hardening them is
/// explicitly out of scope for this service.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Account {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Account {
    pub fn new(input: Signup) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            email: input.email,
            password: input.password,
        }
    }
}

/// Login request body
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct Credentials {
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Signup request body
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct Signup {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Public projection of an account, returned on successful login.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccountSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// Successful login body: `{"Status":"Success","user":{...}}`.
///
/// The capitalized `Status` key is part of the legacy wire contract.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    #[serde(rename = "Status")]
    pub status: String,
    pub user: AccountSummary,
}

impl LoginResponse {
    pub fn success(account: &Account) -> Self {
        Self {
            status: "Success".to_string(),
            user: AccountSummary {
                id: account.id,
                name: account.name.clone(),
                email: account.email.clone(),
            },
        }
    }
}
