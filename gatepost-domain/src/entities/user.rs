// User account entities

use serde::{Deserialize, Serialize};

use crate::utils::string_or_empty;
use crate::value_objects::UserId;

pub const GUARD_ACCOUNT_TYPE: &str = "GUARD";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: UserId,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub username: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub account_type: String,
}

impl UserAccount {
    pub fn is_guard(&self) -> bool {
        self.account_type.trim().eq_ignore_ascii_case(GUARD_ACCOUNT_TYPE)
    }
}

/// A guard account assigned to the currently loaded station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedUser {
    pub id: UserId,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub username: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub account_type: String,
}

impl From<&UserAccount> for AssignedUser {
    fn from(user: &UserAccount) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            account_type: user.account_type.clone(),
        }
    }
}

/// Accounts that can be assigned to a station, in input order.
pub fn guard_accounts(users: &[UserAccount]) -> Vec<UserAccount> {
    users.iter().filter(|user| user.is_guard()).cloned().collect()
}
