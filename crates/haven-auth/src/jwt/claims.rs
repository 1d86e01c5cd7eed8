//! Identity claims embedded in every token.

use serde::{Deserialize, Serialize};

use haven_entity::user::UserRole;

/// Claims payload. Field names are part of the wire format.
///
/// Access and refresh tokens share this exact shape; there is no purpose
/// claim, so either kind is accepted wherever the other is expected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user identifier.
    pub user_id: String,
    /// E-mail at the time of issuance. Informational only.
    pub email: String,
    /// Role at the time of issuance.
    pub role: UserRole,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Not-before timestamp (seconds since epoch).
    pub nbf: i64,
}

impl Claims {
    /// Whether `now` (seconds since epoch) lies within `[nbf, exp]`.
    pub fn is_valid_at(&self, now: i64) -> bool {
        self.nbf <= now && now <= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims() -> Claims {
        Claims {
            user_id: "u-1".into(),
            email: "u@example.com".into(),
            role: UserRole::User,
            exp: 200,
            iat: 100,
            nbf: 100,
        }
    }

    #[test]
    fn test_validity_window_is_inclusive() {
        let c = claims();
        assert!(!c.is_valid_at(99));
        assert!(c.is_valid_at(100));
        assert!(c.is_valid_at(200));
        assert!(!c.is_valid_at(201));
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(claims()).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, ["email", "exp", "iat", "nbf", "role", "user_id"]);
        assert_eq!(json["role"], "user");
    }
}
