use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
    pub user: UserInfo,
}

/// Body of `GET /api/auth/user/`, also embedded in [`LoginResponse`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_staff: bool,
}

/// Error body returned by the auth endpoints (`{"error": "..."}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_shape() {
        let response: LoginResponse = serde_json::from_str(
            r#"{"message":"Successfully logged in","user":{"id":1,"username":"admin","email":"a@b.c","is_staff":true}}"#,
        )
        .unwrap();
        assert_eq!(response.user.username, "admin");
        assert!(response.user.is_staff);
    }

    #[test]
    fn test_user_info_tolerates_missing_optional_fields() {
        let user: UserInfo = serde_json::from_str(r#"{"id":2,"username":"viewer"}"#).unwrap();
        assert_eq!(user.email, "");
        assert!(!user.is_staff);
    }
}
