use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};
use gloo_net::http::Request;

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{api_url, expect_success, get_json, post_json, with_session};

const LOGIN_PATH: &str = "/api/auth/login/";
const LOGOUT_PATH: &str = "/api/auth/logout/";
const CURRENT_USER_PATH: &str = "/api/auth/user/";

/// Login with username and password; the API answers with a session cookie
pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };
    post_json(LOGIN_PATH, &request).await
}

/// Logout (ends the server-side session)
pub async fn logout() -> Result<(), ApiError> {
    let response = with_session(Request::post(&api_url(LOGOUT_PATH))).send().await?;
    expect_success(response).await
}

/// Get current user info. This is the session probe: it only succeeds while
/// the browser holds a valid session cookie.
pub async fn get_current_user() -> Result<UserInfo, ApiError> {
    get_json(CURRENT_USER_PATH).await
}
