use crate::{
    dto::auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse},
    error::{AppError, AppResult},
    routes::params::non_empty,
    state::AppState,
    store::NewUser,
};

pub async fn register_user(
    state: &AppState,
    payload: RegisterRequest,
) -> AppResult<RegisterResponse> {
    let (Some(email), Some(_password), Some(name)) = (
        non_empty(payload.email.as_deref()),
        non_empty(payload.password.as_deref()),
        non_empty(payload.name.as_deref()),
    ) else {
        return Err(AppError::Validation("All fields are required".into()));
    };

    // The password is only checked for presence; nothing stores it.
    let user = state
        .users
        .create(NewUser {
            email: email.to_string(),
            name: name.to_string(),
        })
        .await?;

    tracing::info!(user_id = user.id, "user registered");
    Ok(RegisterResponse {
        message: "User registered successfully".into(),
        user: user.into(),
    })
}

pub async fn login_user(state: &AppState, payload: LoginRequest) -> AppResult<LoginResponse> {
    let (Some(email), Some(_password)) = (
        non_empty(payload.email.as_deref()),
        non_empty(payload.password.as_deref()),
    ) else {
        return Err(AppError::Validation(
            "Email and password are required".into(),
        ));
    };

    let user = match state.users.find_by_email(email).await {
        Some(u) => u,
        None => return Err(AppError::Unauthorized("Invalid credentials".into())),
    };

    tracing::info!(user_id = user.id, "user logged in");
    Ok(LoginResponse {
        message: "Login successful".into(),
        token: format!("mock-jwt-token-{}", user.id),
        user: user.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn register_request(email: &str) -> RegisterRequest {
        RegisterRequest {
            email: Some(email.into()),
            password: Some("password123".into()),
            name: Some("Test User".into()),
        }
    }

    #[tokio::test]
    async fn register_rejects_blank_fields() {
        let state = AppState::in_memory(AppConfig::default());
        let err = register_user(
            &state,
            RegisterRequest {
                name: Some(String::new()),
                ..register_request("a@example.com")
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(state.users.count().await, 0);
    }

    #[tokio::test]
    async fn login_issues_token_for_known_email() {
        let state = AppState::in_memory(AppConfig::default());
        let registered = register_user(&state, register_request("a@example.com"))
            .await
            .unwrap();

        let resp = login_user(
            &state,
            LoginRequest {
                email: Some("a@example.com".into()),
                password: Some("not-the-password".into()),
            },
        )
        .await
        .unwrap();
        assert_eq!(resp.token, format!("mock-jwt-token-{}", registered.user.id));
        assert_eq!(resp.user.email, "a@example.com");
    }
}
