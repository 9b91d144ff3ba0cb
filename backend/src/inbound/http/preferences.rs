//! Preference HTTP handlers.
//!
//! ```text
//! POST   /preferences/{user_id}
//! GET    /preferences/{user_id}
//! PUT    /preferences/{user_id}
//! DELETE /preferences/{user_id}
//! ```
//!
//! Bodies are taken as raw JSON and validated by
//! [`validate_preferences`] so every rejected field is reported in one
//! response.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{
    Error, FieldError, PAYLOAD_FIELD, UserId, UserPreferences, ValidationErrors,
    validate_preferences,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, PreferencesRequestSchema};
use crate::inbound::http::state::HttpState;

/// Response payload for a user's preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PreferencesResponse {
    #[schema(example = "en")]
    pub language: String,
    pub notifications_enabled: bool,
    #[schema(example = "light")]
    pub theme: String,
    #[schema(example = "johndoe")]
    pub user_id: String,
}

impl From<UserPreferences> for PreferencesResponse {
    fn from(value: UserPreferences) -> Self {
        Self {
            language: value.record.language.to_string(),
            notifications_enabled: value.record.notifications_enabled,
            theme: value.record.theme.to_string(),
            user_id: value.user_id.into(),
        }
    }
}

fn parse_user_id(raw: String) -> Result<UserId, Error> {
    UserId::new(raw).map_err(|err| Error::from(FieldError::from(err)))
}

/// Validate the path identifier and body together so a request with both a
/// blank identifier and bad fields reports all of them.
fn parse_preferences_request(raw_user_id: String, payload: &Value) -> Result<UserPreferences, Error> {
    let user_id = UserId::new(raw_user_id).map_err(FieldError::from);
    let record = validate_preferences(payload);

    match (user_id, record) {
        (Ok(user_id), Ok(record)) => Ok(UserPreferences::new(user_id, record)),
        (user_id, record) => {
            let errors: ValidationErrors = user_id
                .err()
                .into_iter()
                .chain(record.err().into_iter().flatten())
                .collect();
            debug!(%errors, "preferences request rejected");
            Err(Error::validation(errors))
        }
    }
}

fn json_error_reason(err: &JsonPayloadError) -> String {
    match err {
        JsonPayloadError::ContentType => "content type must be application/json".to_owned(),
        JsonPayloadError::Deserialize(inner) => format!("body must be valid JSON: {inner}"),
        JsonPayloadError::OverflowKnownLength { limit, .. } | JsonPayloadError::Overflow { limit } => {
            format!("body must not exceed {limit} bytes")
        }
        other => format!("body could not be read: {other}"),
    }
}

/// JSON extractor configuration reporting unreadable bodies as validation
/// failures on the `body` field.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        let field_error = FieldError::wrong_type(PAYLOAD_FIELD, json_error_reason(&err));
        Error::from(field_error).into()
    })
}

/// Register the preference routes and their JSON configuration.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use preferences_backend::inbound::http::preferences::configure_preferences;
///
/// let _app = App::new().configure(configure_preferences);
/// ```
pub fn configure_preferences(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(create_preferences)
        .service(get_preferences)
        .service(update_preferences)
        .service(delete_preferences);
}

/// Create preferences for a user.
#[utoipa::path(
    post,
    path = "/preferences/{user_id}",
    params(("user_id" = String, Path, description = "User identifier")),
    request_body = PreferencesRequestSchema,
    responses(
        (status = 201, description = "Preferences created", body = PreferencesResponse),
        (status = 409, description = "Preferences already exist", body = ErrorSchema),
        (status = 422, description = "Validation failed", body = ErrorSchema)
    ),
    tags = ["preferences"],
    operation_id = "createPreferences"
)]
#[post("/preferences/{user_id}")]
pub async fn create_preferences(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let preferences = parse_preferences_request(path.into_inner(), &payload)?;
    let created = state.preferences.create(preferences).await?;
    Ok(HttpResponse::Created().json(PreferencesResponse::from(created)))
}

/// Fetch a user's preferences.
#[utoipa::path(
    get,
    path = "/preferences/{user_id}",
    params(("user_id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Stored preferences", body = PreferencesResponse),
        (status = 404, description = "No preferences for user", body = ErrorSchema),
        (status = 422, description = "Invalid user identifier", body = ErrorSchema)
    ),
    tags = ["preferences"],
    operation_id = "getPreferences"
)]
#[get("/preferences/{user_id}")]
pub async fn get_preferences(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<PreferencesResponse>> {
    let user_id = parse_user_id(path.into_inner())?;
    let preferences = state.preferences_query.fetch(&user_id).await?;
    Ok(web::Json(PreferencesResponse::from(preferences)))
}

/// Replace a user's preferences.
#[utoipa::path(
    put,
    path = "/preferences/{user_id}",
    params(("user_id" = String, Path, description = "User identifier")),
    request_body = PreferencesRequestSchema,
    responses(
        (status = 200, description = "Updated preferences", body = PreferencesResponse),
        (status = 404, description = "No preferences for user", body = ErrorSchema),
        (status = 422, description = "Validation failed", body = ErrorSchema)
    ),
    tags = ["preferences"],
    operation_id = "updatePreferences"
)]
#[put("/preferences/{user_id}")]
pub async fn update_preferences(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<Value>,
) -> ApiResult<web::Json<PreferencesResponse>> {
    let preferences = parse_preferences_request(path.into_inner(), &payload)?;
    let updated = state.preferences.update(preferences).await?;
    Ok(web::Json(PreferencesResponse::from(updated)))
}

/// Delete a user's preferences.
#[utoipa::path(
    delete,
    path = "/preferences/{user_id}",
    params(("user_id" = String, Path, description = "User identifier")),
    responses(
        (status = 204, description = "Preferences deleted"),
        (status = 404, description = "No preferences for user", body = ErrorSchema),
        (status = 422, description = "Invalid user identifier", body = ErrorSchema)
    ),
    tags = ["preferences"],
    operation_id = "deletePreferences"
)]
#[delete("/preferences/{user_id}")]
pub async fn delete_preferences(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let user_id = parse_user_id(path.into_inner())?;
    state.preferences.delete(&user_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "preferences_tests.rs"]
mod tests;
