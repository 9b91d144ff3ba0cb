//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the preference and health endpoints plus the schema
//! wrappers from [`crate::inbound::http::schemas`]. The document is served by
//! Swagger UI in debug builds and printed by the `openapi-dump` binary.

use crate::inbound::http::preferences::PreferencesResponse;
use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, FieldErrorKindSchema, FieldErrorSchema, LanguageSchema,
    PreferencesRequestSchema, ThemeSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User preferences API",
        description = "Create, read, replace and delete per-user preferences."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::preferences::create_preferences,
        crate::inbound::http::preferences::get_preferences,
        crate::inbound::http::preferences::update_preferences,
        crate::inbound::http::preferences::delete_preferences,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        PreferencesRequestSchema,
        PreferencesResponse,
        LanguageSchema,
        ThemeSchema,
        ErrorSchema,
        ErrorCodeSchema,
        FieldErrorSchema,
        FieldErrorKindSchema,
    )),
    tags(
        (name = "preferences", description = "Per-user preference records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated OpenAPI document.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    fn error_schema_is_registered_with_detail() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "detail");
        assert_object_schema_has_field(error_schema, "errors");
    }

    #[rstest]
    #[case::preferences("/preferences/{user_id}")]
    #[case::ready("/health/ready")]
    #[case::live("/health/live")]
    fn paths_are_registered(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[rstest]
    fn preference_path_documents_every_method() {
        let doc = ApiDoc::openapi();
        let item = doc
            .paths
            .paths
            .get("/preferences/{user_id}")
            .expect("preferences path");

        assert!(item.post.is_some());
        assert!(item.get.is_some());
        assert!(item.put.is_some());
        assert!(item.delete.is_some());
    }
}
