//! OpenAPI document for the served routes, mounted at `/docs`.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::folio::{handlers, store};

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health,
        handlers::signup::signup,
        handlers::login::login,
        handlers::blog::create,
        handlers::blog::list,
        handlers::blog::pinned,
        handlers::blog::by_id,
        handlers::work::create,
        handlers::work::list,
        handlers::work::by_id,
    ),
    components(schemas(
        handlers::signup::Signup,
        handlers::signup::AccountSummary,
        handlers::login::Login,
        handlers::blog::NewBlog,
        handlers::work::NewWork,
        store::blogs::BlogRecord,
        store::works::WorkRecord,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "auth", description = "Admin signup, login and session tokens"),
        (name = "blogs", description = "Blog entries"),
        (name = "works", description = "Portfolio work entries"),
        (name = "health", description = "Service metadata"),
    )
)]
pub struct ApiDoc;

#[must_use]
pub fn doc() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
