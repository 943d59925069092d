//! OpenAPI document for the REST API.

use utoipa::OpenApi;

use crate::api::dto::{
    PaginationMeta, PostDeletedResponse, PostListItem, PostListResponse, PostMutationResponse,
    PostRequest, PostResponse,
};
use crate::api::handlers::{posts, system};
use crate::domain::{ListOrder, PostId};
use crate::error::{ErrorBody, ErrorResponse};
use crate::validation::FieldErrors;

/// Generated OpenAPI specification, served at `/api-docs/openapi.json`
/// when the `swagger-ui` feature is enabled.
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "postboard", description = "Post management REST API"),
    paths(
        posts::list_posts,
        posts::create_post,
        posts::get_post,
        posts::update_post,
        posts::delete_post,
        system::health_handler,
    ),
    components(schemas(
        PostId,
        ListOrder,
        PostRequest,
        PostResponse,
        PostListItem,
        PostListResponse,
        PostMutationResponse,
        PostDeletedResponse,
        PaginationMeta,
        FieldErrors,
        ErrorBody,
        ErrorResponse,
        system::HealthResponse,
    )),
    tags(
        (name = "Posts", description = "Post CRUD and listing"),
        (name = "System", description = "Service status"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_post_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/v1/posts"));
        assert!(doc.paths.paths.contains_key("/api/v1/posts/{id}"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
