//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Base document: title, servers and tag descriptions.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookstore API",
        version = "0.1.0",
        description = "REST backend for the bookstore marketplace: accounts, listings, orders and wishlists over MongoDB",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:4000", description = "Local development server")
    ),
    tags(
        (name = "Accounts", description = "Admin, seller and buyer account endpoints"),
        (name = "Catalog", description = "Book listing endpoints"),
        (name = "Orders", description = "Purchase order endpoints"),
        (name = "Wishlist", description = "Saved-for-later endpoints")
    )
)]
struct BaseDoc;

/// Combined OpenAPI documentation for all APIs.
///
/// The legacy routes are flat (no `/api` prefix), so the domain documents
/// are merged rather than nested under a path.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = BaseDoc::openapi();
        doc.merge(domain_accounts::ApiDoc::openapi());
        doc.merge(domain_catalog::ApiDoc::openapi());
        doc.merge(domain_orders::ApiDoc::openapi());
        doc.merge(domain_wishlist::ApiDoc::openapi());
        doc
    }
}
