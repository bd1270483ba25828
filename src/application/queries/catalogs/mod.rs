mod get_by_id;
mod get_by_slug;
mod list;
mod service;

pub use get_by_id::GetCatalogByIdQuery;
pub use get_by_slug::GetCatalogBySlugQuery;
pub use list::ListCatalogsQuery;
pub use service::CatalogQueryService;
