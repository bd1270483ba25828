pub mod entity;
pub mod repository;
pub mod seed;
pub mod value_objects;

pub use entity::{Catalog, CatalogUpdate, NewCatalog};
pub use repository::{CatalogReadRepository, CatalogWriteRepository};
pub use seed::{SeedCatalog, builtin_catalogs};
pub use value_objects::{
    CatalogCta, CatalogSections, CatalogVariant, ColorTheme, ProductDescription, Specification,
};
