pub mod blogs;
pub mod catalogs;
pub mod chat;
pub mod knowledge;
pub mod messages;
pub mod serde_time;
pub mod sitemap;

pub use blogs::BlogDto;
pub use catalogs::{CatalogDto, SeedAction, SeedResultDto};
pub use chat::{ChatReplyDto, ChatTurnDto};
pub use knowledge::KnowledgeDto;
pub use messages::MessageDto;
pub use sitemap::{ChangeFrequency, SitemapEntryDto};
