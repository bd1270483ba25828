pub mod blogs;
pub mod catalogs;
pub mod chat;
pub mod knowledge;
pub mod submissions;
