use super::BlogQueryService;
use crate::application::{dto::BlogDto, error::ApplicationResult};

pub struct ListBlogsQuery {
    pub include_drafts: bool,
}

impl BlogQueryService {
    pub async fn list_blogs(&self, query: ListBlogsQuery) -> ApplicationResult<Vec<BlogDto>> {
        let blogs = self.read_repo.list(query.include_drafts).await?;
        Ok(blogs.into_iter().map(BlogDto::from).collect())
    }
}
