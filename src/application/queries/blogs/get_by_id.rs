use super::BlogQueryService;
use crate::{
    application::{
        dto::BlogDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::document::DocumentId,
};

pub struct GetBlogByIdQuery {
    pub id: String,
}

impl BlogQueryService {
    pub async fn get_blog_by_id(&self, query: GetBlogByIdQuery) -> ApplicationResult<BlogDto> {
        let id = DocumentId::parse(query.id)
            .map_err(|_| ApplicationError::not_found("Blog not found"))?;
        self.read_repo
            .find_by_id(&id)
            .await?
            .map(BlogDto::from)
            .ok_or_else(|| ApplicationError::not_found("Blog not found"))
    }
}
