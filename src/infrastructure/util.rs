use crate::application::ports::util::{IdGenerator, SlugGenerator};
use crate::domain::{document::DocumentId, slug::generate_slug};
use bson::oid::ObjectId;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        generate_slug(input)
    }
}

/// Hands out fresh MongoDB object ids.
#[derive(Default, Clone)]
pub struct ObjectIdGenerator;

impl IdGenerator for ObjectIdGenerator {
    fn next_id(&self) -> DocumentId {
        ObjectId::new().into()
    }
}
