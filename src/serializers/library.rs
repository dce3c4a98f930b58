use serde_json::Value;

use super::{FieldErrors, FieldReader, ModelSerializer};
use crate::models::{authors::requests::CreateAuthorRequest, books::requests::CreateBookRequest};

const NAME_MAX_LENGTH: usize = 100;
const TITLE_MAX_LENGTH: usize = 100;

pub struct AuthorSerializer;

impl ModelSerializer for AuthorSerializer {
    type Validated = CreateAuthorRequest;
    const FIELDS: &'static [&'static str] = &["name"];

    fn deserialize(data: &Value) -> Result<CreateAuthorRequest, FieldErrors> {
        let mut fields = FieldReader::new(data)?;
        match fields.char("name", NAME_MAX_LENGTH) {
            Some(name) => Ok(CreateAuthorRequest { name }),
            None => Err(fields.into_errors()),
        }
    }
}

pub struct BookSerializer;

impl ModelSerializer for BookSerializer {
    type Validated = CreateBookRequest;
    const FIELDS: &'static [&'static str] = &["title", "author"];

    fn deserialize(data: &Value) -> Result<CreateBookRequest, FieldErrors> {
        let mut fields = FieldReader::new(data)?;
        let title = fields.char("title", TITLE_MAX_LENGTH);
        let author = fields.nullable_primary_key("author");

        match (title, author) {
            (Some(title), Some(author)) => Ok(CreateBookRequest { title, author }),
            _ => Err(fields.into_errors()),
        }
    }
}
