mod sqlite;
mod tables;

pub use sqlite::Database;
pub use tables::users::{
    OAUTH_EXPIRE_DATE_FIELD, OAUTH_REFRESH_TOKEN_FIELD, OAUTH_TOKEN_FIELD, OAUTH_VALID_FIELD,
    validate_service_name,
};
