use crate::domain::errors::DomainError;

// Extended SQLite result codes.
const SQLITE_CONSTRAINT_CHECK: &str = "275";
const SQLITE_CONSTRAINT_NOTNULL: &str = "1299";
const SQLITE_CONSTRAINT_PRIMARYKEY: &str = "1555";
const SQLITE_CONSTRAINT_UNIQUE: &str = "2067";

#[must_use]
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match err {
        sqlx::Error::Database(db_err) => {
            let message = db_err.message().to_string();
            match db_err.code().as_deref() {
                Some(SQLITE_CONSTRAINT_UNIQUE | SQLITE_CONSTRAINT_PRIMARYKEY) => {
                    DomainError::Conflict(message)
                }
                Some(SQLITE_CONSTRAINT_CHECK | SQLITE_CONSTRAINT_NOTNULL) => {
                    DomainError::Validation(message)
                }
                _ => DomainError::Persistence(message),
            }
        }
        other => DomainError::Persistence(other.to_string()),
    }
}
