//! Classification of database errors raised by SQLx.

/// Returns true when `e` is a UNIQUE violation on `urls.short_code`.
///
/// SQLite does not report constraint names, so the failing column is read
/// from the error message (`UNIQUE constraint failed: urls.short_code`).
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    db_err.message().contains("urls.short_code")
}
