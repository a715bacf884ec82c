//! Binding and reading numeric form fields.
//!
//! Numeric columns hold whatever the form sent. A value that parsed is
//! stored as a number; anything else is stored as text and SQLite keeps it
//! with its own storage class.

use shared::Numeric;
use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Decode, Encode, Row, Sqlite, Type};

type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// Chained binding for numeric fields alongside `Query::bind`
pub(crate) trait BindNumeric<'q> {
    fn bind_numeric<T>(self, value: &'q Option<Numeric<T>>) -> Self
    where
        T: Encode<'q, Sqlite> + Type<Sqlite> + Send + Copy + 'q;
}

impl<'q> BindNumeric<'q> for SqliteQuery<'q> {
    fn bind_numeric<T>(self, value: &'q Option<Numeric<T>>) -> Self
    where
        T: Encode<'q, Sqlite> + Type<Sqlite> + Send + Copy + 'q,
    {
        match value {
            Some(Numeric::Number(n)) => self.bind(*n),
            Some(Numeric::Text(text)) => self.bind(text.as_str()),
            None => self.bind(None::<T>),
        }
    }
}

/// Read a numeric column, falling back to text for values of another class
pub(crate) fn numeric_column<T>(row: &SqliteRow, column: &str) -> Result<Option<Numeric<T>>, sqlx::Error>
where
    T: for<'r> Decode<'r, Sqlite> + Type<Sqlite>,
{
    if let Ok(value) = row.try_get::<Option<T>, _>(column) {
        return Ok(value.map(Numeric::Number));
    }
    if let Ok(Some(value)) = row.try_get::<Option<f64>, _>(column) {
        return Ok(Some(Numeric::Text(value.to_string())));
    }
    if let Ok(Some(value)) = row.try_get::<Option<i64>, _>(column) {
        return Ok(Some(Numeric::Text(value.to_string())));
    }
    row.try_get::<Option<String>, _>(column)
        .map(|value| value.map(Numeric::Text))
}
