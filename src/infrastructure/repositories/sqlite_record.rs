use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{
    AttributeRecord, RecordId, RecordReadRepository, RecordWriteRepository,
};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};
use std::collections::BTreeMap;
use std::sync::Arc;

const PRIMARY_KEY: &str = "id";

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern compiles"));

fn ensure_identifier(kind: &str, name: &str) -> DomainResult<()> {
    if IDENTIFIER.is_match(name) {
        Ok(())
    } else {
        Err(DomainError::Validation(format!("invalid {kind} name: {name:?}")))
    }
}

/// Stores [`AttributeRecord`]s in one SQLite table with an `id INTEGER PRIMARY KEY`
/// column and nullable text columns for the listed attributes.
#[derive(Clone)]
pub struct SqliteRecordRepository {
    pool: Arc<SqlitePool>,
    table: String,
    columns: Vec<String>,
}

impl SqliteRecordRepository {
    /// # Errors
    ///
    /// [`DomainError::Validation`] when the table or a column is not a plain SQL
    /// identifier, or when `id` is listed as an attribute column.
    pub fn new<I, S>(
        pool: Arc<SqlitePool>,
        table: impl Into<String>,
        columns: I,
    ) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let table = table.into();
        ensure_identifier("table", &table)?;

        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        for column in &columns {
            ensure_identifier("column", column)?;
            if column == PRIMARY_KEY {
                return Err(DomainError::Validation(
                    "the primary key is not an attribute column".into(),
                ));
            }
        }

        Ok(Self {
            pool,
            table,
            columns,
        })
    }

    fn select_list(&self) -> String {
        std::iter::once(PRIMARY_KEY)
            .chain(self.columns.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn ensure_column<'a>(&self, attribute: &'a str) -> DomainResult<&'a str> {
        if attribute == PRIMARY_KEY || self.columns.iter().any(|c| c == attribute) {
            Ok(attribute)
        } else {
            Err(DomainError::Validation(format!(
                "unknown attribute {attribute:?} for table {}",
                self.table
            )))
        }
    }

    fn to_record(&self, row: &SqliteRow) -> DomainResult<AttributeRecord> {
        let id: i64 = row.try_get(PRIMARY_KEY).map_err(map_sqlx)?;
        let mut attributes = BTreeMap::new();
        for column in &self.columns {
            let value: Option<String> = row.try_get(column.as_str()).map_err(map_sqlx)?;
            attributes.insert(column.clone(), value);
        }

        Ok(AttributeRecord {
            id: Some(RecordId::new(id)?),
            attributes,
        })
    }

    fn value_of(record: &AttributeRecord, column: &str) -> Option<String> {
        record.attributes.get(column).cloned().flatten()
    }
}

#[async_trait]
impl RecordWriteRepository<AttributeRecord> for SqliteRecordRepository {
    async fn insert(&self, record: AttributeRecord) -> DomainResult<AttributeRecord> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("INSERT INTO {} ", self.table));

        let mut names: Vec<&str> = Vec::with_capacity(self.columns.len() + 1);
        if record.id.is_some() {
            names.push(PRIMARY_KEY);
        }
        names.extend(self.columns.iter().map(String::as_str));

        if names.is_empty() {
            builder.push("DEFAULT VALUES");
        } else {
            builder.push("(");
            builder.push(names.join(", "));
            builder.push(") VALUES (");
            let mut values = builder.separated(", ");
            if let Some(id) = record.id {
                values.push_bind(i64::from(id));
            }
            for column in &self.columns {
                values.push_bind(Self::value_of(&record, column));
            }
            values.push_unseparated(")");
        }
        builder.push(" RETURNING ");
        builder.push(self.select_list());

        let row = builder
            .build()
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        let created = self.to_record(&row)?;
        tracing::debug!(table = %self.table, id = ?created.id, "record inserted");
        Ok(created)
    }

    async fn update(&self, record: AttributeRecord) -> DomainResult<AttributeRecord> {
        let id = record
            .id
            .ok_or_else(|| DomainError::Validation("record has no primary key".into()))?;

        if self.columns.is_empty() {
            return self
                .find_by_pk(id)
                .await?
                .ok_or_else(|| DomainError::NotFound(format!("{} {id} not found", self.table)));
        }

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("UPDATE {} SET ", self.table));
        {
            let mut assignments = builder.separated(", ");
            for column in &self.columns {
                assignments.push(format!("{column} = "));
                assignments.push_bind_unseparated(Self::value_of(&record, column));
            }
        }
        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(self.select_list());

        let row = builder
            .build()
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound(format!("{} {id} not found", self.table)))?;

        tracing::debug!(table = %self.table, %id, "record updated");
        self.to_record(&row)
    }
}

#[async_trait]
impl RecordReadRepository<AttributeRecord> for SqliteRecordRepository {
    async fn find_by_pk(&self, id: RecordId) -> DomainResult<Option<AttributeRecord>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = ?",
            self.select_list(),
            self.table
        );
        let row = sqlx::query(&sql)
            .bind(i64::from(id))
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.as_ref().map(|row| self.to_record(row)).transpose()
    }

    async fn find_by_attribute(
        &self,
        attribute: &str,
        value: &str,
    ) -> DomainResult<Option<AttributeRecord>> {
        let column = self.ensure_column(attribute)?;
        let sql = format!(
            "SELECT {} FROM {} WHERE {column} = ? ORDER BY id LIMIT 1",
            self.select_list(),
            self.table
        );
        let row = sqlx::query(&sql)
            .bind(value)
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.as_ref().map(|row| self.to_record(row)).transpose()
    }
}
