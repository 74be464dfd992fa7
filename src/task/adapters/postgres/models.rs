//! Diesel row models for task documents.

use super::schema::task_documents;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for task documents.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = task_documents)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskDocumentRow {
    /// Collection name.
    pub collection: String,
    /// Document identifier.
    pub id: String,
    /// Document body.
    pub body: Value,
    /// Last write timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task documents.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = task_documents)]
pub struct NewTaskDocumentRow {
    /// Collection name.
    pub collection: String,
    /// Document identifier.
    pub id: String,
    /// Document body.
    pub body: Value,
    /// Write timestamp.
    pub updated_at: DateTime<Utc>,
}
