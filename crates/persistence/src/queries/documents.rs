// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use dive_ready_domain::{DocumentKind, OperationId, SafetyDocument};
use tracing::debug;

use crate::diesel_schema::safety_documents;
use crate::error::PersistenceError;

/// Diesel Queryable struct for safety document rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = safety_documents)]
struct SafetyDocumentRow {
    document_id: i64,
    operation_id: String,
    kind: String,
    signed: i32,
}

impl TryFrom<SafetyDocumentRow> for SafetyDocument {
    type Error = PersistenceError;

    fn try_from(row: SafetyDocumentRow) -> Result<Self, Self::Error> {
        Ok(Self {
            document_id: row.document_id.to_string(),
            operation_id: OperationId::new(&row.operation_id)?,
            kind: row.kind.parse::<DocumentKind>()?,
            signed: row.signed != 0,
        })
    }
}

/// Retrieves the document of `kind` attached to an operation.
///
/// Returns `Ok(None)` if the document has never been recorded.
///
/// # Errors
///
/// Returns an error if the query fails or the stored row is malformed.
pub fn get_safety_document(
    conn: &mut SqliteConnection,
    operation_id: &OperationId,
    kind: DocumentKind,
) -> Result<Option<SafetyDocument>, PersistenceError> {
    debug!(operation_id = %operation_id, kind = kind.as_str(), "Loading safety document");

    let row: Option<SafetyDocumentRow> = safety_documents::table
        .filter(safety_documents::operation_id.eq(operation_id.value()))
        .filter(safety_documents::kind.eq(kind.as_str()))
        .select(SafetyDocumentRow::as_select())
        .first(conn)
        .optional()?;

    row.map(SafetyDocument::try_from).transpose()
}
