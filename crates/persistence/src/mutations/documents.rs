// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use dive_ready_domain::{DocumentKind, OperationId};
use tracing::info;

use crate::diesel_schema::safety_documents;
use crate::error::PersistenceError;

/// Records the sign-off state of one safety document.
///
/// An operation has at most one document of each kind; recording the same
/// kind again overwrites its `signed` flag. Returns the document id.
///
/// # Errors
///
/// Returns `PersistenceError::ReferenceNotFound` if the operation does not
/// exist.
pub fn record_safety_document(
    conn: &mut SqliteConnection,
    operation_id: &OperationId,
    kind: DocumentKind,
    signed: bool,
) -> Result<i64, PersistenceError> {
    let signed_flag: i32 = i32::from(signed);

    let document_id: i64 = diesel::insert_into(safety_documents::table)
        .values((
            safety_documents::operation_id.eq(operation_id.value()),
            safety_documents::kind.eq(kind.as_str()),
            safety_documents::signed.eq(signed_flag),
        ))
        .on_conflict((safety_documents::operation_id, safety_documents::kind))
        .do_update()
        .set(safety_documents::signed.eq(signed_flag))
        .returning(safety_documents::document_id)
        .get_result(conn)?;

    info!(
        operation_id = %operation_id,
        kind = kind.as_str(),
        signed,
        document_id,
        "Safety document recorded"
    );
    Ok(document_id)
}
