use crate::ColumnType;

use enumcol_core::{schema::db::ColumnSpec, Dialect};

/// Builds the comment to emit for the column described by `spec`, stored as
/// type `ty`.
///
/// When the type requires a comment hint, the dialect's type marker is
/// appended to the column's own comment so a later schema diff can tell the
/// column apart from a plain integer or text column.
///
/// Returns `None` when the dialect does not support column comments, even if
/// `spec` carries one.
pub fn column_comment(
    ty: &dyn ColumnType,
    spec: &ColumnSpec,
    dialect: &dyn Dialect,
) -> Option<String> {
    if !dialect.capability().column_comments {
        log::trace!(
            "{} has no column comments; dropping hint for {}",
            dialect.name(),
            spec.name
        );
        return None;
    }

    if !ty.requires_comment_hint() {
        return spec.comment.clone();
    }

    let mut ret = spec.comment.clone().unwrap_or_default();
    ret.push_str(&dialect.type_comment(ty.name()));
    Some(ret)
}
