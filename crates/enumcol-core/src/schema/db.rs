mod column;
pub use column::ColumnSpec;

mod ty;
pub use ty::Type;
