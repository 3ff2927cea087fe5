/// Hints describing the column an adapter is asked to declare.
///
/// The host mapping layer builds one of these from its field mapping and
/// hands it to `declare_column_type`. Adapters pass it through to the
/// dialect without looking at it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Column name
    pub name: String,

    /// Maximum length for text columns. `None` uses the dialect default.
    pub length: Option<u64>,

    /// Fixed-length text (`CHAR` instead of `VARCHAR`)
    pub fixed: bool,

    /// Unsigned integer storage, where the database supports it
    pub unsigned: bool,

    /// Auto-incrementing integer column
    pub auto_increment: bool,

    /// Whether the column accepts `NULL`
    pub nullable: bool,

    /// User-supplied column comment
    pub comment: Option<String>,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>) -> ColumnSpec {
        ColumnSpec {
            name: name.into(),
            ..ColumnSpec::default()
        }
    }

    pub fn length(mut self, length: u64) -> Self {
        self.length = Some(length);
        self
    }

    pub fn fixed(mut self, fixed: bool) -> Self {
        self.fixed = fixed;
        self
    }

    pub fn unsigned(mut self, unsigned: bool) -> Self {
        self.unsigned = unsigned;
        self
    }

    pub fn auto_increment(mut self, auto_increment: bool) -> Self {
        self.auto_increment = auto_increment;
        self
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}
