#[derive(Debug)]
pub struct Capability {
    /// Column storage types supported by the database
    pub storage_types: StorageTypes,

    /// The database supports column comments in DDL. Without them there is
    /// nowhere to put a type comment hint.
    pub column_comments: bool,
}

#[derive(Debug)]
pub struct StorageTypes {
    /// Length used for VARCHAR columns declared without one.
    pub default_varchar_length: u64,

    /// When `Some` the database supports varchar types with the specified upper
    /// limit.
    pub varchar: Option<u64>,
}

impl Capability {
    /// SQLite capabilities.
    pub const SQLITE: Self = Self {
        storage_types: StorageTypes::SQLITE,
        column_comments: false,
    };

    /// PostgreSQL capabilities
    pub const POSTGRESQL: Self = Self {
        storage_types: StorageTypes::POSTGRESQL,
        column_comments: true,
        ..Self::SQLITE
    };

    /// MySQL capabilities
    pub const MYSQL: Self = Self {
        storage_types: StorageTypes::MYSQL,
        column_comments: true,
        ..Self::SQLITE
    };
}

impl StorageTypes {
    /// SQLite storage types
    pub const SQLITE: StorageTypes = StorageTypes {
        default_varchar_length: 255,

        // SQLite doesn’t really enforce the “N” in VARCHAR(N) at all – it
        // treats any type containing “CHAR”, “CLOB”, or “TEXT” as having TEXT
        // affinity, and simply ignores the length specifier. The only hard
        // limit is SQLITE_MAX_LENGTH, 1 billion by default.
        varchar: Some(1_000_000_000),
    };

    pub const POSTGRESQL: StorageTypes = StorageTypes {
        default_varchar_length: 255,

        // The maximum n you can specify is 10 485 760 characters.
        varchar: Some(10_485_760),
    };

    pub const MYSQL: StorageTypes = StorageTypes {
        default_varchar_length: 255,

        // The effective maximum length of a VARCHAR is subject to the maximum
        // row size (65,535 bytes, shared among all columns) and the character
        // set used.
        varchar: Some(65_535),
    };
}
