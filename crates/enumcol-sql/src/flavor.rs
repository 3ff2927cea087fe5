use super::SqlDialect;

use enumcol_core::driver::Capability;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flavor {
    Postgresql,
    Sqlite,
    Mysql,
}

impl Flavor {
    pub(super) fn name(self) -> &'static str {
        match self {
            Flavor::Postgresql => "postgresql",
            Flavor::Sqlite => "sqlite",
            Flavor::Mysql => "mysql",
        }
    }

    pub(super) fn capability(self) -> &'static Capability {
        match self {
            Flavor::Postgresql => &Capability::POSTGRESQL,
            Flavor::Sqlite => &Capability::SQLITE,
            Flavor::Mysql => &Capability::MYSQL,
        }
    }
}

impl SqlDialect {
    pub fn sqlite() -> SqlDialect {
        SqlDialect::new(Flavor::Sqlite)
    }

    pub fn postgresql() -> SqlDialect {
        SqlDialect::new(Flavor::Postgresql)
    }

    pub fn mysql() -> SqlDialect {
        SqlDialect::new(Flavor::Mysql)
    }
}
