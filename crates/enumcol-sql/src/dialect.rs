use super::Flavor;

use enumcol_core::{
    driver::Capability,
    schema::db::{self, ColumnSpec},
    Dialect, Error, Result,
};
use url::Url;

/// A [`Dialect`] for one of the supported SQL databases.
#[derive(Debug, Clone)]
pub struct SqlDialect {
    /// The database flavor handles the differences between SQL dialects and
    /// supported features.
    flavor: Flavor,

    /// Overrides the flavor's default VARCHAR length when set.
    default_varchar_length: Option<u64>,
}

impl SqlDialect {
    pub(crate) fn new(flavor: Flavor) -> SqlDialect {
        SqlDialect {
            flavor,
            default_varchar_length: None,
        }
    }

    /// Selects the dialect matching a connection URL's scheme.
    ///
    /// Only the scheme is inspected; the rest of the URL belongs to the host's
    /// connection layer.
    pub fn from_url(url: &str) -> Result<SqlDialect> {
        let url = Url::parse(url).map_err(|err| Error::invalid_connection_url(err.to_string()))?;

        let dialect = match url.scheme() {
            "sqlite" => SqlDialect::sqlite(),
            "postgresql" | "postgres" => SqlDialect::postgresql(),
            "mysql" => SqlDialect::mysql(),
            scheme => {
                return Err(Error::unsupported_feature(format!(
                    "no enum column dialect for database `{scheme}`"
                )))
            }
        };

        log::debug!("selected {} dialect for {}", dialect.name(), url.scheme());
        Ok(dialect)
    }

    /// Sets the VARCHAR length used for columns declared without one.
    pub fn default_varchar_length(mut self, length: u64) -> Self {
        self.default_varchar_length = Some(length);
        self
    }

    fn integer_type(&self, spec: &ColumnSpec) -> db::Type {
        db::Type::integer_for(spec)
    }

    fn string_type(&self, spec: &ColumnSpec) -> db::Type {
        // A zero length, on the column or as the override, counts as unset.
        match (
            spec.length.filter(|&n| n > 0),
            self.default_varchar_length.filter(|&n| n > 0),
        ) {
            (None, Some(length)) => {
                let spec = ColumnSpec {
                    length: Some(length),
                    ..spec.clone()
                };
                db::Type::string_for(&spec, &self.capability().storage_types)
            }
            _ => db::Type::string_for(spec, &self.capability().storage_types),
        }
    }
}

impl Dialect for SqlDialect {
    fn name(&self) -> &str {
        self.flavor.name()
    }

    fn capability(&self) -> &Capability {
        self.flavor.capability()
    }

    fn integer_type_declaration(&self, spec: &ColumnSpec) -> String {
        let ty = self.integer_type(spec);

        match self.flavor {
            Flavor::Postgresql if spec.auto_increment => "SERIAL".to_string(),
            // AUTOINCREMENT is only allowed on a plain `INTEGER PRIMARY KEY`.
            Flavor::Sqlite if spec.auto_increment => {
                "INTEGER PRIMARY KEY AUTOINCREMENT".to_string()
            }
            Flavor::Mysql if spec.auto_increment => {
                format!("{} AUTO_INCREMENT", self.flavor.render_type(&ty))
            }
            _ => self.flavor.render_type(&ty),
        }
    }

    fn varchar_type_declaration(&self, spec: &ColumnSpec) -> String {
        self.flavor.render_type(&self.string_type(spec))
    }
}
