mod config;
pub use config::Config;

mod dialect;
pub use dialect::SqlDialect;

mod flavor;
use flavor::Flavor;

mod ty;
