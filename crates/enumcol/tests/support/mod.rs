#![allow(dead_code)]

use enumcol::{driver::Capability, schema::db::ColumnSpec, Dialect};
use std::sync::Mutex;

enumcol::integer_enum! {
    pub enum Level {
        One = 1,
        Two = 2,
        Three = 3,
    }
}

enumcol::string_enum! {
    pub enum Letter {
        A = "A",
        B = "B",
        C = "C",
    }
}

enumcol::string_enum! {
    pub enum AccountState {
        Active = "ACTIVE",
        Closed = "CLOSED",
    }
}

/// Dialect returning canned declarations and recording the specs it saw.
#[derive(Debug, Default)]
pub struct FakeDialect {
    pub seen: Mutex<Vec<ColumnSpec>>,
}

impl FakeDialect {
    pub fn new() -> FakeDialect {
        FakeDialect::default()
    }

    pub fn seen(&self) -> Vec<ColumnSpec> {
        self.seen.lock().unwrap().clone()
    }
}

impl Dialect for FakeDialect {
    fn name(&self) -> &str {
        "fake"
    }

    fn capability(&self) -> &Capability {
        &Capability::POSTGRESQL
    }

    fn integer_type_declaration(&self, spec: &ColumnSpec) -> String {
        self.seen.lock().unwrap().push(spec.clone());
        format!("FAKE_INT[{}]", spec.name)
    }

    fn varchar_type_declaration(&self, spec: &ColumnSpec) -> String {
        self.seen.lock().unwrap().push(spec.clone());
        format!("FAKE_VARCHAR[{}:{:?}]", spec.name, spec.length)
    }

    fn type_comment(&self, type_name: &str) -> String {
        format!("[[{type_name}]]")
    }

    fn parse_type_comment<'a>(&self, comment: &'a str) -> Option<&'a str> {
        comment.strip_suffix("]]")?.rsplit_once("[[").map(|(_, name)| name)
    }
}
