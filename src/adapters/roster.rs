use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};
use regex::Regex;

use crate::domain::model::AttendeeRecord;
use crate::utils::error::{EtlError, Result};

/// Column positions resolved from the roster header.
#[derive(Debug, Clone, Copy)]
struct Columns {
    first_name: usize,
    last_name: Option<usize>,
    zipcode: usize,
    home_phone: usize,
    regdate: usize,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self> {
        let symbols: Vec<String> = headers.iter().map(symbolize_header).collect();
        let find = |name: &str| symbols.iter().position(|s| s == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| EtlError::MissingColumnError {
                column: name.to_string(),
            })
        };

        Ok(Self {
            first_name: require("first_name")?,
            last_name: find("last_name"),
            zipcode: require("zipcode")?,
            home_phone: require("homephone")?,
            regdate: require("regdate")?,
        })
    }
}

/// Turns a header cell into a column key: `" First Name "` becomes `first_name`.
pub fn symbolize_header(header: &str) -> String {
    static STRIP: OnceLock<Regex> = OnceLock::new();
    static SPACES: OnceLock<Regex> = OnceLock::new();
    let strip = STRIP.get_or_init(|| Regex::new(r"[^\s\w]+").expect("valid regex"));
    let spaces = SPACES.get_or_init(|| Regex::new(r"\s+").expect("valid regex"));

    let lowered = header.to_lowercase();
    let stripped = strip.replace_all(&lowered, "");
    spaces.replace_all(stripped.trim(), "_").into_owned()
}

/// Streams [`AttendeeRecord`]s from a headed CSV source, one row per `next()`.
pub struct RosterReader<R: Read> {
    records: StringRecordsIntoIter<R>,
    columns: Columns,
}

impl RosterReader<File> {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| EtlError::file(path.display().to_string(), e))?;
        Self::from_reader(file)
    }
}

impl<R: Read> RosterReader<R> {
    pub fn from_reader(reader: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
        let columns = Columns::resolve(reader.headers()?)?;
        tracing::debug!("Roster columns resolved: {:?}", columns);

        Ok(Self {
            records: reader.into_records(),
            columns,
        })
    }

    fn to_attendee(&self, row: &StringRecord) -> AttendeeRecord {
        // rows are width-checked by the csv reader, so every index is present
        let field = |index: usize| row.get(index).unwrap_or_default().to_string();

        AttendeeRecord {
            id: field(0),
            first_name: field(self.columns.first_name),
            last_name: self.columns.last_name.map(field),
            raw_zipcode: field(self.columns.zipcode),
            raw_home_phone: field(self.columns.home_phone),
            registration_timestamp: field(self.columns.regdate),
        }
    }
}

impl<R: Read> Iterator for RosterReader<R> {
    type Item = Result<AttendeeRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.records.next()?;
        Some(row.map(|row| self.to_attendee(&row)).map_err(EtlError::from))
    }
}
