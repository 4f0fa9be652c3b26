//! CSV serialization
//!
//! Values containing a comma, a quote or a line break are quoted with inner
//! quotes doubled; everything else is written verbatim. Lines end with `\n`.

use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};

use crate::error::ExportError;
use crate::models::{DynamicRow, Record};

/// One titled block of a multi-section report
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportSection {
    pub name: String,
    pub rows: Vec<DynamicRow>,
}

impl ReportSection {
    pub fn new(name: impl Into<String>, rows: Vec<DynamicRow>) -> Self {
        Self { name: name.into(), rows }
    }
}

fn writer() -> Writer<Vec<u8>> {
    writer_over(Vec::new())
}

fn writer_over(buf: Vec<u8>) -> Writer<Vec<u8>> {
    WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(buf)
}

/// The csv writer quotes a lone empty field as `""`; a one-column row with no value is an empty line
fn write_row(out: &mut Writer<Vec<u8>>, fields: Vec<String>) -> Result<(), ExportError> {
    if let [only] = fields.as_slice() {
        if only.is_empty() {
            let mut bytes = std::mem::replace(out, writer())
                .into_inner()
                .map_err(|e| ExportError::Io(e.into_error()))?;
            bytes.push(b'\n');
            *out = writer_over(bytes);
            return Ok(());
        }
    }
    out.write_record(&fields)?;
    Ok(())
}

fn finish(writer: Writer<Vec<u8>>) -> Result<String, ExportError> {
    let bytes = writer.into_inner().map_err(|e| ExportError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Header line plus one line per row
///
/// With `headers`, each line holds those fields in that order; without, the
/// header comes from the first row and each row writes its own values.
pub fn to_csv<R: Record>(rows: &[R], headers: Option<&[&str]>) -> Result<String, ExportError> {
    let first = rows.first().ok_or(ExportError::NoData)?;
    let mut out = writer();

    match headers {
        Some(headers) => {
            write_row(&mut out, headers.iter().map(|name| name.to_string()).collect())?;
            for row in rows {
                write_row(&mut out, headers.iter().map(|name| row.field(name).to_string()).collect())?;
            }
        }
        None => {
            write_row(&mut out, first.field_names().into_iter().map(str::to_string).collect())?;
            for row in rows {
                write_row(&mut out, row.values().iter().map(ToString::to_string).collect())?;
            }
        }
    }

    finish(out)
}

/// Several datasets in one file, each under a `=== NAME ===` banner
///
/// Sections are separated by two blank lines; an empty section prints `No data available`.
pub fn sections_to_csv(sections: &[ReportSection]) -> Result<String, ExportError> {
    let mut content = String::new();
    for (index, section) in sections.iter().enumerate() {
        if index > 0 {
            content.push_str("\n\n");
        }
        content.push_str(&format!("=== {} ===\n", section.name.to_uppercase()));
        if section.rows.is_empty() {
            content.push_str("No data available\n");
        } else {
            content.push_str(&to_csv(&section.rows, None)?);
        }
    }
    Ok(content)
}
