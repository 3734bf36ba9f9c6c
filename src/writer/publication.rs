//! Publication GeoJSON output
//!
//! Laid out for readable diffs: the header members each on their own line
//! and exactly one feature per line.
//!
//! ```text
//! {
//!   "metadata": {"generated": "2024-05-01", "source": "...", "description": "..."},
//!   "type": "FeatureCollection",
//!   "name": "verbundkarte",
//!   "features": [
//!     {"type": "Feature", "properties": {...}, "geometry": {...}},
//!     {"type": "Feature", "properties": {...}, "geometry": {...}}
//!   ]
//! }
//! ```

use std::io::{self, Write};

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::ser::Formatter;

/// Metadata block written at the top of the publication file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicationMetadata {
    #[serde(serialize_with = "serialize_date")]
    pub generated: NaiveDate,
    pub source: String,
    pub description: String,
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(&date.format("%Y-%m-%d"))
}

/// Single-line JSON with `", "` and `": "` separators
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineFormatter;

impl Formatter for InlineFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

fn write_inline<T: Serialize>(writer: &mut dyn Write, value: &T) -> io::Result<()> {
    let mut serializer = serde_json::Serializer::with_formatter(&mut *writer, InlineFormatter);
    value.serialize(&mut serializer)?;
    Ok(())
}

/// Write the publication document
pub fn write_publication<T: Serialize>(
    writer: &mut dyn Write,
    metadata: &PublicationMetadata,
    name: &str,
    features: &[T],
) -> io::Result<()> {
    writer.write_all(b"{\n  \"metadata\": ")?;
    write_inline(writer, metadata)?;
    writer.write_all(b",\n  \"type\": \"FeatureCollection\",\n  \"name\": ")?;
    write_inline(writer, &name)?;
    writer.write_all(b",\n  \"features\": [\n")?;

    for (i, feature) in features.iter().enumerate() {
        writer.write_all(b"    ")?;
        write_inline(writer, feature)?;
        let separator: &[u8] = if i + 1 < features.len() { b",\n" } else { b"\n" };
        writer.write_all(separator)?;
    }

    writer.write_all(b"  ]\n}\n")
}
