//! Canonical GeoJSON output, formatted by the serializer

use std::io::{self, Write};

use serde_json::{Value, json};

/// Write a named `FeatureCollection`, pretty-printed
pub fn write_canonical(writer: &mut dyn Write, name: &str, features: &[Value]) -> io::Result<()> {
    let collection = json!({
        "type": "FeatureCollection",
        "name": name,
        "features": features,
    });
    serde_json::to_writer_pretty(&mut *writer, &collection)?;
    writer.write_all(b"\n")
}
