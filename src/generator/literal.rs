use super::{BINDING, TYPE_NAME};

use crate::{dataset::Dataset, error::ConvertError};

use std::io;

use {
    serde::{ser::Error as _, Serialize},
    serde_json::ser::{Formatter, PrettyFormatter},
};

/// Render every record as a pretty-printed array assigned to a typed constant.
pub fn render(dataset: &Dataset) -> Result<String, ConvertError> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, AsciiFormatter::default());
    dataset.serialize(&mut serializer)?;

    let json = String::from_utf8(buffer).map_err(serde_json::Error::custom)?;

    Ok(format!("const {BINDING}: {TYPE_NAME}[] = {json};\n"))
}

/// Two-space pretty printing that writes every character outside printable
/// ASCII as a lowercase `\uXXXX` escape, surrogate pairs included.
#[derive(Default)]
struct AsciiFormatter(PrettyFormatter<'static>);

impl Formatter for AsciiFormatter {
    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        for (index, ch) in fragment.char_indices() {
            if matches!(ch, ' '..='~') {
                writer.write_all(&fragment.as_bytes()[index..index + 1])?;
            } else {
                for unit in ch.encode_utf16(&mut [0; 2]) {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
        }
        Ok(())
    }

    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object_value(writer)
    }
}
