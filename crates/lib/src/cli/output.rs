use core::fmt;
use std::io::{self, Write};

use serde::Serialize;

/// Writer for everything a binary reports, either as plain text or as one
/// JSON object per line.
pub struct Output<O> {
    out: O,
    kind: OutputKind,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Json,
    #[default]
    Normal,
}

impl<O> Output<O>
where
    O: Write,
{
    pub fn new(out: O, kind: OutputKind) -> Self {
        Self { out, kind }
    }

    /// Write a record of type `ty`.
    ///
    /// Normal output uses the [fmt::Display] implementation of `data`, JSON
    /// output wraps its serialized form as `{"type": ty, "data": data}`.
    pub fn record<T>(&mut self, ty: &str, data: &T) -> io::Result<()>
    where
        T: ?Sized + Serialize + fmt::Display,
    {
        match &self.kind {
            OutputKind::Json => {
                self.json(&Line { ty, data })?;
            }
            OutputKind::Normal => {
                writeln!(self.out, "{data}")?;
            }
        }

        Ok(())
    }

    pub fn error(&mut self, m: impl fmt::Display) -> io::Result<()> {
        match &self.kind {
            OutputKind::Json => {
                self.json(&Line {
                    ty: "message",
                    data: &Message {
                        output: m,
                        kind: MessageKind::Error,
                    },
                })?;
            }
            OutputKind::Normal => {
                writeln!(self.out, "{}: {m}", MessageKind::Error)?;
            }
        }

        Ok(())
    }

    /// Extract the underlying writer.
    pub fn into_inner(self) -> O {
        self.out
    }

    fn json<T>(&mut self, m: &T) -> io::Result<()>
    where
        T: Serialize,
    {
        serde_json::to_writer(&mut self.out, m)?;
        writeln!(self.out)?;
        Ok(())
    }
}

#[derive(Serialize)]
struct Line<'a, T: ?Sized> {
    #[serde(rename = "type")]
    ty: &'a str,
    data: &'a T,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
enum MessageKind {
    Error,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageKind::Error => write!(f, "error"),
        }
    }
}

struct Message<T> {
    output: T,
    kind: MessageKind,
}

impl<T> Serialize for Message<T>
where
    T: fmt::Display,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("kind", &self.kind)?;
        map.serialize_entry("output", &DisplayString(&self.output))?;
        map.end()
    }
}

struct DisplayString<T>(T);

impl<T> Serialize for DisplayString<T>
where
    T: fmt::Display,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(&self.0)
    }
}
