use std::io::{self, Write};

use log::Log;

pub(crate) struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let _ = write_record(io::stderr().lock(), record);
    }

    fn flush(&self) {}
}

/// Write a single record as `file:line: LEVEL: message`.
fn write_record<W>(mut out: W, record: &log::Record) -> io::Result<()>
where
    W: Write,
{
    writeln!(
        out,
        "{file}:{line}: {}: {}",
        record.level(),
        record.args(),
        file = record.file().unwrap_or_default(),
        line = record.line().unwrap_or_default()
    )
}

#[cfg(test)]
mod tests {
    use log::Level;

    use super::write_record;

    #[test]
    fn test_record_format() {
        let mut out = Vec::new();

        write_record(
            &mut out,
            &log::Record::builder()
                .args(format_args!("loaded {} pairs", 6))
                .level(Level::Debug)
                .file(Some("src/lists.rs"))
                .line(Some(120))
                .build(),
        )
        .unwrap();

        assert_eq!(out, b"src/lists.rs:120: DEBUG: loaded 6 pairs\n");
    }
}
