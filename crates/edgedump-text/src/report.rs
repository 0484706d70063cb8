//! Edge list reports.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use edgedump_core::{Edge, Graph};

use crate::error::{EmitError, Result};

/// First line of every text report.
///
/// Kept identical to the reports existing tooling already parses.
pub const HEADER: &str = "Список ребер графа:";

/// Output format for a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!(
                "unknown report format '{other}' (expected text or json)"
            )),
        }
    }
}

/// Write the text report for `edges` to `writer`.
pub fn emit<W: Write>(edges: &[Edge], writer: &mut W) -> Result<()> {
    writeln!(writer, "{HEADER}")?;
    for edge in edges {
        writeln!(writer, "{edge}")?;
    }
    Ok(())
}

/// Write a report for `graph` in the requested format.
pub fn emit_report<W: Write>(graph: &Graph, format: ReportFormat, writer: &mut W) -> Result<()> {
    match format {
        ReportFormat::Text => emit(graph.edges(), writer),
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, graph)?;
            writeln!(writer)?;
            Ok(())
        }
    }
}

/// Create (or truncate) `path` and write the text report for `edges` to it.
pub fn write_edges(path: &Path, edges: &[Edge]) -> Result<()> {
    with_output(path, |out| emit(edges, out))
}

/// Create (or truncate) `path` and write a report for `graph` to it.
pub fn write_report(path: &Path, graph: &Graph, format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Text => write_edges(path, graph.edges()),
        ReportFormat::Json => with_output(path, |out| emit_report(graph, format, out)),
    }
}

fn with_output<F>(path: &Path, body: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    debug!(path = %path.display(), "creating output");
    let file = File::create(path).map_err(|source| EmitError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut out = BufWriter::new(file);
    body(&mut out)?;
    // Flush explicitly so a failed final write is reported instead of being
    // swallowed when the writer is dropped.
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io;

    use super::*;

    fn two_edge_graph() -> Graph {
        let mut g = Graph::new(2).unwrap();
        g.add_edge(Edge::new(0, 1, 10)).unwrap();
        g.add_edge(Edge::new(1, 0, -5)).unwrap();
        g
    }

    /// Accepts `limit` bytes, then fails every write.
    struct ShortWriter {
        written: Vec<u8>,
        limit: usize,
    }

    impl Write for ShortWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let room = self.limit.saturating_sub(self.written.len());
            if room == 0 {
                return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
            }
            let n = room.min(buf.len());
            self.written.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn emit_format() {
        let mut buf = Vec::new();
        emit(two_edge_graph().edges(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(HEADER));
        assert_eq!(lines.collect::<Vec<_>>(), vec!["(0, 1, 10)", "(1, 0, -5)"]);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn emit_empty_is_header_only() {
        let mut buf = Vec::new();
        emit(&[], &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), format!("{HEADER}\n"));
    }

    #[test]
    fn emit_min_weight() {
        let mut buf = Vec::new();
        emit(&[Edge::new(0, 0, i16::MIN)], &mut buf).unwrap();
        assert!(String::from_utf8(buf).unwrap().ends_with("(0, 0, -32768)\n"));
    }

    #[test]
    fn emit_write_failure() {
        let mut out = ShortWriter {
            written: Vec::new(),
            limit: HEADER.len() + 3,
        };
        let err = emit(two_edge_graph().edges(), &mut out).unwrap_err();
        assert!(matches!(err, EmitError::Write(_)));
        assert_eq!(err.to_string(), "write failed");
        assert!(!out.written.is_empty());
    }

    #[test]
    fn json_report() {
        let mut buf = Vec::new();
        emit_report(&two_edge_graph(), ReportFormat::Json, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "num_vertices": 2,
                "edges": [
                    { "from": 0, "to": 1, "weight": 10 },
                    { "from": 1, "to": 0, "weight": -5 }
                ]
            })
        );
    }

    #[test]
    fn format_parsing() {
        assert_eq!("json".parse::<ReportFormat>(), Ok(ReportFormat::Json));
        assert_eq!("text".parse::<ReportFormat>(), Ok(ReportFormat::Text));
        assert!("jsno".parse::<ReportFormat>().unwrap_err().contains("jsno"));
        assert_eq!(ReportFormat::default(), ReportFormat::Text);
    }

    #[test]
    fn write_edges_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.txt");
        fs::write(&path, "stale content\n".repeat(100)).unwrap();

        write_edges(&path, two_edge_graph().edges()).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, format!("{HEADER}\n(0, 1, 10)\n(1, 0, -5)\n"));
    }

    #[test]
    fn write_report_text_matches_write_edges() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        let graph = two_edge_graph();

        write_edges(&a, graph.edges()).unwrap();
        write_report(&b, &graph, ReportFormat::Text).unwrap();
        assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
    }

    #[test]
    fn create_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("output.txt");

        let err = write_edges(&path, &[]).unwrap_err();
        assert!(matches!(err, EmitError::Create { .. }));
        assert_eq!(err.to_string(), format!("cannot create {}", path.display()));
        assert_eq!(err.class(), edgedump_core::ErrorClass::Io);
    }
}
