use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::layout::RingLayout;

/// Writes the vertex table: one header line, then one fixed-width row per
/// component site.
///
/// Exactly N rows are written in a single pass; the closing placement
/// only ever feeds the rendering path, so nothing has to be trimmed
/// afterwards. Each row carries the anchor coordinates and a comment with
/// the 1-based vertex index and the signed rotation.
///
/// # Errors
///
/// Propagates write errors from the underlying sink.
pub fn write_table<W: Write>(out: &mut W, layout: &RingLayout) -> io::Result<()> {
    writeln!(out, "#  X       Y            Comment")?;
    for site in layout.sites() {
        writeln!(
            out,
            "{:>6.2} \t{:>6.2}\t# vertex {:>2} @ {:>7.2}\u{b0}",
            site.anchor.x, site.anchor.y, site.index, site.rotation
        )?;
    }
    Ok(())
}

/// Writes the vertex table to a file.
///
/// The handle is scoped to this call and released on every exit path; the
/// buffered writer is flushed before the handle drops.
///
/// # Errors
///
/// Returns any I/O error from creating or writing the file.
pub fn write_table_file(path: &Path, layout: &RingLayout) -> io::Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    write_table(&mut out, layout)?;
    out.flush()?;
    info!(path = %path.display(), rows = layout.sites().len(), "vertex table written");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::layout;

    fn render_to_string(layout: &RingLayout) -> String {
        let mut buffer = Vec::new();
        write_table(&mut buffer, layout).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn row_count_excludes_closing_vertex() {
        let config = LayoutConfig::new(8, 3.0, 5.0, 50.0, true).unwrap();
        let table = render_to_string(&layout::plan(&config).unwrap());
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 9, "header + 8 rows");
        assert!(lines[0].starts_with('#'));
        assert_eq!(lines.iter().filter(|l| !l.starts_with('#')).count(), 8);
    }

    #[test]
    fn row_format_is_fixed_width() {
        let config = LayoutConfig::new(4, 3.0, 5.0, 50.0, false).unwrap();
        let table = render_to_string(&layout::plan(&config).unwrap());
        let lines: Vec<_> = table.lines().collect();
        // Vertex 1 at angle 0: anchor (22.50, 0.00), rotation -90.
        assert_eq!(lines[1], " 22.50 \t  0.00\t# vertex  1 @  -90.00\u{b0}");
        // Vertex 3 at angle 180: anchor (-22.50, 0.00), rotation 90.
        assert_eq!(lines[3], "-22.50 \t  0.00\t# vertex  3 @   90.00\u{b0}");
    }

    #[test]
    fn header_matches_table_layout() {
        let config = LayoutConfig::new(3, 1.0, 2.0, 20.0, false).unwrap();
        let table = render_to_string(&layout::plan(&config).unwrap());
        assert!(table.starts_with("#  X       Y            Comment\n"));
    }
}
