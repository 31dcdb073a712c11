use crate::model::Project;
use std::io::{self, Write};

/// Write one `<title> -> <category>` line per project, in input order.
pub fn display_projects<W: Write>(out: &mut W, projects: &[Project]) -> io::Result<()> {
    for p in projects {
        writeln!(out, "{} -> {}", p.title(), p.category())?;
    }
    out.flush()
}
