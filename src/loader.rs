use crate::model::Project;
use eyre::{Error, WrapErr};
use std::fs;
use std::path::Path;
use tracing::{debug, info, trace};

pub const PROJECTS_FILE: &str = "projects.json";

pub fn load_projects(path: &Path) -> Result<Vec<Project>, Error> {
    debug!(path = %path.display(), "reading projects");
    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("cannot read {}", path.display()))?;
    let projects =
        parse_projects(&text).wrap_err_with(|| format!("cannot parse {}", path.display()))?;
    info!(count = projects.len(), "projects loaded");
    Ok(projects)
}

/// Parse a JSON array of objects. Anything else at the top level, or as an
/// element, is rejected.
pub fn parse_projects(text: &str) -> Result<Vec<Project>, Error> {
    let projects: Vec<Project> = serde_json::from_str(text)?;
    trace!(?projects, "parsed projects");
    Ok(projects)
}
