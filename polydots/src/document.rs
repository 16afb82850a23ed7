//! SVG document ingestion: collects every `<path>` element (at any depth)
//! and turns it into a [`SourcePath`] for the graph builder.

use crate::error::LoadError;
use crate::geometry::limits;
use crate::model::{Color, SourcePath};
use crate::options::CommandPolicy;
use crate::svg::extract_subpaths;
use tracing::warn;

/// Raw attributes of one `<path>` element, in document order.
#[derive(Clone, Debug, PartialEq)]
pub struct PathElement {
    pub id: Option<String>,
    pub d: String,
    pub fill: Option<String>,
}

pub fn path_elements(svg: &str) -> Result<Vec<PathElement>, LoadError> {
    if svg.len() > limits::MAX_DOCUMENT_BYTES {
        return Err(LoadError::TooLarge("document size"));
    }
    // exported artwork often carries a DOCTYPE
    let mut opts = roxmltree::ParsingOptions::default();
    opts.allow_dtd = true;
    let doc = roxmltree::Document::parse_with_options(svg, opts)
        .map_err(|e| LoadError::InvalidSvg(e.to_string()))?;
    let mut out = Vec::new();
    for n in doc.descendants().filter(|n| n.is_element()) {
        if n.tag_name().name() != "path" {
            continue;
        }
        let Some(d) = n.attribute("d") else {
            warn!(id = n.attribute("id"), "path element without 'd' ignored");
            continue;
        };
        out.push(PathElement {
            id: n.attribute("id").map(str::to_string),
            d: d.to_string(),
            fill: n.attribute("fill").map(str::to_string),
        });
        if out.len() > limits::MAX_PATHS {
            return Err(LoadError::TooLarge("paths"));
        }
    }
    Ok(out)
}

/// Parses a fill attribute; anything but 3/6-digit hex falls back to black.
pub fn fill_color(fill: Option<&str>) -> Color {
    match fill {
        Some(f) => Color::parse_hex(f).unwrap_or_else(|| {
            warn!(fill = f, "unsupported fill, using black");
            Color::BLACK
        }),
        None => Color::BLACK,
    }
}

pub fn load_source_paths(svg: &str, policy: CommandPolicy) -> Result<Vec<SourcePath>, LoadError> {
    let elements = path_elements(svg)?;
    let mut out = Vec::with_capacity(elements.len());
    for (index, el) in elements.into_iter().enumerate() {
        let subpaths = extract_subpaths(&el.d, policy).map_err(|source| LoadError::Path {
            index,
            id: el.id.clone(),
            source,
        })?;
        if subpaths.is_empty() {
            continue;
        }
        out.push(SourcePath {
            fill: fill_color(el.fill.as_deref()),
            id: el.id,
            subpaths,
        });
    }
    if out.is_empty() {
        return Err(LoadError::NoPaths);
    }
    Ok(out)
}
