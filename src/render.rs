//! Builds the display document shown inside the syllabus overlay.
//!
//! Rendering is a pure function of the catalog entry: no lookups, no state,
//! no failure modes. Callers resolve the workshop first (see
//! [`crate::catalog::WorkshopIndex::workshop`]) and hand the entry in.

use crate::catalog::{SyllabusModule, Workshop};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Renderable syllabus: the workshop title followed by one section per
/// curriculum module, in definition order.
pub struct SyllabusDocument {
    pub title: String,
    pub sections: Vec<SyllabusSection>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One module's slice of the document.
pub struct SyllabusSection {
    pub heading: String,
    pub topics: Vec<String>,
}

/// Render a workshop entry into its overlay document.
pub fn render(workshop: &Workshop) -> SyllabusDocument {
    SyllabusDocument {
        title: workshop.title.clone(),
        sections: workshop.modules.iter().map(render_section).collect(),
    }
}

fn render_section(module: &SyllabusModule) -> SyllabusSection {
    SyllabusSection {
        heading: module.name.clone(),
        topics: module.topics.clone(),
    }
}

impl fmt::Display for SyllabusDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        for section in &self.sections {
            writeln!(f)?;
            writeln!(f, "{}", section.heading)?;
            for topic in &section.topics {
                writeln!(f, "  - {topic}")?;
            }
        }
        Ok(())
    }
}
