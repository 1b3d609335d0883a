//! Path template matching.
//!
//! # Responsibilities
//! - Parse templates such as `/issues/:issueId/files/:fileId/edit`
//! - Match a path segment-by-segment, capturing `:name` slots
//! - Format a path back from a template and parameters
//!
//! # Design Decisions
//! - Literal segments match exactly (case-sensitive)
//! - Segment counts must be equal; no wildcards, no regex
//! - Query string and fragment are ignored; one trailing slash is tolerated
//! - Parameter slots never capture an empty segment

use std::collections::HashSet;
use thiserror::Error;

use crate::routing::RouteParams;

/// Errors raised while parsing a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("template '{0}' must start with '/'")]
    MissingLeadingSlash(String),

    #[error("template '{0}' contains an empty segment")]
    EmptySegment(String),

    #[error("template '{0}' has a parameter without a name")]
    UnnamedParameter(String),

    #[error("parameter '{name}' appears more than once in '{template}'")]
    DuplicateParameter { template: String, name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A compiled path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    template: String,
    segments: Vec<Segment>,
}

impl Pattern {
    pub fn parse(template: &str) -> Result<Self, PatternError> {
        if !template.starts_with('/') {
            return Err(PatternError::MissingLeadingSlash(template.to_string()));
        }

        let mut seen = HashSet::new();
        let mut segments = Vec::new();
        for raw in split_path(template) {
            if raw.is_empty() {
                return Err(PatternError::EmptySegment(template.to_string()));
            }
            match raw.strip_prefix(':') {
                Some("") => return Err(PatternError::UnnamedParameter(template.to_string())),
                Some(name) => {
                    if !seen.insert(name) {
                        return Err(PatternError::DuplicateParameter {
                            template: template.to_string(),
                            name: name.to_string(),
                        });
                    }
                    segments.push(Segment::Param(name.to_string()));
                }
                None => segments.push(Segment::Literal(raw.to_string())),
            }
        }

        Ok(Self {
            template: template.to_string(),
            segments,
        })
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Parameter names in template order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Match a path, returning the captured parameters.
    pub fn matches(&self, path: &str) -> Option<RouteParams> {
        let parts = split_path(path);
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = RouteParams::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(literal) if literal == part => {}
                Segment::Param(name) if !part.is_empty() => params.insert(name.as_str(), part),
                _ => return None,
            }
        }
        Some(params)
    }

    /// Build a path from parameters. `None` if a parameter is missing or
    /// would not survive a round trip (empty, or containing `/`, `?`, `#`).
    pub fn format(&self, params: &RouteParams) -> Option<String> {
        if self.segments.is_empty() {
            return Some("/".to_string());
        }

        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Literal(literal) => path.push_str(literal),
                Segment::Param(name) => {
                    let value = params.get(name)?;
                    if value.is_empty() || value.contains(['/', '?', '#']) {
                        return None;
                    }
                    path.push_str(value);
                }
            }
        }
        Some(path)
    }
}

fn split_path(path: &str) -> Vec<&str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    let path = path.strip_prefix('/').unwrap_or(path);
    let path = path.strip_suffix('/').unwrap_or(path);
    if path.is_empty() {
        Vec::new()
    } else {
        path.split('/').collect()
    }
}
