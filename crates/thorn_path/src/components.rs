//! Path component iteration.

use crate::{Path, SEPARATOR};

/// A single normalized piece of a path.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Component<'a> {
    /// The leading `/` of an absolute path.
    RootDir,
    /// A literal `.`.
    CurrentDir,
    /// A literal `..`.
    ParentDir,
    /// A plain segment.
    Normal(&'a str),
}

/// Iterator over a path's [`Component`]s.
///
/// Borrows from the path and allocates nothing. Runs of separators
/// collapse, so `a//b` and `a/b` yield the same sequence; an empty path
/// yields nothing.
#[derive(Debug, Clone)]
pub struct Components<'a> {
    rest: &'a str,
    root_pending: bool,
}

impl<'a> Components<'a> {
    pub(crate) fn new(path: &'a Path) -> Self {
        Self {
            rest: path.as_str(),
            root_pending: path.is_absolute(),
        }
    }
}

impl<'a> Iterator for Components<'a> {
    type Item = Component<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.root_pending {
            self.root_pending = false;
            return Some(Component::RootDir);
        }

        self.rest = self.rest.trim_start_matches(SEPARATOR);
        if self.rest.is_empty() {
            return None;
        }

        let segment = match self.rest.find(SEPARATOR) {
            Some(end) => {
                let (segment, rest) = self.rest.split_at(end);
                self.rest = rest;
                segment
            }
            None => {
                let segment = self.rest;
                self.rest = "";
                segment
            }
        };

        Some(match segment {
            "." => Component::CurrentDir,
            ".." => Component::ParentDir,
            _ => Component::Normal(segment),
        })
    }
}
