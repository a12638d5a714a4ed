//! Core type definitions
//!
//! This module contains the basic data structures used throughout the
//! application, with minimal logic - focusing on data representation.

use std::fmt;

use miette::SourceSpan;
use serde::{Serialize, Serializer};

use crate::constants::vertices::{ALPHABET_SIZE, FIRST_LABEL};
use crate::error::PolygonWheelError;

/// A vertex of the polygon graph, identified by an uppercase letter
///
/// The label and the dense array index are a bijection: `'A'` is index 0,
/// `'Z'` is index 25.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(u8);

impl VertexId {
    pub fn from_label(label: char) -> Result<Self, PolygonWheelError> {
        if label.is_ascii_uppercase() {
            Ok(Self(label as u8 - FIRST_LABEL as u8))
        } else {
            Err(PolygonWheelError::InvalidVertexLabel { label })
        }
    }

    pub fn from_index(index: usize) -> Result<Self, PolygonWheelError> {
        if index < ALPHABET_SIZE {
            Ok(Self(index as u8))
        } else {
            Err(PolygonWheelError::GraphError {
                message: format!("Vertex index {index} exceeds the {ALPHABET_SIZE}-letter alphabet"),
            })
        }
    }

    pub fn label(self) -> char {
        (FIRST_LABEL as u8 + self.0) as char
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for VertexId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.label())
    }
}

impl TryFrom<char> for VertexId {
    type Error = PolygonWheelError;

    fn try_from(label: char) -> Result<Self, Self::Error> {
        Self::from_label(label)
    }
}

/// One parsed `(source, destination, weight)` triple of an edge list
///
/// Labels are kept as written; they are validated when the edge is added to
/// a [`WeightedGraph`](crate::graph::WeightedGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeTriple {
    pub source: char,
    pub destination: char,
    pub weight: u32,
    /// Location of the triple in its source text, when it came from a file
    pub span: Option<SourceSpan>,
}

impl EdgeTriple {
    pub fn new(source: char, destination: char, weight: u32) -> Self {
        Self {
            source,
            destination,
            weight,
            span: None,
        }
    }
}

impl fmt::Display for EdgeTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.source, self.destination, self.weight)
    }
}
