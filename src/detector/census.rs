use std::fmt;

use serde::Serialize;

use super::collection::CycleCollection;
use crate::constants::polygons::{PENTAGON_EDGES, QUADRILATERAL_EDGES, TRIANGLE_EDGES};

/// Shape of a cycle, named after its number of edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PolygonKind {
    Triangle,
    Quadrilateral,
    Pentagon,
    /// Any other edge count
    Polygon(usize),
}

impl PolygonKind {
    pub fn from_edge_count(edge_count: usize) -> Self {
        match edge_count {
            TRIANGLE_EDGES => Self::Triangle,
            QUADRILATERAL_EDGES => Self::Quadrilateral,
            PENTAGON_EDGES => Self::Pentagon,
            other => Self::Polygon(other),
        }
    }
}

impl fmt::Display for PolygonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolygonKind::Triangle => write!(f, "triangle"),
            PolygonKind::Quadrilateral => write!(f, "quadrilateral"),
            PolygonKind::Pentagon => write!(f, "pentagon"),
            PolygonKind::Polygon(edges) => write!(f, "{edges}-gon"),
        }
    }
}

impl Serialize for PolygonKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Number of cycles per polygon bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PolygonCensus {
    pub triangles: usize,
    pub quadrilaterals: usize,
    pub pentagons: usize,
    /// Cycles with more than five edges
    pub larger: usize,
}

impl PolygonCensus {
    pub fn from_cycles(cycles: &CycleCollection) -> Self {
        let mut census = Self::default();
        for cycle in cycles {
            match cycle.kind() {
                PolygonKind::Triangle => census.triangles += 1,
                PolygonKind::Quadrilateral => census.quadrilaterals += 1,
                PolygonKind::Pentagon => census.pentagons += 1,
                PolygonKind::Polygon(_) => census.larger += 1,
            }
        }
        census
    }

    pub fn total(&self) -> usize {
        self.triangles + self.quadrilaterals + self.pentagons + self.larger
    }
}
