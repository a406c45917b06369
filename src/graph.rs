//! Superpixel adjacency graph.
//!
//! Nodes are superpixels (node weight = superpixel index, node `i` is always
//! superpixel `i`); an undirected edge joins two superpixels that share at
//! least one 4-neighbor pixel pair, weighted by the number of such pairs.
use crate::image::ImageView;
use crate::segmentation::Segmentation;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
pub struct SuperpixelGraph {
    graph: UnGraph<u32, u32>,
}

impl SuperpixelGraph {
    /// Graph with `n` isolated superpixel nodes.
    pub fn with_nodes(n: usize) -> Self {
        let mut graph = UnGraph::with_capacity(n, 0);
        for i in 0..n {
            graph.add_node(i as u32);
        }
        Self { graph }
    }

    /// Scan right and down neighbors of every assigned pixel and connect
    /// differing superpixels. Unassigned pixels never produce edges.
    pub fn from_segmentation<T>(seg: &Segmentation<T>) -> Self {
        let mut shared: HashMap<(u32, u32), u32> = HashMap::new();
        let indices = &seg.indices;
        let (w, h) = (indices.width(), indices.height());
        for y in 0..h {
            let row = indices.row(y);
            let next = (y + 1 < h).then(|| indices.row(y + 1));
            for x in 0..w {
                let a = row[x];
                if a < 0 {
                    continue;
                }
                let right = (x + 1 < w).then(|| row[x + 1]);
                let down = next.map(|r| r[x]);
                for b in [right, down].into_iter().flatten() {
                    if b >= 0 && b != a {
                        let key = (a.min(b) as u32, a.max(b) as u32);
                        *shared.entry(key).or_insert(0) += 1;
                    }
                }
            }
        }

        let mut edges: Vec<_> = shared.into_iter().collect();
        edges.sort_unstable();
        let mut out = Self::with_nodes(seg.superpixels.len());
        for ((a, b), n) in edges {
            out.add_edge(a as usize, b as usize, n);
        }
        log::debug!(
            "SuperpixelGraph: {} superpixels, {} adjacencies",
            out.node_count(),
            out.edge_count()
        );
        out
    }

    /// Connect superpixels `a` and `b`; panics if either node is missing.
    pub fn add_edge(&mut self, a: usize, b: usize, shared_border: u32) {
        self.graph
            .update_edge(NodeIndex::new(a), NodeIndex::new(b), shared_border);
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Endpoint superpixel indices of every edge.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (self.graph[e.source()] as usize, self.graph[e.target()] as usize))
    }

    /// Number of 4-neighbor pixel pairs shared by `a` and `b`.
    pub fn shared_border(&self, a: usize, b: usize) -> Option<u32> {
        if a >= self.node_count() || b >= self.node_count() {
            return None;
        }
        self.graph
            .find_edge(NodeIndex::new(a), NodeIndex::new(b))
            .map(|e| self.graph[e])
    }

    /// Indices of superpixels adjacent to `a`.
    pub fn neighbors(&self, a: usize) -> Vec<usize> {
        if a >= self.node_count() {
            return Vec::new();
        }
        let mut out: Vec<usize> = self
            .graph
            .neighbors(NodeIndex::new(a))
            .map(|n| self.graph[n] as usize)
            .collect();
        out.sort_unstable();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{ImageF32, IndexImage};
    use crate::segmentation::{Superpixel, WeightedAttribute, UNASSIGNED};

    fn segmentation(indices: IndexImage, n: usize) -> Segmentation<f32> {
        let weights = ImageF32::filled(indices.w, indices.h, 1.0);
        Segmentation {
            superpixels: vec![Superpixel::from_attribute(WeightedAttribute::zero()); n],
            indices,
            weights,
        }
    }

    #[test]
    fn vertical_split_has_one_edge() {
        let seg = segmentation(IndexImage::from_fn(4, 4, |x, _| (x >= 2) as i32), 2);
        let graph = SuperpixelGraph::from_segmentation(&seg);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, 1)]);
        assert_eq!(graph.shared_border(1, 0), Some(4));
        assert_eq!(graph.neighbors(0), vec![1]);
    }

    #[test]
    fn quadrants_connect_only_four_neighbors() {
        let seg = segmentation(
            IndexImage::from_fn(4, 4, |x, y| ((y >= 2) as i32) * 2 + (x >= 2) as i32),
            4,
        );
        let graph = SuperpixelGraph::from_segmentation(&seg);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.shared_border(0, 3), None);
        assert_eq!(graph.shared_border(1, 2), None);
        assert_eq!(graph.neighbors(3), vec![1, 2]);
    }

    #[test]
    fn unassigned_pixels_break_adjacency() {
        let seg = segmentation(
            IndexImage::from_fn(3, 2, |x, _| match x {
                0 => 0,
                1 => UNASSIGNED,
                _ => 1,
            }),
            2,
        );
        let graph = SuperpixelGraph::from_segmentation(&seg);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn out_of_range_queries_are_empty() {
        let graph = SuperpixelGraph::with_nodes(2);
        assert_eq!(graph.shared_border(0, 7), None);
        assert!(graph.neighbors(9).is_empty());
    }
}
