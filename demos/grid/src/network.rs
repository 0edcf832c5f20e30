//! Synthetic downtown street grid.
//!
//! Intersections sit on a `rows × cols` lattice, `spacing` km apart.
//! Avenues (columns) are two-way.  Streets (rows) alternate: even rows are
//! two-way, odd rows are one-way eastbound.  Every fourth block is a winding
//! segment two and a half times longer than the straight line, so the
//! shortest route by length and the shortest by hop count usually differ.
//!
//! Every road is at least as long as the straight line between its ends, so
//! A* with Euclidean distance stays optimal on this map.

use anyhow::Result;

use rg_core::PlanePoint;
use rg_graph::RouteGraph;

const WINDING_FACTOR: f64 = 2.5;

/// Position of the intersection at `(row, col)`.
pub fn intersection(row: usize, col: usize, spacing: f64) -> PlanePoint {
    PlanePoint::new(col as f64 * spacing, row as f64 * spacing)
}

fn block_length(row: usize, col: usize, spacing: f64) -> f64 {
    if (row + col) % 4 == 0 { spacing * WINDING_FACTOR } else { spacing }
}

/// Build the grid described in the module docs.
pub fn build_grid(rows: usize, cols: usize, spacing: f64) -> Result<RouteGraph<PlanePoint>> {
    let mut g = RouteGraph::with_capacity(rows * cols);

    for row in 0..rows {
        for col in 0..cols {
            g.add_vertex(intersection(row, col, spacing));
        }
    }

    for row in 0..rows {
        for col in 0..cols {
            let here = intersection(row, col, spacing);
            let length = block_length(row, col, spacing);

            if col + 1 < cols {
                let street = format!("{} Street", ordinal(row + 1));
                let east = intersection(row, col + 1, spacing);
                g.add_edge(here, east, street.as_str(), length)?;
                if row % 2 == 0 {
                    g.add_edge(east, here, street, length)?;
                }
            }
            if row + 1 < rows {
                let avenue = format!("{} Avenue", ordinal(col + 1));
                let north = intersection(row + 1, col, spacing);
                g.add_edge(here, north, avenue.as_str(), length)?;
                g.add_edge(north, here, avenue, length)?;
            }
        }
    }

    Ok(g)
}

fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _)       => "st",
        (2, _)       => "nd",
        (3, _)       => "rd",
        _            => "th",
    };
    format!("{n}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_dimensions() {
        let g = build_grid(3, 4, 0.1).unwrap();
        assert_eq!(g.num_vertices(), 12);
        // Avenues: 4 cols × 2 blocks × 2 directions = 16.
        // Streets: rows 0 and 2 two-way (2 × 3 blocks × 2), row 1 one-way (3).
        assert_eq!(g.num_edges(), 16 + 12 + 3);
    }

    #[test]
    fn odd_rows_are_one_way() {
        let g = build_grid(2, 2, 1.0).unwrap();
        let west = intersection(1, 0, 1.0);
        let east = intersection(1, 1, 1.0);
        assert!(g.neighbors(&west).unwrap().any(|n| n == east));
        assert!(!g.neighbors(&east).unwrap().any(|n| n == west));
    }

    #[test]
    fn ordinals() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(22), "22nd");
    }
}
