use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};

use crate::{EdgeLabel, UnGraph, error::InputError};

/// Reads a graph from a file.
///
/// Undirected graph input:
/// - one line, one edge in format "u,v",
/// - by convention start numbering from 0 and go up to |V|-1.
///
/// A node index must be below twice the number of edges, otherwise the input is rejected
/// with [`InputError::NodeOutOfRange`] instead of allocating every node up to it.
///
/// Node `i` of the result is the node `i` of the input and edges keep the order of the lines.
///
/// <div class="warning">
///
/// > The decomposition needs a simple biconnected graph,
/// > [`try_get_triconnected_components`](crate::triconnected::try_get_triconnected_components) checks it.
///
/// </div>
///
/// Example input:
/// ```text
/// 0,1
/// 1,2
/// 2,3
/// 3,0
/// 0,2
/// ```
pub fn from_file(path: &str) -> Result<UnGraph, InputError> {
    let file = File::open(path)?;
    parse_graph_from_custom_format(BufReader::new(file))
}

/// This is equivalent to [`from_file`], but takes string as an input.
pub fn from_str(input: &str) -> Result<UnGraph, InputError> {
    parse_graph_from_custom_format(BufReader::new(Cursor::new(input)))
}

fn parse_node(text: &str, line: usize) -> Result<usize, InputError> {
    text.trim().parse().map_err(|_| InputError::NodeIndex {
        line,
        text: text.to_string(),
    })
}

fn parse_graph_from_custom_format<R: BufRead>(reader: R) -> Result<UnGraph, InputError> {
    let mut edges = Vec::new();
    let mut node_count = 0;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some((u, v)) = line.split_once(',') else {
            return Err(InputError::Format {
                line: i + 1,
                text: line.to_string(),
            });
        };
        let (u, v) = (parse_node(u, i + 1)?, parse_node(v, i + 1)?);
        edges.push((u, v, i + 1));
    }

    let limit = 2 * edges.len();
    for &(u, v, line) in &edges {
        let index = u.max(v);
        if index >= limit {
            return Err(InputError::NodeOutOfRange { line, index, limit });
        }
        node_count = node_count.max(index + 1);
    }

    let mut graph = UnGraph::new_undirected();
    let nodes: Vec<_> = (0..node_count).map(|i| graph.add_node(i as u32)).collect();
    for (u, v, _) in edges {
        graph.add_edge(nodes[u], nodes[v], EdgeLabel::Real);
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let input = "0,1\n1,2\n";
        let graph = from_str(input).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_blank_lines_and_spaces() {
        let graph = from_str("\n 0, 3 \n\n3,1\n").unwrap();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_malformed_lines() {
        assert!(matches!(
            from_str("0,1\n2\n"),
            Err(InputError::Format { line: 2, .. })
        ));
        assert!(matches!(
            from_str("0,x\n"),
            Err(InputError::NodeIndex { line: 1, .. })
        ));
        assert!(matches!(
            from_file("/nonexistent/graph.txt"),
            Err(InputError::Io(_))
        ));
    }

    #[test]
    fn test_huge_node_index() {
        assert!(matches!(
            from_str("0,1\n0,4000000\n"),
            Err(InputError::NodeOutOfRange {
                line: 2,
                index: 4000000,
                limit: 4
            })
        ));

        // two edges can touch four nodes at most
        let graph = from_str("0,1\n2,3\n").unwrap();
        assert_eq!(graph.node_count(), 4);
    }
}
