//! 命令处理
//!
//! 对已加载的棋盘执行一条查询命令并返回可打印的文本

use super::printer::Printer;
use crate::algorithm::degree_sequence::is_graphic;
use crate::algorithm::{
    ConnectivityAnalyzer, IsomorphismChecker, PathFinder, PathResult, StructuralClassifier,
};
use crate::error::{Error, Result};
use crate::graph::{Multigraph, VertexId};
use crate::import::{BoardFormat, BoardImporter};
use clap::Subcommand;
use std::path::PathBuf;

/// 查询命令
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// 结构摘要：规模、连通性与分类
    Summary,
    /// 两座城市之间的最短路径
    Path {
        from: u64,
        to: u64,
        /// 忽略路线长度，每条边权重为 1
        #[arg(long)]
        unweighted: bool,
    },
    /// 依次经过多个城市的路线
    Route {
        #[arg(required = true, num_args = 2..)]
        waypoints: Vec<u64>,
    },
    /// 所有无重复城市的路径
    SimplePaths {
        from: u64,
        to: u64,
        #[arg(long, default_value = "6")]
        max_depth: usize,
    },
    /// 所有连通类
    Components,
    /// 所有桥（删除后会断开棋盘的路线）
    Bridges,
    /// 与另一个棋盘比较是否同构
    Isomorphic {
        other: PathBuf,
        #[arg(long, value_enum)]
        format: Option<BoardFormat>,
    },
}

fn yes_no(value: bool) -> String {
    let text = if value { "yes" } else { "no" };
    text.to_string()
}

fn join(vertices: &[VertexId]) -> String {
    vertices
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn require_vertex(graph: &Multigraph, id: u64) -> Result<VertexId> {
    let v = VertexId::new(id);
    if graph.contains_vertex(v) {
        Ok(v)
    } else {
        Err(Error::VertexNotFound(v))
    }
}

fn path_rows(paths: &[PathResult]) -> Vec<Vec<String>> {
    paths
        .iter()
        .map(|p| {
            vec![
                join(&p.vertices),
                p.length.to_string(),
                p.total_weight.to_string(),
            ]
        })
        .collect()
}

/// 执行命令
pub fn execute(command: &Command, graph: &Multigraph, printer: &Printer) -> Result<String> {
    let finder = PathFinder::new(graph);
    let connectivity = ConnectivityAnalyzer::new(graph);

    let output = match command {
        Command::Summary => {
            let classifier = StructuralClassifier::new(graph);
            printer.print_summary(&[
                ("Vertex Count", graph.vertex_count().to_string()),
                ("Edge Count", graph.edge_count().to_string()),
                ("Max Degree", graph.max_degree().to_string()),
                ("Components", connectivity.class_count().to_string()),
                ("Connected", yes_no(connectivity.is_connected())),
                ("Simple", yes_no(classifier.is_simple())),
                ("Complete", yes_no(classifier.is_complete())),
                ("Chain", yes_no(classifier.is_chain())),
                ("Cycle", yes_no(classifier.is_cycle())),
                ("Forest", yes_no(classifier.is_forest())),
                ("Tree", yes_no(classifier.is_tree())),
                ("Graphic Degrees", yes_no(is_graphic(&graph.degree_sequence()))),
            ])
        }
        Command::Path {
            from,
            to,
            unweighted,
        } => {
            let from = require_vertex(graph, *from)?;
            let to = require_vertex(graph, *to)?;
            let path = finder.shortest_path_result(from, to, !unweighted);
            if path.is_empty() {
                printer.print_result(&["path", "edges", "weight"], &[])
            } else {
                printer.print_result(&["path", "edges", "weight"], &path_rows(&[path]))
            }
        }
        Command::Route { waypoints } => {
            let waypoints = waypoints
                .iter()
                .map(|id| require_vertex(graph, *id))
                .collect::<Result<Vec<_>>>()?;
            let route = finder.stitch_waypoints(&waypoints);
            let rows = match finder.path_weight(&route, true) {
                Some(weight) if !route.is_empty() => vec![vec![
                    join(&route),
                    (route.len() - 1).to_string(),
                    weight.to_string(),
                ]],
                _ => Vec::new(),
            };
            printer.print_result(&["route", "edges", "weight"], &rows)
        }
        Command::SimplePaths {
            from,
            to,
            max_depth,
        } => {
            let from = require_vertex(graph, *from)?;
            let to = require_vertex(graph, *to)?;
            let mut paths = finder.simple_paths(from, to, *max_depth);
            paths.sort_by_key(|p| (p.total_weight, p.length));
            printer.print_result(&["path", "edges", "weight"], &path_rows(&paths))
        }
        Command::Components => {
            let rows: Vec<Vec<String>> = connectivity
                .all_connected_classes()
                .iter()
                .enumerate()
                .map(|(index, class)| {
                    let members: Vec<String> = class.iter().map(|v| v.to_string()).collect();
                    vec![
                        (index + 1).to_string(),
                        class.len().to_string(),
                        members.join(", "),
                    ]
                })
                .collect();
            printer.print_result(&["component", "size", "vertices"], &rows)
        }
        Command::Bridges => {
            let rows: Vec<Vec<String>> = connectivity
                .bridges()
                .iter()
                .map(|edge| {
                    vec![
                        edge.i().to_string(),
                        edge.j().to_string(),
                        edge.route().map(|r| r.name().to_string()).unwrap_or_default(),
                        edge.length().to_string(),
                    ]
                })
                .collect();
            printer.print_result(&["from", "to", "route", "length"], &rows)
        }
        Command::Isomorphic { other, format } => {
            let format = format.unwrap_or_else(|| BoardFormat::from_path(other));
            let (other_graph, _) = BoardImporter::new().import_file(other, format)?;
            let isomorphic = IsomorphismChecker::are_isomorphic(graph, &other_graph);
            printer.print_summary(&[
                ("Board", other.display().to_string()),
                ("Isomorphic", yes_no(isomorphic)),
            ])
        }
    };

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, Route};
    use std::io::Write;
    use std::sync::Arc;

    fn board() -> Multigraph {
        let v = VertexId::new;
        Multigraph::from_edges([
            Edge::with_route(v(0), v(1), Arc::new(Route::new("a", 2))),
            Edge::with_route(v(1), v(2), Arc::new(Route::new("b", 3))),
            Edge::new(v(2), v(3)),
        ])
    }

    #[test]
    fn test_summary() {
        let output = execute(&Command::Summary, &board(), &Printer::default()).unwrap();

        assert!(output.contains("Tree"));
        assert!(output.contains("yes"));
    }

    #[test]
    fn test_path_command() {
        let command = Command::Path {
            from: 0,
            to: 3,
            unweighted: false,
        };
        let output = execute(&command, &board(), &Printer::default()).unwrap();

        assert!(output.contains("0 -> 1 -> 2 -> 3"));
        assert!(output.contains("1 row(s) in set"));
    }

    #[test]
    fn test_path_command_unknown_vertex() {
        let command = Command::Path {
            from: 0,
            to: 42,
            unweighted: true,
        };
        let err = execute(&command, &board(), &Printer::default()).unwrap_err();

        assert!(matches!(err, Error::VertexNotFound(v) if v == VertexId::new(42)));
    }

    #[test]
    fn test_route_and_bridges() {
        let printer = Printer::default();
        let route = Command::Route {
            waypoints: vec![3, 0, 2],
        };
        let output = execute(&route, &board(), &printer).unwrap();
        assert!(output.contains("3 -> 2 -> 1 -> 0 -> 1 -> 2"));

        let bridges = execute(&Command::Bridges, &board(), &printer).unwrap();
        assert!(bridges.contains("3 row(s) in set"));
    }

    #[test]
    fn test_isomorphic_command() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "from,to,route,length\n7,8,,\n8,9,,\n9,6,,").unwrap();

        let command = Command::Isomorphic {
            other: file.path().to_path_buf(),
            format: None,
        };
        let output = execute(&command, &board(), &Printer::default()).unwrap();
        assert!(output.contains("yes"));
    }
}
