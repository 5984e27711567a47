//! Connect command handler for paths through an affinity graph.
//!
//! The membership file lists `entity<TAB>label` rows. Entities sharing labels
//! are linked, and the cheapest chain between two entities is reported.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use campus_paths_lib::{build_graph, read_memberships, shortest_path, Distance, Graph};

use crate::output::{write_json, OutputFormat};

/// A single hop between two entities.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ConnectionStep {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// Result of a connect query. `steps` is `None` when no chain exists.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ConnectionSummary {
    pub from: String,
    pub to: String,
    pub steps: Option<Vec<ConnectionStep>>,
    pub total_cost: Option<f64>,
}

impl ConnectionSummary {
    pub fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "path from {} to {}:", self.from, self.to);
        match &self.steps {
            None => {
                let _ = writeln!(buffer, "no path found");
            }
            Some(steps) => {
                for step in steps {
                    let _ = writeln!(
                        buffer,
                        "{} to {} with weight {:.3}",
                        step.from, step.to, step.weight
                    );
                }
                let _ = writeln!(buffer, "total cost: {:.3}", self.total_cost.unwrap_or(0.0));
            }
        }
        buffer
    }
}

/// Handle the connect subcommand.
pub fn handle_connect(data: &Path, from: &str, to: &str, format: OutputFormat) -> Result<()> {
    let memberships = read_memberships(data)
        .with_context(|| format!("failed to read memberships from {}", data.display()))?;
    let graph = build_graph(&memberships)?;
    let summary = summarize(&graph, from, to)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => out.write_all(summary.render_plain().as_bytes())?,
        OutputFormat::Json => write_json(&mut out, &summary)?,
    }
    Ok(())
}

/// Find the cheapest chain between two entities of an affinity graph.
pub fn summarize(graph: &Graph<String, Distance>, from: &str, to: &str) -> Result<ConnectionSummary> {
    for entity in [from, to] {
        if !graph.contains(&entity.to_string()) {
            bail!("unknown entity {entity}");
        }
    }

    let path = shortest_path(graph, &from.to_string(), &to.to_string())?;
    let steps = path.map(|edges| {
        let mut current = from.to_string();
        edges
            .iter()
            .map(|edge| ConnectionStep {
                from: std::mem::replace(&mut current, edge.target().clone()),
                to: edge.target().clone(),
                weight: edge.weight().value(),
            })
            .collect::<Vec<_>>()
    });
    let total_cost = steps
        .as_ref()
        .map(|steps| steps.iter().map(|step| step.weight).sum());

    Ok(ConnectionSummary {
        from: from.to_string(),
        to: to.to_string(),
        steps,
        total_cost,
    })
}
