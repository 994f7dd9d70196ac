//! Human renderer for one-shot CLI outputs.
//!
//! This module is pure formatting; handlers gather any extra data needed.
//! The interactive parity session renders its own transcript.

use crate::core::{Checksum, ChecksumTrace, RouteTable, VerifyReport};

pub fn render_checksum(data: &str, trace: &ChecksumTrace, with_steps: bool) -> String {
    let mut out = String::new();
    if with_steps {
        for step in &trace.steps {
            out.push_str(step);
            out.push('\n');
        }
        out.push('\n');
    }
    out.push_str(&format!("Checksum of {data:?}: 0x{}", trace.checksum));
    out
}

pub fn render_verify(received: Checksum, report: &VerifyReport) -> String {
    if report.valid {
        format!("✅ {} (checksum 0x{received} matches)", report.status)
    } else {
        format!("❌ {} (checksum 0x{received} does not match)", report.status)
    }
}

pub fn render_route(table: &RouteTable, with_trace: bool) -> String {
    let mut out = String::new();

    if with_trace {
        for snap in &table.snapshots {
            out.push_str(&format!("Iteration {}:\n", snap.iteration));
            for (node, hop) in &snap.dists {
                out.push_str(&format!("  {node}: {}\n", fmt_hop_dist(hop.dist)));
            }
        }
        out.push('\n');
    }

    out.push_str(&format!("📡 Routes from {}:\n", table.source));
    for node in &table.nodes {
        let hop = &table.distances[node];
        let path = table
            .path_to(node)
            .map(|p| p.join(" → "))
            .unwrap_or_else(|| "unreachable".into());
        out.push_str(&format!(
            "  {node}: {} via {path}\n",
            fmt_hop_dist(hop.dist)
        ));
    }

    if table.has_negative_cycle {
        out.push_str("⚠️ Negative cycle detected: distances are not stable.\n");
    }

    out.trim_end().into()
}

fn fmt_hop_dist(dist: Option<i64>) -> String {
    match dist {
        Some(d) => format!("cost {d}"),
        None => "∞".into(),
    }
}
