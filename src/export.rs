//! Board output formats.
//!
//! JSON lines (one board object per line) for machine consumers, and a
//! plain-text listing for reading in a terminal.

use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::Serialize;

use crate::board::Board;
use crate::eval::{evaluate_board, BoardReport};

/// A board with its fairness report attached under `"report"`.
#[derive(Serialize)]
struct ReportedBoard<'a> {
    #[serde(flatten)]
    board: &'a Board,
    report: BoardReport,
}

/// Writes boards as JSONL. With `with_report`, each object also carries a
/// `"report"` field.
pub fn write_jsonl<W: Write>(boards: &[Board], with_report: bool, out: &mut W) -> io::Result<()> {
    for board in boards {
        if with_report {
            let record = ReportedBoard {
                board,
                report: evaluate_board(board),
            };
            serde_json::to_writer(&mut *out, &record)?;
        } else {
            serde_json::to_writer(&mut *out, board)?;
        }
        writeln!(out)?;
    }
    out.flush()
}

/// Writes a board as text: one line per row of cells, then one per port.
///
/// Cells print as `terrain:number`, deserts as `desert:-`.
pub fn write_text<W: Write>(board: &Board, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "board {} ({} tiles, {} ports)",
        board.player_count,
        board.tiles.len(),
        board.ports.len()
    )?;

    let mut rows: BTreeMap<i32, Vec<String>> = BTreeMap::new();
    for tile in &board.tiles {
        let number = match tile.number {
            Some(n) => n.to_string(),
            None => "-".to_string(),
        };
        rows.entry(tile.r)
            .or_default()
            .push(format!("{}:{}", tile.terrain, number));
    }
    for (r, cells) in &rows {
        writeln!(out, "  r={:<2} {}", r, cells.join(" "))?;
    }

    for port in &board.ports {
        writeln!(
            out,
            "  port {:<2} ({},{}) facing {} {}",
            port.id,
            port.q,
            port.r,
            port.facing.index(),
            port.port_type.label()
        )?;
    }
    Ok(())
}

/// Writes a fairness report as text.
pub fn write_report_text<W: Write>(report: &BoardReport, out: &mut W) -> io::Result<()> {
    let n = &report.number_score;
    writeln!(out, "  terrain score {:.1}", report.terrain_score)?;
    writeln!(
        out,
        "  number score {:.1} (high adjacency {:.1}, duplicates {:.1}, high cap {:.1}, pip variance {:.2})",
        n.total(),
        n.high_adjacency,
        n.duplicate_adjacency,
        n.high_cap,
        n.pip_variance
    )?;
    for share in &report.shares {
        writeln!(
            out,
            "  {:<6} pips {:>2} high {}",
            share.terrain.id(),
            share.pips,
            share.high_tokens
        )?;
    }
    Ok(())
}
