//! Shared helpers for the debug binaries: snapshot file loading and
//! report formatting.

use std::fmt::Write as _;
use std::path::Path;

use truco_core::GameIntel;
use truco_engine::DecisionSummary;

/// File format of a snapshot on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
}

impl SnapshotFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Some(SnapshotFormat::Json),
            Some("yaml") | Some("yml") => Some(SnapshotFormat::Yaml),
            _ => None,
        }
    }
}

/// Parses snapshot file contents in the given format.
pub fn parse_snapshot(contents: &str, format: SnapshotFormat) -> Result<GameIntel, String> {
    match format {
        SnapshotFormat::Json => {
            serde_json::from_str(contents).map_err(|e| format!("invalid JSON snapshot: {e}"))
        }
        SnapshotFormat::Yaml => {
            serde_yaml::from_str(contents).map_err(|e| format!("invalid YAML snapshot: {e}"))
        }
    }
}

/// Loads a snapshot from a .json/.yaml/.yml file.
pub fn load_snapshot(path: &Path) -> Result<GameIntel, String> {
    let format = SnapshotFormat::from_path(path)
        .ok_or_else(|| format!("unsupported snapshot extension: {}", path.display()))?;
    let contents =
        std::fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
    parse_snapshot(&contents, format)
}

/// Renders the snapshot and all four decisions as a plain-text report.
pub fn format_report(intel: &GameIntel, summary: &DecisionSummary) -> String {
    let mut out = String::new();
    let hand = intel
        .cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let _ = writeln!(out, "Vira: {}", intel.vira);
    let _ = writeln!(out, "Hand: {}", hand);
    match intel.opponent_card {
        Some(card) => {
            let _ = writeln!(out, "Opponent card: {}", card);
        }
        None => {
            let _ = writeln!(out, "Opponent card: -");
        }
    }
    let _ = writeln!(
        out,
        "Score: {} x {} ({} points at stake, round {})",
        intel.score,
        intel.opponent_score,
        intel.hand_points,
        intel.round_index() + 1
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Raise response:  {}", summary.raise_response);
    let _ = writeln!(out, "Mao de onze:     {}", summary.mao_de_onze);
    let _ = writeln!(out, "Requests raise:  {}", summary.requests_raise);
    let _ = writeln!(out, "Card to play:    {}", summary.card);
    out
}
