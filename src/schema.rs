use serde::Serialize;

/// Which sensor-column layout was recognized in a loaded log.
///
/// The acquisition side has shipped two incompatible header layouts over the
/// project's life; both are recognized by name, with a positional fallback
/// for headerless-in-spirit logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SchemaKind {
    /// `Time, TL, TR, BL, BR, ServoX, ServoY` — the quad-LDR tracker log.
    QuadTracker,
    /// `Timestamp, Left, Right, Servo, Energy_Wh` — the older two-LDR log.
    EnergyLog,
    /// Unrecognized header; columns 1 and 2 taken as the intensity pair.
    Positional,
}

/// The intensity columns selected for one load. Fixed for the lifetime of a
/// computation pass; a log must not mix layouts within one file.
#[derive(Debug, Clone)]
pub struct SensorColumns {
    pub kind: SchemaKind,
    pub names: Vec<String>,
    pub indices: Vec<usize>,
}

const KNOWN_PAIRS: [(SchemaKind, [&str; 2]); 2] = [
    (SchemaKind::QuadTracker, ["TL", "TR"]),
    (SchemaKind::EnergyLog, ["Left", "Right"]),
];

/// Picks the light-intensity columns from a header row.
///
/// Known named pairs are tried in priority order; otherwise any table with at
/// least three columns falls back to positions 1 and 2, on the assumption of
/// a `(time, sensorA, sensorB, ...)` layout. That assumption is unverified
/// for historical unlabeled logs and is kept as-is on purpose. Returns `None`
/// when no usable sensor columns exist; callers treat that as a zero/empty
/// result, not a failure.
pub fn select_sensor_columns(columns: &[String]) -> Option<SensorColumns> {
    for (kind, pair) in KNOWN_PAIRS {
        let indices: Option<Vec<usize>> = pair
            .iter()
            .map(|name| columns.iter().position(|c| c == name))
            .collect();
        if let Some(indices) = indices {
            return Some(SensorColumns {
                kind,
                names: pair.iter().map(|s| s.to_string()).collect(),
                indices,
            });
        }
    }

    if columns.len() >= 3 {
        return Some(SensorColumns {
            kind: SchemaKind::Positional,
            names: columns[1..3].to_vec(),
            indices: vec![1, 2],
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn recognizes_quad_tracker_header() {
        let sel = select_sensor_columns(&cols(&[
            "Time", "TL", "TR", "BL", "BR", "ServoX", "ServoY",
        ]))
        .unwrap();
        assert_eq!(sel.kind, SchemaKind::QuadTracker);
        assert_eq!(sel.names, vec!["TL", "TR"]);
        assert_eq!(sel.indices, vec![1, 2]);
    }

    #[test]
    fn recognizes_energy_log_header() {
        let sel = select_sensor_columns(&cols(&[
            "Timestamp", "Left", "Right", "Servo", "Energy_Wh",
        ]))
        .unwrap();
        assert_eq!(sel.kind, SchemaKind::EnergyLog);
        assert_eq!(sel.names, vec!["Left", "Right"]);
        assert_eq!(sel.indices, vec![1, 2]);
    }

    #[test]
    fn named_pair_wins_over_position() {
        // TL/TR recognized by name even when reordered
        let sel = select_sensor_columns(&cols(&["Time", "BL", "TL", "TR"])).unwrap();
        assert_eq!(sel.kind, SchemaKind::QuadTracker);
        assert_eq!(sel.indices, vec![2, 3]);
    }

    #[test]
    fn falls_back_to_positions_one_and_two() {
        let sel = select_sensor_columns(&cols(&["t", "a", "b"])).unwrap();
        assert_eq!(sel.kind, SchemaKind::Positional);
        assert_eq!(sel.names, vec!["a", "b"]);
        assert_eq!(sel.indices, vec![1, 2]);
    }

    #[test]
    fn partial_named_pair_does_not_match() {
        // TL without TR: falls through to positional
        let sel = select_sensor_columns(&cols(&["Time", "TL", "Servo"])).unwrap();
        assert_eq!(sel.kind, SchemaKind::Positional);
        assert_eq!(sel.names, vec!["TL", "Servo"]);
    }

    #[test]
    fn too_few_columns_is_unresolved() {
        assert!(select_sensor_columns(&cols(&["t"])).is_none());
        assert!(select_sensor_columns(&cols(&["t", "a"])).is_none());
        assert!(select_sensor_columns(&[]).is_none());
    }
}
