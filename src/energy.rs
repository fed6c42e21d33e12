use crate::{EnergyPoint, SensorFrame};

fn elapsed_hours(a: &SensorFrame, b: &SensorFrame) -> f64 {
    let dt = b.instant.signed_duration_since(a.instant);
    dt.num_milliseconds() as f64 / 3_600_000.0
}

fn trapezoid(a: &SensorFrame, b: &SensorFrame) -> f64 {
    elapsed_hours(a, b) * 0.5 * (a.mean_intensity() + b.mean_intensity())
}

/// Proxy energy over a sequence of frames: trapezoidal integration of the
/// per-frame mean intensity over elapsed hours, times `scale`.
///
/// The result is in arbitrary units, meant for relative day-to-day
/// comparison, not calibrated Watt-hours. Fewer than two frames integrate to
/// 0.0. Frames are integrated in the order given; out-of-order input is not
/// reordered and the negative intervals it produces are the caller's problem.
/// Duplicate timestamps contribute a zero-width trapezoid.
pub fn proxy_energy(frames: &[SensorFrame], scale: f64) -> f64 {
    if frames.len() < 2 {
        return 0.0;
    }
    let total: f64 = frames.windows(2).map(|w| trapezoid(&w[0], &w[1])).sum();
    total * scale
}

/// Per-row energy series for live charting: for each frame, the scaled
/// trapezoid increment of the interval ending there (0.0 for the first
/// frame) and the running total. The final running total equals
/// `proxy_energy` of the same input.
pub fn energy_series(frames: &[SensorFrame], scale: f64) -> Vec<EnergyPoint> {
    let mut series = Vec::with_capacity(frames.len());
    let mut cumulative = 0.0;

    for (i, frame) in frames.iter().enumerate() {
        let instantaneous = if i == 0 {
            0.0
        } else {
            scale * trapezoid(&frames[i - 1], frame)
        };
        cumulative += instantaneous;
        series.push(EnergyPoint {
            instant: frame.instant,
            instantaneous,
            cumulative,
        });
    }

    series
}
