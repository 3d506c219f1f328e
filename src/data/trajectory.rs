//! Synthetic vital-sign trajectory generation.
//!
//! Each channel is drawn independently from a mode-specific normal baseline.
//! For the deteriorating modes a linear ramp is added elementwise to a suffix
//! of the already-sampled noise, so the result is "baseline Gaussian noise
//! plus a deterministic trend", never a clean trend.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::{ChannelStats, ScenarioMode, Trajectory, TrajectoryStats, VitalSample};
use crate::error::{AppError, ErrorKind};

/// Baseline distribution and ramp magnitude for one channel in one mode.
///
/// `ramp` is the total drift reached at the final hour (signed: negative for
/// channels that fall as the patient deteriorates).
#[derive(Debug, Clone, Copy)]
struct ChannelProfile {
    mean: f64,
    sd: f64,
    ramp: f64,
}

/// Per-mode channel profiles, in fixed field order
/// {heart_rate, systolic_bp, spo2, temperature}.
///
/// Stable baselines are (78, 125, 98, 36.8); the deteriorating modes run a
/// little hotter and noisier, the way a less-controlled ward course would.
/// Only `severe` ramps temperature.
fn channel_profiles(mode: ScenarioMode) -> [ChannelProfile; 4] {
    match mode {
        ScenarioMode::Stable => [
            ChannelProfile { mean: 78.0, sd: 5.0, ramp: 0.0 },
            ChannelProfile { mean: 125.0, sd: 8.0, ramp: 0.0 },
            ChannelProfile { mean: 98.0, sd: 0.8, ramp: 0.0 },
            ChannelProfile { mean: 36.8, sd: 0.25, ramp: 0.0 },
        ],
        ScenarioMode::Early => [
            ChannelProfile { mean: 80.0, sd: 6.0, ramp: 18.0 },
            ChannelProfile { mean: 123.0, sd: 9.0, ramp: -20.0 },
            ChannelProfile { mean: 97.5, sd: 1.0, ramp: -4.0 },
            ChannelProfile { mean: 36.9, sd: 0.3, ramp: 0.0 },
        ],
        ScenarioMode::Severe => [
            ChannelProfile { mean: 82.0, sd: 6.0, ramp: 38.0 },
            ChannelProfile { mean: 122.0, sd: 9.0, ramp: -30.0 },
            ChannelProfile { mean: 97.0, sd: 1.0, ramp: -9.0 },
            ChannelProfile { mean: 37.0, sd: 0.3, ramp: 2.2 },
        ],
    }
}

/// Generate a synthetic trajectory of `hours` samples.
///
/// When `seed` is supplied the output is bit-reproducible for identical
/// `(hours, mode, seed)`; otherwise each call draws a fresh random course.
pub fn generate_trajectory(
    hours: u32,
    mode: ScenarioMode,
    seed: Option<u64>,
) -> Result<Trajectory, AppError> {
    if hours == 0 {
        return Err(AppError::new(
            ErrorKind::InvalidArgument,
            "Trajectory duration must be > 0 hours.",
        ));
    }
    if let Some(offset) = mode.ramp_offset() {
        if hours <= offset {
            return Err(AppError::new(
                ErrorKind::InvalidArgument,
                format!(
                    "Duration {hours}h is too short for the '{}' scenario (ramp starts at hour {offset}).",
                    mode.display_name()
                ),
            ));
        }
    }

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| AppError::new(ErrorKind::Numeric, format!("Noise distribution error: {e}")))?;

    let profiles = channel_profiles(mode);

    // Draw baselines hour-by-hour, channels in fixed field order, so the
    // random stream layout is part of the reproducibility contract.
    let mut samples = Vec::with_capacity(hours as usize);
    for hour in 0..hours {
        let mut values = [0.0f64; 4];
        for (value, profile) in values.iter_mut().zip(profiles.iter()) {
            let z: f64 = normal.sample(&mut rng);
            *value = profile.mean + profile.sd * z;
        }
        samples.push(VitalSample {
            hour,
            heart_rate: values[0],
            systolic_bp: values[1],
            spo2: values[2],
            temperature: values[3],
        });
    }

    if let Some(offset) = mode.ramp_offset() {
        apply_ramp(&mut samples, offset, &profiles);
    }

    let stats = compute_stats(&samples).ok_or_else(|| {
        AppError::new(ErrorKind::Numeric, "Failed to compute trajectory stats.")
    })?;

    Ok(Trajectory { mode, samples, stats })
}

/// Add the linear deterioration trend to the suffix starting at `offset`.
///
/// The trend runs from 0 at the ramp start to the full magnitude at the final
/// hour, matching `linspace(0, ramp, hours - offset)` semantics.
fn apply_ramp(samples: &mut [VitalSample], offset: u32, profiles: &[ChannelProfile; 4]) {
    let n_suffix = samples.len() - offset as usize;
    for (j, sample) in samples[offset as usize..].iter_mut().enumerate() {
        let frac = if n_suffix == 1 {
            1.0
        } else {
            j as f64 / (n_suffix - 1) as f64
        };
        sample.heart_rate += profiles[0].ramp * frac;
        sample.systolic_bp += profiles[1].ramp * frac;
        sample.spo2 += profiles[2].ramp * frac;
        sample.temperature += profiles[3].ramp * frac;
    }
}

fn compute_stats(samples: &[VitalSample]) -> Option<TrajectoryStats> {
    let mut channels = [ChannelStats { min: f64::INFINITY, max: f64::NEG_INFINITY, mean: 0.0 }; 4];

    for s in samples {
        for (stats, value) in channels.iter_mut().zip(s.features()) {
            stats.min = stats.min.min(value);
            stats.max = stats.max.max(value);
            stats.mean += value;
        }
    }
    for stats in channels.iter_mut() {
        stats.mean /= samples.len() as f64;
        if !(stats.min.is_finite() && stats.max.is_finite() && stats.mean.is_finite()) {
            return None;
        }
    }

    Some(TrajectoryStats {
        n_samples: samples.len(),
        heart_rate: channels[0],
        systolic_bp: channels[1],
        spo2: channels[2],
        temperature: channels[3],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VitalField;

    fn channel_mean(samples: &[VitalSample], field: VitalField) -> f64 {
        let sum: f64 = samples
            .iter()
            .map(|s| match field {
                VitalField::HeartRate => s.heart_rate,
                VitalField::SystolicBp => s.systolic_bp,
                VitalField::Spo2 => s.spo2,
                VitalField::Temperature => s.temperature,
            })
            .sum();
        sum / samples.len() as f64
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = generate_trajectory(48, ScenarioMode::Severe, Some(7)).unwrap();
        let b = generate_trajectory(48, ScenarioMode::Severe, Some(7)).unwrap();
        assert_eq!(a.samples, b.samples);

        let c = generate_trajectory(48, ScenarioMode::Severe, Some(8)).unwrap();
        assert_ne!(a.samples, c.samples, "Different seeds should differ");
    }

    #[test]
    fn hours_are_contiguous_from_zero() {
        let traj = generate_trajectory(30, ScenarioMode::Stable, Some(1)).unwrap();
        assert_eq!(traj.samples.len(), 30);
        assert_eq!(traj.hours(), 30);
        for (i, s) in traj.samples.iter().enumerate() {
            assert_eq!(s.hour, i as u32);
        }
    }

    #[test]
    fn invalid_durations_are_rejected() {
        let err = generate_trajectory(0, ScenarioMode::Stable, Some(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        // Ramp offset must leave at least one ramped sample.
        assert!(generate_trajectory(20, ScenarioMode::Severe, Some(1)).is_err());
        assert!(generate_trajectory(28, ScenarioMode::Early, Some(1)).is_err());
        assert!(generate_trajectory(21, ScenarioMode::Severe, Some(1)).is_ok());
        assert!(generate_trajectory(29, ScenarioMode::Early, Some(1)).is_ok());
    }

    #[test]
    fn stable_means_converge_to_baseline() {
        let mut sums = [0.0f64; 4];
        let n_seeds = 200u64;
        for seed in 0..n_seeds {
            let traj = generate_trajectory(48, ScenarioMode::Stable, Some(seed)).unwrap();
            sums[0] += traj.stats.heart_rate.mean;
            sums[1] += traj.stats.systolic_bp.mean;
            sums[2] += traj.stats.spo2.mean;
            sums[3] += traj.stats.temperature.mean;
        }
        let means: Vec<f64> = sums.iter().map(|s| s / n_seeds as f64).collect();

        // Sampling tolerance: the standard error over 200 * 48 draws is tiny
        // relative to these bounds.
        assert!((means[0] - 78.0).abs() < 0.5, "heart_rate mean {}", means[0]);
        assert!((means[1] - 125.0).abs() < 0.8, "systolic_bp mean {}", means[1]);
        assert!((means[2] - 98.0).abs() < 0.1, "spo2 mean {}", means[2]);
        assert!((means[3] - 36.8).abs() < 0.05, "temperature mean {}", means[3]);
    }

    #[test]
    fn ramped_modes_drift_in_the_expected_direction() {
        for mode in [ScenarioMode::Early, ScenarioMode::Severe] {
            let offset = mode.ramp_offset().unwrap() as usize;
            for seed in 0..20u64 {
                let traj = generate_trajectory(48, mode, Some(seed)).unwrap();
                let prefix = &traj.samples[..offset];
                let suffix = &traj.samples[offset..];

                assert!(
                    channel_mean(suffix, VitalField::HeartRate)
                        > channel_mean(prefix, VitalField::HeartRate),
                    "{mode:?} seed {seed}: heart rate should rise"
                );
                assert!(
                    channel_mean(suffix, VitalField::SystolicBp)
                        < channel_mean(prefix, VitalField::SystolicBp),
                    "{mode:?} seed {seed}: systolic BP should fall"
                );
                assert!(
                    channel_mean(suffix, VitalField::Spo2)
                        < channel_mean(prefix, VitalField::Spo2),
                    "{mode:?} seed {seed}: SpO2 should fall"
                );
                if mode == ScenarioMode::Severe {
                    assert!(
                        channel_mean(suffix, VitalField::Temperature)
                            > channel_mean(prefix, VitalField::Temperature),
                        "severe seed {seed}: temperature should rise"
                    );
                }
            }
        }
    }

    #[test]
    fn stable_mode_has_no_trend_applied() {
        // With a fixed seed, stable output equals raw baseline noise: every
        // value stays within a plausible band around its baseline.
        let traj = generate_trajectory(48, ScenarioMode::Stable, Some(3)).unwrap();
        for s in &traj.samples {
            assert!((s.heart_rate - 78.0).abs() < 30.0);
            assert!((s.systolic_bp - 125.0).abs() < 48.0);
            assert!((s.spo2 - 98.0).abs() < 5.0);
            assert!((s.temperature - 36.8).abs() < 1.5);
        }
    }
}
