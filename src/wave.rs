// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Traveling-wave stimulus synthesis.
//!
//! A wave epoch sweeps a band of light of fixed angular width away from a
//! wave origin, across the whole dome. Origins are laid out on a
//! golden-angle spiral so that any number of epochs covers the sphere
//! near-uniformly. The synthesizer turns a sequence of epoch indices into
//! the boolean LED matrix the display plays back, one frame at a time.

use std::f64::consts::FRAC_PI_2;

use itertools::izip;
use log::warn;
use ndarray::{Array2, Array3, Axis};
use rayon::prelude::*;
use thiserror::Error;

use crate::constants::{GOLDEN_ANGLE, LEDS_PER_QUADRANT, NUM_LEDS, NUM_QUADRANTS};
use crate::dome;
use crate::pos::thetaphi::ThetaPhi;
use crate::pos::xyz::Xyz;
use crate::quaternion::Quaternion;

#[derive(Error, Debug)]
pub enum WaveError {
    #[error("the epoch sequence is empty; there is nothing to synthesize")]
    EmptyEpochSequence,

    #[error("{argument} must be positive, received {received}")]
    NonPositiveParameter {
        argument: &'static str,
        received: f64,
    },

    #[error("n_frame_epoch + n_frame_isi must be nonzero; a play cannot span zero frames")]
    ZeroFrameBlock,
}

/// Playback parameters of the wave stimulus. The defaults are the values
/// the dome is usually driven with.
#[derive(Clone, Copy, Debug)]
pub struct WaveParams {
    /// Angular width of the lit band \[radians\]
    pub wave_width: f64,
    /// Angular speed of the band \[radians/second\]
    pub wave_speed: f64,
    /// Number of frames each epoch lasts
    pub n_frame_epoch: usize,
    /// Number of dark frames after each epoch (inter-stimulus interval)
    pub n_frame_isi: usize,
    /// Frame rate of the display \[Hz\]
    pub frame_rate: f64,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            wave_width: 0.58,
            wave_speed: 0.58,
            n_frame_epoch: 640,
            n_frame_isi: 50,
            frame_rate: 100.0,
        }
    }
}

impl WaveParams {
    fn validate(&self) -> Result<(), WaveError> {
        for (argument, received) in [
            ("wave_width", self.wave_width),
            ("wave_speed", self.wave_speed),
            ("frame_rate", self.frame_rate),
        ] {
            if !(received > 0.0) {
                return Err(WaveError::NonPositiveParameter { argument, received });
            }
        }
        if self.n_frame_epoch + self.n_frame_isi == 0 {
            return Err(WaveError::ZeroFrameBlock);
        }
        Ok(())
    }

    /// How far the band front has travelled from the wave origin at frame
    /// `j` of an epoch \[radians\].
    fn wave_elevation(&self, frame: usize) -> f64 {
        frame as f64 * self.wave_speed / self.frame_rate
    }
}

/// The rotation that measures LED elevations relative to epoch `i`'s wave
/// origin: its axis lies in the equatorial plane at the epoch's golden-angle
/// azimuth, and it turns the origin onto the dome pole.
pub fn epoch_rotation(i: usize, n_epoch: usize) -> Quaternion {
    let k = i as f64 + 0.5;
    let axis = ThetaPhi::from_radians(FRAC_PI_2, GOLDEN_ANGLE * k);
    let angle = (1.0 - 2.0 * k / n_epoch as f64).acos();
    Quaternion::from_axis_angle(axis, angle)
}

/// The directions the waves appear to start from on the dome, placed on a
/// golden-angle spiral for near-uniform coverage of the sphere. The azimuth
/// carries the quarter-turn offset between a rotation axis and the pole it
/// displaces, so these are the origins as displayed.
pub fn wave_origins(n_epoch: usize) -> Vec<ThetaPhi> {
    (0..n_epoch)
        .map(|i| {
            let k = i as f64 + 0.5;
            ThetaPhi::from_radians(
                (1.0 - 2.0 * k / n_epoch as f64).acos(),
                GOLDEN_ANGLE * k + FRAC_PI_2,
            )
        })
        .collect()
}

/// The angular elevation of every LED relative to every epoch's wave
/// origin, shape `(n_epoch, 948)`. Elevation 0 is the origin itself, pi the
/// antipode.
pub fn led_elevations(n_epoch: usize) -> Array2<f64> {
    let directions: Vec<Xyz> = dome::led_directions()
        .into_iter()
        .map(ThetaPhi::to_xyz)
        .collect();

    let mut elevations = Array2::zeros((n_epoch, NUM_LEDS));
    elevations
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(i, mut row)| {
            let q = epoch_rotation(i, n_epoch);
            for (elevation, direction) in row.iter_mut().zip(&directions) {
                *elevation = q.rotate(*direction).z.clamp(-1.0, 1.0).acos();
            }
        });
    elevations
}

/// Build the boolean LED matrix of a wave stimulus, shape
/// `(n_plays * (n_frame_epoch + n_frame_isi), 4, 237)` with
/// `n_plays = epoch_sequence.len()`.
///
/// Each entry of `epoch_sequence` plays the wave from one origin (indices
/// may repeat; the number of distinct origins is the largest index + 1). At
/// frame `j` of a play, an LED is lit iff the band front has passed its
/// elevation but the band tail has not:
/// `wave_elevation(j) - wave_width < elevation < wave_elevation(j)`.
/// ISI frames stay dark.
pub fn build_wave_stimulus(
    epoch_sequence: &[usize],
    params: &WaveParams,
) -> Result<Array3<bool>, WaveError> {
    params.validate()?;
    let n_epoch = match epoch_sequence.iter().max() {
        Some(&max) => max + 1,
        None => return Err(WaveError::EmptyEpochSequence),
    };

    let elevations = led_elevations(n_epoch);

    let last_front = params.wave_elevation(params.n_frame_epoch.saturating_sub(1));
    let furthest = elevations.iter().copied().fold(0.0, f64::max);
    if last_front <= furthest {
        warn!(
            "the wave front stops at {last_front:.3} rad but the most distant LED sits at \
             {furthest:.3} rad; some LEDs never light up"
        );
    }

    let block = params.n_frame_epoch + params.n_frame_isi;
    let n_plays = epoch_sequence.len();
    let mut frames = Array3::from_elem((n_plays * block, NUM_QUADRANTS, LEDS_PER_QUADRANT), false);

    frames
        .axis_chunks_iter_mut(Axis(0), block)
        .into_par_iter()
        .zip(epoch_sequence.par_iter())
        .for_each(|(mut chunk, &epoch)| {
            let elevation = elevations.row(epoch);
            for (j, mut frame) in chunk
                .axis_iter_mut(Axis(0))
                .take(params.n_frame_epoch)
                .enumerate()
            {
                let front = params.wave_elevation(j);
                let tail = front - params.wave_width;
                // The (4, 237) frame iterates row-major, matching the flat
                // LED order of the elevation row.
                for (lit, &e) in izip!(frame.iter_mut(), elevation) {
                    *lit = tail < e && e < front;
                }
            }
        });

    Ok(frames)
}
