//! Render-hash helpers for regression tests.
//!
//! A run is reduced to one SHA-256 per frame of the rendered RGBA buffer, so two runs can be
//! compared (or pinned) without storing images.

use sha2::{Digest, Sha256};

use crate::graphics::Renderer2d;
use crate::surface::{RgbaBufferSurface, Surface, SurfaceSize};
use crate::{GameLogic, HeadlessRunner};

pub fn rgba_sha256_hex(rgba: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(rgba);
    hex::encode(hasher.finalize())
}

/// Steps `runner` through `inputs`, rendering after every step, and returns one hash per frame.
///
/// The buffer is not cleared between frames; `render` decides what a frame contains.
pub fn render_hashes<G, I, R>(
    runner: &mut HeadlessRunner<G>,
    size: SurfaceSize,
    inputs: I,
    mut render: R,
) -> Vec<String>
where
    G: GameLogic,
    I: IntoIterator<Item = G::Input>,
    R: FnMut(&G::State, &mut dyn Renderer2d),
{
    let mut surface = RgbaBufferSurface::new(size);
    let mut hashes = Vec::new();
    for input in inputs {
        runner.step(input);
        {
            let mut gfx = surface.renderer();
            gfx.begin_frame(size);
            render(runner.state(), &mut gfx);
        }
        hashes.push(rgba_sha256_hex(surface.frame()));
    }
    hashes
}

/// Runs the same input script twice from `make_runner()` and reports the first frame whose
/// render hash differs, if any.
pub fn first_replay_divergence<G, F, R>(
    mut make_runner: F,
    size: SurfaceSize,
    inputs: &[G::Input],
    mut render: R,
) -> Option<usize>
where
    G: GameLogic,
    G::Input: Clone,
    F: FnMut() -> HeadlessRunner<G>,
    R: FnMut(&G::State, &mut dyn Renderer2d),
{
    let live = render_hashes(&mut make_runner(), size, inputs.iter().cloned(), &mut render);
    let replay = render_hashes(&mut make_runner(), size, inputs.iter().cloned(), &mut render);
    live.iter().zip(replay.iter()).position(|(a, b)| a != b)
}
