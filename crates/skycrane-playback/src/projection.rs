//! Mapping simulation-field coordinates onto a render viewport.
//!
//! The simulation field spans `[0, 6999] × [0, 2999]` metres; a viewport
//! centers it on the origin and scales it to the host's render size. The
//! terrain polyline becomes a triangle strip down to the field's baseline,
//! with UVs normalized to the field extent.

use skycrane_core::{FPoint, IPoint};

/// Offset that centers normalized field coordinates on the origin.
const CENTER: FPoint = FPoint { x: -0.5, y: -0.5 };

/// A render target's world-space size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Width and height of the render area, in render units.
    pub size: FPoint,
}

impl Viewport {
    /// Create a viewport of the given render size.
    pub fn new(size: FPoint) -> Self {
        Self { size }
    }

    /// Map a field-coordinate point to centered render coordinates.
    pub fn project(&self, field: FPoint, p: FPoint) -> FPoint {
        self.size * (p / field + CENTER)
    }
}

/// Triangle-strip geometry for the terrain polyline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SurfaceStrip {
    /// Strip vertices in render coordinates, two per surface point
    /// (baseline first, then the surface point).
    pub vertices: Vec<FPoint>,
    /// Texture coordinates normalized to the field extent.
    pub uvs: Vec<FPoint>,
    /// Triangle indices into [`vertices`](Self::vertices).
    pub indices: Vec<u32>,
}

/// Build the terrain strip for `points` over a field of extent `field`.
///
/// Returns an empty strip for fewer than two points — there is no surface
/// to span.
pub fn surface_strip(viewport: &Viewport, field: FPoint, points: &[IPoint]) -> SurfaceStrip {
    if points.len() < 2 {
        return SurfaceStrip::default();
    }

    let mut uvs = Vec::with_capacity(points.len() * 2);
    for p in points {
        let at = p.to_f() / field;
        uvs.push(FPoint::new(at.x, 0.0));
        uvs.push(at);
    }

    let vertices: Vec<FPoint> = uvs.iter().map(|&uv| viewport.size * (uv + CENTER)).collect();

    let quads = (vertices.len() - 2) / 2;
    let mut indices = Vec::with_capacity(quads * 6);
    for q in 0..quads {
        let i = (q * 2) as u32;
        indices.extend_from_slice(&[i, i + 1, i + 2, i + 1, i + 3, i + 2]);
    }

    SurfaceStrip {
        vertices,
        uvs,
        indices,
    }
}
