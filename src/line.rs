use glam::Vec4;

/// Dot product over the R, G and B lanes only.
#[inline(always)]
pub(crate) fn dot3(a: Vec4, b: Vec4) -> f32 {
    a.truncate().dot(b.truncate())
}

/// Normalizes the RGB lanes of `v` and clears the alpha lane.
///
/// Zero-length inputs must be substituted by the caller before this runs.
#[inline(always)]
pub(crate) fn normalized3(v: Vec4) -> Vec4 {
    v.truncate().normalize().extend(0.0)
}

/// A line in RGB color space: origin `a` plus unit direction `b`.
///
/// The alpha lane of both vectors is zero.
#[derive(Copy, Clone)]
pub(crate) struct Line3 {
    pub a: Vec4,
    pub b: Vec4,
}

/// Precomputed projection form of a [`Line3`].
///
/// `amod` is the origin with its component along the direction removed and
/// the channel scaling folded in, `bs` the direction scaled by the channel
/// scale factors and `bis` the direction scaled by the inverse scale
/// factors. Projecting a color becomes one dot product and one
/// multiply-add.
#[derive(Copy, Clone)]
pub(crate) struct ProcessedLine3 {
    pub amod: Vec4,
    pub bs: Vec4,
    pub bis: Vec4,
}

impl ProcessedLine3 {
    pub(crate) fn new(line: Line3, csf: Vec4, icsf: Vec4) -> Self {
        Self {
            amod: (line.a - line.b * dot3(line.a, line.b)) * icsf,
            bs: line.b * csf,
            bis: line.b * icsf,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized3_returns_unit_direction_with_zero_alpha() {
        let v = normalized3(Vec4::new(3.0, 4.0, 0.0, 123.0));

        assert!((dot3(v, v) - 1.0).abs() < 1e-6);
        assert_eq!(v.w, 0.0);
        assert!((v.x - 0.6).abs() < 1e-6);
        assert!((v.y - 0.8).abs() < 1e-6);
    }

    #[test]
    fn processed_line_reconstructs_points_on_the_line() {
        let line = Line3 {
            a: Vec4::new(100.0, 200.0, 300.0, 0.0),
            b: normalized3(Vec4::new(1.0, 2.0, 2.0, 0.0)),
        };
        let pline = ProcessedLine3::new(line, Vec4::new(1.0, 1.0, 1.0, 0.0), Vec4::new(1.0, 1.0, 1.0, 0.0));

        // A point on the line must project back onto itself.
        let point = line.a + line.b * 50.0;
        let param = dot3(point, pline.bs);
        let reconstructed = pline.amod + param * pline.bis;

        let dist = reconstructed - point;
        assert!(dot3(dist, dist) < 1e-3);
    }
}
