use std::f64::consts::{PI, TAU};

use kurbo::Shape as _;

use crate::{
    foundation::core::{BezPath, Circle, Point},
    foundation::error::{GeomotionError, GeomotionResult},
};

/// Flattening tolerance for the eye circles in [`YinYang::outline`].
const EYE_TOLERANCE: f64 = 1e-3;

/// Sampled outline of the Yin-Yang glyph centred on the origin.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct YinYang {
    /// Outer circle radius.
    pub radius: f64,
    /// Angular sampling step in radians.
    pub step: f64,
}

impl YinYang {
    /// Glyph with the default sampling step of 0.01 rad.
    pub fn new(radius: f64) -> GeomotionResult<Self> {
        Self::with_step(radius, 0.01)
    }

    /// Glyph with an explicit sampling step.
    pub fn with_step(radius: f64, step: f64) -> GeomotionResult<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(GeomotionError::validation("yin-yang radius must be > 0"));
        }
        if !(step.is_finite() && step > 0.0 && step < PI) {
            return Err(GeomotionError::validation(
                "yin-yang step must be within (0, π)",
            ));
        }
        Ok(Self { radius, step })
    }

    fn angles(&self, start: f64, end: f64) -> impl Iterator<Item = f64> {
        let step = self.step;
        let n = ((end - start) / step).ceil() as usize;
        (0..n).map(move |i| start + (i as f64) * step)
    }

    /// Left half of the outer circle, from the bottom up through the left side.
    pub fn left_half_circle(&self) -> Vec<Point> {
        let r = self.radius;
        self.angles(-PI, 0.0)
            .map(|a| Point::new(a.sin() * r, a.cos() * r))
            .collect()
    }

    /// Right half of the outer circle, mirror image of [`Self::left_half_circle`].
    pub fn right_half_circle(&self) -> Vec<Point> {
        let r = self.radius;
        self.angles(-PI, 0.0)
            .map(|a| Point::new(-a.sin() * r, a.cos() * r))
            .collect()
    }

    /// The dividing "S": upper small half circle on the right, lower one on the left.
    pub fn middle_s(&self) -> Vec<Point> {
        let h = self.radius / 2.0;
        let upper = self
            .angles(0.0, PI)
            .map(move |a| Point::new(a.sin() * h, a.cos() * h + h));
        let lower = self
            .angles(0.0, PI)
            .map(move |a| Point::new(-a.sin() * h, a.cos() * h - h));
        upper.chain(lower).collect()
    }

    /// Parametric dividing curve for `t ∈ [0, 2π]`.
    pub fn s_curve(&self, t: f64) -> GeomotionResult<Point> {
        let h = self.radius / 2.0;
        if (0.0..=PI).contains(&t) {
            Ok(Point::new(t.sin() * h, t.cos() * h + h))
        } else if t > PI && t <= TAU {
            let u = t - PI;
            Ok(Point::new(-u.sin() * h, u.cos() * h - h))
        } else {
            Err(GeomotionError::validation(format!(
                "t should be between [0, TAU], got {t}"
            )))
        }
    }

    /// Full outer circle starting at the top, one sample past a full turn.
    pub fn full_circle(&self) -> Vec<Point> {
        let r = self.radius;
        self.angles(0.0, TAU + self.step)
            .map(|a| Point::new(-(a + TAU / 4.0).cos() * r, (a + TAU / 4.0).sin() * r))
            .collect()
    }

    /// The two dots: the upper one sits in the left half, the lower one in the right half.
    /// Each has radius `r/8` and is centred halfway between the origin and the rim.
    pub fn eyes(&self) -> [Circle; 2] {
        let (h, eye) = (self.radius / 2.0, self.radius / 8.0);
        [
            Circle::new(Point::new(0.0, h), eye),
            Circle::new(Point::new(0.0, -h), eye),
        ]
    }

    /// Closed boundary of the left half: the left rim from the bottom up, then back down the S.
    pub fn left_half(&self) -> Vec<Point> {
        let mut pts = self.left_half_circle();
        pts.extend(self.middle_s());
        pts
    }

    /// Closed boundary of the right half: down the S, then the right rim back up.
    pub fn right_half(&self) -> Vec<Point> {
        let mut pts = self.middle_s();
        pts.extend(self.right_half_circle());
        pts
    }

    /// Outline as a path: outer circle, the dividing curve and both eyes.
    pub fn outline(&self) -> BezPath {
        let mut path = BezPath::new();
        push_polyline(&mut path, &self.full_circle());
        push_polyline(&mut path, &self.middle_s());
        for eye in self.eyes() {
            path.extend(eye.path_elements(EYE_TOLERANCE));
        }
        path
    }
}

fn push_polyline(path: &mut BezPath, pts: &[Point]) {
    let mut it = pts.iter().copied();
    if let Some(first) = it.next() {
        path.move_to(first);
        for p in it {
            path.line_to(p);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/yin_yang.rs"]
mod tests;
