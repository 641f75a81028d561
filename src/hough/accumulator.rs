//! Discretized (angle, offset) voting grid plus the fixed-point line walker
//! used to trace a winning bin back through the edge mask.
use std::f32::consts::PI;

/// Fractional bits of the walker's fixed-point minor-axis coordinate.
const SHIFT: i64 = 16;

pub(super) struct Accumulator {
    num_angle: usize,
    num_rho: usize,
    /// Per angle bin: `[cos θ / rho, sin θ / rho]`.
    trig: Vec<[f32; 2]>,
    votes: Vec<i32>,
}

impl Accumulator {
    pub(super) fn new(width: usize, height: usize, rho: f32, theta: f32) -> Self {
        let num_angle = ((PI / theta).round() as usize).max(1);
        let num_rho = ((((width + height) * 2 + 1) as f32 / rho).round() as usize).max(1);
        let trig = (0..num_angle)
            .map(|n| {
                let ang = n as f32 * theta;
                [ang.cos() / rho, ang.sin() / rho]
            })
            .collect();
        Self {
            num_angle,
            num_rho,
            trig,
            votes: vec![0; num_angle * num_rho],
        }
    }

    #[inline]
    fn bin(&self, n: usize, x: i32, y: i32) -> usize {
        let [c, s] = self.trig[n];
        let r = (x as f32 * c + y as f32 * s).round() as i64 + (self.num_rho as i64 - 1) / 2;
        n * self.num_rho + r.clamp(0, self.num_rho as i64 - 1) as usize
    }

    /// Add the point's votes and return the strongest bin it touched as
    /// `(count, angle index)`; ties resolve to the lowest angle index.
    pub(super) fn vote(&mut self, x: i32, y: i32) -> (i32, usize) {
        let mut best = (i32::MIN, 0usize);
        for n in 0..self.num_angle {
            let b = self.bin(n, x, y);
            self.votes[b] += 1;
            let val = self.votes[b];
            if val > best.0 {
                best = (val, n);
            }
        }
        best
    }

    /// Withdraw the votes of a point absorbed into an accepted line.
    pub(super) fn unvote(&mut self, x: i32, y: i32) {
        for n in 0..self.num_angle {
            let b = self.bin(n, x, y);
            self.votes[b] -= 1;
        }
    }

    /// Unscaled line direction `(-sin θ, cos θ)` of angle bin `n`.
    pub(super) fn direction(&self, n: usize) -> [f32; 2] {
        let [c, s] = self.trig[n];
        [-s, c]
    }
}

/// Walks pixel centres along a direction using one integer step on the major
/// axis and a fixed-point step on the minor axis. The state is 64-bit so any
/// `i32` coordinate fits after the shift.
#[derive(Clone, Copy, Debug)]
pub(super) struct LineWalk {
    x0: i64,
    y0: i64,
    dx0: i64,
    dy0: i64,
    x_major: bool,
}

impl LineWalk {
    pub(super) fn new(x: i32, y: i32, dir: [f32; 2]) -> Self {
        let [a, b] = dir;
        if a.abs() > b.abs() {
            Self {
                x0: x as i64,
                y0: ((y as i64) << SHIFT) + (1 << (SHIFT - 1)),
                dx0: if a > 0.0 { 1 } else { -1 },
                dy0: (b * (1i64 << SHIFT) as f32 / a.abs()).round() as i64,
                x_major: true,
            }
        } else {
            Self {
                x0: ((x as i64) << SHIFT) + (1 << (SHIFT - 1)),
                y0: y as i64,
                dx0: (a * (1i64 << SHIFT) as f32 / b.abs()).round() as i64,
                dy0: if b > 0.0 { 1 } else { -1 },
                x_major: false,
            }
        }
    }

    /// Pixels visited from the start point, forward (`k == 0`) or backward.
    pub(super) fn pixels(&self, k: usize) -> impl Iterator<Item = [i32; 2]> {
        let (dx, dy) = if k == 0 {
            (self.dx0, self.dy0)
        } else {
            (-self.dx0, -self.dy0)
        };
        let x_major = self.x_major;
        let mut state = (self.x0, self.y0);
        std::iter::from_fn(move || {
            let (x, y) = state;
            state = (x + dx, y + dy);
            let p = if x_major {
                [x, y >> SHIFT]
            } else {
                [x >> SHIFT, y]
            };
            Some([p[0] as i32, p[1] as i32])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collinear_points_share_a_bin() {
        let mut acc = Accumulator::new(50, 50, 1.0, PI / 180.0);
        let mut last = (0, 0);
        for y in 0..20 {
            last = acc.vote(7, y);
        }
        assert_eq!(last, (20, 0), "vertical column should peak at angle 0");
        for y in 0..20 {
            acc.unvote(7, y);
        }
        assert!(acc.votes.iter().all(|&v| v == 0));
    }

    #[test]
    fn walker_steps_along_vertical_and_horizontal_lines() {
        let vertical = LineWalk::new(5, 5, [0.0, 1.0]);
        let forward: Vec<_> = vertical.pixels(0).take(3).collect();
        assert_eq!(forward, vec![[5, 5], [5, 6], [5, 7]]);
        let backward: Vec<_> = vertical.pixels(1).take(2).collect();
        assert_eq!(backward, vec![[5, 5], [5, 4]]);

        let horizontal = LineWalk::new(5, 5, [-1.0, 0.0]);
        let forward: Vec<_> = horizontal.pixels(0).take(2).collect();
        assert_eq!(forward, vec![[5, 5], [4, 5]]);
    }

    #[test]
    fn walker_keeps_coordinates_beyond_sixteen_bits() {
        let horizontal = LineWalk::new(3, 40_000, [1.0, 0.0]);
        let forward: Vec<_> = horizontal.pixels(0).take(2).collect();
        assert_eq!(forward, vec![[3, 40_000], [4, 40_000]]);

        let vertical = LineWalk::new(70_000, 9, [0.0, -1.0]);
        let backward: Vec<_> = vertical.pixels(1).take(2).collect();
        assert_eq!(backward, vec![[70_000, 9], [70_000, 10]]);
    }
}
