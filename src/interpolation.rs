//! 고정 (x, y) 표에 대한 단조 선형 보간.
//!
//! 포화 곡선, BPE 곡선 등은 모두 데이터로만 존재하고 보간 알고리즘은 여기 하나를 공유한다.
//! 표 범위 밖의 입력은 외삽하지 않고 가장 가까운 끝점 값으로 고정한다.

/// x가 엄격히 증가하는 (x, y) 점 목록.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpTable<'a> {
    points: &'a [(f64, f64)],
}

impl<'a> InterpTable<'a> {
    /// 점 목록으로 표를 만든다. 빈 목록은 허용하지 않는다.
    pub const fn new(points: &'a [(f64, f64)]) -> Self {
        assert!(!points.is_empty(), "interpolation table needs at least one point");
        Self { points }
    }

    pub fn points(&self) -> &'a [(f64, f64)] {
        self.points
    }

    /// 첫 점의 x 값.
    pub fn x_min(&self) -> f64 {
        self.points[0].0
    }

    /// 마지막 점의 x 값.
    pub fn x_max(&self) -> f64 {
        self.points[self.points.len() - 1].0
    }

    /// `x`에서의 y 값을 선형 보간한다. 범위 밖은 끝점으로 클램프, NaN은 그대로 전달한다.
    pub fn interpolate(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        let (x0, y0) = self.points[0];
        if x <= x0 {
            return y0;
        }
        let (xn, yn) = self.points[self.points.len() - 1];
        if x >= xn {
            return yn;
        }
        for pair in self.points.windows(2) {
            let (xa, ya) = pair[0];
            let (xb, yb) = pair[1];
            if x <= xb {
                let ratio = (x - xa) / (xb - xa);
                return ya + ratio * (yb - ya);
            }
        }
        yn
    }

    /// x가 엄격히 증가하는지 확인한다.
    pub fn is_strictly_increasing(&self) -> bool {
        self.points.windows(2).all(|pair| pair[0].0 < pair[1].0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    const LINE: [(f64, f64); 3] = [(0.0, 0.0), (10.0, 5.0), (20.0, 25.0)];

    #[test]
    fn hits_table_points_exactly() {
        let table = InterpTable::new(&LINE);
        for &(x, y) in &LINE {
            assert_relative_eq!(table.interpolate(x), y);
        }
    }

    #[test]
    fn interpolates_between_points() {
        let table = InterpTable::new(&LINE);
        assert_relative_eq!(table.interpolate(5.0), 2.5);
        assert_relative_eq!(table.interpolate(15.0), 15.0);
    }

    #[test]
    fn clamps_outside_range() {
        let table = InterpTable::new(&LINE);
        assert_relative_eq!(table.interpolate(-100.0), 0.0);
        assert_relative_eq!(table.interpolate(1e9), 25.0);
        assert_relative_eq!(table.interpolate(f64::INFINITY), 25.0);
    }

    #[test]
    fn nan_passes_through() {
        let table = InterpTable::new(&LINE);
        assert!(table.interpolate(f64::NAN).is_nan());
    }

    #[test]
    fn single_point_table_is_constant() {
        let table = InterpTable::new(&[(3.0, 7.0)]);
        assert_relative_eq!(table.interpolate(-1.0), 7.0);
        assert_relative_eq!(table.interpolate(3.0), 7.0);
        assert_relative_eq!(table.interpolate(9.0), 7.0);
    }

    #[test]
    fn detects_non_monotone_table() {
        assert!(InterpTable::new(&LINE).is_strictly_increasing());
        assert!(!InterpTable::new(&[(0.0, 1.0), (0.0, 2.0)]).is_strictly_increasing());
    }
}
