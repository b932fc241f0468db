//! # FSC 曲线数据模型
//!
//! 存储 Fourier Shell Correlation 曲线并估算分辨率。
//!
//! ## 分辨率估算
//! 从曲线末端向前线性扫描，找到第一个相关值严格大于截断值 (0.5) 的点，
//! 分辨率为该点频率的倒数。找不到时返回 0。
//!
//! ## 依赖关系
//! - 被 `parsers/fsc.rs` 构造
//! - 被 `commands/fsc.rs`, `plot/fsc.rs` 使用

/// 分辨率截断值
pub const FSC_CUTOFF: f64 = 0.5;

/// 金标准 FSC 参考线
pub const FSC_GOLD_STANDARD: f64 = 0.143;

/// FSC 曲线上的一个采样点
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FscPoint {
    /// 空间频率 (1/Å)
    pub frequency: f64,
    /// 相关系数
    pub correlation: f64,
}

impl FscPoint {
    pub fn new(frequency: f64, correlation: f64) -> Self {
        Self {
            frequency,
            correlation,
        }
    }
}

/// FSC 曲线（保持文件中的顺序）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FscCurve {
    pub points: Vec<FscPoint>,
}

impl FscCurve {
    pub fn new(points: Vec<FscPoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// 从末端向前找到最后一个相关值严格大于 `cutoff` 的点
    pub fn last_above(&self, cutoff: f64) -> Option<&FscPoint> {
        self.points.iter().rev().find(|p| p.correlation > cutoff)
    }

    /// 估算分辨率 (Å)，未找到时为 0
    pub fn resolution(&self, cutoff: f64) -> f64 {
        match self.last_above(cutoff) {
            Some(p) if p.frequency > 0.0 => 1.0 / p.frequency,
            _ => 0.0,
        }
    }

    /// 频率范围 (min, max)，空曲线返回 None
    pub fn frequency_range(&self) -> Option<(f64, f64)> {
        min_max(self.points.iter().map(|p| p.frequency))
    }

    /// 相关值范围 (min, max)，空曲线返回 None
    pub fn correlation_range(&self) -> Option<(f64, f64)> {
        min_max(self.points.iter().map(|p| p.correlation))
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve(rows: &[(f64, f64)]) -> FscCurve {
        FscCurve::new(rows.iter().map(|&(x, y)| FscPoint::new(x, y)).collect())
    }

    #[test]
    fn test_resolution_uses_last_point_above_cutoff() {
        let c = curve(&[(0.01, 0.9), (0.02, 0.6), (0.03, 0.5), (0.04, 0.3)]);
        assert_eq!(c.last_above(FSC_CUTOFF), Some(&FscPoint::new(0.02, 0.6)));
        assert!((c.resolution(FSC_CUTOFF) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_resolution_cutoff_is_strict() {
        let c = curve(&[(0.01, 0.5), (0.02, 0.5)]);
        assert_eq!(c.last_above(FSC_CUTOFF), None);
        assert_eq!(c.resolution(FSC_CUTOFF), 0.0);
    }

    #[test]
    fn test_resolution_not_found_is_zero() {
        let c = curve(&[(0.01, 0.4), (0.02, 0.2), (0.03, 0.1)]);
        assert_eq!(c.resolution(FSC_CUTOFF), 0.0);

        let zeros = curve(&[(0.0, 0.0), (0.0, 0.0)]);
        assert_eq!(zeros.resolution(FSC_CUTOFF), 0.0);

        assert_eq!(FscCurve::default().resolution(FSC_CUTOFF), 0.0);
    }

    #[test]
    fn test_resolution_is_positional_for_non_monotonic_input() {
        // 末尾的反弹点优先于前面的高相关点
        let c = curve(&[(0.01, 0.95), (0.02, 0.3), (0.03, 0.2), (0.04, 0.55), (0.05, 0.1)]);
        assert!((c.resolution(FSC_CUTOFF) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_resolution_includes_first_point() {
        let c = curve(&[(0.02, 0.8), (0.04, 0.3)]);
        assert!((c.resolution(FSC_CUTOFF) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_resolution_skips_zero_frequency() {
        let c = curve(&[(0.0, 1.0), (0.05, 0.2)]);
        assert!(c.last_above(FSC_CUTOFF).is_some());
        assert_eq!(c.resolution(FSC_CUTOFF), 0.0);
    }

    #[test]
    fn test_ranges() {
        let c = curve(&[(0.03, 0.2), (0.01, 0.9), (0.02, -0.1)]);
        assert_eq!(c.frequency_range(), Some((0.01, 0.03)));
        assert_eq!(c.correlation_range(), Some((-0.1, 0.9)));
        assert_eq!(FscCurve::default().frequency_range(), None);
    }
}
