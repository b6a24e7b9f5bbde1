//! Point registry
//!
//! Drawings repeat the same node once per line or face that touches it,
//! usually with a little floating point noise. The registry maps every
//! coordinate triple to a canonical key (each coordinate truncated to a fixed
//! number of fractional digits) and hands out one shared [`Point`] per key.
//!
//! Keys are fixed-point integers computed from the decimal text of the
//! coordinate, so `1.2399` and `1.239` collide while `1.2399` and `1.240`
//! do not. The first triple registered under a key wins; later triples never
//! update the stored coordinates.

use crate::error::{ConvertError, Result};
use crate::types::{Point, PointId};
use ahash::RandomState;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Default number of fractional digits kept in the canonical key
pub const DEFAULT_PRECISION: u32 = 3;

/// Largest supported precision.
///
/// Keys are `i64` values scaled by `10^precision`, so the largest usable
/// coordinate magnitude is about `9.2e18 / 10^precision`: roughly `9.2e9` at
/// this precision and `9.2e15` at the default. Larger coordinates fail with
/// [`ConvertError::CoordinateOutOfRange`].
pub const MAX_PRECISION: u32 = 9;

/// Canonical key of a coordinate triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoordKey([i64; 3]);

impl CoordKey {
    /// Build a key from decimal strings; `None` if any coordinate is not a
    /// finite decimal number.
    pub fn from_strs(x: &str, y: &str, z: &str, precision: u32) -> Option<Self> {
        Some(CoordKey([
            truncate_fixed(x, precision)?,
            truncate_fixed(y, precision)?,
            truncate_fixed(z, precision)?,
        ]))
    }
}

/// Scale a decimal string by `10^precision`, dropping the remaining digits.
///
/// Truncation is toward zero and happens on the text, so no rounding ever
/// takes place. Exponent notation is expanded to plain decimal first.
pub fn truncate_fixed(raw: &str, precision: u32) -> Option<i64> {
    let raw = raw.trim();

    if raw.contains(['e', 'E']) {
        let value: f64 = raw.parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        // Display never uses exponent notation for f64
        return truncate_fixed(&value.to_string(), precision);
    }

    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !int_part.bytes().chain(frac_part.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let scale = 10i64.checked_pow(precision)?;
    let int_value: i64 = if int_part.is_empty() { 0 } else { int_part.parse().ok()? };

    let frac_value = (0..precision as usize).fold(0i64, |acc, i| {
        let digit = frac_part.as_bytes().get(i).map_or(0, |b| i64::from(b - b'0'));
        acc * 10 + digit
    });

    let magnitude = int_value.checked_mul(scale)?.checked_add(frac_value)?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Identity-resolution cache for points of one conversion run
#[derive(Debug, Clone)]
pub struct PointRegistry {
    points: IndexMap<CoordKey, Point, RandomState>,
    next_id: PointId,
    precision: u32,
}

impl PointRegistry {
    /// Create an empty registry with the default precision
    pub fn new() -> Self {
        Self::with_precision(DEFAULT_PRECISION)
    }

    /// Create an empty registry keeping `precision` fractional digits
    /// (clamped to [`MAX_PRECISION`])
    pub fn with_precision(precision: u32) -> Self {
        PointRegistry {
            points: IndexMap::with_hasher(RandomState::new()),
            next_id: PointId::FIRST,
            precision: precision.min(MAX_PRECISION),
        }
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Resolve a coordinate triple given as decimal text.
    ///
    /// `line` is only used in the error when a coordinate is not a number.
    pub fn canonicalize(&mut self, x: &str, y: &str, z: &str, line: usize) -> Result<Point> {
        let value_of = |raw: &str| -> Result<f64> {
            raw.trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ConvertError::InvalidNumber {
                    value: raw.trim().to_string(),
                    line,
                })
        };
        let (vx, vy, vz) = (value_of(x)?, value_of(y)?, value_of(z)?);

        // every coordinate parsed, so a missing key means the scaled value overflowed
        let key = CoordKey::from_strs(x, y, z, self.precision).ok_or_else(|| {
            let value = [x, y, z]
                .into_iter()
                .find(|raw| truncate_fixed(raw, self.precision).is_none())
                .unwrap_or(x);
            ConvertError::CoordinateOutOfRange {
                value: value.trim().to_string(),
                line,
                precision: self.precision,
            }
        })?;

        Ok(self.insert(key, vx, vy, vz))
    }

    /// Resolve a numeric coordinate triple.
    ///
    /// The key is taken from the shortest decimal text of each value.
    pub fn canonicalize_f64(&mut self, x: f64, y: f64, z: f64) -> Option<Point> {
        let key = CoordKey::from_strs(&x.to_string(), &y.to_string(), &z.to_string(), self.precision)?;
        Some(self.insert(key, x, y, z))
    }

    fn insert(&mut self, key: CoordKey, x: f64, y: f64, z: f64) -> Point {
        if let Some(existing) = self.points.get(&key) {
            return *existing;
        }

        let point = Point::new(self.next_id, x, y, z);
        self.next_id = self.next_id.next();
        self.points.insert(key, point);
        point
    }

    /// Id the next new point will receive
    pub fn next_id(&self) -> PointId {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Point> + '_ {
        self.points.values()
    }

    /// Release every point registered since `mark` was taken from
    /// [`next_id`](Self::next_id).
    ///
    /// Used when an entity fails after some of its corners were registered.
    /// Returns the number of points released.
    pub fn release_from(&mut self, mark: PointId) -> usize {
        let mut released = 0;

        while let Some((_, last)) = self.points.last() {
            if last.id < mark {
                break;
            }
            self.points.pop();
            released += 1;
        }

        self.next_id = mark.min(self.next_id);
        released
    }

    /// Release points that only a discarded layer used.
    ///
    /// Points are popped from the end of the registry while the newest point
    /// is in `discarded` and not in `retained`; the id counter rewinds with
    /// them. A discarded point that is older than a surviving one stays
    /// registered so live ids never get a gap. Returns the number of points
    /// released.
    pub fn rollback(&mut self, discarded: &HashSet<PointId>, retained: &HashSet<PointId>) -> usize {
        let mut released = 0;

        while let Some((_, last)) = self.points.last() {
            if !discarded.contains(&last.id) || retained.contains(&last.id) {
                break;
            }
            self.next_id = last.id;
            self.points.pop();
            released += 1;
        }

        released
    }
}

impl Default for PointRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[u32]) -> HashSet<PointId> {
        values.iter().map(|&v| PointId::new(v)).collect()
    }

    #[test]
    fn test_truncate_fixed_truncates_instead_of_rounding() {
        assert_eq!(truncate_fixed("1.2399", 3), Some(1239));
        assert_eq!(truncate_fixed("1.239", 3), Some(1239));
        assert_eq!(truncate_fixed("1.240", 3), Some(1240));
    }

    #[test]
    fn test_truncate_fixed_forms() {
        assert_eq!(truncate_fixed("  12  ", 3), Some(12000));
        assert_eq!(truncate_fixed("1.", 3), Some(1000));
        assert_eq!(truncate_fixed(".5", 3), Some(500));
        assert_eq!(truncate_fixed("+2.5", 3), Some(2500));
        assert_eq!(truncate_fixed("-2.5009", 3), Some(-2500));
        assert_eq!(truncate_fixed("-0.0004", 3), Some(0));
        assert_eq!(truncate_fixed("1.5e3", 3), Some(1_500_000));
        assert_eq!(truncate_fixed("2.5E-2", 3), Some(25));
        assert_eq!(truncate_fixed("7.123456", 0), Some(7));
    }

    #[test]
    fn test_truncate_fixed_rejects_garbage() {
        assert_eq!(truncate_fixed("", 3), None);
        assert_eq!(truncate_fixed(".", 3), None);
        assert_eq!(truncate_fixed("1,5", 3), None);
        assert_eq!(truncate_fixed("abc", 3), None);
        assert_eq!(truncate_fixed("inf", 3), None);
        assert_eq!(truncate_fixed("-+1", 3), None);
        assert_eq!(truncate_fixed("99999999999999999999", 3), None);
    }

    #[test]
    fn test_first_write_wins() {
        let mut registry = PointRegistry::new();
        let a = registry.canonicalize("1.2391", "0", "0", 1).unwrap();
        let b = registry.canonicalize("1.2399", "0.0", "0.0001", 2).unwrap();

        assert_eq!(a, b);
        assert_eq!(b.x, 1.2391);
        assert_eq!(b.z, 0.0);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let mut registry = PointRegistry::new();
        let a = registry.canonicalize("0", "0", "0", 1).unwrap();
        let b = registry.canonicalize("1", "0", "0", 1).unwrap();
        let again = registry.canonicalize("0.0", "0.0", "0.0", 1).unwrap();
        let c = registry.canonicalize("2", "0", "0", 1).unwrap();

        assert_eq!(a.id, PointId::new(1));
        assert_eq!(b.id, PointId::new(2));
        assert_eq!(again.id, PointId::new(1));
        assert_eq!(c.id, PointId::new(3));
        assert_eq!(registry.next_id(), PointId::new(4));
    }

    #[test]
    fn test_iteration_in_insertion_order() {
        let mut registry = PointRegistry::new();
        registry.canonicalize("5", "5", "0", 1).unwrap();
        registry.canonicalize("1", "1", "0", 1).unwrap();
        registry.canonicalize("3", "3", "0", 1).unwrap();

        let xs: Vec<f64> = registry.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![5.0, 1.0, 3.0]);
    }

    #[test]
    fn test_invalid_coordinate() {
        let mut registry = PointRegistry::new();
        let err = registry.canonicalize("1.0", "oops", "0", 17).unwrap_err();
        match err {
            ConvertError::InvalidNumber { value, line } => {
                assert_eq!(value, "oops");
                assert_eq!(line, 17);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_canonicalize_f64_shares_keys_with_text() {
        let mut registry = PointRegistry::new();
        let a = registry.canonicalize("0.5", "1.0001", "2", 1).unwrap();
        let b = registry.canonicalize_f64(0.5, 1.0, 2.0).unwrap();
        assert!(a.is_same(&b));
    }

    #[test]
    fn test_custom_precision() {
        let mut registry = PointRegistry::with_precision(1);
        let a = registry.canonicalize("1.19", "0", "0", 1).unwrap();
        let b = registry.canonicalize("1.11", "0", "0", 1).unwrap();
        assert!(a.is_same(&b));
        assert_eq!(PointRegistry::with_precision(40).precision(), MAX_PRECISION);
    }

    #[test]
    fn test_release_from_mark() {
        let mut registry = PointRegistry::new();
        registry.canonicalize("1", "0", "0", 1).unwrap();
        let mark = registry.next_id();
        registry.canonicalize("2", "0", "0", 1).unwrap();
        registry.canonicalize("1", "0", "0", 1).unwrap();
        registry.canonicalize("3", "0", "0", 1).unwrap();

        assert_eq!(registry.release_from(mark), 2);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.next_id(), mark);
        assert_eq!(registry.release_from(mark), 0);
    }

    #[test]
    fn test_out_of_range_coordinate() {
        let mut registry = PointRegistry::new();
        let err = registry.canonicalize("0", "1e20", "0", 5).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::CoordinateOutOfRange { ref value, line: 5, precision: 3 } if value == "1e20"
        ));

        let mut fine = PointRegistry::with_precision(MAX_PRECISION);
        assert!(fine.canonicalize("9000000000", "0", "0", 1).is_ok());
        assert!(matches!(
            fine.canonicalize("10000000000", "0", "0", 2),
            Err(ConvertError::CoordinateOutOfRange { .. })
        ));
        assert_eq!(fine.len(), 1);
    }

    #[test]
    fn test_rollback_releases_exclusive_tail() {
        let mut registry = PointRegistry::new();
        for x in ["1", "2", "3", "4"] {
            registry.canonicalize(x, "0", "0", 1).unwrap();
        }

        let released = registry.rollback(&ids(&[3, 4]), &ids(&[1, 2]));
        assert_eq!(released, 2);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.next_id(), PointId::new(3));

        let p = registry.canonicalize("9", "9", "9", 1).unwrap();
        assert_eq!(p.id, PointId::new(3));
    }

    #[test]
    fn test_rollback_keeps_shared_and_older_points() {
        let mut registry = PointRegistry::new();
        for x in ["1", "2", "3", "4"] {
            registry.canonicalize(x, "0", "0", 1).unwrap();
        }

        // 4 is shared with a surviving layer: nothing can be released
        assert_eq!(registry.rollback(&ids(&[1, 4]), &ids(&[2, 3, 4])), 0);
        assert_eq!(registry.len(), 4);

        // 2 is discarded but 3 survives after it
        assert_eq!(registry.rollback(&ids(&[2]), &ids(&[1, 3, 4])), 0);
        assert_eq!(registry.next_id(), PointId::new(5));
    }
}
