//! Point-threshold ranks.

use crate::error::RankTableError;

/// A rank label unlocked at `threshold` points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankEntry {
    pub threshold: u32,
    pub label: String,
}

impl RankEntry {
    pub fn new(threshold: u32, label: impl Into<String>) -> Self {
        Self {
            threshold,
            label: label.into(),
        }
    }
}

/// Ordered rank thresholds. The first threshold is always 0, so every
/// point total resolves to a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankTable {
    entries: Vec<RankEntry>,
}

impl RankTable {
    pub fn new(entries: Vec<RankEntry>) -> Result<Self, RankTableError> {
        let first = entries.first().ok_or(RankTableError::Empty)?;
        if first.threshold != 0 {
            return Err(RankTableError::FirstThresholdNotZero(first.threshold));
        }

        if let Some(index) = entries
            .windows(2)
            .position(|pair| pair[1].threshold <= pair[0].threshold)
        {
            return Err(RankTableError::NotIncreasing { index: index + 1 });
        }

        Ok(Self { entries })
    }

    /// Index of the highest entry whose threshold is at most `points`.
    pub fn rank_index(&self, points: u32) -> usize {
        self.entries
            .iter()
            .rposition(|entry| entry.threshold <= points)
            .unwrap_or(0)
    }

    pub fn rank_for(&self, points: u32) -> &str {
        &self.entries[self.rank_index(points)].label
    }

    pub fn entries(&self) -> &[RankEntry] {
        &self.entries
    }
}

impl Default for RankTable {
    fn default() -> Self {
        Self {
            entries: vec![
                RankEntry::new(0, "New Blood"),
                RankEntry::new(50, "Spark"),
                RankEntry::new(100, "Ignited"),
                RankEntry::new(150, "Visionary"),
                RankEntry::new(200, "REC Elite"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_boundaries() {
        let ranks = RankTable::default();
        assert_eq!(ranks.rank_for(0), "New Blood");
        assert_eq!(ranks.rank_for(49), "New Blood");
        assert_eq!(ranks.rank_for(50), "Spark");
        assert_eq!(ranks.rank_for(65), "Spark");
        assert_eq!(ranks.rank_for(100), "Ignited");
        assert_eq!(ranks.rank_for(199), "Visionary");
        assert_eq!(ranks.rank_for(200), "REC Elite");
        assert_eq!(ranks.rank_for(u32::MAX), "REC Elite");
    }

    #[test]
    fn test_rank_index_is_monotonic() {
        let ranks = RankTable::default();
        let mut previous = 0;
        for points in 0..=500 {
            let index = ranks.rank_index(points);
            assert!(index >= previous, "rank dropped at {} points", points);
            previous = index;
        }
        assert_eq!(previous, ranks.entries().len() - 1);
    }

    #[test]
    fn test_rejects_invalid_tables() {
        assert_eq!(RankTable::new(vec![]), Err(RankTableError::Empty));
        assert_eq!(
            RankTable::new(vec![RankEntry::new(10, "Late")]),
            Err(RankTableError::FirstThresholdNotZero(10))
        );
        assert_eq!(
            RankTable::new(vec![
                RankEntry::new(0, "A"),
                RankEntry::new(50, "B"),
                RankEntry::new(50, "C"),
            ]),
            Err(RankTableError::NotIncreasing { index: 2 })
        );
        assert!(RankTable::new(vec![RankEntry::new(0, "Only")]).is_ok());
    }
}
