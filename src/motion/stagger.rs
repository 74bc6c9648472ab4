//! One-shot staggered reveal sequencing
//!
//! Cards are watched until they first reach the viewport. The queue hands
//! every newcomer a delay proportional to its position within the batch it
//! arrived in, and never admits the same card twice.

/// Tracks which cards have revealed and assigns batch-relative delays.
#[derive(Debug, Clone)]
pub struct StaggerQueue {
    step_ms: u32,
    revealed: Vec<bool>,
}

impl StaggerQueue {
    pub fn new(card_count: usize, step_ms: u32) -> Self {
        Self {
            step_ms,
            revealed: vec![false; card_count],
        }
    }

    /// Admit one observer batch.
    ///
    /// Returns `(card index, delay ms)` for every card in the batch that has
    /// not revealed before, delays counted from zero within this batch.
    /// Already-revealed and out-of-range indices are dropped.
    pub fn admit(&mut self, batch: &[usize]) -> Vec<(usize, u32)> {
        let mut admitted = Vec::new();
        for &index in batch {
            let Some(seen) = self.revealed.get_mut(index) else {
                continue;
            };
            if *seen {
                continue;
            }
            *seen = true;
            admitted.push((index, admitted.len() as u32 * self.step_ms));
        }
        admitted
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Cards still waiting to reveal
    pub fn pending(&self) -> usize {
        self.revealed.iter().filter(|seen| !**seen).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_delays_step_up_from_zero() {
        let mut queue = StaggerQueue::new(6, 100);
        let admitted = queue.admit(&[0, 1, 2]);
        assert_eq!(admitted, vec![(0, 0), (1, 100), (2, 200)]);
    }

    #[test]
    fn test_later_batch_restarts_at_zero() {
        let mut queue = StaggerQueue::new(6, 100);
        queue.admit(&[0, 1, 2]);
        let admitted = queue.admit(&[3, 4]);
        assert_eq!(admitted, vec![(3, 0), (4, 100)]);
    }

    #[test]
    fn test_cards_reveal_at_most_once() {
        let mut queue = StaggerQueue::new(4, 100);
        queue.admit(&[0, 1]);
        assert!(queue.admit(&[1]).is_empty());
        // A mixed batch only admits the newcomer, at delay zero
        assert_eq!(queue.admit(&[0, 3]), vec![(3, 0)]);
        assert!(queue.is_revealed(3));
    }

    #[test]
    fn test_out_of_range_indices_are_dropped() {
        let mut queue = StaggerQueue::new(2, 50);
        assert_eq!(queue.admit(&[7, 1]), vec![(1, 0)]);
    }

    #[test]
    fn test_pending_counts_down() {
        let mut queue = StaggerQueue::new(3, 100);
        assert_eq!(queue.pending(), 3);
        queue.admit(&[2]);
        assert_eq!(queue.pending(), 2);
        queue.admit(&[0, 1]);
        assert_eq!(queue.pending(), 0);
    }

    #[test]
    fn test_duplicate_within_one_batch() {
        let mut queue = StaggerQueue::new(3, 100);
        assert_eq!(queue.admit(&[2, 2, 0]), vec![(2, 0), (0, 100)]);
    }
}
