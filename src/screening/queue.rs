use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::applicant::Applicant;

/// Min-heap of applicants keyed on `risk_score`; lowest risk comes out first.
///
/// Applicants with equal risk leave in no particular order.
#[derive(Debug, Default)]
pub struct RiskQueue {
    heap: BinaryHeap<RankedApplicant>,
}

impl RiskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, applicant: Applicant) {
        self.heap.push(RankedApplicant(applicant));
    }

    /// Removes the applicant with the smallest risk score.
    pub fn pop_min(&mut self) -> Result<Applicant, QueueError> {
        self.heap
            .pop()
            .map(|ranked| ranked.0)
            .ok_or(QueueError::Empty)
    }

    pub fn peek_min(&self) -> Option<&Applicant> {
        self.heap.peek().map(|ranked| &ranked.0)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Yields every queued applicant in ascending risk order, leaving the queue empty.
    pub fn drain_ordered(&mut self) -> DrainOrdered<'_> {
        DrainOrdered { queue: self }
    }
}

impl FromIterator<Applicant> for RiskQueue {
    fn from_iter<I: IntoIterator<Item = Applicant>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl Extend<Applicant> for RiskQueue {
    fn extend<I: IntoIterator<Item = Applicant>>(&mut self, iter: I) {
        for applicant in iter {
            self.push(applicant);
        }
    }
}

/// Iterator returned by [`RiskQueue::drain_ordered`].
pub struct DrainOrdered<'a> {
    queue: &'a mut RiskQueue,
}

impl Iterator for DrainOrdered<'_> {
    type Item = Applicant;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop_min().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

/// Error raised by [`RiskQueue`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    #[error("risk queue is empty")]
    Empty,
}

#[derive(Debug)]
struct RankedApplicant(Applicant);

impl PartialEq for RankedApplicant {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankedApplicant {}

impl Ord for RankedApplicant {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so lower risk must compare greater.
        other.0.risk_score().total_cmp(&self.0.risk_score())
    }
}

impl PartialOrd for RankedApplicant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
