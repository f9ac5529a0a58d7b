//! Depth-first enumeration of stop orderings.
//!
//! Orderings are explored as a tree of prefixes so that the distance of a
//! shared prefix is summed once. A branch is abandoned when a leg is
//! unreachable, when the running distance leaves the budget, or when it is
//! already longer than the best complete ordering found so far. The result is
//! the same as scoring every permutation and keeping the minimum.

use wayfinder_core::{Budget, DISTANCE_EPSILON, Diagnostics, Graph, NodeId, PlanError};

use crate::limits::{LimitGuard, SearchLimits};
use crate::segments::SegmentCache;

/// A complete stop ordering and its length.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Ordering {
    pub(crate) stops: Vec<NodeId>,
    pub(crate) distance_km: f64,
}

impl Ordering {
    /// Whether `self` should replace `incumbent` as the best ordering.
    ///
    /// Shorter wins; lengths within [`DISTANCE_EPSILON`] fall back to the
    /// lexicographic order of the stop sequences.
    #[expect(
        clippy::float_arithmetic,
        reason = "distance comparison uses an epsilon band"
    )]
    pub(crate) fn beats(&self, incumbent: &Self) -> bool {
        if self.distance_km < incumbent.distance_km - DISTANCE_EPSILON {
            return true;
        }
        if self.distance_km > incumbent.distance_km + DISTANCE_EPSILON {
            return false;
        }
        self.stops < incumbent.stops
    }
}

/// Shared state for every search made while answering one request.
#[derive(Debug)]
pub(crate) struct SearchContext<'g> {
    segments: SegmentCache<'g>,
    guard: LimitGuard,
    orderings_evaluated: u64,
}

struct Walk<'a> {
    rest: &'a [NodeId],
    used: Vec<bool>,
    prefix: Vec<NodeId>,
    length: usize,
    budget: Option<Budget>,
}

impl<'g> SearchContext<'g> {
    pub(crate) fn new(graph: &'g Graph, limits: &SearchLimits) -> Self {
        Self {
            segments: SegmentCache::new(graph),
            guard: limits.start(),
            orderings_evaluated: 0,
        }
    }

    pub(crate) fn diagnostics(&self) -> Diagnostics {
        Diagnostics {
            search_time: self.guard.elapsed(),
            orderings_evaluated: self.orderings_evaluated,
            shortest_path_queries: self.segments.queries(),
        }
    }

    /// Fold the best ordering of `first` followed by any permutation of
    /// `rest` into `best`.
    ///
    /// With no `first`, every permutation of `rest` is considered. `best` is
    /// the accumulator carried across calls, so passing in the best ordering
    /// of an earlier subset lets this call prune against it.
    pub(crate) fn best_ordering(
        &mut self,
        first: Option<&NodeId>,
        rest: &[NodeId],
        budget: Option<Budget>,
        best: &mut Option<Ordering>,
    ) -> Result<(), PlanError> {
        let prefix: Vec<NodeId> = first.cloned().into_iter().collect();
        let length = prefix.len() + rest.len();
        if length == 0 {
            return Ok(());
        }
        let mut walk = Walk {
            rest,
            used: vec![false; rest.len()],
            prefix,
            length,
            budget,
        };
        self.descend(&mut walk, 0.0, best)
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "route length accumulates floating-point leg distances"
    )]
    fn descend(
        &mut self,
        walk: &mut Walk<'_>,
        distance_km: f64,
        best: &mut Option<Ordering>,
    ) -> Result<(), PlanError> {
        self.guard.check()?;
        if walk.prefix.len() == walk.length {
            self.orderings_evaluated += 1;
            let candidate = Ordering {
                stops: walk.prefix.clone(),
                distance_km,
            };
            if best.as_ref().is_none_or(|incumbent| candidate.beats(incumbent)) {
                *best = Some(candidate);
            }
            return Ok(());
        }

        let rest = walk.rest;
        for (position, next) in rest.iter().enumerate() {
            if walk.used.get(position).copied().unwrap_or(true) {
                continue;
            }
            let leg = match walk.prefix.last() {
                None => 0.0,
                Some(last) => match self.segments.distance(last, next)? {
                    Some(leg) => leg,
                    None => continue,
                },
            };
            let reached = distance_km + leg;
            if walk.budget.is_some_and(|budget| !budget.allows(reached)) {
                continue;
            }
            if best
                .as_ref()
                .is_some_and(|incumbent| reached > incumbent.distance_km + DISTANCE_EPSILON)
            {
                continue;
            }

            set_used(&mut walk.used, position, true);
            walk.prefix.push(next.clone());
            let outcome = self.descend(walk, reached, best);
            walk.prefix.pop();
            set_used(&mut walk.used, position, false);
            outcome?;
        }
        Ok(())
    }

    /// Full node path for `stops`, joining consecutive segments without
    /// repeating the junction node.
    pub(crate) fn resolve_path(&mut self, stops: &[NodeId]) -> Result<Vec<NodeId>, PlanError> {
        let mut path: Vec<NodeId> = stops.first().cloned().into_iter().collect();
        for pair in stops.windows(2) {
            let [from, to] = pair else {
                continue;
            };
            if let Some(segment) = self.segments.segment(from, to)? {
                path.extend(segment.nodes.iter().skip(1).cloned());
            }
        }
        Ok(path)
    }
}

fn set_used(used: &mut [bool], position: usize, value: bool) {
    if let Some(flag) = used.get_mut(position) {
        *flag = value;
    }
}
