//! The beach line: the ordered sequence of active parabolic arcs.
//!
//! Arcs live in an arena and are addressed by stable [`ArcId`] handles, so
//! insertion and removal never invalidate references held elsewhere (pending
//! edge trackers keep handles across events). The sequence itself is a doubly
//! linked list threaded through the arena; only neighbor relationships are
//! ever queried, never random access by position.

/// Stable handle to an arc in the beach-line arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ArcId(u32);

#[derive(Debug, Clone)]
struct Arc {
    site: u32,
    prev: Option<ArcId>,
    next: Option<ArcId>,
    live: bool,
}

/// Ordered sequence of site indices, one per active arc.
#[derive(Debug, Clone, Default)]
pub(crate) struct BeachLine {
    arcs: Vec<Arc>,
    head: Option<ArcId>,
    len: usize,
}

impl BeachLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the beach line with the two topmost sites as `[s0, s1, s0]`:
    /// site 0's arc appears on both sides of site 1's, so the first circle
    /// and site events are well defined.
    pub fn seed(&mut self, s0: usize, s1: usize) {
        debug_assert!(self.len == 0);
        let a = self.alloc(s0);
        let b = self.alloc(s1);
        let c = self.alloc(s0);
        self.link(a, b);
        self.link(b, c);
        self.head = Some(a);
        self.len = 3;
    }

    /// Seed with topmost sites that all share a y-coordinate, in x order.
    /// None of these parabolas can reappear past another, so each site gets
    /// exactly one arc, separated by vertical boundaries.
    pub fn seed_level(&mut self, cohort: &[usize]) {
        debug_assert!(self.len == 0);
        debug_assert!(cohort.len() >= 2);
        let mut prev: Option<ArcId> = None;
        for &site in cohort {
            let arc = self.alloc(site);
            match prev {
                Some(p) => self.link(p, arc),
                None => self.head = Some(arc),
            }
            prev = Some(arc);
        }
        self.len = cohort.len();
    }

    /// Number of live arcs.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn head(&self) -> Option<ArcId> {
        self.head
    }

    /// Site index of an arc.
    pub fn site(&self, id: ArcId) -> usize {
        let arc = &self.arcs[id.0 as usize];
        debug_assert!(arc.live);
        arc.site as usize
    }

    pub fn next(&self, id: ArcId) -> Option<ArcId> {
        self.arcs[id.0 as usize].next
    }

    pub fn prev(&self, id: ArcId) -> Option<ArcId> {
        self.arcs[id.0 as usize].prev
    }

    /// Whether the arc is still part of the sequence.
    pub fn is_live(&self, id: ArcId) -> bool {
        self.arcs[id.0 as usize].live
    }

    /// Split insertion: place `[new_site, dup_site]` immediately after `left`,
    /// producing `left, new, dup, old-next`. Returns the two new handles.
    pub fn insert_pair_after(
        &mut self,
        left: ArcId,
        new_site: usize,
        dup_site: usize,
    ) -> (ArcId, ArcId) {
        debug_assert!(self.is_live(left));
        let right = self.arcs[left.0 as usize].next;

        let new_arc = self.alloc(new_site);
        let dup_arc = self.alloc(dup_site);

        self.link(left, new_arc);
        self.link(new_arc, dup_arc);
        self.arcs[dup_arc.0 as usize].next = right;
        if let Some(r) = right {
            self.arcs[r.0 as usize].prev = Some(dup_arc);
        }

        self.len += 2;
        (new_arc, dup_arc)
    }

    /// Remove an arc, relinking its neighbors. The handle becomes dead but is
    /// never reused.
    pub fn remove(&mut self, id: ArcId) {
        debug_assert!(self.is_live(id));
        let (prev, next) = {
            let arc = &self.arcs[id.0 as usize];
            (arc.prev, arc.next)
        };

        match prev {
            Some(p) => self.arcs[p.0 as usize].next = next,
            None => self.head = next,
        }
        if let Some(n) = next {
            self.arcs[n.0 as usize].prev = prev;
        }

        let arc = &mut self.arcs[id.0 as usize];
        arc.live = false;
        arc.prev = None;
        arc.next = None;
        self.len -= 1;
    }

    /// Iterate over live arcs from left to right.
    pub fn iter(&self) -> BeachLineIter<'_> {
        BeachLineIter {
            beach: self,
            cur: self.head,
        }
    }

    /// Site indices in sequence order, mostly for assertions and tests.
    #[cfg(test)]
    pub fn sites(&self) -> Vec<usize> {
        self.iter().map(|id| self.site(id)).collect()
    }

    fn alloc(&mut self, site: usize) -> ArcId {
        let id = ArcId(self.arcs.len() as u32);
        self.arcs.push(Arc {
            site: site as u32,
            prev: None,
            next: None,
            live: true,
        });
        id
    }

    fn link(&mut self, a: ArcId, b: ArcId) {
        self.arcs[a.0 as usize].next = Some(b);
        self.arcs[b.0 as usize].prev = Some(a);
    }
}

pub(crate) struct BeachLineIter<'a> {
    beach: &'a BeachLine,
    cur: Option<ArcId>,
}

impl Iterator for BeachLineIter<'_> {
    type Item = ArcId;

    fn next(&mut self) -> Option<ArcId> {
        let id = self.cur?;
        self.cur = self.beach.next(id);
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed() {
        let mut beach = BeachLine::new();
        beach.seed(0, 1);
        assert_eq!(beach.sites(), vec![0, 1, 0]);
        assert_eq!(beach.len(), 3);
    }

    #[test]
    fn test_insert_pair_after() {
        let mut beach = BeachLine::new();
        beach.seed(0, 1);
        let second = beach.iter().nth(1).unwrap();

        // Split site 1's arc with site 2: [0, 1, 2, 1, 0]
        let (new_arc, dup_arc) = beach.insert_pair_after(second, 2, 1);
        assert_eq!(beach.sites(), vec![0, 1, 2, 1, 0]);
        assert_eq!(beach.site(new_arc), 2);
        assert_eq!(beach.site(dup_arc), 1);
        assert_eq!(beach.len(), 5);
    }

    #[test]
    fn test_seed_level() {
        let mut beach = BeachLine::new();
        beach.seed_level(&[0, 1, 2]);
        assert_eq!(beach.sites(), vec![0, 1, 2]);
        assert_eq!(beach.len(), 3);
    }

    #[test]
    fn test_remove_relinks() {
        let mut beach = BeachLine::new();
        beach.seed(0, 1);
        let mid = beach.iter().nth(1).unwrap();
        let first = beach.head().unwrap();

        beach.remove(mid);
        assert_eq!(beach.sites(), vec![0, 0]);
        assert!(!beach.is_live(mid));
        assert!(beach.is_live(first));

        // neighbors relinked
        let second = beach.next(first).unwrap();
        assert_eq!(beach.prev(second), Some(first));
        assert_eq!(beach.next(second), None);
    }

    #[test]
    fn test_remove_head_and_tail() {
        let mut beach = BeachLine::new();
        beach.seed(0, 1);
        let head = beach.head().unwrap();
        beach.remove(head);
        assert_eq!(beach.sites(), vec![1, 0]);

        let tail = beach.iter().last().unwrap();
        beach.remove(tail);
        assert_eq!(beach.sites(), vec![1]);
        assert_eq!(beach.len(), 1);
    }
}
