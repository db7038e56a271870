use std::collections::HashMap;

pub const START_CAVE: &str = "start";
pub const END_CAVE: &str = "end";

/// Handle for a cave name, only meaningful within the [`CaveSystem`] that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CaveId(usize);

impl CaveId {
    pub const START: CaveId = CaveId(0);
    pub const END: CaveId = CaveId(1);

    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaveSize {
    Large,
    Small,
}

impl CaveSize {
    /// Capitalized names are large caves, everything else is small.
    pub fn of(name: &str) -> CaveSize {
        match name.chars().next() {
            Some(c) if c.is_uppercase() => CaveSize::Large,
            _ => CaveSize::Small,
        }
    }
}

#[derive(Debug, Clone)]
struct Cave<'a> {
    name: &'a str,
    size: CaveSize,
    mentioned: bool,
    connected_to: Vec<CaveId>,
}

impl<'a> Cave<'a> {
    fn new(name: &'a str, size: CaveSize) -> Cave<'a> {
        Cave {
            name,
            size,
            mentioned: false,
            connected_to: Default::default(),
        }
    }
}

/// Adjacency lists for a cave map, together with the name table that produced
/// the ids. The start cave never appears as anyone's neighbor.
#[derive(Debug, Clone)]
pub struct CaveSystem<'a> {
    ids: HashMap<&'a str, CaveId>,
    caves: Vec<Cave<'a>>,
    edge_count: usize,
}

impl<'a> Default for CaveSystem<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CaveSystem<'a> {
    pub fn new() -> Self {
        // start and end are small by name, but the search treats them specially anyway
        let caves = vec![
            Cave::new(START_CAVE, CaveSize::Small),
            Cave::new(END_CAVE, CaveSize::Small),
        ];
        let ids = [(START_CAVE, CaveId::START), (END_CAVE, CaveId::END)]
            .into_iter()
            .collect();

        Self {
            ids,
            caves,
            edge_count: 0,
        }
    }

    /// Returns the id for `name`, allocating the next one on first sight.
    pub fn intern(&mut self, name: &'a str) -> CaveId {
        let id = match self.ids.get(name) {
            Some(id) => *id,
            None => {
                let id = CaveId(self.caves.len());
                self.caves.push(Cave::new(name, CaveSize::of(name)));
                self.ids.insert(name, id);
                id
            }
        };
        self.caves[id.index()].mentioned = true;
        id
    }

    pub fn add_edge(&mut self, a: &'a str, b: &'a str) {
        let u = self.intern(a);
        let v = self.intern(b);

        // nothing may lead back into the start cave
        if v != CaveId::START {
            self.caves[u.index()].connected_to.push(v);
        }
        if u != CaveId::START {
            self.caves[v.index()].connected_to.push(u);
        }
        self.edge_count += 1;
    }

    pub fn get(&self, name: &str) -> Option<CaveId> {
        self.ids.get(name).copied()
    }

    #[inline]
    pub fn neighbors(&self, id: CaveId) -> &[CaveId] {
        &self.caves[id.index()].connected_to
    }

    #[inline]
    pub fn size(&self, id: CaveId) -> CaveSize {
        self.caves[id.index()].size
    }

    #[inline]
    pub fn is_large(&self, id: CaveId) -> bool {
        self.size(id) == CaveSize::Large
    }

    pub fn name(&self, id: CaveId) -> &'a str {
        self.caves[id.index()].name
    }

    /// Whether `id` appeared in at least one edge. The start and end caves
    /// exist in every system, so this is how their absence is detected.
    pub fn is_mentioned(&self, id: CaveId) -> bool {
        self.caves[id.index()].mentioned
    }

    pub fn cave_count(&self) -> usize {
        self.caves.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn ids(&self) -> impl Iterator<Item = CaveId> {
        (0..self.caves.len()).map(CaveId)
    }

    /// Finds a pair of connected large caves, if any. Two connected large caves
    /// can be walked back and forth forever, so the number of paths is unbounded.
    pub fn adjacent_large_caves(&self) -> Option<(&'a str, &'a str)> {
        self.ids()
            .filter(|id| self.is_large(*id))
            .find_map(|id| {
                self.neighbors(id)
                    .iter()
                    .find(|next| self.is_large(**next))
                    .map(|next| (self.name(id), self.name(*next)))
            })
    }
}
