use tracing::debug;

use crate::caves::{CaveId, CaveSystem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    /// Small caves are visited at most once.
    One,
    /// A single small cave per path may be visited twice.
    Two,
}

impl Part {
    pub fn allows_revisit(self) -> bool {
        matches!(self, Part::Two)
    }
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    cave: CaveId,
    cursor: usize,
}

/// Iterative depth-first search counting the paths from `start` to `end`.
///
/// The stack holds one frame per cave on the current path together with a
/// cursor into that cave's neighbor list, and `visits` counts how many frames
/// each cave currently has. The permission to enter a small cave a second time
/// is a single flag for the whole search: it is spent when a second frame for a
/// small cave is pushed, and given back when that frame is popped.
#[derive(Debug)]
pub struct PathSearch<'s, 'a> {
    caves: &'s CaveSystem<'a>,
    stack: Vec<Frame>,
    visits: Vec<u32>,
    can_revisit: bool,
    found_paths: usize,
    frames_pushed: usize,
}

impl<'s, 'a> PathSearch<'s, 'a> {
    pub fn new(caves: &'s CaveSystem<'a>, can_revisit: bool) -> Self {
        let mut search = Self {
            caves,
            stack: Vec::with_capacity(caves.cave_count()),
            visits: vec![0; caves.cave_count()],
            can_revisit,
            found_paths: 0,
            frames_pushed: 0,
        };
        search.push(CaveId::START);
        search
    }

    fn push(&mut self, cave: CaveId) {
        self.visits[cave.index()] += 1;
        self.stack.push(Frame { cave, cursor: 0 });
        self.frames_pushed += 1;
    }

    fn visit(&mut self, next: CaveId) {
        if next == CaveId::END {
            self.found_paths += 1;
            return;
        }

        if self.caves.is_large(next) || self.visits[next.index()] == 0 {
            self.push(next);
        } else if self.can_revisit {
            self.can_revisit = false;
            self.push(next);
        }
    }

    fn leave(&mut self, cave: CaveId) {
        let visits = &mut self.visits[cave.index()];

        // a small cave can only have two frames if the revisit was spent on it,
        // and this is the frame that spent it
        if *visits == 2 && !self.caves.is_large(cave) {
            self.can_revisit = true;
        }
        *visits -= 1;

        let popped = self.stack.pop().map(|frame| frame.cave);
        assert_eq!(popped, Some(cave));
    }

    /// Advances the search by one transition. Returns `false` once the stack is empty.
    fn step(&mut self) -> bool {
        let frame = match self.stack.last_mut() {
            Some(frame) => frame,
            None => return false,
        };

        match self.caves.neighbors(frame.cave).get(frame.cursor).copied() {
            Some(next) => {
                frame.cursor += 1;
                self.visit(next);
            }
            None => {
                let cave = frame.cave;
                self.leave(cave);
            }
        }
        true
    }

    pub fn run(mut self) -> usize {
        while self.step() {}

        debug!(
            paths = self.found_paths,
            frames = self.frames_pushed,
            "search finished"
        );
        self.found_paths
    }
}

pub fn count_paths(caves: &CaveSystem<'_>, part: Part) -> usize {
    debug!(?part, "counting paths");
    PathSearch::new(caves, part.allows_revisit()).run()
}
