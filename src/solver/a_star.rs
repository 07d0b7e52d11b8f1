use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::{self, Debug, Display, Formatter};

use fnv::FnvHashSet;
use log::{debug, trace};
use prettytable::{cell, format, row, Table};
use separator::Separatable;
use typed_arena::Arena;

use crate::board::Board;
use crate::config::Dedup;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<u64>,
    visited_states: Vec<u64>,
    duplicate_states: Vec<u64>,
    suppressed_states: Vec<u64>,
}

impl Stats {
    pub fn total_created(&self) -> u64 {
        self.created_states.iter().sum()
    }

    pub fn total_visited(&self) -> u64 {
        self.visited_states.iter().sum()
    }

    pub fn total_duplicates(&self) -> u64 {
        self.duplicate_states.iter().sum()
    }

    pub fn total_suppressed(&self) -> u64 {
        self.suppressed_states.iter().sum()
    }

    fn add_created(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.created_states, node.moves)
    }

    fn add_visited(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.visited_states, node.moves)
    }

    fn add_duplicate(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.duplicate_states, node.moves)
    }

    fn add_suppressed(&mut self, depth: u32) -> bool {
        Self::add(&mut self.suppressed_states, depth)
    }

    fn add(counts: &mut Vec<u64>, depth: u32) -> bool {
        let mut ret = false;

        // while because some depths might be skipped (suppressed or duplicate nodes)
        while depth as usize >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth as usize] += 1;
        ret
    }
}

fn at(counts: &[u64], depth: usize) -> u64 {
    counts.get(depth).cloned().unwrap_or(0)
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "unique visited by depth: {:?}", self.visited_states)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "suppressed predecessors by depth: {:?}", self.suppressed_states)?;
        writeln!(f, "total created: {}", self.total_created().separated_string())?;
        writeln!(f, "total unique visited: {}", self.total_visited().separated_string())?;
        writeln!(f, "total reached duplicates: {}", self.total_duplicates().separated_string())?;
        writeln!(f, "total suppressed predecessors: {}", self.total_suppressed().separated_string())
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let visited = self.total_visited();
        let duplicates = self.total_duplicates();
        let left = created - visited - duplicates;
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "Unique visited total: {}", visited.separated_string())?;
        writeln!(f, "Reached duplicates total: {}", duplicates.separated_string())?;
        writeln!(f, "Suppressed predecessors total: {}", self.total_suppressed().separated_string())?;
        writeln!(f, "Created but not reached total: {}", left.separated_string())?;
        writeln!(f)?;

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_CLEAN);
        table.set_titles(row!["Depth", "Created", "Unique", "Duplicates", "Suppressed", "Unknown (not reached)"]);
        // a node is always created at a depth before anything else can happen there
        for depth in 0..self.created_states.len() {
            let created = self.created_states[depth];
            let visited = at(&self.visited_states, depth);
            let duplicates = at(&self.duplicate_states, depth);
            table.add_row(row![
                format!("{}:", depth),
                created.separated_string(),
                visited.separated_string(),
                duplicates.separated_string(),
                at(&self.suppressed_states, depth).separated_string(),
                (created - visited - duplicates).separated_string()
            ]);
        }
        write!(f, "{}", table)
    }
}

/// One step of a move history. Nodes live in an arena and only point backwards.
pub(crate) struct SearchNode<'a> {
    pub(crate) board: Board,
    pub(crate) prev: Option<&'a SearchNode<'a>>,
    pub(crate) moves: u32,
    cost: u32,
    seq: u64,
}

impl PartialOrd for SearchNode<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchNode<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // intentionally reversed for BinaryHeap
        // ties go to the node created first
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialEq for SearchNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl Eq for SearchNode<'_> {}

impl Debug for SearchNode<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "moves: {}, cost: {}, seq: {}", self.moves, self.cost, self.seq)?;
        write!(f, "{}", self.board)
    }
}

/// Best-first search from a single start board.
///
/// Expansion is driven from outside one node at a time so that two searches can be interleaved.
pub(crate) struct Search<'a> {
    name: &'static str,
    arena: &'a Arena<SearchNode<'a>>,
    priority: &'a dyn Fn(u32, &Board) -> u32,
    dedup: Dedup,
    to_visit: BinaryHeap<&'a SearchNode<'a>>,
    closed: FnvHashSet<&'a Board>,
    current: Option<&'a SearchNode<'a>>,
    next_seq: u64,
    stats: Stats,
}

impl<'a> Search<'a> {
    pub(crate) fn new(
        name: &'static str,
        arena: &'a Arena<SearchNode<'a>>,
        priority: &'a dyn Fn(u32, &Board) -> u32,
        dedup: Dedup,
        start: Board,
    ) -> Self {
        debug!("Starting {} search using {} dedup", name, dedup);

        let mut search = Search {
            name,
            arena,
            priority,
            dedup,
            to_visit: BinaryHeap::new(),
            closed: FnvHashSet::default(),
            current: None,
            next_seq: 0,
            stats: Stats::default(),
        };
        let root = search.alloc(start, None);
        search.visit(root);
        search
    }

    pub(crate) fn current(&self) -> Option<&'a SearchNode<'a>> {
        self.current
    }

    pub(crate) fn is_solved(&self) -> bool {
        self.current.map_or(false, |node| node.board.is_goal())
    }

    /// Only possible with `Dedup::Closed` - without it the frontier only grows.
    pub(crate) fn is_exhausted(&self) -> bool {
        self.current.is_none()
    }

    #[cfg(test)]
    pub(crate) fn stats(&self) -> &Stats {
        &self.stats
    }

    pub(crate) fn into_stats(self) -> Stats {
        self.stats
    }

    /// Expands the current node and makes the best queued node current.
    pub(crate) fn step(&mut self) {
        let cur_node = match self.current {
            Some(node) => node,
            None => return,
        };

        for neighbor in cur_node.board.neighbors() {
            if let Some(prev) = cur_node.prev {
                // don't undo the last move
                if neighbor == prev.board {
                    self.stats.add_suppressed(cur_node.moves + 1);
                    continue;
                }
            }
            let next_node = self.alloc(neighbor, Some(cur_node));
            self.to_visit.push(next_node);
        }

        self.current = None;
        while let Some(node) = self.to_visit.pop() {
            if self.dedup == Dedup::Closed && self.closed.contains(&node.board) {
                self.stats.add_duplicate(node);
                continue;
            }
            self.visit(node);
            return;
        }
        debug!(
            "{} search exhausted after {} unique states",
            self.name,
            self.stats.total_visited()
        );
    }

    fn alloc(&mut self, board: Board, prev: Option<&'a SearchNode<'a>>) -> &'a SearchNode<'a> {
        let moves = prev.map_or(0, |p| p.moves + 1);
        let cost = (self.priority)(moves, &board);
        let arena = self.arena;
        let node = arena.alloc(SearchNode {
            board,
            prev,
            moves,
            cost,
            seq: self.next_seq,
        });
        self.next_seq += 1;
        self.stats.add_created(node);
        node
    }

    fn visit(&mut self, node: &'a SearchNode<'a>) {
        trace!("{} search visiting:\n{:?}", self.name, node);
        if self.dedup == Dedup::Closed {
            self.closed.insert(&node.board);
        }
        if self.stats.add_visited(node) {
            debug!("{} search visited new depth: {}", self.name, node.moves);
        }
        self.current = Some(node);
    }
}

/// Boards from the root to `final_node`, both included.
pub(crate) fn backtrack_path(final_node: &SearchNode<'_>) -> Vec<Board> {
    let mut ret = Vec::new();
    let mut node = Some(final_node);
    while let Some(n) = node {
        ret.push(n.board.clone());
        node = n.prev;
    }
    ret.reverse();
    ret
}
