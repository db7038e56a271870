use nom::{
    character::complete::{alpha1, char},
    combinator::all_consuming,
    sequence::separated_pair,
    IResult,
};
use tracing::debug;

use crate::{
    caves::{CaveId, CaveSystem, END_CAVE, START_CAVE},
    error::{Error, Result},
};

fn edge(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(alpha1, char('-'), alpha1)(input)
}

/// Yields one `(name, name)` pair per non-blank line.
pub fn parse_edges(input: &str) -> impl Iterator<Item = Result<(&str, &str)>> + '_ {
    input
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_number, line)| {
            all_consuming(edge)(line)
                .map(|(_, pair)| pair)
                .map_err(|_| Error::MalformedEdge {
                    line: line_number,
                    text: line.to_string(),
                })
        })
}

/// Builds the cave system described by `input` and checks that it can be searched:
/// both endpoints must be present and no two large caves may be connected.
pub fn parse_cave_system(input: &str) -> Result<CaveSystem<'_>> {
    let mut caves = CaveSystem::new();
    itertools::process_results(parse_edges(input), |edges| {
        for (a, b) in edges {
            caves.add_edge(a, b);
        }
    })?;

    for (id, name) in [(CaveId::START, START_CAVE), (CaveId::END, END_CAVE)] {
        if !caves.is_mentioned(id) {
            return Err(Error::MissingCave(name));
        }
    }
    if let Some((a, b)) = caves.adjacent_large_caves() {
        return Err(Error::AdjacentLargeCaves(a.to_string(), b.to_string()));
    }

    debug!(
        caves = caves.cave_count(),
        edges = caves.edge_count(),
        "built cave system"
    );
    Ok(caves)
}
