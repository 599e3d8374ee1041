//! Board assembly.
//!
//! Turns a `BoardConfig` into a finished `Board`: pick the template, place
//! terrain, deal number tokens onto the non-desert cells, bind port types to
//! the coastal slots, and merge everything into per-cell records.
//!
//! Every randomized step draws from the generator passed in, so a seeded
//! `SmallRng` reproduces a board exactly. No state survives between calls.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::board::{
    AdjacencyIndex, Board, BoardTemplate, NumberToken, PortType, TemplateError, Terrain,
};
use crate::config::{BoardConfig, Placement, PlayerCount, PortPlacement};
use crate::eval::{score_numbers, score_terrain};
use crate::search::{anneal, anneal_all, AnnealingSchedule};

/// Errors that prevent a board from being generated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("{player_count} board template is malformed: {source}")]
    Template {
        player_count: PlayerCount,
        #[source]
        source: TemplateError,
    },
}

/// Generates a board, reporting a malformed template as an error.
pub fn try_generate<R: Rng + ?Sized>(
    config: &BoardConfig,
    rng: &mut R,
) -> Result<Board, GenerateError> {
    let template = BoardTemplate::for_player_count(config.player_count);
    template
        .validate()
        .map_err(|source| GenerateError::Template {
            player_count: config.player_count,
            source,
        })?;

    let adjacency = AdjacencyIndex::new(template.coordinates);
    let terrain = generate_terrain(config, template, &adjacency, rng);
    let numbers = generate_numbers(config, &terrain, template, &adjacency, rng);
    let port_types = generate_ports(config, template, rng);

    info!(
        config = %config,
        terrain_score = score_terrain(&terrain, &adjacency),
        number_score = score_numbers(&numbers, &terrain, &adjacency),
        "generated board"
    );

    Ok(Board::assemble(template, &terrain, &numbers, &port_types))
}

/// Generates a board.
///
/// Panics if the compiled-in template is malformed; pools that do not fill
/// the template are a data bug, not a runtime condition.
pub fn generate<R: Rng + ?Sized>(config: &BoardConfig, rng: &mut R) -> Board {
    match try_generate(config, rng) {
        Ok(board) => board,
        Err(e) => panic!("{}", e),
    }
}

/// Shuffles the terrain pool and, for balanced placement, anneals it so
/// that matching terrain rarely touches.
pub fn generate_terrain<R: Rng + ?Sized>(
    config: &BoardConfig,
    template: &BoardTemplate,
    adjacency: &AdjacencyIndex,
    rng: &mut R,
) -> Vec<Terrain> {
    let mut terrain = template.terrain_pool();
    terrain.shuffle(rng);

    let center = config.centers_desert().then(|| template.center_index());
    if let Some(center) = center {
        center_desert(&mut terrain, center);
    }

    match config.terrain {
        Placement::Random => terrain,
        Placement::Balanced => {
            anneal_all(
                terrain,
                &AnnealingSchedule::TERRAIN,
                |t: &[Terrain]| score_terrain(t, adjacency),
                |i, j, t: &[Terrain]| terrain_swap_allowed(i, j, t, center),
                rng,
            )
            .best
        }
    }
}

/// Moves a desert onto `center` by swapping it with the center's terrain.
/// Does nothing if the center already holds a desert.
pub fn center_desert(terrain: &mut [Terrain], center: usize) {
    if terrain[center].is_desert() {
        return;
    }
    if let Some(desert) = terrain.iter().position(|t| t.is_desert()) {
        terrain.swap(desert, center);
    }
}

/// Swap legality for terrain annealing.
///
/// Identical values are never swapped. With a pinned `center`, a swap that
/// touches the center and involves a desert on either side is refused.
pub fn terrain_swap_allowed(
    i: usize,
    j: usize,
    terrain: &[Terrain],
    center: Option<usize>,
) -> bool {
    if let Some(center) = center {
        let touches_center = i == center || j == center;
        if touches_center && (terrain[i].is_desert() || terrain[j].is_desert()) {
            return false;
        }
    }
    terrain[i] != terrain[j]
}

/// Shuffles the template's tokens onto the non-desert cells and, for
/// balanced placement, anneals them against the fixed terrain.
pub fn generate_numbers<R: Rng + ?Sized>(
    config: &BoardConfig,
    terrain: &[Terrain],
    template: &BoardTemplate,
    adjacency: &AdjacencyIndex,
    rng: &mut R,
) -> Vec<Option<NumberToken>> {
    let mut tokens = template.numbers.to_vec();
    tokens.shuffle(rng);
    let numbers = deal_numbers(&tokens, terrain);

    match config.numbers {
        Placement::Random => numbers,
        Placement::Balanced => {
            let domain: Vec<usize> = terrain
                .iter()
                .enumerate()
                .filter(|(_, t)| !t.is_desert())
                .map(|(i, _)| i)
                .collect();
            anneal(
                numbers,
                &domain,
                &AnnealingSchedule::NUMBERS,
                |n: &[Option<NumberToken>]| score_numbers(n, terrain, adjacency),
                number_swap_allowed,
                rng,
            )
            .best
        }
    }
}

/// Assigns `tokens` in order to the non-desert cells, leaving deserts empty.
///
/// Panics if the token count differs from the number of non-desert cells.
pub fn deal_numbers(tokens: &[NumberToken], terrain: &[Terrain]) -> Vec<Option<NumberToken>> {
    let mut next = tokens.iter().copied();
    let numbers: Vec<Option<NumberToken>> = terrain
        .iter()
        .map(|t| if t.is_desert() { None } else { next.next() })
        .collect();

    let dealt = numbers.iter().flatten().count();
    assert!(
        dealt == tokens.len() && next.next().is_none() && dealt + deserts(terrain) == terrain.len(),
        "{} tokens do not fit {} non-desert cells",
        tokens.len(),
        terrain.len() - deserts(terrain)
    );
    numbers
}

fn deserts(terrain: &[Terrain]) -> usize {
    terrain.iter().filter(|t| t.is_desert()).count()
}

/// Swap legality for number annealing: both cells must hold a token.
pub fn number_swap_allowed(i: usize, j: usize, numbers: &[Option<NumberToken>]) -> bool {
    numbers[i].is_some() && numbers[j].is_some()
}

/// Port types in slot order, shuffled when placement is random.
pub fn generate_ports<R: Rng + ?Sized>(
    config: &BoardConfig,
    template: &BoardTemplate,
    rng: &mut R,
) -> Vec<PortType> {
    let mut types = template.port_types();
    if config.ports == PortPlacement::Random {
        types.shuffle(rng);
    }
    types
}

/// Owns a random generator and produces boards from it.
pub struct BoardGenerator {
    rng: SmallRng,
}

impl BoardGenerator {
    /// Creates a generator seeded from the operating system.
    pub fn new() -> Self {
        BoardGenerator {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates a generator whose boards are reproducible for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        BoardGenerator {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Generates one board.
    pub fn generate(&mut self, config: &BoardConfig) -> Board {
        generate(config, &mut self.rng)
    }

    /// Generates one board, reporting a malformed template as an error.
    pub fn try_generate(&mut self, config: &BoardConfig) -> Result<Board, GenerateError> {
        try_generate(config, &mut self.rng)
    }
}

impl Default for BoardGenerator {
    fn default() -> Self {
        Self::new()
    }
}
