use std::{
    collections::HashMap,
    env,
    error::Error,
    sync::{OnceLock, RwLock},
};

use rand::{random, rngs::StdRng, Rng, SeedableRng};

pub const DEFAULT_TEST_SEED_ENV: &str = "DEFAULT_TEST_SEED";

const NESTING_PROBABILITY: f64 = 0.4;

static SEEDS: OnceLock<RwLock<HashMap<&'static str, u64>>> = OnceLock::new();

fn get_seeds_lock() -> &'static RwLock<HashMap<&'static str, u64>> {
    SEEDS.get_or_init(|| RwLock::new(HashMap::new()))
}

fn get_seed(key: &'static str) -> Result<u64, Box<dyn Error>> {
    let mut seeds = get_seeds_lock().write()?;
    Ok(seeds
        .entry(key)
        .or_insert_with(|| {
            let seed = env::var(key)
                .ok()
                .and_then(|seed_var| seed_var.parse::<u64>().ok())
                .unwrap_or_else(random);
            println!("Using seed {} for {}", seed, key);
            seed
        })
        .to_owned())
}

fn build_rng(key: Option<&'static str>) -> Result<StdRng, Box<dyn Error>> {
    let seed = get_seed(key.unwrap_or(DEFAULT_TEST_SEED_ENV))?;
    Ok(StdRng::seed_from_u64(seed))
}

pub fn get_seeded_rng() -> Result<StdRng, Box<dyn Error>> {
    build_rng(None)
}

pub fn get_seeded_rng_from_scope(key: &'static str) -> Result<StdRng, Box<dyn Error>> {
    build_rng(Some(key))
}

/// Shape of a flock tree, used to build random compositions in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeShape {
    Leaf,
    Node(Vec<TreeShape>),
}

impl TreeShape {
    /// Builds a random tree whose root is always a node.
    ///
    /// Nodes have at most `max_children` children and nesting never goes
    /// deeper than `max_depth` nodes below the root.
    pub fn random(rng: &mut impl Rng, max_depth: usize, max_children: usize) -> Self {
        let count = rng.gen_range(0..=max_children);
        let children = (0..count)
            .map(|_| {
                if max_depth > 0 && rng.gen_bool(NESTING_PROBABILITY) {
                    Self::random(rng, max_depth - 1, max_children)
                } else {
                    TreeShape::Leaf
                }
            })
            .collect();
        TreeShape::Node(children)
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            TreeShape::Leaf => 1,
            TreeShape::Node(children) => children.iter().map(TreeShape::leaf_count).sum(),
        }
    }

    /// Number of nodes on the longest path from the root, leaves excluded.
    pub fn depth(&self) -> usize {
        match self {
            TreeShape::Leaf => 0,
            TreeShape::Node(children) => {
                1 + children.iter().map(TreeShape::depth).max().unwrap_or(0)
            }
        }
    }
}
