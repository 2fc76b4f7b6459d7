//! Exercises a [`Tree`]: builds one from random keys, unbalances it with more random inserts and
//! rebalances it, printing the tree and its traversals along the way.

use std::fmt::Display;

use bst_rebalance::Tree;
use clap::Parser;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Parser, Debug)]
#[command(name = "demo")]
#[command(about = "Build, unbalance and rebalance a binary search tree", long_about = None)]
struct Config {
    /// Number of random keys the tree is built from
    #[arg(long, default_value_t = 15)]
    initial: usize,

    /// Largest initial key (keys start at 1)
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    initial_max: u32,

    /// Number of random keys inserted afterwards
    #[arg(long, default_value_t = 200)]
    extra: usize,

    /// Largest inserted key (keys start at 1)
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u32).range(1..))]
    extra_max: u32,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Log at debug level when RUST_LOG isn't set
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let mut builder = pretty_env_logger::formatted_builder();
    match std::env::var("RUST_LOG") {
        Ok(filters) => {
            builder.parse_filters(&filters);
        }
        Err(_) if verbose => {
            builder.filter_level(log::LevelFilter::Debug);
        }
        Err(_) => {
            builder.filter_level(log::LevelFilter::Warn);
        }
    }
    let _ = builder.try_init();
}

fn print_traversals<K: Display>(tree: &Tree<K>) {
    println!("Printing in level order: {}", join(tree.level_order()));
    println!("Printing in pre-order: {}", join(tree.pre_order()));
    println!("Printing in post-order: {}", join(tree.post_order()));
    println!("Printing in in-order: {}", join(tree.in_order()));
}

fn join<K: Display>(keys: Vec<&K>) -> String {
    let keys: Vec<String> = keys.iter().map(ToString::to_string).collect();
    format!("[{}]", keys.join(", "))
}

fn main() {
    let config = Config::parse();
    init_logging(config.verbose);
    debug!("{:?}", config);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let initial: Vec<u32> = (0..config.initial)
        .map(|_| rng.gen_range(1..=config.initial_max))
        .collect();
    let mut tree = Tree::build(initial);
    print!("{}", tree);
    println!("Balanced: {}", tree.is_balanced());
    print_traversals(&tree);

    let mut inserted = 0;
    for _ in 0..config.extra {
        if tree.insert(rng.gen_range(1..=config.extra_max)) {
            inserted += 1;
        }
    }
    info!("inserted {} of {} extra keys", inserted, config.extra);
    print!("{}", tree);
    println!("Balanced: {}", tree.is_balanced());

    tree.rebalance();
    print!("{}", tree);
    println!("Balanced: {}", tree.is_balanced());
    print_traversals(&tree);
}
