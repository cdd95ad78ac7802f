extern crate argparse;
extern crate rand;
extern crate rustc_serialize;
extern crate village_paving;

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use village_paving::paving::{Error, Road, Village};
use village_paving::tools::common;

struct Args {
    villages_count: usize,
    extra_roads_count: usize,
    max_distance: i64,
    max_value: i64,
    seed: u64,
}

fn main() {
    let mut args = Args {
        villages_count: 2,
        extra_roads_count: 0,
        max_distance: 30,
        max_value: 100,
        seed: 1,
    };
    parse_args(&mut args);
    if args.villages_count < 2 || args.max_distance < 1 || args.max_value < 0 {
        eprintln!("generate_roads: need at least 2 villages, positive max distance and non-negative max value");
        std::process::exit(2);
    }
    if let Err(e) = print_roads(&args) {
        eprintln!("generate_roads: {}", e);
        std::process::exit(1);
    }
}

fn print_roads(args: &Args) -> Result<(), common::Error> {
    use rustc_serialize::json;
    for road in generate(args)? {
        println!("{}", json::encode(&road)?);
    }
    Ok(())
}

fn parse_args(args: &mut Args) {
    use argparse::{ArgumentParser, Store};
    let mut parser = ArgumentParser::new();
    parser.set_description("Generates connected road network as json lines");
    parser.refer(&mut args.villages_count)
        .add_argument("villages", Store, "Number of villages").required();
    parser.refer(&mut args.extra_roads_count)
        .add_argument("extra", Store, "Number of roads beyond spanning tree");
    parser.refer(&mut args.max_distance)
        .add_option(&["--max-distance"], Store, "Maximum road length in meters");
    parser.refer(&mut args.max_value)
        .add_option(&["--max-value"], Store, "Maximum road value");
    parser.refer(&mut args.seed)
        .add_option(&["--seed"], Store, "Random generator seed");
    parser.parse_args_or_exit();
}

fn generate(args: &Args) -> Result<Vec<Road<Village>>, Error> {
    let mut rng = StdRng::seed_from_u64(args.seed);
    let village = |x: usize| Village(format!("V{}", x));
    let mut pairs = HashSet::new();
    let mut result = Vec::new();
    let mut connect = |rng: &mut StdRng, from: usize, to: usize| -> Result<bool, Error> {
        if from == to || !pairs.insert((from.min(to), from.max(to))) {
            return Ok(false);
        }
        let distance = rng.random_range(1..=args.max_distance);
        let value = rng.random_range(0..=args.max_value);
        result.push(Road::new(village(from), village(to), distance, value)?);
        Ok(true)
    };
    for to in 1..args.villages_count {
        let from = rng.random_range(0..to);
        connect(&mut rng, from, to)?;
    }
    let max_pairs = args.villages_count * (args.villages_count - 1) / 2;
    let extra = args.extra_roads_count.min(max_pairs - (args.villages_count - 1));
    let mut added = 0;
    while added < extra {
        let from = rng.random_range(0..args.villages_count);
        let to = rng.random_range(0..args.villages_count);
        if connect(&mut rng, from, to)? {
            added += 1;
        }
    }
    Ok(result)
}
