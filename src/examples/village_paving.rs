extern crate village_paving;

use std::io::{Write, stdout};
use std::process::exit;

use village_paving::paving::{Allocate, Conf, RoadNetwork, View};
use village_paving::paving::report;
use village_paving::paving::sample::{BUDGET, COST_PER_METER, village_roads};
use village_paving::tools::common::{DEFAULT_CURRENCY, Error};

fn main() {
    if let Err(e) = run() {
        eprintln!("village_paving_example: {}", e);
        exit(1);
    }
}

fn run() -> Result<(), Error> {
    let roads = village_roads()?;
    let allocation = roads.allocate(&Conf {budget: BUDGET, cost_per_meter: COST_PER_METER})?;
    let mut output = stdout();
    let report_conf = report::Conf {cost_per_meter: COST_PER_METER, currency: DEFAULT_CURRENCY};
    report::write_report(&mut output, &allocation, &report_conf)?;
    let network = RoadNetwork::from_roads(&roads);
    writeln!(output)?;
    View::all_roads(&network, &allocation).render(&mut output)?;
    writeln!(output)?;
    View::paved_roads(&network, &allocation).render(&mut output)?;
    Ok(())
}
