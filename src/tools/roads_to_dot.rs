extern crate argparse;
extern crate village_paving;

use std::process::exit;

use village_paving::tools::common::{Error, make_conf, make_roads};

struct Args {
    conf: String,
    roads: String,
    paved_only: bool,
}

fn main() {
    let mut args = Args {conf: String::new(), roads: String::new(), paved_only: false};
    parse_args(&mut args);
    if let Err(e) = render(&args) {
        eprintln!("roads_to_dot: {}", e);
        exit(1);
    }
}

fn parse_args(args: &mut Args) {
    use argparse::{ArgumentParser, Store, StoreTrue};
    let mut parser = ArgumentParser::new();
    parser.set_description("Converts roads with paving allocation to .dot format");
    parser.refer(&mut args.paved_only)
        .add_option(&["-p", "--paved-only"], StoreTrue, "Render only paved roads");
    parser.refer(&mut args.conf)
        .add_argument("conf", Store, "Path to conf json file").required();
    parser.refer(&mut args.roads)
        .add_argument("roads", Store, "Path to roads json lines file (default is stdin)");
    parser.parse_args_or_exit();
}

fn render(args: &Args) -> Result<(), Error> {
    use std::io::stdout;
    use village_paving::paving::{Allocate, RoadNetwork, View};
    let conf = make_conf(&args.conf)?;
    let roads = make_roads(&args.roads)?;
    let allocation = roads.allocate(&conf.allocation())?;
    let network = RoadNetwork::from_roads(&roads);
    let view = if args.paved_only {
        View::paved_roads(&network, &allocation)
    } else {
        View::all_roads(&network, &allocation)
    };
    view.render(&mut stdout())?;
    Ok(())
}
