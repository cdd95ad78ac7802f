extern crate argparse;
extern crate rustc_serialize;
extern crate village_paving;

use std::process::exit;

use village_paving::tools::common::{Error, make_conf, make_roads};

struct Args {
    conf: String,
    roads: String,
    report: bool,
}

fn main() {
    let mut args = Args {conf: String::new(), roads: String::new(), report: false};
    parse_args(&mut args);
    if let Err(e) = allocate(&args) {
        eprintln!("allocate_roads: {}", e);
        exit(1);
    }
}

fn parse_args(args: &mut Args) {
    use argparse::{ArgumentParser, Store, StoreTrue};
    let mut parser = ArgumentParser::new();
    parser.set_description("Chooses roads to pave within budget by value per cost");
    parser.refer(&mut args.report)
        .add_option(&["-r", "--report"], StoreTrue, "Print text report instead of json");
    parser.refer(&mut args.conf)
        .add_argument("conf", Store, "Path to conf json file").required();
    parser.refer(&mut args.roads)
        .add_argument("roads", Store, "Path to roads json lines file (default is stdin)");
    parser.parse_args_or_exit();
}

fn allocate(args: &Args) -> Result<(), Error> {
    use std::io::stdout;
    use rustc_serialize::json;
    use village_paving::paving::Allocate;
    use village_paving::paving::report::write_report;
    let conf = make_conf(&args.conf)?;
    let roads = make_roads(&args.roads)?;
    let allocation = roads.allocate(&conf.allocation())?;
    if args.report {
        write_report(&mut stdout(), &allocation, &conf.report())?;
    } else {
        println!("{}", json::encode(&allocation)?);
    }
    Ok(())
}
