use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader, Read};

use rustc_serialize::{Decodable, Decoder, json};
use thiserror::Error as ThisError;

use crate::paving;
use crate::paving::{Meters, Money, Road, Value, Village};

pub const DEFAULT_CURRENCY: &str = "Rp";

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("{path}: {source}")]
    Io {
        path: String,
        source: io::Error,
    },
    #[error("{path}: invalid conf: {source}")]
    Conf {
        path: String,
        source: json::DecoderError,
    },
    #[error("{path}:{line}: invalid road: {source}")]
    Line {
        path: String,
        line: usize,
        source: json::DecoderError,
    },
    #[error("failed to encode result: {0}")]
    Encode(#[from] json::EncoderError),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
    #[error(transparent)]
    Paving(#[from] paving::Error),
}

/// Allocation settings read from a conf json file.
#[derive(Clone, Debug, PartialEq)]
pub struct Conf {
    pub budget: Money,
    pub cost_per_meter: Money,
    pub currency: Option<String>,
}

impl Conf {
    pub fn allocation(&self) -> paving::Conf {
        paving::Conf {budget: self.budget, cost_per_meter: self.cost_per_meter}
    }

    pub fn report(&self) -> paving::report::Conf {
        paving::report::Conf {
            cost_per_meter: self.cost_per_meter,
            currency: self.currency.as_ref().map(|x| x.as_str()).unwrap_or(DEFAULT_CURRENCY),
        }
    }
}

impl Decodable for Conf {
    fn decode<D: Decoder>(d: &mut D) -> Result<Conf, D::Error> {
        d.read_struct("Conf", 3, |d| {
            Ok(Conf {
                budget: d.read_struct_field("budget", 0, Decodable::decode)?,
                cost_per_meter: d.read_struct_field("cost_per_meter", 1, Decodable::decode)?,
                currency: d.read_struct_field("currency", 2, Decodable::decode)?,
            })
        })
    }
}

/// One line of a road file, before validation.
struct RoadRecord {
    from: Village,
    to: Village,
    distance: Meters,
    value: Value,
}

impl Decodable for RoadRecord {
    fn decode<D: Decoder>(d: &mut D) -> Result<RoadRecord, D::Error> {
        d.read_struct("RoadRecord", 4, |d| {
            Ok(RoadRecord {
                from: d.read_struct_field("from", 0, Decodable::decode)?,
                to: d.read_struct_field("to", 1, Decodable::decode)?,
                distance: d.read_struct_field("distance", 2, Decodable::decode)?,
                value: d.read_struct_field("value", 3, Decodable::decode)?,
            })
        })
    }
}

pub fn make_conf(file_path: &str) -> Result<Conf, Error> {
    let mut data = String::new();
    File::open(file_path)
        .and_then(|mut x| x.read_to_string(&mut data))
        .map_err(|e| Error::Io {path: file_path.to_string(), source: e})?;
    parse_conf(&data).map_err(|e| Error::Conf {path: file_path.to_string(), source: e})
}

pub fn parse_conf(data: &str) -> Result<Conf, json::DecoderError> {
    json::decode(data)
}

/// Reads roads as json lines from `file_path`, or from stdin when it is empty.
pub fn make_roads(file_path: &str) -> Result<Vec<Road<Village>>, Error> {
    if file_path.is_empty() {
        let input = io::stdin();
        read_roads("<stdin>", input.lock())
    } else {
        let file = File::open(file_path)
            .map_err(|e| Error::Io {path: file_path.to_string(), source: e})?;
        read_roads(file_path, BufReader::new(file))
    }
}

pub fn read_roads<B: BufRead>(name: &str, input: B) -> Result<Vec<Road<Village>>, Error> {
    let mut roads = Vec::new();
    for (number, line) in input.lines().enumerate() {
        let line = line.map_err(|e| Error::Io {path: name.to_string(), source: e})?;
        if line.trim().is_empty() {
            continue;
        }
        let record: RoadRecord = json::decode(&line)
            .map_err(|e| Error::Line {path: name.to_string(), line: number + 1, source: e})?;
        roads.push(Road::new(record.from, record.to, record.distance, record.value)?);
    }
    Ok(roads)
}

#[test]
fn test_parse_conf_should_succeed() {
    let conf = parse_conf(r#"{"budget": 40000, "cost_per_meter": 2000, "currency": "USD"}"#).unwrap();
    assert_eq!(conf, Conf {budget: 40000, cost_per_meter: 2000, currency: Some("USD".to_string())});
    assert_eq!(conf.allocation(), paving::Conf {budget: 40000, cost_per_meter: 2000});
    assert_eq!(conf.report().currency, "USD");
}

#[test]
fn test_parse_conf_without_currency_should_use_default() {
    let conf = parse_conf(r#"{"budget": 40000, "cost_per_meter": 2000}"#).unwrap();
    assert_eq!(conf.currency, None);
    assert_eq!(conf.report().currency, DEFAULT_CURRENCY);
}

#[test]
fn test_parse_conf_without_budget_should_fail() {
    assert!(parse_conf(r#"{"cost_per_meter": 2000}"#).is_err());
}

#[test]
fn test_read_roads_should_skip_blank_lines() {
    let data = concat!(
        r#"{"from": "P", "to": "A", "distance": 5, "value": 80}"#, "\n",
        "\n",
        r#"{"from": "P", "to": "B", "distance": 22, "value": 65}"#, "\n",
    );
    let roads = read_roads("roads", data.as_bytes()).unwrap();
    assert_eq!(roads, vec![
        Road::new(Village::from("P"), Village::from("A"), 5, 80).unwrap(),
        Road::new(Village::from("P"), Village::from("B"), 22, 65).unwrap(),
    ]);
}

#[test]
fn test_read_roads_with_malformed_line_should_report_line_number() {
    let data = concat!(
        r#"{"from": "P", "to": "A", "distance": 5, "value": 80}"#, "\n",
        r#"{"from": "P", "to": "B"}"#, "\n",
    );
    match read_roads("roads", data.as_bytes()) {
        Err(Error::Line {line, ..}) => assert_eq!(line, 2),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_read_roads_with_zero_distance_should_fail() {
    let data = r#"{"from": "P", "to": "A", "distance": 0, "value": 80}"#;
    match read_roads("roads", data.as_bytes()) {
        Err(Error::Paving(paving::Error::InvalidEdge {from, to, ..})) => {
            assert_eq!((from.as_str(), to.as_str()), ("P", "A"));
        },
        other => panic!("unexpected result: {:?}", other),
    }
}
