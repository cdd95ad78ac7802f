use std::fmt::Display;
use std::io;

use itertools::Itertools;

use super::allocate::Allocation;
use super::common::Money;
use super::road::Road;

pub struct Conf<'r> {
    pub cost_per_meter: Money,
    pub currency: &'r str,
}

pub fn write_report<V, W>(output: &mut W, allocation: &Allocation<V>, conf: &Conf) -> io::Result<()>
        where V: Display, W: io::Write {
    writeln!(output, "----- Optimization Result -----")?;
    writeln!(output, "Initial Budget: {} {}", conf.currency, format_money(allocation.initial_budget()))?;
    writeln!(output, "Paved Roads:")?;
    for road in allocation.paved() {
        writeln!(output, "{}", format_road(road, conf.cost_per_meter)?)?;
    }
    writeln!(output, "-----------------------")?;
    writeln!(output, "Remaining Budget: {} {}", conf.currency, format_money(allocation.remaining_budget()))?;
    writeln!(output, "Total Value Gained: {}", allocation.total_value())
}

pub fn format_road<V: Display>(road: &Road<V>, cost_per_meter: Money) -> io::Result<String> {
    let density = road.value_density(cost_per_meter)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    Ok(format!("Road < from = {}, to = {}, distance = {}, value = {}, cost = {}, value/cost = {} >",
               road.from(), road.to(), road.distance(), road.value(),
               format_money(road.paving_cost(cost_per_meter)), density))
}

/// Formats with comma thousands separators: `40000` becomes `40,000`.
pub fn format_money(amount: Money) -> String {
    let digits = amount.unsigned_abs().to_string();
    let head = digits.len() % 3;
    let mut groups = digits[head..].as_bytes().chunks(3)
        .map(|x| String::from_utf8_lossy(x).into_owned());
    let grouped = if head > 0 {
        Some(digits[..head].to_string()).into_iter().chain(groups).join(",")
    } else {
        groups.join(",")
    };
    if amount < 0 { format!("-{}", grouped) } else { grouped }
}

#[test]
fn test_format_money_should_group_thousands() {
    assert_eq!(format_money(0), "0");
    assert_eq!(format_money(999), "999");
    assert_eq!(format_money(1000), "1,000");
    assert_eq!(format_money(40000), "40,000");
    assert_eq!(format_money(123456), "123,456");
    assert_eq!(format_money(1234567), "1,234,567");
    assert_eq!(format_money(-1234567), "-1,234,567");
}

#[test]
fn test_format_road_should_list_cost_and_density() {
    let road = Road::new('P', 'H', 4, 100).unwrap();
    assert_eq!(format_road(&road, 2000).unwrap(),
               "Road < from = P, to = H, distance = 4, value = 100, cost = 8,000, value/cost = 0.0125 >");
}

#[test]
fn test_write_report_should_summarize_allocation() {
    use super::allocate::allocate;
    let roads = [
        Road::new('A', 'B', 2, 23).unwrap(),
        Road::new('A', 'C', 4, 7).unwrap(),
    ];
    let allocation = allocate(&roads, 40000, 5000).unwrap();
    let mut output = Vec::new();
    write_report(&mut output, &allocation, &Conf {cost_per_meter: 5000, currency: "Rp"}).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), concat!(
        "----- Optimization Result -----\n",
        "Initial Budget: Rp 40,000\n",
        "Paved Roads:\n",
        "Road < from = A, to = B, distance = 2, value = 23, cost = 10,000, value/cost = 0.0023 >\n",
        "Road < from = A, to = C, distance = 4, value = 7, cost = 20,000, value/cost = 0.00035 >\n",
        "-----------------------\n",
        "Remaining Budget: Rp 10,000\n",
        "Total Value Gained: 30\n",
    ));
}
