mod allocate;
mod common;
mod error;
mod network;
mod rank;
mod render;
mod road;

pub mod report;
pub mod sample;

pub use self::allocate::{Allocate, Allocation, Conf, allocate};
pub use self::common::{Density, Meters, Money, Value, Village};
pub use self::error::Error;
pub use self::network::RoadNetwork;
pub use self::rank::{by_density_descending, is_ranked, rank};
pub use self::render::View;
pub use self::road::Road;
