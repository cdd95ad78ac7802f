use std::fmt;

use rustc_serialize::{Decodable, Decoder, Encodable, Encoder};

pub type Meters = i64;
pub type Money = i64;
pub type Value = i64;
pub type Density = f64;

/// Village label as it appears in road files and rendered graphs.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Village(pub String);

impl Village {
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Village {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'r> From<&'r str> for Village {
    fn from(name: &'r str) -> Village {
        Village(name.to_string())
    }
}

impl Decodable for Village {
    fn decode<D: Decoder>(d: &mut D) -> Result<Village, D::Error> {
        d.read_str().map(Village)
    }
}

impl Encodable for Village {
    fn encode<S: Encoder>(&self, s: &mut S) -> Result<(), S::Error> {
        s.emit_str(&self.0)
    }
}

#[test]
fn test_decode_village_from_json_string_should_succeed() {
    use rustc_serialize::json;
    let village: Village = json::decode("\"P\"").unwrap();
    assert_eq!(village, Village::from("P"));
}

#[test]
fn test_encode_village_should_produce_json_string() {
    use rustc_serialize::json;
    assert_eq!(json::encode(&Village::from("P")).unwrap(), "\"P\"");
}
