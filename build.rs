use std::env;
use std::fmt::Write as _;
use std::path::PathBuf;

const LEAP_SECONDS: &str = "data/leap_seconds.json";

/// Turn the leap-second data file into a `[LeapSecond; N]` literal, rejecting
/// an empty or unsorted table at build time.
fn main() {
    println!("cargo:rerun-if-changed={LEAP_SECONDS}");

    let crate_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let text = std::fs::read_to_string(crate_dir.join(LEAP_SECONDS))
        .expect("Unable to read data/leap_seconds.json");
    let json: serde_json::Value =
        serde_json::from_str(&text).expect("data/leap_seconds.json is not valid JSON");
    let entries = json["entries"]
        .as_array()
        .expect("data/leap_seconds.json has no \"entries\" array");
    assert!(!entries.is_empty(), "data/leap_seconds.json has no entries");

    let mut literal = String::from("[\n");
    let mut previous = f64::NEG_INFINITY;
    for (index, entry) in entries.iter().enumerate() {
        let jd = entry["jd"].as_f64().expect("entry without numeric \"jd\"");
        let dt = entry["tt_minus_utc"]
            .as_f64()
            .expect("entry without numeric \"tt_minus_utc\"");
        assert!(jd > previous, "leap-second entry {index} is out of order");
        previous = jd;
        writeln!(literal, "    LeapSecond {{ jd: {jd:?}, tt_minus_utc: {dt:?} }},").unwrap();
    }
    literal.push(']');

    std::fs::write(out_dir.join("leap_seconds.rs"), literal)
        .expect("Unable to write generated leap-second table");
}
