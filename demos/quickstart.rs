use chrono::Utc;
use marstime::{east_to_west, J2000Offset, MarsSolarDate, Time, MSD};

fn main() {
    let now: J2000Offset = Time::from_utc(Utc::now());
    let msd: MarsSolarDate = now.to::<MSD>();

    println!("J2000 TT offset: {now}");
    println!("Mars Solar Date: {msd}");
    println!("MTC: {:.4} h", now.coordinated_mars_time());
    println!("Ls: {:.3}°", now.solar_longitude());
    if let Some(year) = now.mars_year() {
        println!("Mars year: {} ({} long)", year.number, year.length);
    }

    // Jezero crater, 77.45°E 18.44°N
    let jezero = east_to_west(77.45);
    println!("LTST at Jezero: {:.4} h", now.local_true_solar_time(jezero));
    match now.solar_elevation(jezero, 18.44) {
        Ok(elevation) => println!("Sun elevation at Jezero: {elevation:.2}°"),
        Err(err) => eprintln!("{err}"),
    }
}
