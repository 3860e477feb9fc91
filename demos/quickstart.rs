use chrono::Utc;
use holochron::{all_offsets, swet_days, utc_to_cgt, utc_to_swet, EpochMode};

fn main() {
    let now = Utc::now();
    let swet = utc_to_swet(now);

    println!("UTC: {now}");
    for mode in EpochMode::ALL {
        println!("{} ({mode})", utc_to_cgt(now, mode));
    }
    println!("SWET: {swet} ({:.3} days)", swet_days(swet).value());
    for label in all_offsets(now) {
        println!("{}: {label}", label.system_name);
    }
}
