use crate::model::RamSpec;
use crate::parse::{display_number, present};
use crate::text::clean_join;

/// `[N GB] [type] [speed MHz] [rate MT/s]`.
pub fn format_ram(spec: &RamSpec) -> String {
    let capacity = present(spec.capacity_gb).map(|gb| format!("{}GB", display_number(gb)));
    let speed = present(spec.speed_mhz).map(|mhz| format!("{}MHz", display_number(mhz)));
    let transfer = spec
        .transfer_rate
        .as_deref()
        .map(str::trim)
        .filter(|rate| !rate.is_empty())
        .map(transfer_rate_token);

    clean_join([capacity, spec.type_detailed.clone(), speed, transfer])
}

/// Feeds sometimes send the rate with its unit already attached (`4800 MT/s`).
fn transfer_rate_token(rate: &str) -> String {
    if rate.to_lowercase().ends_with("mt/s") {
        rate.to_string()
    } else {
        format!("{rate}MT/s")
    }
}

#[cfg(test)]
mod tests {
    use super::transfer_rate_token;

    #[test]
    fn transfer_rate_unit_is_not_doubled() {
        assert_eq!(transfer_rate_token("4800"), "4800MT/s");
        assert_eq!(transfer_rate_token("4800 MT/s"), "4800 MT/s");
        assert_eq!(transfer_rate_token("6400mt/s"), "6400mt/s");
    }
}
