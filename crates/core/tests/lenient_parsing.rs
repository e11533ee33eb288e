use specname_core::parse::{
    parse_bool, parse_capacity_gb, parse_frequency_ghz, parse_number, parse_screen_size,
};
use specname_core::{GpuSpec, ProcessorSpec, RamSpec, ScreenSpec, StorageSpec};

#[test]
fn numbers_are_extracted_from_text() {
    assert_eq!(parse_number("15.6"), Some(15.6));
    assert_eq!(parse_number("approx. 4,5 kg"), Some(4.5));
    assert_eq!(parse_number("120 Hz"), Some(120.0));
    assert_eq!(parse_number("n/a"), None);
    assert_eq!(parse_number("\u{664} 15.6"), Some(15.6));
}

#[test]
fn capacities_convert_units_to_gb() {
    assert_eq!(parse_capacity_gb("1 TB"), Some(1024.0));
    assert_eq!(parse_capacity_gb("0.5TB"), Some(512.0));
    assert_eq!(parse_capacity_gb("512 GB"), Some(512.0));
    assert_eq!(parse_capacity_gb("8192 MB"), Some(8.0));
    assert_eq!(parse_capacity_gb("512 MB"), Some(1.0));
    assert_eq!(parse_capacity_gb("unknown"), None);
}

#[test]
fn screen_sizes_prefer_inches() {
    assert_eq!(parse_screen_size("15.6\""), Some(15.6));
    assert_eq!(parse_screen_size("14 inch"), Some(14.0));
    assert_eq!(parse_screen_size("39.6 cm (15.6\")"), Some(15.6));
    assert_eq!(parse_screen_size("39.6 cm (15.6)"), Some(15.6));
    assert_eq!(parse_screen_size("39.6 cm"), Some(15.6));
    assert_eq!(parse_screen_size("35,6"), Some(14.0));
    assert_eq!(parse_screen_size("13.3"), Some(13.3));
    assert_eq!(parse_screen_size(""), None);
}

#[test]
fn frequencies_normalize_to_ghz() {
    assert_eq!(parse_frequency_ghz("4.7 GHz"), Some(4.7));
    assert_eq!(parse_frequency_ghz("2400 MHz"), Some(2.4));
    assert_eq!(parse_frequency_ghz("3"), Some(3.0));
}

#[test]
fn truthy_words() {
    for word in ["yes", "Sí", "si", "TRUE", "1", "y", "ja", "oui"] {
        assert!(parse_bool(word), "{word} should be truthy");
    }
    for word in ["no", "false", "0", "", "maybe"] {
        assert!(!parse_bool(word), "{word} should be falsy");
    }
}

#[test]
fn specs_deserialize_leniently_from_json() {
    let screen: ScreenSpec = serde_json::from_str(
        r#"{"diagonal_inches":"39.6 cm (15.6\")","resolution":1920,"refresh_rate_hz":"144 Hz","is_touch":"yes"}"#,
    )
    .unwrap();
    assert_eq!(screen.diagonal_inches, Some(15.6));
    assert_eq!(screen.resolution.as_deref(), Some("1920"));
    assert_eq!(screen.refresh_rate_hz, Some(144.0));
    assert!(screen.is_touch);

    let storage: StorageSpec =
        serde_json::from_str(r#"{"capacity_gb":"1 TB","media":"SSD","is_nvme":1}"#).unwrap();
    assert_eq!(storage.capacity_gb, Some(1024.0));
    assert!(storage.is_nvme);
}

#[test]
fn malformed_values_degrade_to_absent() {
    let ram: RamSpec = serde_json::from_str(
        r#"{"capacity_gb":"lots","type_detailed":true,"speed_mhz":[4800],"transfer_rate":null}"#,
    )
    .unwrap();
    assert_eq!(ram, RamSpec::default());

    let gpu: GpuSpec =
        serde_json::from_str(r#"{"has_discrete":"maybe","memory_gb":{"value":4}}"#).unwrap();
    assert!(!gpu.has_discrete);
    assert_eq!(gpu.memory_gb, None);
}

#[test]
fn missing_fields_default() {
    let proc: ProcessorSpec = serde_json::from_str("{}").unwrap();
    assert_eq!(proc, ProcessorSpec::default());
}

#[test]
fn specs_deserialize_from_yaml() {
    let proc: ProcessorSpec = serde_yaml::from_str(
        "generation: 12th Gen\nfamily: Intel Core i7\nmodel: 12700H\ncores: 14\nfrequency_ghz: 4700 MHz\n",
    )
    .unwrap();
    assert_eq!(proc.model.as_deref(), Some("12700H"));
    assert_eq!(proc.cores, Some(14.0));
    assert_eq!(proc.frequency_ghz, Some(4.7));
}

#[test]
fn serialization_skips_absent_fields() {
    let storage = StorageSpec { capacity_gb: Some(512.0), ..Default::default() };
    let json = serde_json::to_string(&storage).unwrap();
    assert_eq!(json, r#"{"capacity_gb":512.0,"is_nvme":false}"#);
}
