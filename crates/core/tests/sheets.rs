use std::fs;

use specname_core::document::{DocumentError, DocumentFormat};
use specname_core::sheet::{load_sheets, parse_sheets, SpecSheet};
use specname_core::FormatOptions;
use tempfile::tempdir;

const DELL_XPS_JSON: &str = r#"{
    "sku": "TEST-GRANULAR-V2",
    "display_name": "Test Laptop Granular V2",
    "processor": {"family": "Intel Core i7", "generation": "12th Gen", "model": "12700H",
                  "cores": 14, "frequency_ghz": "4.7 GHz", "cache": "24MB"},
    "screen": {"diagonal_inches": 15.6, "resolution": "1920x1080", "panel_type": "IPS",
               "refresh_rate_hz": 120},
    "discrete_gpu": {"has_discrete": true, "brand": "NVIDIA", "model": "RTX 3050", "memory_gb": 4.0},
    "integrated_gpu": {"brand": "Intel", "model": "Iris Xe", "family": "Intel Graphics",
                       "memory_gb": 0},
    "storage": {"capacity_gb": 512, "media": "SSD", "is_nvme": true},
    "ram": {"capacity_gb": 16, "type_detailed": "DDR5", "speed_mhz": 4800,
            "transfer_rate": "4800 MT/s"}
}"#;

#[test]
fn full_names_for_a_complete_sheet() {
    let sheets = parse_sheets(DELL_XPS_JSON, DocumentFormat::Json).unwrap();
    assert_eq!(sheets.len(), 1);
    let names = sheets[0].full_names(&FormatOptions::default());

    assert_eq!(names.sku.as_deref(), Some("TEST-GRANULAR-V2"));
    assert_eq!(names.processor, "12th Gen Intel Core i7 12700H");
    assert_eq!(names.screen, "15.6\" FHD IPS 120Hz");
    assert_eq!(names.discrete_gpu, "NVIDIA RTX 3050 4GB");
    assert_eq!(names.integrated_gpu, "Intel Iris Xe Intel Graphics");
    assert_eq!(names.storage, "512GB SSD NVMe");
    assert_eq!(names.ram, "16GB DDR5 4800MHz 4800 MT/s");
}

#[test]
fn processor_details_option_switches_to_extended_name() {
    let sheets = parse_sheets(DELL_XPS_JSON, DocumentFormat::Json).unwrap();
    let options = FormatOptions::default().with_processor_details(true);
    let names = sheets[0].full_names(&options);
    assert_eq!(names.processor, "12th Gen Intel Core i7 12700H (14-Core, up to 4.7 GHz, 24MB Cache)");
}

#[test]
fn entries_follow_display_order() {
    let names = SpecSheet::default().full_names(&FormatOptions::default());
    let labels: Vec<&str> = names.entries().iter().map(|(label, _)| *label).collect();
    assert_eq!(
        labels,
        ["processor", "screen", "discrete_gpu", "integrated_gpu", "storage", "ram"]
    );
    assert!(names.entries().iter().all(|(_, value)| value.is_empty()));
}

#[test]
fn documents_may_hold_a_list_of_sheets() {
    let yaml = "\
- sku: A
  storage: {capacity_gb: 2048, media: SSD}
- sku: B
  ram: {capacity_gb: 8, type_detailed: DDR4}
";
    let sheets = parse_sheets(yaml, DocumentFormat::Yaml).unwrap();
    assert_eq!(sheets.len(), 2);
    let options = FormatOptions::default();
    assert_eq!(sheets[0].full_names(&options).storage, "2TB SSD");
    assert_eq!(sheets[1].full_names(&options).ram, "8GB DDR4");
}

#[test]
fn enrich_cleans_feed_data() {
    let sheet = SpecSheet {
        processor: specname_core::ProcessorSpec {
            manufacturer: Some("Intel®".into()),
            family: Some("Intel® Core™ i7".into()),
            model: Some("i7-12700H".into()),
            ..Default::default()
        },
        discrete_gpu: specname_core::GpuSpec {
            has_discrete: true,
            model: Some("GeForce  RTX™ 4060".into()),
            ..Default::default()
        },
        ..Default::default()
    };

    let enriched = sheet.enrich();
    assert_eq!(enriched.processor.manufacturer.as_deref(), Some("Intel"));
    assert_eq!(enriched.processor.family.as_deref(), Some("Intel Core i7"));
    assert_eq!(enriched.processor.generation.as_deref(), Some("12th Gen"));
    assert_eq!(enriched.discrete_gpu.model.as_deref(), Some("GeForce RTX 4060"));
    assert_eq!(enriched.discrete_gpu.brand.as_deref(), Some("GeForce"));

    let names = enriched.full_names(&FormatOptions::default());
    assert_eq!(names.processor, "12th Gen Intel Core i7 i7-12700H");
    assert_eq!(names.discrete_gpu, "GeForce RTX 4060");
}

#[test]
fn enrich_clears_placeholder_gpu_and_keeps_flag() {
    let sheet = SpecSheet {
        discrete_gpu: specname_core::GpuSpec {
            has_discrete: true,
            model: Some("No disponible".into()),
            ..Default::default()
        },
        ..Default::default()
    };
    let enriched = sheet.enrich();
    assert_eq!(enriched.discrete_gpu.model, None);
    assert_eq!(enriched.discrete_gpu.brand, None);
    assert!(enriched.discrete_gpu.has_discrete);
}

#[test]
fn enrich_keeps_existing_generation() {
    let sheet = SpecSheet {
        processor: specname_core::ProcessorSpec {
            manufacturer: Some("Intel".into()),
            generation: Some("Alder Lake".into()),
            model: Some("i7-12700H".into()),
            ..Default::default()
        },
        ..Default::default()
    };
    assert_eq!(sheet.enrich().processor.generation.as_deref(), Some("Alder Lake"));
}

#[test]
fn load_sheets_reads_json_and_yaml_files() {
    let dir = tempdir().unwrap();
    let json_path = dir.path().join("xps.json");
    fs::write(&json_path, DELL_XPS_JSON).unwrap();
    let yaml_path = dir.path().join("thinkpad.yml");
    fs::write(&yaml_path, "sku: T14\nscreen:\n  diagonal_inches: 14\n  resolution: 2880x1800\n")
        .unwrap();

    let json_sheets = load_sheets(&json_path).unwrap();
    assert_eq!(json_sheets[0].sku.as_deref(), Some("TEST-GRANULAR-V2"));

    let yaml_sheets = load_sheets(&yaml_path).unwrap();
    assert_eq!(yaml_sheets[0].full_names(&FormatOptions::default()).screen, "14\" 2.5K");
}

#[test]
fn load_sheets_reports_missing_files_and_unknown_extensions() {
    let dir = tempdir().unwrap();

    let missing = dir.path().join("missing.json");
    let err = load_sheets(&missing).unwrap_err();
    assert!(matches!(err, DocumentError::Io { .. }), "unexpected error: {err}");
    assert!(err.to_string().contains("missing.json"));

    let txt = dir.path().join("sheet.txt");
    fs::write(&txt, "{}").unwrap();
    let err = load_sheets(&txt).unwrap_err();
    assert!(matches!(err, DocumentError::UnsupportedFormat(ref ext) if ext == "txt"));
}

#[test]
fn invalid_json_is_a_parse_error() {
    let err = parse_sheets("{not json", DocumentFormat::Json).unwrap_err();
    assert!(matches!(err, DocumentError::Json(_)));
}

#[test]
fn null_component_records_degrade_to_empty() {
    let sheets = parse_sheets(
        r#"{"sku":"A","discrete_gpu":null,"ram":{"capacity_gb":16}}"#,
        DocumentFormat::Json,
    )
    .unwrap();
    assert_eq!(sheets.len(), 1);
    assert_eq!(sheets[0].discrete_gpu, specname_core::GpuSpec::default());

    let names = sheets[0].full_names(&FormatOptions::default());
    assert_eq!(names.ram, "16GB");
    assert_eq!(names.discrete_gpu, "");
}

#[test]
fn non_object_component_records_degrade_to_empty() {
    let yaml = "- sku: B\n  screen: 15.6\n  storage: [512]\n  ram:\n    capacity_gb: 8\n";
    let sheets = parse_sheets(yaml, DocumentFormat::Yaml).unwrap();
    assert_eq!(sheets.len(), 1);
    assert_eq!(sheets[0].screen, specname_core::ScreenSpec::default());
    assert_eq!(sheets[0].storage, specname_core::StorageSpec::default());
    assert_eq!(sheets[0].full_names(&FormatOptions::default()).ram, "8GB");
}
