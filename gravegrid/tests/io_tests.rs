#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use test_case::test_case;

    use gravegrid::PlacementError;
    use gravegrid::entities::GraveSpec;
    use gravegrid::geometry::kernel;
    use gravegrid::io::ext_repr::{ExtGraveSpec, ExtPlacementResult, ExtYard};
    use gravegrid::io::svg::result_to_svg;
    use gravegrid::io::svg::svg_util::{Color, SvgDrawOptions};
    use gravegrid::io::{export, import};
    use gravegrid::placement::PlacementEngine;
    use gravegrid::supply::{JsonYardSupplier, SyntheticConfig, SyntheticYardSupplier, YardSupplier};

    const YARD_JSON: &str = r#"{
        "region": [[0.0, 0.0], [20.0, 0.0], [20.0, 12.0], [0.0, 12.0], [0.0, 0.0]],
        "obstacles": [
            [[8.0, 4.0], [11.0, 4.0], [11.0, 7.0], [8.0, 7.0]],
            [[1.0, 1.0], [1.0, 1.0]]
        ]
    }"#;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("gravegrid_{}_{}", std::process::id(), name))
    }

    #[test]
    fn import_yard_from_json() {
        init_logger();
        let ext_yard: ExtYard = serde_json::from_str(YARD_JSON).unwrap();
        let yard = import::import_yard(&ext_yard).unwrap();

        assert_eq!(yard.region.n_vertices(), 4);
        assert_eq!(yard.obstacles.len(), 1);
        assert_eq!(yard.skipped_obstacles.len(), 1);
        assert_eq!(yard.area(), 240.0);
    }

    #[test]
    fn obstacles_default_to_none() {
        let ext_yard: ExtYard =
            serde_json::from_str(r#"{"region": [[0, 0], [1, 0], [0, 1]]}"#).unwrap();
        assert!(ext_yard.obstacles.is_empty());
        assert!(import::import_yard(&ext_yard).is_ok());
    }

    #[test]
    fn invalid_region_fails_import() {
        let ext_yard: ExtYard =
            serde_json::from_str(r#"{"region": [[0, 0], [1, 1], [2, 2]]}"#).unwrap();
        let err = import::import_yard(&ext_yard).unwrap_err();
        assert!(matches!(err, PlacementError::InvalidRegion(_)));
    }

    #[test_case(r#"{"width": 1.0, "height": 2.0}"#, (1.0, 2.0, 0.0, 0.0); "defaults")]
    #[test_case(r#"{"width": 1.0, "height": 2.0, "spacing": 0.5, "rotation": -60}"#, (1.0, 2.0, 0.5, 300.0); "normalized rotation")]
    fn import_grave_spec(json: &str, expected: (f64, f64, f64, f64)) {
        let ext_spec: ExtGraveSpec = serde_json::from_str(json).unwrap();
        let spec = import::import_grave_spec(&ext_spec).unwrap();
        let (width, height, spacing, rotation) = expected;
        assert_eq!(
            spec,
            GraveSpec::new(width, height, spacing, rotation).unwrap()
        );
    }

    #[test]
    fn exported_yard_can_be_imported_again() {
        init_logger();
        let ext_yard: ExtYard = serde_json::from_str(YARD_JSON).unwrap();
        let yard = import::import_yard(&ext_yard).unwrap();

        let exported = export::export_yard(&yard);
        //closed rings
        assert_eq!(exported.region.0.first(), exported.region.0.last());
        assert_eq!(exported.region.0.len(), 5);

        let reimported = import::import_yard(&exported).unwrap();
        assert_eq!(reimported.region, yard.region);
        assert_eq!(reimported.obstacles, yard.obstacles);
        assert!(reimported.skipped_obstacles.is_empty());
    }

    #[test]
    fn export_result_to_json() {
        init_logger();
        let ext_yard: ExtYard = serde_json::from_str(YARD_JSON).unwrap();
        let yard = import::import_yard(&ext_yard).unwrap();
        let spec = GraveSpec::new(1.0, 2.0, 0.5, -60.0).unwrap();
        let result = PlacementEngine::new(spec).place(&yard);

        let ext_result = export::export_result(&yard, &result);
        assert_eq!(ext_result.graves.len(), result.len());
        assert_eq!(ext_result.spec.rotation, 300.0);
        assert_eq!(ext_result.skipped_obstacles.len(), 1);
        assert!(ext_result.skipped_obstacles[0].contains("obstacle #1"));
        for (i, g) in ext_result.graves.iter().enumerate() {
            assert_eq!(g.index, i);
            assert_eq!(g.polygon.0.len(), 5);
            assert_eq!(g.clearance.center, g.anchor);
        }

        let json = serde_json::to_string_pretty(&ext_result).unwrap();
        let parsed: ExtPlacementResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.spec, ext_result.spec);
        assert_eq!(parsed.skipped_obstacles, ext_result.skipped_obstacles);
        let cells = |r: &ExtPlacementResult| r.graves.iter().map(|g| g.cell).collect::<Vec<_>>();
        assert_eq!(cells(&parsed), cells(&ext_result));
    }

    #[test]
    fn json_supplier_reads_file() {
        init_logger();
        let path = temp_file("yard.json");
        fs::write(&path, YARD_JSON).unwrap();

        let ext_yard = JsonYardSupplier::new(&path).extract().unwrap();
        assert_eq!(ext_yard.region.0.len(), 5);
        assert_eq!(ext_yard.obstacles.len(), 2);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn json_supplier_reports_missing_and_malformed_files() {
        init_logger();
        let missing = temp_file("missing.json");
        assert!(JsonYardSupplier::new(&missing).extract().is_err());

        let malformed = temp_file("malformed.json");
        fs::write(&malformed, r#"{"region": "nope"}"#).unwrap();
        assert!(JsonYardSupplier::new(&malformed).extract().is_err());
        fs::remove_file(&malformed).unwrap();
    }

    #[test]
    fn synthetic_supplier_is_deterministic_per_seed() {
        init_logger();
        let config = SyntheticConfig::default();
        let a = SyntheticYardSupplier::new(config).extract().unwrap();
        let b = SyntheticYardSupplier::new(config).extract().unwrap();
        assert_eq!(a, b);

        let other_seed = SyntheticConfig { seed: 1, ..config };
        let c = SyntheticYardSupplier::new(other_seed).extract().unwrap();
        assert_ne!(a, c);
    }

    #[test_case(0; "seed 0")]
    #[test_case(9; "seed 9")]
    #[test_case(2024; "seed 2024")]
    #[test_case(30; "seed 30 redraws a folded region")]
    #[test_case(52; "seed 52 redraws a folded region")]
    #[test_case(67; "seed 67 redraws a folded region")]
    fn synthetic_obstacles_lie_inside_region(seed: u64) {
        init_logger();
        let config = SyntheticConfig {
            seed,
            ..SyntheticConfig::default()
        };
        let ext_yard = SyntheticYardSupplier::new(config).extract().unwrap();
        let yard = import::import_yard(&ext_yard).unwrap();

        assert_eq!(yard.region.n_vertices(), config.n_vertices);
        assert!(yard.skipped_obstacles.is_empty());
        assert!(yard.obstacles.len() <= config.n_obstacles);
        for obstacle in &yard.obstacles {
            assert!(kernel::contains(&yard.region, obstacle));
        }
    }

    #[test]
    fn synthetic_supplier_rejects_invalid_config() {
        let config = SyntheticConfig {
            n_vertices: 2,
            ..SyntheticConfig::default()
        };
        assert!(SyntheticYardSupplier::new(config).extract().is_err());

        let config = SyntheticConfig {
            obstacle_size: (3.0, 1.0),
            ..SyntheticConfig::default()
        };
        assert!(SyntheticYardSupplier::new(config).extract().is_err());
    }

    #[test]
    fn synthetic_region_gives_up_after_max_tries() {
        init_logger();
        //the first region drawn for seed 30 intersects itself
        let config = SyntheticConfig {
            seed: 30,
            max_tries: 1,
            ..SyntheticConfig::default()
        };
        let err = SyntheticYardSupplier::new(config).extract().unwrap_err();
        assert!(format!("{err:#}").contains("after 1 tries"));

        let config = SyntheticConfig { max_tries: 1000, ..config };
        assert!(SyntheticYardSupplier::new(config).extract().is_ok());
    }

    #[test_case(SvgDrawOptions::default(); "all layers")]
    #[test_case(SvgDrawOptions { clearance_circles: false, labels: false, indicator: false, ..SvgDrawOptions::default() }; "geometry only")]
    fn render_result_as_svg(options: SvgDrawOptions) {
        init_logger();
        let ext_yard: ExtYard = serde_json::from_str(YARD_JSON).unwrap();
        let yard = import::import_yard(&ext_yard).unwrap();
        let spec = GraveSpec::new(1.0, 2.0, 0.5, -60.0).unwrap();
        let result = PlacementEngine::new(spec).place(&yard);
        assert!(!result.is_empty());

        let svg = result_to_svg(&yard, &result, options, 30.0, "test").to_string();

        assert!(svg.contains("<svg"));
        assert!(svg.contains("scale(1,-1)"));
        assert!(svg.contains("graves: "));
        assert_eq!(svg.matches("grave #").count(), result.len());
        let n_circles = svg.matches("<circle").count();
        match options.clearance_circles {
            true => assert_eq!(n_circles, result.len()),
            false => assert_eq!(n_circles, 0),
        }
        assert_eq!(svg.contains(r#"id="indicator""#), options.indicator);
    }

    #[test_case("#90EE90", Some("#90EE90"); "upper case")]
    #[test_case("a52a2a", Some("#A52A2A"); "without hash")]
    #[test_case("#12345", None; "too short")]
    #[test_case("#GGGGGG", None; "not hex")]
    fn parse_colors(input: &str, expected: Option<&str>) {
        let parsed = input.parse::<Color>().ok().map(|c| c.to_string());
        assert_eq!(parsed.as_deref(), expected);
    }

    #[test]
    fn draw_options_fill_in_defaults() {
        let options: SvgDrawOptions = serde_json::from_str(r#"{"labels": false}"#).unwrap();
        assert!(!options.labels);
        assert!(options.clearance_circles);
        assert!(options.indicator);
        assert_eq!(options.theme, SvgDrawOptions::default().theme);
    }
}
