#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    use test_case::test_case;

    use gravegrid::io::ext_repr::{ExtPolygon, ExtYard};
    use gravegrid::supply::{JsonYardSupplier, SyntheticYardSupplier, YardSupplier};
    use gravegrid_cli::config::GraveGridConfig;
    use gravegrid_cli::io;
    use gravegrid_cli::io::output::GraveGridOutput;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn output_folder(name: &str) -> PathBuf {
        let folder =
            std::env::temp_dir().join(format!("gravegrid_cli_{}_{}", std::process::id(), name));
        fs::create_dir_all(&folder).unwrap();
        folder
    }

    fn rectangular_yard(width: f64, height: f64) -> ExtYard {
        ExtYard {
            region: ExtPolygon(vec![
                (0.0, 0.0),
                (width, 0.0),
                (width, height),
                (0.0, height),
            ]),
            obstacles: vec![ExtPolygon(vec![
                (4.0, 4.0),
                (6.0, 4.0),
                (6.0, 6.0),
                (4.0, 6.0),
            ])],
        }
    }

    #[test]
    fn default_config_survives_json() {
        let config = GraveGridConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: GraveGridConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
        assert_eq!(parsed.grave.rotation, -60.0);
        assert_eq!(parsed.indicator_angle, 30.0);
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let json = r#"{
            "grave": {"width": 2.0, "height": 3.0},
            "indicator_angle": 0.0
        }"#;
        let config: GraveGridConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.grave.spacing, 0.0);
        assert_eq!(config.synthetic, GraveGridConfig::default().synthetic);
        assert_eq!(
            config.svg_draw_options,
            GraveGridConfig::default().svg_draw_options
        );
    }

    #[test]
    fn read_config_from_file() {
        let folder = output_folder("config");
        let path = folder.join("config.json");
        fs::write(
            &path,
            serde_json::to_string_pretty(&GraveGridConfig::default()).unwrap(),
        )
        .unwrap();
        assert_eq!(io::read_config(&path).unwrap(), GraveGridConfig::default());

        fs::write(&path, "{}").unwrap();
        assert!(io::read_config(&path).is_err());
    }

    #[test_case(0.0; "unrotated")]
    #[test_case(-60.0; "default rotation")]
    fn run_writes_json_and_svg(rotation: f64) {
        init_logger();
        let folder = output_folder(&format!("run_{}", rotation.abs()));
        let mut config = GraveGridConfig::default();
        config.grave.rotation = rotation;

        let output = gravegrid_cli::run(rectangular_yard(20.0, 12.0), config, "rect", &folder).unwrap();
        assert!(!output.result.graves.is_empty());

        let json = fs::read_to_string(folder.join("result_rect.json")).unwrap();
        let parsed: GraveGridOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.result.graves.len(), output.result.graves.len());
        assert_eq!(parsed.result.spec, output.result.spec);
        assert_eq!(parsed.yard, output.yard);
        assert_eq!(parsed.config, config);

        let svg = fs::read_to_string(folder.join("result_rect.svg")).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("rect"));
    }

    #[test_case("../assets/yard.json", "../assets/config.json"; "bundled yard")]
    fn run_on_bundled_assets(yard_path: &str, config_path: &str) {
        init_logger();
        let folder = output_folder("assets");
        let config = io::read_config(Path::new(config_path)).unwrap();
        let ext_yard = JsonYardSupplier::new(yard_path).extract().unwrap();

        let output = gravegrid_cli::run(ext_yard, config, "yard", &folder).unwrap();
        assert!(!output.result.graves.is_empty());
        assert!(output.result.skipped_obstacles.is_empty());
    }

    #[test]
    fn run_on_synthetic_yard() {
        init_logger();
        let folder = output_folder("synthetic");
        let config = GraveGridConfig::default();
        let ext_yard = SyntheticYardSupplier::new(config.synthetic).extract().unwrap();

        let output = gravegrid_cli::run(ext_yard, config, "synthetic_0", &folder).unwrap();
        assert!(!output.result.graves.is_empty());
        assert!(output.result.density > 0.0 && output.result.density < 1.0);
        assert!(folder.join("result_synthetic_0.json").exists());
        assert!(folder.join("result_synthetic_0.svg").exists());
    }

    #[test]
    fn run_rejects_invalid_region() {
        init_logger();
        let folder = output_folder("invalid");
        let ext_yard = ExtYard {
            region: ExtPolygon(vec![(0.0, 0.0), (1.0, 1.0)]),
            obstacles: vec![],
        };
        assert!(gravegrid_cli::run(ext_yard, GraveGridConfig::default(), "invalid", &folder).is_err());
        assert!(!folder.join("result_invalid.json").exists());
    }
}
