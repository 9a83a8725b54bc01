use std::path::Path;
use std::sync::LazyLock;
use std::time::Instant;

use anyhow::Result;
use log::info;
use thousands::Separable;

use gravegrid::io::ext_repr::ExtYard;
use gravegrid::io::svg::result_to_svg;
use gravegrid::io::{export, import};
use gravegrid::placement::PlacementEngine;

use crate::config::GraveGridConfig;
use crate::io::output::GraveGridOutput;

pub mod config;
pub mod io;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Places graves in `ext_yard` and writes `result_<stem>.json` and `result_<stem>.svg` to `output_folder`.
pub fn run(
    ext_yard: ExtYard,
    config: GraveGridConfig,
    stem: &str,
    output_folder: &Path,
) -> Result<GraveGridOutput> {
    let yard = import::import_yard(&ext_yard)?;
    let spec = import::import_grave_spec(&config.grave)?;

    let start = Instant::now();
    let result = PlacementEngine::new(spec).place(&yard);
    info!(
        "[RUN] placement finished in {:.3}ms ({} cells scanned)",
        start.elapsed().as_secs_f64() * 1000.0,
        result.n_cells_scanned.separate_with_commas()
    );

    let output = GraveGridOutput {
        yard: ext_yard,
        result: export::export_result(&yard, &result),
        config,
    };

    {
        let json_path = output_folder.join(format!("result_{stem}.json"));
        io::write_json(&output, &json_path)?;
    }

    {
        let svg_path = output_folder.join(format!("result_{stem}.svg"));
        let svg = result_to_svg(
            &yard,
            &result,
            config.svg_draw_options,
            config.indicator_angle,
            stem,
        );
        io::write_svg(&svg, &svg_path)?;
    }

    Ok(output)
}
