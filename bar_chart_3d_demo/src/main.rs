//! Bar chart demo
//!
//! Loads the records, builds the chart and writes a single SVG snapshot.
//!
//! Usage: bar_chart_3d_demo [DATA_JSON] [OUT_SVG]

use std::env;
use std::process::ExitCode;
use bar_chart_3d::barchart3d::{Result, Viewer};
use bar_chart_3d::barchart3d::camera::Viewport;
use bar_chart_3d::barchart3d::data::DataSource;
use bar_chart_3d::barchart3d::host::SvgSnapshotHost;
use bar_chart_3d::{engine_error, engine_info};

const DEFAULT_DATA_PATH: &str = "data.json";
const DEFAULT_OUTPUT_PATH: &str = "bar_chart.svg";
const WIDTH: u32 = 1280;
const HEIGHT: u32 = 720;

fn run(data_path: &str, output_path: &str) -> Result<()> {
    let source = DataSource::from_path(data_path)?;
    let viewport = Viewport::new(WIDTH, HEIGHT)?;
    let mut viewer = Viewer::new(source.records(), viewport, SvgSnapshotHost::new(viewport))?;

    let stats = viewer.on_frame()?;
    engine_info!("barchart3d::Demo",
        "Rendered {} triangles and {} lines",
        stats.triangles, stats.lines);

    viewer.host().write_svg(output_path)
}

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let data_path = args.next().unwrap_or_else(|| DEFAULT_DATA_PATH.to_string());
    let output_path = args.next().unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());

    match run(&data_path, &output_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            engine_error!("barchart3d::Demo", "{}", e);
            ExitCode::FAILURE
        }
    }
}
