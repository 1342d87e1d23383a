mod app;
mod chart_view;
mod controller;
mod state;

use std::fs::File;

use app::PredictorApp;
use controller::PredictorSession;
use inference_engine::{MODEL_PATH, load_artifact};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> eframe::Result<()> {
    if let Ok(log_file) = File::create("predictor_gui.log") {
        let _ = WriteLogger::init(LevelFilter::Info, Config::default(), log_file);
    }

    // The artifact is the one hard startup dependency: without it there is
    // nothing to predict with, so no window opens.
    let model = match load_artifact(MODEL_PATH) {
        Ok(model) => model,
        Err(err) => {
            log::error!("startup aborted: {err}");
            eprintln!("{err}");
            eprintln!("Place a model artifact at ./{MODEL_PATH} and restart.");
            std::process::exit(1);
        }
    };
    let session = PredictorSession::new(model);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([960.0, 720.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Heart Disease Predictor",
        native_options,
        Box::new(|cc| Ok(Box::new(PredictorApp::new(cc, session)))),
    )
}
