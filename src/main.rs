use arcana::gui::ArcanaApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1080.0, 760.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Arcana"),
        ..Default::default()
    };

    eframe::run_native("Arcana", options, Box::new(|cc| Ok(Box::new(ArcanaApp::new(cc)))))
}
