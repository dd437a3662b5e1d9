use eframe::egui;
use natively::gui::CoachApp;

fn main() -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Natively")
            .with_inner_size([900.0, 680.0])
            .with_min_inner_size([600.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "natively",
        native_options,
        Box::new(|cc| Ok(Box::new(CoachApp::new(cc)))),
    )
}
