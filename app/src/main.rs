use eframe::egui;

mod app;
mod config;

fn main() -> eframe::Result<()> {
    env_logger::init();
    eframe::run_native(
        "FlowDesk",
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 800.0]),
            ..Default::default()
        },
        Box::new(|cc| Ok(Box::new(app::FlowDeskApp::new(cc)))),
    )
}
