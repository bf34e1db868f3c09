// Slot Calendar Application
// Main entry point

use slot_calendar::ui_egui::SlotCalendarApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Slot Calendar");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Slot Calendar")
            .with_inner_size([420.0, 420.0])
            .with_min_inner_size([360.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Slot Calendar",
        options,
        Box::new(|cc| Ok(Box::new(SlotCalendarApp::new(cc)))),
    )
}
