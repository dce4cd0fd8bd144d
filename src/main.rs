use simple_color_picker::app::PickerApp;
use simple_color_picker::error::AppError;
use tracing::Level;

fn init_logging() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    init_logging();
    PickerApp::start_gui()
}
