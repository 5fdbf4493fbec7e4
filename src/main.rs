#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Банк заданий ФИПИ",
        options,
        Box::new(|_cc| Ok(Box::new(fipi_browser::BrowserApp::new()))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("нет document на странице");

        let canvas = document
            .get_element_by_id("fipi_browser_canvas")
            .expect("не найден элемент fipi_browser_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("fipi_browser_canvas не является canvas");

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::new(fipi_browser::BrowserApp::new()))),
            )
            .await
            .expect("не удалось запустить приложение");
    });
}
