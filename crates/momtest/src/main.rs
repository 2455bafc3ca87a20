//! The Mom Test Bot: validate a startup idea before building it

mod app;
mod footer;
mod header;
mod navigation;
mod pages;
mod state;
mod ui;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = momtest_adapters::SiteConfig::default();
    tracing::info!(brand = %config.brand_name, "Starting");

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title(&config.window_title)
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        native_options,
        Box::new(|cc| {
            Ok(Box::new(app::App::new(
                cc,
                config,
                navigation::Route::default(),
            )))
        }),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen::JsCast;

    tracing_wasm::set_as_global_default();
    tracing::info!("Starting");

    // Deep links such as /validate open the matching page
    let initial_route = web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .and_then(|path| navigation::Route::from_path(&path))
        .unwrap_or_default();

    wasm_bindgen_futures::spawn_local(async move {
        let canvas = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id("the_canvas_id"))
            .and_then(|element| element.dyn_into::<web_sys::HtmlCanvasElement>().ok())
            .expect("index.html must contain a canvas with id `the_canvas_id`");

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| {
                    Ok(Box::new(app::App::new(
                        cc,
                        momtest_adapters::SiteConfig::default(),
                        initial_route,
                    )))
                }),
            )
            .await;

        if let Err(e) = start_result {
            tracing::error!("failed to start eframe: {e:?}");
        }
    });
}
