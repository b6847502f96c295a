use grammar_master::{QuizApp, read_questions_embedded};

const APP_TITLE: &str = "GrammarMaster · 英语语法练习";

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use std::process::ExitCode;

    pretty_env_logger::init();

    let bank = match read_questions_embedded() {
        Ok(bank) => bank,
        Err(e) => {
            log::error!("Banco de preguntas inválido: {e}");
            return ExitCode::FAILURE;
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([900.0, 760.0]),
        ..Default::default()
    };

    match eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(QuizApp::setup(cc, bank)))),
    ) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Error al ejecutar la interfaz: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let bank = match read_questions_embedded() {
        Ok(bank) => bank,
        Err(e) => {
            log::error!("Banco de preguntas inválido: {e}");
            return;
        }
    };

    wasm_bindgen_futures::spawn_local(async move {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No hay document en esta página");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("the_canvas_id")
            .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("No se encontró el canvas `the_canvas_id`");
            return;
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(move |cc| Ok(Box::new(QuizApp::setup(cc, bank)))),
            )
            .await;
        if let Err(e) = start_result {
            log::error!("No se pudo arrancar eframe: {e:?}");
        }
    });
}
