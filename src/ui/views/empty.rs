use crate::QuizApp;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText};

/// Ninguna pregunta pasa los filtros actuales
pub fn ui_empty(app: &mut QuizApp, ctx: &Context) {
    let mut limpiar = false;

    centered_panel(ctx, 220.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("🔍").size(48.0).weak());
            ui.add_space(8.0);
            ui.heading("未找到符合条件的题目");
            ui.label(RichText::new("请尝试调整筛选条件").weak());
            ui.add_space(16.0);
            limpiar = ui.button("清除所有筛选").clicked();
        });
    });

    if limpiar {
        app.limpiar_filtros();
    }
}
