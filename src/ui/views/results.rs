use crate::QuizApp;
use crate::ui::helpers::ACCENT;
use crate::ui::layout::centered_panel;
use egui::{Button, Context, RichText};

pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    let results = app.session.results_view(&app.bank);
    let mut reiniciar = false;

    centered_panel(ctx, 420.0, 480.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("🏆").size(64.0));
            ui.label(
                RichText::new(format!("{}%", results.percentage))
                    .strong()
                    .color(ACCENT),
            );
            ui.add_space(8.0);
            ui.heading("练习完成");
            ui.label(RichText::new(results.score_label()).size(40.0).color(ACCENT));
            ui.label(RichText::new(results.message()).size(18.0));
            ui.add_space(20.0);

            reiniciar = ui
                .add_sized([280.0, 44.0], Button::new("⟲ 重新开始"))
                .clicked();

            ui.add_space(12.0);
            ui.separator();
            ui.label(RichText::new("推荐复习").small().weak());
            ui.horizontal_wrapped(|ui| {
                for topic in results.topic_labels() {
                    ui.label(RichText::new(topic).small());
                }
            });
        });
    });

    if reiniciar {
        app.reiniciar_quiz();
    }
}
