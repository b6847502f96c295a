use crate::QuizApp;
use crate::ui::helpers::{ACCENT, DANGER, SUCCESS, blank_color, difficulty_badge, option_button};
use crate::view_models::ExplanationCard;
use egui::{Button, CentralPanel, Color32, Context, Frame, RichText, ScrollArea, Ui, Vec2};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let Some(question) = app.session.current_question(&app.bank) else {
        return;
    };
    let difficulty = question.difficulty;
    let category = question.category;
    let sentence = app.session.sentence_view(&app.bank);
    let options = app.session.option_views(&app.bank);
    let card = app.session.explanation_card(&app.bank);
    let advance_label = app.session.advance_label(&app.bank);
    let submitted = app.session.is_submitted();
    let has_selection = app.session.selected_option_id().is_some();

    let mut clicked_option: Option<String> = None;
    let mut enviar = false;
    let mut siguiente = false;

    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            let max_width = 760.0;
            let panel_width = (ui.available_width() * 0.97).min(max_width);

            ui.vertical_centered(|ui| {
                ui.set_max_width(panel_width);
                ui.add_space(16.0);

                // Dificultad + punto gramatical
                ui.horizontal(|ui| {
                    difficulty_badge(ui, difficulty);
                    ui.label(RichText::new(category.label()).weak());
                });
                ui.add_space(12.0);

                // Frase con el hueco
                if let Some(sentence) = &sentence {
                    Frame::default()
                        .fill(ui.visuals().extreme_bg_color)
                        .inner_margin(egui::Margin::symmetric(24, 32))
                        .show(ui, |ui| {
                            ui.set_width(panel_width - 48.0);
                            let blank = blank_color(ui, sentence.state);
                            ui.horizontal_wrapped(|ui| {
                                ui.label(RichText::new(&sentence.before).size(26.0));
                                ui.label(
                                    RichText::new(format!(" {} ", sentence.blank))
                                        .size(26.0)
                                        .underline()
                                        .color(blank),
                                );
                                ui.label(RichText::new(&sentence.after).size(26.0));
                            });
                        });
                }
                ui.add_space(16.0);

                // Opciones en rejilla de dos columnas
                let button_w = (panel_width - 8.0) / 2.0;
                for row in options.chunks(2) {
                    ui.horizontal(|ui| {
                        for view in row {
                            if option_button(ui, view, button_w, 56.0) {
                                clicked_option = Some(view.id.clone());
                            }
                        }
                    });
                    ui.add_space(8.0);
                }
                ui.add_space(8.0);

                // Botones
                if !submitted {
                    let button = Button::new(RichText::new("提交答案").strong().color(Color32::WHITE))
                        .fill(ACCENT)
                        .min_size(Vec2::new(180.0, 44.0));
                    enviar = ui.add_enabled(has_selection, button).clicked();
                } else {
                    let button = Button::new(RichText::new(format!("{advance_label}  ›")).strong())
                        .min_size(Vec2::new(180.0, 44.0));
                    siguiente = ui.add(button).clicked();
                }

                if let Some(card) = &card {
                    ui.add_space(16.0);
                    ui_explanation_card(ui, card);
                }
                ui.add_space(16.0);
            });
        });
    });

    if let Some(id) = clicked_option {
        app.elegir_opcion(&id);
    }
    if enviar {
        app.enviar_respuesta();
    }
    if siguiente {
        app.siguiente_pregunta();
    }
}

fn ui_explanation_card(ui: &mut Ui, card: &ExplanationCard) {
    let header_color = if card.answered_correctly { SUCCESS } else { DANGER };

    Frame::default()
        .fill(ui.visuals().window_fill())
        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
        .inner_margin(egui::Margin::symmetric(24, 16))
        .show(ui, |ui| {
            ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                ui.label(RichText::new("ℹ 详解卡片").strong().color(header_color));
                ui.separator();

                section(ui, "语法规则", RichText::new(&card.rule));
                section(
                    ui,
                    "经典例句",
                    RichText::new(format!("\"{}\"", card.example)).italics(),
                );
                section(ui, "常见错误辨析", RichText::new(&card.common_mistake).color(DANGER));
                section(ui, "中文翻译", RichText::new(&card.translation).weak());
            });
        });
}

fn section(ui: &mut Ui, title: &str, body: RichText) {
    ui.add_space(6.0);
    ui.label(RichText::new(title).small().strong().weak());
    ui.label(body);
}
