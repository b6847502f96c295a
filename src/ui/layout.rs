use crate::QuizApp;
use crate::model::{Difficulty, Filter, GrammarPoint};
use egui::{
    Align, CentralPanel, ComboBox, Context, Frame, Layout, ProgressBar, RichText, TopBottomPanel,
    Ui, Visuals,
};

pub fn top_panel(app: &mut QuizApp, ctx: &Context, show_filters: bool) {
    TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading(RichText::new("📖 GrammarMaster").strong());

            if show_filters {
                ui.add_space(24.0);
                filter_combos(app, ui);

                if let Some(progress) = app.session.progress_view(&app.bank) {
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(RichText::new(progress.label()).strong());
                    });
                }
            }
        });

        // Barra de progreso bajo la cabecera
        if show_filters {
            if let Some(progress) = app.session.progress_view(&app.bank) {
                ui.add(ProgressBar::new(progress.fraction()).desired_height(4.0));
            }
        }
    });
}

fn filter_combos(app: &mut QuizApp, ui: &mut Ui) {
    let mut difficulty = app.session.difficulty_filter();
    ComboBox::from_id_salt("difficulty_filter")
        .selected_text(difficulty_text(difficulty))
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut difficulty, Filter::All, "所有难度");
            for d in Difficulty::ALL {
                ui.selectable_value(&mut difficulty, Filter::Only(d), d.label());
            }
        });
    app.cambiar_dificultad(difficulty);

    let mut category = app.session.category_filter();
    ComboBox::from_id_salt("category_filter")
        .selected_text(category_text(category))
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut category, Filter::All, "所有语法点");
            for g in GrammarPoint::ALL {
                ui.selectable_value(&mut category, Filter::Only(g), g.label());
            }
        });
    app.cambiar_categoria(category);
}

fn difficulty_text(filter: Filter<Difficulty>) -> &'static str {
    match filter {
        Filter::All => "所有难度",
        Filter::Only(d) => d.label(),
    }
}

fn category_text(filter: Filter<GrammarPoint>) -> &'static str {
    match filter {
        Filter::All => "所有语法点",
        Filter::Only(g) => g.label(),
    }
}

pub fn bottom_panel(app: &mut QuizApp, ctx: &Context) {
    TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("© 2024 GrammarMaster · 助力初中生攻克语法难关")
                    .small()
                    .weak(),
            );
            // ----------- BOTONES DE TEMA -----------
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("🌙 深色模式").clicked() {
                    app.cambiar_tema(true);
                    apply_theme(ctx, true);
                }
                if ui.button("☀ 浅色模式").clicked() {
                    app.cambiar_tema(false);
                    apply_theme(ctx, false);
                }
            });
        });
    });
}

pub fn apply_theme(ctx: &Context, dark_mode: bool) {
    if dark_mode {
        ctx.set_visuals(Visuals::dark());
    } else {
        ctx.set_visuals(Visuals::light());
    }
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(24, 24))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}
