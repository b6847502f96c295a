// src/ui/helpers.rs
use crate::model::Difficulty;
use crate::view_models::{BlankState, OptionState, OptionView};
use egui::{Button, Color32, RichText, Stroke, Ui, Vec2};

pub const ACCENT: Color32 = Color32::from_rgb(79, 70, 229);
pub const SUCCESS: Color32 = Color32::from_rgb(22, 163, 74);
pub const DANGER: Color32 = Color32::from_rgb(220, 38, 38);

pub fn difficulty_color(difficulty: Difficulty) -> Color32 {
    match difficulty {
        Difficulty::Junior => Color32::from_rgb(21, 128, 61),
        Difficulty::Middle => Color32::from_rgb(29, 78, 216),
        Difficulty::Senior => Color32::from_rgb(126, 34, 206),
    }
}

pub fn difficulty_badge(ui: &mut Ui, difficulty: Difficulty) {
    ui.label(
        RichText::new(difficulty.label())
            .strong()
            .color(difficulty_color(difficulty)),
    );
}

pub fn blank_color(ui: &Ui, state: BlankState) -> Color32 {
    match state {
        BlankState::Empty => ui.visuals().weak_text_color(),
        BlankState::Pending => ACCENT,
        BlankState::Correct => SUCCESS,
        BlankState::Wrong => DANGER,
    }
}

/// Botón de opción. Tras enviar queda deshabilitado, con los colores de
/// acierto/fallo puestos explícitamente en texto y borde.
pub fn option_button(ui: &mut Ui, view: &OptionView, width: f32, height: f32) -> bool {
    let weak = ui.visuals().weak_text_color();
    let (stroke, text) = match view.state {
        OptionState::Idle => (
            ui.visuals().widgets.inactive.bg_stroke.color,
            ui.visuals().text_color(),
        ),
        OptionState::Selected => (ACCENT, ACCENT),
        OptionState::Correct => (SUCCESS, SUCCESS),
        OptionState::Wrong => (DANGER, DANGER),
        OptionState::Dimmed => (weak, weak),
    };

    let label = match view.state {
        OptionState::Correct => format!("{}  ✔", view.text),
        OptionState::Wrong => format!("{}  ✖", view.text),
        _ => view.text.clone(),
    };

    let button = Button::new(RichText::new(label).size(18.0).color(text))
        .stroke(Stroke::new(2.0, stroke))
        .min_size(Vec2::new(width, height));
    ui.add_enabled(view.enabled, button).clicked()
}
