use egui::{ComboBox, Context, Ui, Visuals};

use crate::app::BrowserApp;
use crate::model::{ExamKind, NO_SELECTION};

pub fn top_panel(app: &mut BrowserApp, ctx: &Context) {
    egui::TopBottomPanel::top("selector_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            exam_selector(app, ui, ExamKind::Current);
            ui.separator();
            exam_selector(app, ui, ExamKind::Outdated);
        });
    });
}

fn exam_selector(app: &mut BrowserApp, ui: &mut Ui, kind: ExamKind) {
    let mut selected = app.selected_value(kind);

    ComboBox::from_label(kind.selector_title())
        .selected_text(option_label(selected))
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut selected, NO_SELECTION, option_label(NO_SELECTION));
            for number in kind.options() {
                ui.selectable_value(&mut selected, number, option_label(number));
            }
        });

    if selected != app.selected_value(kind) {
        app.select_exam(kind, selected);
    }
}

fn option_label(exam_number: i32) -> String {
    if exam_number == NO_SELECTION {
        "—".to_string()
    } else {
        format!("Задание {}", exam_number.abs())
    }
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Тёмная тема").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Светлая тема").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}
