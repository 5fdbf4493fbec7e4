use egui::{CentralPanel, Context, RichText, ScrollArea};

use crate::app::BrowserApp;
use crate::model::{ProblemsView, count_heading, empty_heading};
use crate::render::fragment_to_lines;

pub fn ui_problems(app: &mut BrowserApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| match &app.view {
        ProblemsView::Idle => {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.label("Выберите номер задания, чтобы показать задания из банка.");
            });
        }
        ProblemsView::Loading { .. } => {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.label("⏳ Загрузка заданий…");
            });
        }
        ProblemsView::Loaded {
            kind,
            exam_number,
            problems,
        } if problems.is_empty() => {
            ui.add_space(16.0);
            ui.heading(empty_heading(*kind, *exam_number));
        }
        ProblemsView::Loaded {
            kind,
            exam_number,
            problems,
        } => {
            ui.add_space(16.0);
            ui.heading(RichText::new(count_heading(*kind, *exam_number, problems.len())).strong());
            ui.add_space(8.0);

            ScrollArea::vertical().show(ui, |ui| {
                for problem in problems {
                    egui::Frame::default()
                        .fill(ui.visuals().faint_bg_color)
                        .inner_margin(egui::Margin::symmetric(12, 8))
                        .show(ui, |ui| {
                            for line in fragment_to_lines(problem) {
                                ui.label(line);
                            }
                        });
                    ui.add_space(8.0);
                }
            });
        }
    });
}
