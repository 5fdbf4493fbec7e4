pub mod layout;
pub mod views;

use eframe::{App, Frame};
use egui::Context;

use crate::app::BrowserApp;
use layout::{bottom_panel, top_panel};

impl App for BrowserApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.poll_fetch_result();

        // Results arrive outside egui's event stream, so keep repainting
        // while a fetch is in flight.
        if self.is_fetch_pending() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        top_panel(self, ctx);
        bottom_panel(ctx);
        views::problems::ui_problems(self, ctx);
    }
}
