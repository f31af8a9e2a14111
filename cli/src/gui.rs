use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use eframe::egui;
use egui::{Color32, Rect, Vec2};
use vivito_core::Board;

const WINDOW_SIZE: f32 = 500.0;
const ALIVE_COLOR: Color32 = Color32::BLACK;
const DEAD_COLOR: Color32 = Color32::YELLOW;

/// Opens a native window and renders one generation per interval until the
/// window is closed.
pub fn run(board: Board, interval: Duration) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([WINDOW_SIZE, WINDOW_SIZE]),
        ..Default::default()
    };

    eframe::run_native(
        "Game of Life",
        options,
        Box::new(move |_cc| Box::new(LifeApp::new(board, interval))),
    )
    .map_err(|err| anyhow!("failed to open window: {err}"))
}

struct LifeApp {
    board: Board,
    interval: Duration,
    last_step: Instant,
}

impl LifeApp {
    fn new(board: Board, interval: Duration) -> Self {
        Self {
            board,
            interval,
            last_step: Instant::now(),
        }
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.last_step.elapsed() >= self.interval {
            self.board = self.board.step();
            self.last_step = Instant::now();
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (height, width) = self.board.size();
                let available = ui.available_size();
                let cell = Vec2::new(available.x / width as f32, available.y / height as f32);

                let (response, painter) = ui.allocate_painter(available, egui::Sense::hover());
                let origin = response.rect.min;

                for row in 0..height {
                    for col in 0..width {
                        let color = if self.board[(row, col)].is_alive() {
                            ALIVE_COLOR
                        } else {
                            DEAD_COLOR
                        };
                        let min = egui::pos2(
                            origin.x + col as f32 * cell.x,
                            origin.y + row as f32 * cell.y,
                        );
                        painter.rect_filled(Rect::from_min_size(min, cell), 0.0, color);
                    }
                }
            });

        ctx.request_repaint_after(self.interval.saturating_sub(self.last_step.elapsed()));
    }
}
