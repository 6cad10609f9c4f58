//! Arena 主应用程序入口
//! 使用 eframe 作为应用框架，场馆以线框形式绘制在 egui 画布上

mod service;

use std::f64::consts::TAU;
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Parser;
use eframe::egui;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use arena_core::scene::VenueScene;
use arena_file::{export_scene, load_venue_config_or_default};
use arena_renderer::context::SceneContext;
use arena_renderer::input::InputEvent;
use arena_ui::{show_overlay, OverlayState, LEGEND_KEY};

use crate::service::EguiRenderService;

/// Basketball venue viewer
#[derive(Parser, Debug, PartialEq)]
#[command(name = "arena", version, about)]
struct CliArgs {
    /// Venue config JSON; built-in defaults when omitted
    config: Option<PathBuf>,

    /// Write the assembled scene as JSON and exit
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,
}

/// 拖拽像素到弧度：拖过整个视口高度转一圈
fn drag_to_angles(delta: egui::Vec2, viewport_height: f32) -> (f64, f64) {
    if viewport_height <= 0.0 {
        return (0.0, 0.0);
    }
    let scale = TAU / viewport_height as f64;
    (-(delta.x as f64) * scale, delta.y as f64 * scale)
}

/// Arena 应用程序
struct ArenaApp {
    context: SceneContext<EguiRenderService>,
    overlay: OverlayState,
    viewport_size: (u32, u32),
}

impl ArenaApp {
    fn new(scene: &VenueScene) -> Self {
        Self {
            context: SceneContext::new(EguiRenderService::new(), scene),
            overlay: OverlayState::new(scene.score.clone()),
            viewport_size: (0, 0),
        }
    }

    /// 把本帧的 egui 输入转换成场景事件
    fn handle_input(&mut self, ui: &egui::Ui, response: &egui::Response) {
        let rect = response.rect;
        let size = (rect.width().round() as u32, rect.height().round() as u32);
        if size != self.viewport_size {
            self.viewport_size = size;
            self.context.handle_event(InputEvent::ViewportResized {
                width: size.0,
                height: size.1,
            });
        }

        if response.dragged() {
            let (delta_yaw, delta_pitch) = drag_to_angles(response.drag_delta(), rect.height());
            self.context.handle_event(InputEvent::PointerDragged {
                delta_yaw,
                delta_pitch,
            });
        }

        let typed: Vec<char> = ui.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Text(text) => Some(text.chars().collect::<Vec<_>>()),
                    _ => None,
                })
                .flatten()
                .collect()
        });
        for key in typed {
            if key.eq_ignore_ascii_case(&LEGEND_KEY) {
                self.overlay.toggle_legend();
            } else {
                self.context.handle_event(InputEvent::KeyPressed(key));
            }
        }
    }
}

impl eframe::App for ArenaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::from_rgb(20, 22, 28)))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::drag());
                self.handle_input(ui, &response);

                self.context.tick();
                self.context.service().paint(&painter, response.rect);
            });

        self.overlay.sync_camera(self.context.camera());
        show_overlay(ctx, &self.overlay);
    }
}

fn main() -> Result<()> {
    // 初始化日志
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder().with_max_level(Level::INFO).finish(),
    )?;

    let cli = CliArgs::parse();
    let config = load_venue_config_or_default(cli.config.as_deref())
        .context("failed to load venue config")?;
    let scene = VenueScene::build(&config).context("failed to build venue")?;

    if let Some(path) = &cli.export {
        export_scene(&scene, path)
            .with_context(|| format!("failed to export scene to {}", path.display()))?;
        return Ok(());
    }

    info!("Starting Arena...");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title("Arena"),
        ..Default::default()
    };

    eframe::run_native(
        "Arena",
        native_options,
        Box::new(move |_cc| Ok(Box::new(ArenaApp::new(&scene)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {}", e))?;

    Ok(())
}
