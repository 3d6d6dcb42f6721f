use egui_sfml::SfEgui;
use egui_sfml::egui;

use sfml::cpp::FBox;
use sfml::{graphics::*, system::*, window::*};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::input::{self, Flow, Input};
use crate::renderer::Renderer;
use crate::scene::Scene;

pub fn run(config: &Config) -> Result<()> {
    let mut window = RenderWindow::new(
        (config.window.width, config.window.height),
        config.window.title.as_str(),
        Style::CLOSE,
        &ContextSettings::default(),
    )
    .map_err(|_| Error::Window)?;

    set_icon(&mut window, config)?;

    let mut scene = Scene::new(config);
    let mut renderer = Renderer::new(config)?;
    let mut pacer = FramePacer::new(config.frame_budget())?;

    let mut overlay = config.overlay.then(|| SfEgui::new(&window));

    tracing::info!(
        width = config.window.width,
        height = config.window.height,
        fps = config.window.fps,
        "window opened"
    );

    while window.is_open() {
        let frame_time = pacer.wait();

        while let Some(event) = window.poll_event() {
            if let Some(sfegui) = overlay.as_mut() {
                sfegui.add_event(&event);
            }

            let Some(input) = Input::from_event(&event) else {
                continue;
            };

            if input::handle(input, &mut scene) == Flow::Exit {
                window.close();
                return Ok(());
            }
        }

        renderer.draw(&mut window, &scene);

        if let Some(sfegui) = overlay.as_mut() {
            draw_overlay(sfegui, &mut window, &scene, frame_time)?;
        }

        window.display();
    }

    Ok(())
}

fn set_icon(window: &mut RenderWindow, config: &Config) -> Result<()> {
    let path = &config.assets.icon;
    let icon = Image::from_file(&path.to_string_lossy()).map_err(|_| Error::Icon(path.clone()))?;
    let size = icon.size();

    // SAFETY: the pixel buffer comes from the image itself, so it holds
    // exactly size.x * size.y RGBA pixels.
    unsafe { window.set_icon(size.x, size.y, icon.pixel_data()) };

    Ok(())
}

fn draw_overlay(
    sfegui: &mut SfEgui,
    window: &mut RenderWindow,
    scene: &Scene,
    frame_time: f32,
) -> Result<()> {
    let selection = scene.selection();
    let interaction = scene.interaction();

    let di = sfegui
        .run(window, |_rw, ctx| {
            egui::Window::new("Inspector")
                .default_pos((10.0, 10.0))
                .collapsible(true)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(format!("FPS: {:.0}", 1.0 / frame_time.max(f32::EPSILON)));
                    ui.label(format!("Frame Time: {:.3}ms", frame_time * 1000.0));
                    ui.separator();

                    match selection.part() {
                        Some(part) => ui.label(format!("Selected: {}", part.name())),
                        None => ui.label("Selected: nothing"),
                    };

                    for line in selection.label_lines().iter().skip(1) {
                        ui.label(line.as_str());
                    }

                    ui.separator();
                    ui.label(format!("Interacted: {}", interaction.active));
                });
        })
        .map_err(|_| Error::Overlay)?;

    sfegui.draw(di, window, None);

    Ok(())
}

/// Fixed wall-clock pacing. The only place the frame loop blocks.
pub struct FramePacer {
    clock: FBox<Clock>,
    budget: f32,
}

impl FramePacer {
    pub fn new(budget: f32) -> Result<Self> {
        let clock = Clock::start().map_err(|_| Error::Clock)?;
        Ok(Self { clock, budget })
    }

    /// Sleeps off what is left of the budget since the last call and
    /// returns the whole frame time in seconds.
    pub fn wait(&mut self) -> f32 {
        if let Some(rest) = remaining(self.budget, self.clock.elapsed_time().as_seconds()) {
            sleep(Time::seconds(rest));
        }

        self.clock.restart().as_seconds()
    }
}

fn remaining(budget: f32, elapsed: f32) -> Option<f32> {
    (elapsed < budget).then(|| budget - elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sleeps_for_the_rest_of_the_budget() {
        let rest = remaining(1.0 / 60.0, 0.010).unwrap();
        assert!((rest - (1.0 / 60.0 - 0.010)).abs() < 1e-6);
    }

    #[test]
    fn late_frames_do_not_sleep() {
        assert_eq!(remaining(1.0 / 60.0, 0.020), None);
        assert_eq!(remaining(0.5, 0.5), None);
    }
}
