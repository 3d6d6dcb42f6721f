use sfml::window::{Event, Key, mouse};

use crate::components::{PointerButton, Press};
use crate::scene::Scene;

/// The window events the simulator reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Quit,
    KeyDown(Key),
    MouseDown(Press),
}

impl Input {
    pub fn from_event(event: &Event) -> Option<Self> {
        match event {
            Event::Closed => Some(Input::Quit),
            Event::KeyPressed { code, .. } => Some(Input::KeyDown(*code)),
            Event::MouseButtonPressed { button, x, y } => {
                let button = match button {
                    mouse::Button::Left => PointerButton::Primary,
                    mouse::Button::Middle => PointerButton::Middle,
                    mouse::Button::Right => PointerButton::Secondary,
                    _ => PointerButton::Other,
                };

                Some(Input::MouseDown(Press {
                    pos: (*x, *y),
                    button,
                }))
            }
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Applies one input to the scene. Never blocks.
pub fn handle(input: Input, scene: &mut Scene) -> Flow {
    match input {
        Input::Quit => {
            tracing::info!("window closed");
            Flow::Exit
        }

        Input::KeyDown(Key::Escape) => {
            tracing::info!("escape pressed");
            Flow::Exit
        }

        Input::KeyDown(_) => {
            engage(scene);
            Flow::Continue
        }

        Input::MouseDown(press) => {
            engage(scene);
            scene.press(press);
            Flow::Continue
        }
    }
}

fn engage(scene: &mut Scene) {
    if scene.engage() {
        tracing::debug!("first interaction, hiding license notice");
    }
}
