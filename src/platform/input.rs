//! Input events folded into per-frame tick input

use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Escape,
}

/// Discrete events delivered by the window layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    /// Mouse click (menu buttons, resume)
    Click,
}

/// Source of input events, polled once per frame
pub trait InputSource {
    fn poll(&mut self) -> Vec<InputEvent>;
}

/// Held arrow keys plus one-shot flags accumulated between frames
#[derive(Debug, Clone, Default)]
pub struct InputState {
    left: bool,
    right: bool,
    /// Direction of the most recent arrow press
    last: i32,
    pause: bool,
    confirm: bool,
    quit: bool,
    pub idle_mode: bool,
}

impl InputState {
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => self.quit = true,
            InputEvent::KeyDown(Key::Left) => {
                self.left = true;
                self.last = -1;
            }
            InputEvent::KeyDown(Key::Right) => {
                self.right = true;
                self.last = 1;
            }
            InputEvent::KeyDown(Key::Escape) => self.pause = true,
            InputEvent::KeyUp(Key::Left) => self.left = false,
            InputEvent::KeyUp(Key::Right) => self.right = false,
            InputEvent::KeyUp(Key::Escape) => {}
            InputEvent::Click => self.confirm = true,
        }
    }

    /// Held direction; the latest press wins while both keys are down
    pub fn direction(&self) -> Option<i32> {
        match (self.left, self.right) {
            (true, true) => Some(self.last),
            (true, false) => Some(-1),
            (false, true) => Some(1),
            (false, false) => None,
        }
    }

    /// Input for the next tick; one-shot flags are cleared
    pub fn take_tick_input(&mut self) -> TickInput {
        let input = TickInput {
            direction: self.direction(),
            pause: self.pause,
            confirm: self.confirm,
            quit: self.quit,
            idle_mode: self.idle_mode,
        };
        self.pause = false;
        self.confirm = false;
        input
    }
}

/// Replays events at fixed frame numbers (demo and tests)
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    script: Vec<(u64, InputEvent)>,
    frame: u64,
}

impl ScriptedInput {
    pub fn new(mut script: Vec<(u64, InputEvent)>) -> Self {
        script.sort_by_key(|(frame, _)| *frame);
        Self { script, frame: 0 }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        let frame = self.frame;
        self.frame += 1;
        self.script
            .iter()
            .filter(|(at, _)| *at == frame)
            .map(|(_, event)| *event)
            .collect()
    }
}
