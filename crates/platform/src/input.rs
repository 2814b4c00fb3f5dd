//! Input events from the watch buttons

/// Input events from buttons and the crown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Button pressed
    ButtonPress(Button),
    /// Button released
    ButtonRelease(Button),
    /// Button held for extended period
    ButtonLongPress(Button),
    /// Crown rotation (positive = towards the bottom of a list)
    RotaryIncrement(i32),
}

/// Physical buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Left button: leave the current screen
    Back,
    /// Upper right button
    Up,
    /// Middle right button
    Select,
    /// Lower right button
    Down,
}

impl Button {
    /// Short name for log lines.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Back => "back",
            Self::Up => "up",
            Self::Select => "select",
            Self::Down => "down",
        }
    }
}
