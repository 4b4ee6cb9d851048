//! Top-level menu
//!
//! A fixed, cyclic list of items. Turning the knob moves the selection;
//! what a press does is decided by the controller.

/// Menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuItem {
    /// Start a timed run
    #[default]
    StartTimer,
    /// Pick the run duration
    SetTimer,
    /// Edit the bath target temperature
    SetTemperature,
    /// Network setup (not available)
    Network,
    /// Adjust display contrast
    Contrast,
}

impl MenuItem {
    /// All items in display order
    pub const ALL: [MenuItem; 5] = [
        MenuItem::StartTimer,
        MenuItem::SetTimer,
        MenuItem::SetTemperature,
        MenuItem::Network,
        MenuItem::Contrast,
    ];

    /// Number of items
    pub const COUNT: usize = Self::ALL.len();

    /// Position in the list
    pub fn index(self) -> usize {
        self as usize
    }

    /// Item at a list position, wrapping
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    /// The item below, wrapping to the first
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The item above, wrapping to the last
    pub fn prev(self) -> Self {
        Self::from_index(self.index() + Self::COUNT - 1)
    }

    /// Menu label
    pub fn label(self) -> &'static str {
        match self {
            MenuItem::StartTimer => "Start Timer",
            MenuItem::SetTimer => "Set Timer",
            MenuItem::SetTemperature => "Set Temp",
            MenuItem::Network => "Network",
            MenuItem::Contrast => "Contrast",
        }
    }
}
