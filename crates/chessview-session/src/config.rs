//! Display options adjustable with `set <option> <value>`.

/// Knobs controlling how the driver presents the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Mark the selected piece's destinations.
    pub highlight: bool,
    /// Print rank and file labels around the grid.
    pub coordinates: bool,
    /// Print the board after every click.
    pub autoshow: bool,
    /// Mark squares the opponent of the side to move attacks.
    pub threats: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            highlight: true,
            coordinates: true,
            autoshow: true,
            threats: false,
        }
    }
}

/// A single option assignment parsed from a `set` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOption {
    Highlight(bool),
    Coordinates(bool),
    Autoshow(bool),
    Threats(bool),
}

impl SessionOption {
    /// Names accepted by `set`.
    pub const NAMES: [&'static str; 4] = ["highlight", "coordinates", "autoshow", "threats"];
}

impl SessionConfig {
    /// Apply one option assignment.
    pub fn apply(&mut self, option: SessionOption) {
        match option {
            SessionOption::Highlight(on) => self.highlight = on,
            SessionOption::Coordinates(on) => self.coordinates = on,
            SessionOption::Autoshow(on) => self.autoshow = on,
            SessionOption::Threats(on) => self.threats = on,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SessionConfig, SessionOption};

    #[test]
    fn defaults_show_everything() {
        let config = SessionConfig::default();
        assert!(config.highlight);
        assert!(config.coordinates);
        assert!(config.autoshow);
        assert!(!config.threats);
    }

    #[test]
    fn apply_flips_single_field() {
        let mut config = SessionConfig::default();
        config.apply(SessionOption::Coordinates(false));
        assert!(!config.coordinates);
        assert!(config.highlight);
        assert!(config.autoshow);

        config.apply(SessionOption::Highlight(false));
        config.apply(SessionOption::Autoshow(false));
        config.apply(SessionOption::Threats(true));
        assert_eq!(
            config,
            SessionConfig {
                highlight: false,
                coordinates: false,
                autoshow: false,
                threats: true,
            }
        );
    }
}
