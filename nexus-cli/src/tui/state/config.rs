use std::time::Duration;

use crate::tui::widgets::TriggerZone;

/// Page-wide presentation settings resolved at startup from CLI flags
/// and terminal capability.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Reveal/entrance animations. Forced off when stdout is not a
    /// terminal so content never depends on animation capability.
    pub animations: bool,
    /// Animation frame interval
    pub tick_rate: Duration,
    /// Events carousel auto-advance interval, None disables the timer
    pub auto_advance: Option<Duration>,
    /// Visibility-ratio band for section reveals
    pub trigger_zone: TriggerZone,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            animations: true,
            tick_rate: Duration::from_millis(80),
            auto_advance: Some(Duration::from_secs(8)),
            trigger_zone: TriggerZone::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RuntimeConfig::default();
        assert!(config.animations);
        assert_eq!(config.tick_rate, Duration::from_millis(80));
        assert_eq!(config.auto_advance, Some(Duration::from_secs(8)));
    }
}
