use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use minikart_core::controls::{ControlEvent, ControlSignal};

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("could not read script file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse script file: {0}")]
    Parse(#[from] serde_json::Error),
}

// one timestamped press or release on the demo timeline
#[derive(Copy, Clone, Debug, Deserialize)]
pub struct ScriptEvent {
    pub at: f64,
    pub signal: ControlSignal,
    pub pressed: bool,
}

impl ScriptEvent {
    pub fn event(&self) -> ControlEvent {
        ControlEvent {
            signal: self.signal,
            pressed: self.pressed,
        }
    }
}

pub struct DemoScript {
    events: Vec<ScriptEvent>,
}

impl DemoScript {
    // canned drive: throttle up, carve a long left drift and kick smoke out,
    // fire the item once, then ask for the respawn
    pub fn builtin() -> Self {
        let timeline = [
            (0.0, ControlSignal::Forward, true),
            (2.0, ControlSignal::SteerLeft, true),
            (2.5, ControlSignal::Drift, true),
            (4.5, ControlSignal::Drift, false),
            (5.0, ControlSignal::SteerLeft, false),
            (6.5, ControlSignal::UseItem, true),
            (6.6, ControlSignal::UseItem, false),
            (8.0, ControlSignal::Forward, false),
            (9.0, ControlSignal::Reset, true),
            (9.1, ControlSignal::Reset, false),
        ];
        Self::from_events(
            timeline
                .into_iter()
                .map(|(at, signal, pressed)| ScriptEvent {
                    at,
                    signal,
                    pressed,
                })
                .collect(),
        )
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn from_json(raw: &str) -> Result<Self, ScriptError> {
        Ok(Self::from_events(serde_json::from_str(raw)?))
    }

    fn from_events(mut events: Vec<ScriptEvent>) -> Self {
        events.sort_by(|a, b| a.at.total_cmp(&b.at));
        Self { events }
    }

    pub fn events(&self) -> &[ScriptEvent] {
        &self.events
    }

    pub fn duration(&self) -> f64 {
        self.events.last().map_or(0.0, |event| event.at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_is_ordered_and_bounded() {
        let script = DemoScript::builtin();

        assert!(script
            .events()
            .windows(2)
            .all(|pair| pair[0].at <= pair[1].at));
        assert!((script.duration() - 9.1).abs() < 1e-9);

        let first = script.events()[0];
        assert_eq!(first.signal, ControlSignal::Forward);
        assert!(first.pressed);
        assert_eq!(first.at, 0.0);
    }

    #[test]
    fn scripts_parse_from_json() {
        let raw = r#"[
            {"at": 1.0, "signal": "Drift", "pressed": true},
            {"at": 0.5, "signal": "Forward", "pressed": true}
        ]"#;
        let script = DemoScript::from_json(raw).unwrap();

        // events come back sorted regardless of file order
        assert_eq!(script.events()[0].signal, ControlSignal::Forward);
        assert_eq!(script.events()[1].signal, ControlSignal::Drift);
        assert!((script.duration() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn bad_scripts_report_parse_errors() {
        let result = DemoScript::from_json("not a script");
        assert!(matches!(result, Err(ScriptError::Parse(_))));
    }

    #[test]
    fn missing_script_files_report_io_errors() {
        let result = DemoScript::load("/definitely/not/a/script.json");
        assert!(matches!(result, Err(ScriptError::Io(_))));
    }
}
