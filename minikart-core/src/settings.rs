use config::{Config, ConfigError, File};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Settings {
    pub max_speed: f64,
    pub acceleration: f64,
    pub brake_ratio: f64,
    pub turn_speed: f64,
    pub friction: f64,
    pub drift_friction: f64,
    pub boost_multiplier: f64,
    pub drift_entry_speed: f64,
    pub turbo_charge_rate: f64,
    pub turbo_boost_force: f64,
    pub turbo_release_threshold: f64,
    pub turbo_max_charge: f64,
    pub tick_ms: u64,
    pub spawn_height: f64,
    pub world_gravity: f64,
    pub scene: String,
    pub demo_script: String,
}

impl Settings {
    fn new() -> Result<Settings, ConfigError> {
        let config = Config::builder()
            .set_default("max_speed", 25.0)?
            .set_default("acceleration", 35.0)?
            .set_default("brake_ratio", 0.7)?
            .set_default("turn_speed", 4.0)?
            .set_default("friction", 0.88)?
            .set_default("drift_friction", 0.75)?
            .set_default("boost_multiplier", 1.5)?
            .set_default("drift_entry_speed", 5.0)?
            .set_default("turbo_charge_rate", 2.0)?
            .set_default("turbo_boost_force", 15.0)?
            .set_default("turbo_release_threshold", 1.0)?
            .set_default("turbo_max_charge", 3.0)?
            .set_default("tick_ms", 50)?
            .set_default("spawn_height", 2.0)?
            .set_default("world_gravity", 30.0)?
            .set_default("scene", "track")?
            .set_default("demo_script", "")?
            .add_source(File::with_name("config.yaml").required(false))
            .build()?;

        config.try_deserialize()
    }
}

lazy_static! {
    pub static ref GLOBAL_CONFIG: Settings = Settings::new().expect("failed to read config file");
}

#[cfg(test)]
mod tests {
    use super::GLOBAL_CONFIG;

    #[test]
    fn defaults_match_the_shipped_tuning() {
        assert_eq!(GLOBAL_CONFIG.max_speed, 25.0);
        assert_eq!(GLOBAL_CONFIG.acceleration, 35.0);
        assert_eq!(GLOBAL_CONFIG.friction, 0.88);
        assert_eq!(GLOBAL_CONFIG.drift_friction, 0.75);
        assert_eq!(GLOBAL_CONFIG.drift_entry_speed, 5.0);
        assert_eq!(GLOBAL_CONFIG.turbo_max_charge, 3.0);
        assert_eq!(GLOBAL_CONFIG.tick_ms, 50);
        assert_eq!(GLOBAL_CONFIG.scene, "track");
        assert!(GLOBAL_CONFIG.demo_script.is_empty());
    }
}
