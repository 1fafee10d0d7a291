mod camera;
mod game;
mod hud;
mod input;
mod particles;
mod physics;
mod util;

use minikart_core::GLOBAL_CONFIG;

use game::demo::DemoScript;
use game::Game;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // drive the canned demo unless the config points at a script file
    let script = if GLOBAL_CONFIG.demo_script.is_empty() {
        DemoScript::builtin()
    } else {
        DemoScript::load(&GLOBAL_CONFIG.demo_script).expect("could not load demo script")
    };

    let final_hud = Game::new().run(&script);
    println!("demo finished: {}", final_hud);
}
