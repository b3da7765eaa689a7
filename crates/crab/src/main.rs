use crab::prelude::*;

fn main() {
    env_logger::init();

    let result = GameConfig::from_env().and_then(|config| Game::new(config).run());
    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}
