use lib_game::GameVariant;
use macroquad::prelude::*;

fn window_conf() -> Conf {
    lib_game::window_conf(GameVariant::Shark)
}

#[macroquad::main(window_conf)]
async fn main() {
    slap_arcade::launch(GameVariant::Shark).await
}
