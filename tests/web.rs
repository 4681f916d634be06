#![cfg(target_arch = "wasm32")]

use densefield_engine::World;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn world_runs_on_wall_clock() {
    let mut world = World::new();
    world.run_frame();
    world.step();
    assert!(world.step_count() >= 1);
    assert_eq!(world.abi_layout().colors_len_elements(), 1024 * 512);
}

#[wasm_bindgen_test]
fn bad_config_is_a_js_error() {
    assert!(World::from_config_json(r#"{"width":1000}"#).is_err());
}
