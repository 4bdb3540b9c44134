#![cfg(target_arch = "wasm32")]

use lifegrid_engine::{cell_alive, cell_dead, Simulation};
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn handle_exposes_cell_bytes_after_tick() {
    let mut sim = Simulation::new(5).unwrap();
    assert_eq!(sim.cells_len(), 0);
    sim.tick(16.0, 10.0, 500.0).unwrap();
    assert_eq!(sim.dimension(), 5);
    assert_eq!(sim.cells_len(), 25);
    assert_ne!(cell_dead(), cell_alive());
}

#[wasm_bindgen_test]
fn config_json_and_commands() {
    let mut sim = Simulation::with_config(r#"{"numberOfCells":4,"poolSize":1,"seed":3}"#.to_string()).unwrap();
    sim.clear();
    assert_eq!(sim.live_cells(), 0);
    assert!(!sim.toggle_cell(10.0, 10.0));
    sim.set_canvas_size(400.0);
    assert!(sim.toggle_cell(10.0, 10.0));
    assert_eq!(sim.live_cells(), 1);
    assert!(sim.set_frame_rate(0.0).is_err());
}

#[wasm_bindgen_test]
fn default_build_runs_generations_inline() {
    let mut sim = Simulation::with_config(r#"{"numberOfCells":5,"poolSize":4,"seed":11}"#.to_string()).unwrap();
    sim.play();
    sim.tick(100.0, 10.0, 500.0).unwrap();
    sim.tick(100.0, 10.0, 500.0).unwrap();
    let stats = sim.get_perf_stats();
    assert_eq!(stats.generations(), 2);
    assert_eq!(stats.failed_generations(), 0);
    assert_eq!(stats.workers(), 4);
}
